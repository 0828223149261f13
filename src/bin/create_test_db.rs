use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Date, Month, OffsetDateTime};

use pennywise::{SQLiteKeyValueStore, TransactionDraft, TransactionStore};

/// A utility for creating a database filled with demo transactions for pennywise.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// How many months of transactions to generate, ending with the current month.
    #[arg(long, short, default_value_t = 15)]
    months: u8,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;
    let mut store = TransactionStore::load(SQLiteKeyValueStore::new(conn)?);

    let drafts = demo_transactions(OffsetDateTime::now_utc().date(), args.months)?;
    println!("Creating {} transactions...", drafts.len());

    for draft in drafts {
        store.create(draft);
    }

    println!("Success!");

    Ok(())
}

/// Monthly income and a spread of expenses for the `months` months up to `today`, oldest first.
fn demo_transactions(today: Date, months: u8) -> Result<Vec<TransactionDraft>, Box<dyn Error>> {
    let mut month_starts = Vec::with_capacity(months.into());
    let mut month_start = today.replace_day(1)?;

    for _ in 0..months {
        month_starts.push(month_start);
        month_start = previous_month(month_start)?;
    }
    month_starts.reverse();

    let mut drafts = Vec::new();

    for (index, month_start) in month_starts.into_iter().enumerate() {
        // Vary the amounts a little from month to month.
        let wobble = ((index * 37) % 11) as f64;
        let entries = [
            (1, 4200.0, "Salary"),
            (3, -1650.0, "Rent"),
            (5, -(92.4 + wobble * 3.1), "Groceries"),
            (9, -(48.0 + wobble * 2.5), "Fuel"),
            (12, -(118.75 + wobble), "Electricity"),
            (14, -(87.2 + wobble * 4.0), "Groceries"),
            (18, -15.99, "Streaming subscription"),
            (21, -(64.5 + wobble * 6.0), "Dinner out"),
            (24, -(101.3 + wobble * 2.0), "Groceries"),
            (27, 150.0 + wobble * 10.0, "Freelance work"),
        ];

        for (day, amount, description) in entries {
            let date = month_start.replace_day(day)?;

            if date > today {
                break;
            }

            drafts.push(TransactionDraft {
                amount,
                date,
                description: description.to_owned(),
            });
        }
    }

    Ok(drafts)
}

fn previous_month(month_start: Date) -> Result<Date, time::error::ComponentRange> {
    let (year, month) = match month_start.month() {
        Month::January => (month_start.year() - 1, Month::December),
        month => (month_start.year(), month.previous()),
    };

    Date::from_calendar_date(year, month, 1)
}
