//! Summary cards for total income, total expenses and the net amount.

use maud::{Markup, html};

use crate::{dashboard::summary::Summary, html::format_currency};

struct CardColors {
    container: &'static str,
    title: &'static str,
    value: &'static str,
}

const INCOME_COLORS: CardColors = CardColors {
    container: "from-green-50 to-green-100 border-green-200",
    title: "text-green-700",
    value: "text-green-800",
};

const EXPENSE_COLORS: CardColors = CardColors {
    container: "from-red-50 to-red-100 border-red-200",
    title: "text-red-700",
    value: "text-red-800",
};

const POSITIVE_NET_COLORS: CardColors = CardColors {
    container: "from-blue-50 to-blue-100 border-blue-200",
    title: "text-blue-700",
    value: "text-blue-800",
};

const NEGATIVE_NET_COLORS: CardColors = CardColors {
    container: "from-orange-50 to-orange-100 border-orange-200",
    title: "text-orange-700",
    value: "text-orange-800",
};

/// Renders the three summary cards in a responsive grid.
pub(super) fn summary_cards_view(summary: &Summary) -> Markup {
    let net_colors = if summary.net >= 0.0 {
        &POSITIVE_NET_COLORS
    } else {
        &NEGATIVE_NET_COLORS
    };

    html! {
        section id="summary" class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8 w-full"
        {
            (summary_card("total-income", "Total Income", summary.total_income, &INCOME_COLORS))
            (summary_card("total-expenses", "Total Expenses", summary.total_expense, &EXPENSE_COLORS))
            (summary_card("net-amount", "Net Amount", summary.net, net_colors))
        }
    }
}

fn summary_card(id: &str, title: &str, amount: f64, colors: &CardColors) -> Markup {
    html! {
        div
            id=(id)
            class={ "rounded-lg border p-4 shadow-md bg-gradient-to-br " (colors.container) }
        {
            h3 class={ "text-sm font-medium " (colors.title) } { (title) }
            p class={ "text-2xl font-bold " (colors.value) } { (format_currency(amount)) }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::dashboard::summary::Summary;

    use super::summary_cards_view;

    fn card_value(html: &Html, id: &str) -> String {
        let selector = Selector::parse(&format!("#{id} p")).unwrap();
        html.select(&selector)
            .next()
            .unwrap_or_else(|| panic!("card {id} missing"))
            .text()
            .collect()
    }

    fn card_class(html: &Html, id: &str) -> String {
        let selector = Selector::parse(&format!("#{id}")).unwrap();
        html.select(&selector)
            .next()
            .unwrap_or_else(|| panic!("card {id} missing"))
            .value()
            .attr("class")
            .unwrap_or_default()
            .to_owned()
    }

    #[test]
    fn shows_formatted_totals() {
        let summary = Summary {
            total_income: 100.0,
            total_expense: 80.0,
            net: 20.0,
        };

        let html = Html::parse_fragment(&summary_cards_view(&summary).into_string());

        assert_eq!(card_value(&html, "total-income"), "$100.00");
        assert_eq!(card_value(&html, "total-expenses"), "$80.00");
        assert_eq!(card_value(&html, "net-amount"), "$20.00");
        assert!(card_class(&html, "net-amount").contains("blue"));
    }

    #[test]
    fn negative_net_is_orange() {
        let summary = Summary {
            total_income: 0.0,
            total_expense: 12.5,
            net: -12.5,
        };

        let html = Html::parse_fragment(&summary_cards_view(&summary).into_string());

        assert_eq!(card_value(&html, "net-amount"), "-$12.50");
        assert!(card_class(&html, "net-amount").contains("orange"));
    }
}
