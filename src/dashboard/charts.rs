//! The monthly expenses bar chart.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered with an HTML container and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::Bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{dashboard::aggregation::MonthlyExpense, html::HeadElement};

/// The URL of the ECharts library the chart configuration is written for.
pub(super) const ECHARTS_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

impl DashboardChart {
    /// The monthly expenses chart, or `None` if there are no expenses to plot.
    pub fn monthly_expenses(monthly_expenses: &[MonthlyExpense]) -> Option<Self> {
        if monthly_expenses.is_empty() {
            return None;
        }

        Some(Self {
            id: "monthly-expenses-chart",
            options: monthly_expenses_chart(monthly_expenses).to_string(),
        })
    }
}

/// Renders the chart container, or a placeholder when there is nothing to plot.
pub(super) fn charts_view(chart: Option<&DashboardChart>) -> Markup {
    html!(
        @match chart {
            Some(chart) => {
                div
                    id=(chart.id)
                    class="min-h-[320px] w-full rounded dark:bg-gray-100"
                {}
            }
            None => {
                div
                    id="monthly-expenses-empty"
                    class="flex flex-col items-center justify-center h-64
                        text-gray-500 dark:text-gray-400"
                {
                    p class="text-lg font-medium" { "No expense data to display" }
                    p class="text-sm" { "Add some expenses to see your monthly spending" }
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for the dashboard chart.
///
/// Creates a script that initializes the ECharts instance with dark mode
/// support and responsive resizing.
pub(super) fn charts_script(chart: &DashboardChart) -> HeadElement {
    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chartDom = document.getElementById("{}");
            const chart = echarts.init(chartDom);
            const option = {};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                const isDarkMode = darkModeMediaQuery.matches;
                chart.setTheme(isDarkMode ? 'dark' : 'default');
            }}
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();
        }});"#,
        chart.id, chart.options
    );

    HeadElement::ScriptSource(PreEscaped(script))
}

fn monthly_expenses_chart(monthly_expenses: &[MonthlyExpense]) -> Chart {
    let labels: Vec<String> = monthly_expenses
        .iter()
        .map(|expense| expense.month.label())
        .collect();
    let values: Vec<f64> = monthly_expenses
        .iter()
        .map(|expense| expense.amount)
        .collect();

    Chart::new()
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Bar::new().name("Expenses").data(values))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"$0\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::Month;

    use crate::{
        dashboard::aggregation::{MonthlyExpense, YearMonth},
        html::HeadElement,
    };

    use super::{DashboardChart, charts_script, charts_view};

    fn january_expenses() -> Vec<MonthlyExpense> {
        vec![MonthlyExpense {
            month: YearMonth {
                year: 2024,
                month: Month::January,
            },
            amount: 80.0,
        }]
    }

    #[test]
    fn no_expenses_has_no_chart() {
        assert!(DashboardChart::monthly_expenses(&[]).is_none());
    }

    #[test]
    fn chart_options_contain_labels_and_series() {
        let chart = DashboardChart::monthly_expenses(&january_expenses()).unwrap();

        assert!(chart.options.contains("Jan 2024"));
        assert!(chart.options.contains("\"Expenses\""));
        assert!(chart.options.contains("80"));
    }

    #[test]
    fn empty_state_shows_placeholder() {
        let html = Html::parse_fragment(&charts_view(None).into_string());

        let placeholder = Selector::parse("#monthly-expenses-empty").unwrap();
        assert!(html.select(&placeholder).next().is_some());
    }

    #[test]
    fn script_targets_chart_container() {
        let chart = DashboardChart::monthly_expenses(&january_expenses()).unwrap();

        let HeadElement::ScriptSource(script) = charts_script(&chart) else {
            panic!("want inline script source");
        };

        assert!(script.0.contains("document.getElementById(\"monthly-expenses-chart\")"));
    }
}
