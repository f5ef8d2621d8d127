use std::fmt::Write as _;

use services::ProgressOverview;

/// Plain-text progress table for the `report` command.
#[must_use]
pub fn render(title: &str, overview: &ProgressOverview) -> String {
    const OVERALL: &str = "Overall";

    let width = overview
        .days
        .iter()
        .map(|d| d.day.chars().count())
        .chain(std::iter::once(OVERALL.len()))
        .max()
        .unwrap_or(OVERALL.len());

    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    for day in &overview.days {
        let c = day.completion;
        if c.is_empty() {
            let _ = writeln!(out, "{:<width$}  nothing scheduled", day.day);
        } else {
            let _ = writeln!(
                out,
                "{:<width$}  {:>3}/{:<3}  {:>6}%",
                day.day,
                c.completed,
                c.total,
                c.percent_label()
            );
        }
    }
    let c = overview.overall;
    let _ = writeln!(
        out,
        "{OVERALL:<width$}  {:>3}/{:<3}  {:>6}%",
        c.completed,
        c.total,
        c.percent_label()
    );
    out
}
