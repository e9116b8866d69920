//! Plain-text rendering of the client view models.
//!
//! Every function is pure: it takes a model and returns the text to print.
//! Components that have not loaded render as a placeholder line.

use pea_client::components::allocation_chart::AllocationChart;
use pea_client::components::change_card::ChangeCard;
use pea_client::components::history_chart::HistoryChart;
use pea_client::components::invested_card::InvestedCard;
use pea_client::components::profile_card::ProfileCard;
use pea_client::components::summary_card::SummaryCard;
use pea_client::components::total_summary::TotalSummary;
use pea_client::components::transaction_table::TransactionPage;
use pea_client::net::types::{DailyQuantity, Transaction, UserProfile};
use pea_client::pages::dashboard::DashboardSnapshot;
use pea_client::state::loadable::Loadable;
use pea_client::util::format::format_eur;

const PLACEHOLDER: &str = "...";

fn loadable<T>(title: &str, state: &Loadable<T>, render: impl Fn(&T) -> String) -> String {
    match state {
        Loadable::Loading => format!("{title}\n  {PLACEHOLDER}"),
        Loadable::Ready(value) => format!("{title}\n{}", render(value)),
    }
}

#[must_use]
pub fn dashboard(snapshot: &DashboardSnapshot) -> String {
    [
        loadable("Profile", &snapshot.profile, profile),
        loadable("Total", &snapshot.total, total_summary),
        loadable("Portfolio", &snapshot.summary, summary),
        loadable("Invested", &snapshot.invested, invested),
        loadable("Since yesterday", &snapshot.change, change),
        loadable("Allocation", &snapshot.allocation, allocation),
        loadable("History", &snapshot.history, history),
    ]
    .join("\n\n")
}

#[must_use]
pub fn profile(card: &ProfileCard) -> String {
    format!("  [{}] {} <{}>", card.initials(), card.username(), card.email())
}

#[must_use]
pub fn user(profile: &UserProfile) -> String {
    format!("{}\n{}", profile.username, profile.email)
}

#[must_use]
pub fn total_summary(total: &TotalSummary) -> String {
    format!("  {} {}", total.line(), total.trend)
}

#[must_use]
pub fn summary(card: &SummaryCard) -> String {
    format!("  {}  {} {}", card.total_text(), card.trend, card.variation)
}

#[must_use]
pub fn invested(card: &InvestedCard) -> String {
    [
        format!("  {}  {} {}", card.headline(), card.trend, card.variation),
        format!("  {}", card.invested_text()),
        format!("  {}", card.gains_text()),
    ]
    .join("\n")
}

#[must_use]
pub fn change(card: &ChangeCard) -> String {
    format!("  {} ({}) {}", card.difference_text(), card.percent, card.trend)
}

#[must_use]
pub fn allocation(chart: &AllocationChart) -> String {
    if chart.slices.is_empty() {
        return "  no positions".to_owned();
    }
    let width = chart.slices.iter().map(|s| s.ticker.len()).max().unwrap_or(0);
    chart
        .slices
        .iter()
        .map(|s| format!("  {:<8} {:<width$}  {:>14}  {}", s.color, s.ticker, format_eur(s.amount), s.share))
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn history(chart: &HistoryChart) -> String {
    let Some(summary) = &chart.summary else {
        return format!("  {}: no data", chart.period.label());
    };
    let mut lines = vec![
        format!("  {} ({} to {})", chart.period.label(), summary.start, summary.end),
        format!(
            "  first {}  last {}  min {}  max {}",
            format_eur(summary.first),
            format_eur(summary.last),
            format_eur(summary.min),
            format_eur(summary.max)
        ),
        format!("  change {} ({}) {}", format_eur(summary.change), summary.change_percent, summary.trend),
    ];
    lines.extend(chart.points.iter().map(|p| format!("  {}  {:>14}", p.date, format_eur(p.value))));
    lines.join("\n")
}

#[must_use]
pub fn transaction_row(tx: &Transaction) -> String {
    format!(
        "{:>6}  {}  {:<5}  {:<10}  {:>6}  {:>12}  {:>14}",
        tx.id,
        tx.date_of,
        tx.kind,
        tx.ticker,
        tx.quantity,
        format_eur(tx.price),
        format_eur(tx.amount())
    )
}

#[must_use]
pub fn transaction_page(page: &TransactionPage) -> String {
    let header = format!(
        "{:>6}  {:<10}  {:<5}  {:<10}  {:>6}  {:>12}  {:>14}",
        "id", "date_of", "type", "ticker", "qty", "price", "amount"
    );
    let rows = page.visible();
    let mut lines = vec![header];
    if rows.is_empty() {
        lines.push("  no transactions".to_owned());
    }
    lines.extend(rows.into_iter().map(transaction_row));
    let sort = &page.state.sort;
    lines.push(format!(
        "page {} | {} per page | sorted by {} {} | previous: {} | next: {}",
        page.state.page_index + 1,
        page.state.page_size(),
        sort.column,
        if sort.descending { "desc" } else { "asc" },
        yes_no(page.can_previous()),
        yes_no(page.can_next())
    ));
    lines.join("\n")
}

#[must_use]
pub fn transaction(tx: &Transaction) -> String {
    [
        format!("id:       {}", tx.id),
        format!("date:     {}", tx.date_of),
        format!("type:     {}", tx.kind),
        format!("ticker:   {}", tx.ticker),
        format!("quantity: {}", tx.quantity),
        format!("price:    {}", format_eur(tx.price)),
        format!("amount:   {}", format_eur(tx.amount())),
    ]
    .join("\n")
}

#[must_use]
pub fn holdings(ticker: &str, days: &[DailyQuantity]) -> String {
    if days.is_empty() {
        return format!("{ticker}: no holdings");
    }
    let mut lines = vec![ticker.to_owned()];
    lines.extend(days.iter().map(|d| format!("  {}  {:>6}", d.date, d.quantity)));
    lines.join("\n")
}

/// `(display name, symbol)` pairs, one per line.
#[must_use]
pub fn ticker_suggestions(pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return "no matching tickers".to_owned();
    }
    pairs.iter().map(|(name, symbol)| format!("{symbol:<12} {name}")).collect::<Vec<_>>().join("\n")
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
