//! Plain-text report for terminals.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::report::AnalysisReport;

/// Rows shown per table when no limit is given.
pub const DEFAULT_TOP: usize = 10;

/// Writes a text report to a file.
pub fn write_text(report: &AnalysisReport, output_path: impl AsRef<Path>, top: usize) -> Result<()> {
    let mut file = File::create(output_path)?;
    file.write_all(to_text(report, top).as_bytes())?;
    Ok(())
}

/// Renders a report as aligned plain text.
///
/// `top` limits the rows of the ranking, word and emoji tables.
pub fn to_text(report: &AnalysisReport, top: usize) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = render(&mut out, report, top);
    out
}

fn render(out: &mut String, report: &AnalysisReport, top: usize) -> std::fmt::Result {
    writeln!(out, "📊 Top Statistics ({})", report.filter)?;
    writeln!(out, "   Messages: {}", report.stats.messages)?;
    writeln!(out, "   Words:    {}", report.stats.words)?;
    writeln!(out, "   Media:    {}", report.stats.media)?;
    writeln!(out, "   Links:    {}", report.stats.links)?;

    if report.is_empty() {
        writeln!(out)?;
        writeln!(out, "   No messages for this selection.")?;
        return Ok(());
    }

    section(out, "Monthly Timeline")?;
    for month in &report.monthly_timeline {
        writeln!(out, "   {:<10} {:>6}", month.label, month.count)?;
    }

    section(out, "Daily Timeline")?;
    let active_days = report.daily_timeline.iter().filter(|d| d.count > 0).count();
    if let (Some(first), Some(last)) = (report.daily_timeline.first(), report.daily_timeline.last()) {
        writeln!(out, "   {} to {}, {} active days", first.date, last.date, active_days)?;
    }
    if let Some(busiest) = report.daily_timeline.iter().max_by_key(|d| (d.count, std::cmp::Reverse(d.date))) {
        writeln!(out, "   Busiest day: {} ({} messages)", busiest.date, busiest.count)?;
    }

    section(out, "Activity Map")?;
    for day in &report.week_activity {
        writeln!(out, "   {:<10} {:>6}", day.day, day.count)?;
    }
    writeln!(out)?;
    for month in &report.month_activity {
        writeln!(out, "   {:<10} {:>6}", month.month, month.count)?;
    }
    if let Some((day, period, count)) = report.heatmap.peak() {
        writeln!(out)?;
        writeln!(
            out,
            "   Peak hour: {} {} ({} messages)",
            crate::record::weekday_name(day),
            period,
            count
        )?;
    }

    if let Some(busy) = &report.busy_users {
        section(out, "Most Busy Users")?;
        // Shares cover every participant, so `top` is not capped by the
        // ranking limit.
        for share in busy.shares.iter().take(top) {
            writeln!(out, "   {:<20} {:>6}  {:>6.2}%", share.name, share.count, share.percent)?;
        }
    }

    section(out, "Most Common Words")?;
    for word in report.wordcloud.iter().take(top) {
        writeln!(out, "   {:<20} {:>6}", word.term, word.count)?;
    }

    section(out, "Emoji Analysis")?;
    if report.emojis.is_empty() {
        writeln!(out, "   (none)")?;
    }
    for emoji in report.emojis.iter().take(top) {
        writeln!(out, "   {:<4} {:>6}", emoji.term, emoji.count)?;
    }

    let diag = &report.diagnostics;
    if diag.unparsable > 0 {
        writeln!(out)?;
        writeln!(out, "⚠️  {} messages could not be parsed and were skipped", diag.unparsable)?;
    }

    Ok(())
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "── {title} ──")
}
