//! Table row construction for the agencies listing.

use ratatui::layout::Constraint;
use ratatui::text::Span;
use ratatui::widgets::{Cell, Row};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::dataset::Agency;
use crate::listing::ListingRow;
use crate::ui::style::speed_class_style;

/// Placeholder shown for values the dataset does not report.
pub(crate) const MISSING_VALUE: &str = "—";

const INDUSTRIES_CELL_WIDTH: u16 = 24;

/// Column headers for the agencies table.
#[must_use]
pub fn agency_headers() -> Vec<String> {
    ["Agency", "Type", "Reach", "Industries", "Interview", "Start", "Speed"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Column width constraints matching [`agency_headers`].
#[must_use]
pub fn agency_widths() -> Vec<Constraint> {
    vec![
        Constraint::Min(18),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(INDUSTRIES_CELL_WIDTH),
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Length(9),
    ]
}

/// Build table rows for a filtered listing over the locality's agencies.
///
/// Listing indices that fall outside the agency slice are skipped.
#[must_use]
pub fn build_agency_rows<'a>(listing: &[ListingRow], agencies: &'a [Agency]) -> Vec<Row<'a>> {
    listing
        .iter()
        .filter_map(|row| {
            let agency = agencies.get(row.index)?;
            Some(Row::new(vec![
                Cell::from(agency.name.as_str()),
                Cell::from(agency.engagement.as_str()),
                Cell::from(agency.reach.as_str()),
                Cell::from(fit_width(
                    &agency.industries.join(", "),
                    INDUSTRIES_CELL_WIDTH as usize,
                )),
                Cell::from(format_days(agency.speed.interview_days)),
                Cell::from(format_days(agency.speed.start_days)),
                Cell::from(Span::styled(row.class.label(), speed_class_style(row.class))),
            ]))
        })
        .collect()
}

/// Format a day count for display, falling back to the missing-value dash.
#[must_use]
pub fn format_days(days: Option<f64>) -> String {
    days.map(|value| format!("{value}d"))
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// Truncate text to a display width, appending an ellipsis when cut.
#[must_use]
pub fn fit_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let char_width = ch.width().unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        out.push(ch);
        used += char_width;
    }
    out.push('…');
    out
}
