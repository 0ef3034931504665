/// Terminal rendering of the store as a categorical bar chart
use terminal_size::{terminal_size, Width};
use yansi::Paint;

use crate::error::TrackerError;
use crate::models::IpRecord;
use crate::store::RecordStore;

/// Fallback when the terminal cannot report a width (pipes, CI)
const DEFAULT_WIDTH: usize = 100;

/// One color per country category, cycling when there are more countries
/// than colors
const PALETTE: [yansi::Color; 6] = [
    yansi::Color::Cyan,
    yansi::Color::Green,
    yansi::Color::Yellow,
    yansi::Color::Magenta,
    yansi::Color::Blue,
    yansi::Color::Red,
];

/// One drawn bar: the padded ip label, how many block cells the bar spans,
/// the country's 1-based category ordinal, and the country itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub cells: usize,
    pub ordinal: usize,
    pub country: String,
}

/// Compute the bar layout without touching the terminal. Countries get
/// 1-based ordinals in order of first appearance (the categorical axis);
/// bar lengths scale the ordinal into the width left over after the label
/// and country columns, so the widest bar always fits.
pub fn layout(records: &[IpRecord], width: usize) -> Vec<ChartRow> {
    let mut countries: Vec<String> = Vec::new();
    let mut ordinals: Vec<usize> = Vec::with_capacity(records.len());
    for record in records {
        let ordinal = match countries.iter().position(|c| c == &record.country) {
            Some(index) => index + 1,
            None => {
                countries.push(record.country.clone());
                countries.len()
            }
        };
        ordinals.push(ordinal);
    }

    let label_width = records.iter().map(|r| r.ip.len()).max().unwrap_or(0);
    let country_width = records.iter().map(|r| r.country.len()).max().unwrap_or(0);
    let reserved = label_width + country_width + 4;
    let available = width.saturating_sub(reserved).max(1);
    let unit = (available / countries.len().max(1)).max(1);

    records
        .iter()
        .zip(ordinals)
        .map(|(record, ordinal)| ChartRow {
            label: format!("{:<width$}", record.ip, width = label_width),
            cells: (ordinal * unit).min(available),
            ordinal,
            country: record.country.clone(),
        })
        .collect()
}

/// Draw one bar per stored record: ip labels on the left, bar length and
/// color carrying the country category. Reads the store only.
///
/// # Errors
///
/// `NoData` when the store is empty; nothing is rendered.
pub fn render(store: &RecordStore) -> Result<(), TrackerError> {
    if store.is_empty() {
        return Err(TrackerError::NoData);
    }

    let width = match terminal_size() {
        Some((Width(w), _)) => w as usize,
        None => DEFAULT_WIDTH,
    };
    let rows = layout(store.records(), width);

    println!("\n {}\n", Paint::new("IP Addresses and their Countries").bold());
    for row in &rows {
        let color = PALETTE[(row.ordinal - 1) % PALETTE.len()];
        let bar: String = "█".repeat(row.cells);
        println!(
            " {}  {} {}",
            Paint::new(&row.label).cyan(),
            Paint::new(bar).fg(color),
            row.country
        );
    }
    println!(
        "\n {}",
        Paint::new("IP Addresses on the left; bar length marks the country's category position.")
            .dim()
    );
    Ok(())
}
