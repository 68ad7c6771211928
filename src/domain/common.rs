/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Formats an amount with a fixed display symbol and two decimals.
///
/// Negative values keep their sign ahead of the symbol (`-₹12.50`); negative
/// zero prints as zero.
pub fn format_amount(symbol: &str, value: f64) -> String {
    if value < 0.0 {
        format!("-{}{:.2}", symbol, value.abs())
    } else {
        format!("{}{:.2}", symbol, value.abs())
    }
}

/// First item whose identifier equals `id`.
pub fn find_by_id<'a, T: Identifiable>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// Sums a sequence of amounts.
pub fn total_of<'a>(amounts: impl IntoIterator<Item = &'a f64>) -> f64 {
    amounts.into_iter().fold(0.0, |acc, value| acc + value)
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
