//! Formatting utilities for prices, ratings, and other display values.

/// Format a price in dollars with two decimals (e.g., "$109.95").
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Format a rating rate with one decimal (e.g., "3.9").
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}", rate)
}

/// Format a review count (e.g., "(120 reviews)").
pub fn format_reviews(count: u32) -> String {
    format!("({} reviews)", count)
}

/// Commission earned on `price` at `rate` (a fraction, e.g. `0.10`).
pub fn commission(price: f64, rate: f64) -> f64 {
    price * rate
}

/// Uppercase the first character of a category label for display.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Result summary for the list footer (e.g., "Showing 6–10 of 12 products").
pub fn format_showing(range: Option<(usize, usize)>, total: usize) -> String {
    match range {
        Some((first, last)) => format!("Showing {}–{} of {} products", first, last, total),
        None => "No products".to_string(),
    }
}
