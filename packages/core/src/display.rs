//! Pure formatting helpers for presentation layers.
//!
//! The stores themselves never print; callers render their results
//! with these functions (or `Bid`'s `Display` impl directly).

use crate::Bid;

/// Render a found bid, one line.
pub fn format_bid(bid: &Bid) -> String {
    bid.to_string()
}

/// Render the not-found message for a searched id.
pub fn format_not_found(id: &str) -> String {
    format!("Bid Id {} not found.", id)
}

/// Render a search outcome - the bid if present, not-found otherwise.
pub fn format_search_result(id: &str, result: Option<&Bid>) -> String {
    match result {
        Some(bid) => format_bid(bid),
        None => format_not_found(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_renders_the_bid() {
        let bid = Bid::new("98109", "Paint Booth", "General", 1000.0);
        assert_eq!(
            format_search_result("98109", Some(&bid)),
            "98109: Paint Booth | 1000 | General"
        );
    }

    #[test]
    fn absent_renders_not_found() {
        assert_eq!(
            format_search_result("98109", None),
            "Bid Id 98109 not found."
        );
    }
}
