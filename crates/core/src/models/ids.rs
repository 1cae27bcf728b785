//! Id assignment for new catalog entries.

use crate::types::ProductId;

/// Next product id: one past the largest numeric id in use.
///
/// Non-numeric ids count as zero, so an empty or fully custom catalog
/// starts at `1`.
pub fn next_product_id<'a>(existing: impl IntoIterator<Item = &'a ProductId>) -> ProductId {
    let max = existing
        .into_iter()
        .map(ProductId::numeric)
        .max()
        .unwrap_or(0);
    ProductId::new(max.saturating_add(1).to_string())
}

/// Timestamp id of the form `<prefix>-<millis>` (or bare `<millis>` when
/// `prefix` is empty), bumped one millisecond at a time until `taken`
/// reports it free.
pub fn timestamped_id(prefix: &str, now_millis: i64, taken: impl Fn(&str) -> bool) -> String {
    let mut millis = now_millis;
    loop {
        let candidate = if prefix.is_empty() {
            millis.to_string()
        } else {
            format!("{prefix}-{millis}")
        };
        if !taken(&candidate) {
            return candidate;
        }
        millis = millis.saturating_add(1);
    }
}
