//! Representative variant selection

use crate::models::Variant;

/// Ordering key: missing or NaN prices sort after every real price.
fn price_key(variant: &Variant) -> f64 {
    variant
        .price
        .filter(|p| !p.is_nan())
        .unwrap_or(f64::INFINITY)
}

/// Pick the cheapest variant of a card.
///
/// Priced variants always win over unpriced ones and ties go to the first
/// variant in upstream order. Returns `None` only for an empty list.
pub fn select_cheapest(variants: &[Variant]) -> Option<&Variant> {
    variants
        .iter()
        .min_by(|a, b| price_key(a).total_cmp(&price_key(b)))
}
