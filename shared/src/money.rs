//! Money helpers
//!
//! Totals are summed in `Decimal`; floats only appear at the JSON boundary.

use rust_decimal::Decimal;

use crate::models::CartLine;

/// Σ `price × count` over all lines
pub fn cart_total<'a>(lines: impl IntoIterator<Item = &'a CartLine>) -> Decimal {
    lines
        .into_iter()
        .map(CartLine::line_total)
        .fold(Decimal::ZERO, |acc, total| acc + total)
}
