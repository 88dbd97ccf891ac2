//! Two-decimal rounding for display

/// Round to cents, half away from zero.
///
/// Amounts too large to scale by 100 already have no fractional cents and
/// are returned unchanged.
pub fn round_cents(amount: f64) -> f64 {
    let cents = amount * 100.0;
    if !cents.is_finite() {
        return amount;
    }
    cents.round() / 100.0
}

/// Format an amount with exactly two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", round_cents(amount))
}
