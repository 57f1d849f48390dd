use crate::catalog::SkipRecord;

/// `price_before_vat * (1 + vat / 100)`. Not rounded; round with
/// [`format_money`] when showing it.
pub fn price_with_vat(record: &SkipRecord) -> f64 {
    record.price_before_vat * (1.0 + record.vat / 100.0)
}

pub fn vat_amount(record: &SkipRecord) -> f64 {
    record.price_before_vat * record.vat / 100.0
}

pub fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Percentages are shown as given, without a trailing `.0` for whole numbers.
pub fn format_percent(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{rate:.0}")
    } else {
        format!("{rate}")
    }
}
