//! Presentation helpers shared with the storefront templates.

/// Formats a price in Kenyan Shillings with thousands separators and no
/// fractional subunits, e.g. `format_price(1500.0)` is `"KES 1,500"`.
pub fn format_price(price: f64) -> String {
    let shillings = price.round() as i64;
    let digits = shillings.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if shillings < 0 {
        format!("KES -{grouped}")
    } else {
        format!("KES {grouped}")
    }
}

/// Joins the present, non-empty class fragments with single spaces.
pub fn join_classes<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    classes
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
