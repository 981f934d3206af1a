//! Price formatting for product cards

/// Formats a number with a thousands separator (comma) and the given number of decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::format::format_number_with_decimals;
///
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals.min(3) as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Separator every 3 digits from the end of the integer part
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Price with two decimal places
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Price followed by its currency label
pub fn format_price(value: f64, currency: &str) -> String {
    if currency.is_empty() {
        format_money(value)
    } else {
        format!("{} {}", format_money(value), currency)
    }
}
