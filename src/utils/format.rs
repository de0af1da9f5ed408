//! Number formatting for console reporting

/// Format an integer count with thousands separators
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }

    formatted
}

/// Format a value with thousands separators and one decimal place
#[must_use]
pub fn format_decimal(value: f64) -> String {
    let rendered = format!("{:.1}", value.abs());
    let (integer_part, fraction) = rendered.split_once('.').unwrap_or((&rendered, "0"));

    let mut formatted = String::new();
    if value < 0.0 {
        formatted.push('-');
    }

    let len = integer_part.len();
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }

    formatted.push('.');
    formatted.push_str(fraction);
    formatted
}

/// Format a percentage rate with one decimal place and an explicit sign
#[must_use]
pub fn format_rate(value: f64) -> String {
    format!("{value:+.1}%")
}
