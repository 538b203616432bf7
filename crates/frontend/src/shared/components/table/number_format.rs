//! Money formatting for table cells

/// Formats money with 2 decimals and a space as thousands separator
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_money;
/// assert_eq!(format_money(1234567.891), "1 234 567.89");
/// ```
pub fn format_money(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}
