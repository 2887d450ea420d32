//! src/domain/phone_number.rs

/// Rewrites a North American phone number into `+1XXXXXXXXXX` form.
///
/// Every character that is not an ASCII digit is dropped first. Eleven digits
/// with a leading `1` get a `+`, ten digits get `+1`. Anything else is handed
/// back exactly as it came in: the relay receives the customer's own text
/// rather than a rejection.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        11 if digits.starts_with('1') => format!("+{}", digits),
        10 => format!("+1{}", digits),
        _ => raw.to_string(),
    }
}
