/// Pull the first whitespace-separated token out of `raw` and return it
/// unchanged if it looks like a plain decimal number, or "" otherwise.
///
/// Accepted tokens are an optional leading minus followed by digits with at
/// most one decimal point. Partial entries like "-", ".", "3." and ".5" pass;
/// signs elsewhere, exponents and thousands separators do not. The token is
/// never normalized, so "007." stays "007.".
pub fn extract_numeric_token(raw: &str) -> &str {
    let token = raw.split_whitespace().next().unwrap_or("");
    if is_numeric_token(token) {
        token
    } else {
        ""
    }
}

fn is_numeric_token(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    let mut seen_point = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// Round to eight decimal places, half away from zero.
///
/// Scales by 1e8 before rounding, so values big enough to overflow the
/// scaling land on infinity rather than a rounded result.
pub fn round8(value: f64) -> f64 {
    (value * 1e8).round() / 1e8
}

pub fn parse_or_nan(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}

pub fn format_number(value: f64) -> String {
    // collapse -0.0 so a decrement can't leave "-0" in a field
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
