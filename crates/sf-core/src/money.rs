//! Lenient number parsing for DOM-held values, and currency formatting.
//!
//! The parsers mirror what a browser does with `parseFloat` / `parseInt`:
//! leading whitespace is skipped, the longest numeric prefix wins, and
//! anything unparseable yields `None` so callers can pick their default.

/// Longest prefix of `s` that reads as a decimal float (`-12.5e3`).
fn float_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return "";
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    &s[..end]
}

pub fn parse_float(raw: &str) -> Option<f64> {
    float_prefix(raw.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    digits.parse::<i64>().ok().map(|v| sign * v)
}

/// Unit price from a `data-price` attribute. Absent or malformed reads as 0.
pub fn parse_price(raw: Option<&str>) -> f64 {
    raw.and_then(parse_float).unwrap_or(0.0)
}

/// Quantity from a row's input. Absent or malformed reads as 1; the result
/// is never below 1.
pub fn parse_quantity(raw: Option<&str>) -> u32 {
    raw.and_then(parse_int)
        .map(|q| q.clamp(1, i64::from(u32::MAX)) as u32)
        .unwrap_or(1)
}

pub fn row_total(unit_price: f64, quantity: u32) -> f64 {
    unit_price * f64::from(quantity)
}

pub fn cart_total<I>(rows: I) -> f64
where
    I: IntoIterator<Item = (f64, u32)>,
{
    rows.into_iter()
        .map(|(price, qty)| row_total(price, qty))
        .sum()
}

/// Format with two decimals behind `prefix`. Exact halves round away from
/// zero, as `Number.prototype.toFixed` does.
pub fn format_money(prefix: &str, amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    // Avoid rendering "-0.00".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}{:.2}", prefix, rounded)
}
