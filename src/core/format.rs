use crate::core::catalog::LayerReading;

/// Groups digits in threes: `2400` becomes `"2,400"`.
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Turns a camelCase stat key into a title: `seaLevelRise` becomes
/// `"Sea Level Rise"`.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn format_reading(reading: LayerReading) -> String {
    match reading {
        LayerReading::Count(count) => format_count(count),
        LayerReading::Index(index) => index.to_string(),
    }
}
