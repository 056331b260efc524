//! Display strings for counters and identifiers.

/// Suffixes per power of 1000.
const NOTATIONS: [&str; 12] = ["", "K", "M", "B", "T", "Qa", "Qi", "Sx", "Sp", "Oc", "No", "Dc"];

/// Values below this are printed in full.
const NOTATION_START: f64 = 10_000.0;

/// Compact counter text: `12345 → "12.3K"`, `2_500_000 → "2.50M"`.
///
/// Below 10 000 the value is printed with `low_decimals` decimals and
/// thousands separators. Above, one decimal for thousands and two from
/// millions up. Returns `None` for non-finite values or values past `Dc`.
pub fn big_number_notation(value: f64, low_decimals: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let mut v = value;
    let mut base = 0usize;
    let decimals = if v >= NOTATION_START {
        v /= 1000.0;
        base = 1;
        while v.round_ties_even() >= 1000.0 {
            v /= 1000.0;
            base += 1;
        }
        if base < 2 {
            1
        } else {
            2
        }
    } else {
        low_decimals
    };
    let suffix = NOTATIONS.get(base)?;
    Some(format!("{}{}", format_grouped(v, decimals), suffix))
}

/// Fixed-point text with `,` thousands separators. Halves round away from zero.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, round_half_away(value.abs(), decimals));
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut out = String::with_capacity(raw.len() + int_part.len() / 3 + 1);
    let negative = value < 0.0 && raw.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `round` to `decimals` places; past 15 places the value is left to the formatter.
fn round_half_away(v: f64, decimals: usize) -> f64 {
    if decimals > 15 {
        return v;
    }
    let scale = 10f64.powi(decimals as i32);
    let scaled = v * scale;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round() / scale
}

/// `"IRON_sword"` → `"Iron Sword"`, `"foo-bar"` → `"Foo-Bar"`.
///
/// A word starts after any character that is not a letter, digit or apostrophe.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if !(ch.is_alphanumeric() || ch == '\'') {
            out.push(ch);
            at_word_start = true;
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Prefix before the first `delimiter`; empty if blank, absent, or leading.
pub fn substring_before<'a>(text: &'a str, delimiter: &str) -> &'a str {
    if text.trim().is_empty() {
        return "";
    }
    match text.find(delimiter) {
        Some(i) if i > 0 => &text[..i],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_small_values() {
        assert_eq!(big_number_notation(999.0, 0).as_deref(), Some("999"));
        assert_eq!(big_number_notation(1234.4, 0).as_deref(), Some("1,234"));
        assert_eq!(big_number_notation(9999.0, 2).as_deref(), Some("9,999.00"));
        assert_eq!(big_number_notation(-42.0, 0).as_deref(), Some("-42"));
    }

    #[test]
    fn notation_suffixes() {
        assert_eq!(big_number_notation(12_345.0, 0).as_deref(), Some("12.3K"));
        assert_eq!(big_number_notation(2_500_000.0, 0).as_deref(), Some("2.50M"));
        // 999.999K rounds to 1000 and promotes to the next suffix.
        assert_eq!(big_number_notation(999_999.0, 0).as_deref(), Some("1.00M"));
        assert_eq!(big_number_notation(3.0e9, 0).as_deref(), Some("3.00B"));
        assert_eq!(big_number_notation(2.5e33, 0).as_deref(), Some("2.50Dc"));
    }

    #[test]
    fn notation_rounds_halves_away_from_zero() {
        assert_eq!(big_number_notation(10_250.0, 0).as_deref(), Some("10.3K"));
        assert_eq!(big_number_notation(2.5, 0).as_deref(), Some("3"));
        assert_eq!(big_number_notation(-2.5, 0).as_deref(), Some("-3"));
        assert_eq!(format_grouped(0.125, 2), "0.13");
        assert_eq!(format_grouped(1.5, 40).len(), 42);
    }

    #[test]
    fn notation_out_of_range() {
        assert!(big_number_notation(1.0e36, 0).is_none());
        assert!(big_number_notation(f64::INFINITY, 0).is_none());
        assert!(big_number_notation(f64::NAN, 0).is_none());
    }

    #[test]
    fn grouping() {
        assert_eq!(format_grouped(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(100.0, 0), "100");
        assert_eq!(format_grouped(-0.001, 1), "0.0");
    }

    #[test]
    fn title_and_prefix() {
        assert_eq!(title_case("IRON_sword"), "Iron Sword");
        assert_eq!(title_case("dungeon_level"), "Dungeon Level");
        assert_eq!(title_case("foo-BAR"), "Foo-Bar");
        assert_eq!(title_case("main.menu(v2)"), "Main.Menu(V2)");
        assert_eq!(title_case("o'neil"), "O'neil");
        assert_eq!(substring_before("tree_oak_01", "_"), "tree");
        assert_eq!(substring_before("_oak", "_"), "");
        assert_eq!(substring_before("oak", "_"), "");
        assert_eq!(substring_before("   ", "_"), "");
    }
}
