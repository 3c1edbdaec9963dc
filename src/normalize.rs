//! Normalization of raw, locale-formatted display text into canonical
//! numeric strings. Both functions pass absence through and never fail:
//! malformed input degrades to a non-numeric string in the log.

/// Strip the `°C` unit marker, trim, and turn a decimal comma into a
/// decimal point. The result stays a string; no numeric parsing happens
/// here, so unexpected formats survive verbatim.
pub fn temperature(value: Option<&str>) -> Option<String> {
    let value = value?;
    Some(value.replace("°C", "").trim().replace(',', "."))
}

/// Convert a localized visitor count into a canonical numeric string.
///
/// `"-"` means zero on the status pages. A trailing `k` or `m` (either
/// case) scales by 1 000 or 1 000 000. The numeric part is read with
/// parseFloat semantics: leading float portion only, trailing text
/// ignored, `NaN` when no digits are present.
pub fn num(value: Option<&str>) -> Option<String> {
    let value = value?;
    if value == "-" {
        return Some("0".to_string());
    }

    let factor = match value.chars().next_back().map(|c| c.to_ascii_lowercase()) {
        Some('k') => 1_000.0,
        Some('m') => 1_000_000.0,
        _ => 1.0,
    };
    let n = leading_float(&value.replace(',', "."));
    Some((n * factor).to_string())
}

fn leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return f64::NAN;
    }
    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_passes_absence_through() {
        assert_eq!(num(None), None);
    }

    #[test]
    fn num_dash_means_zero() {
        assert_eq!(num(Some("-")), Some("0".to_string()));
    }

    #[test]
    fn num_plain_integer() {
        assert_eq!(num(Some("7")), Some("7".to_string()));
        assert_eq!(num(Some("123")), Some("123".to_string()));
    }

    #[test]
    fn num_k_suffix_scales_by_thousand() {
        assert_eq!(num(Some("1,5k")), Some("1500".to_string()));
        assert_eq!(num(Some("2K")), Some("2000".to_string()));
    }

    #[test]
    fn num_m_suffix_scales_by_million() {
        assert_eq!(num(Some("2M")), Some("2000000".to_string()));
        assert_eq!(num(Some("1,25m")), Some("1250000".to_string()));
    }

    #[test]
    fn num_decimal_comma_without_suffix() {
        assert_eq!(num(Some("3,5")), Some("3.5".to_string()));
    }

    #[test]
    fn num_garbage_degrades_to_nan_string() {
        assert_eq!(num(Some("stengt")), Some("NaN".to_string()));
        assert_eq!(num(Some("")), Some("NaN".to_string()));
    }

    #[test]
    fn temperature_passes_absence_through() {
        assert_eq!(temperature(None), None);
    }

    #[test]
    fn temperature_strips_unit_and_normalizes_comma() {
        assert_eq!(temperature(Some("21,3°C")), Some("21.3".to_string()));
    }

    #[test]
    fn temperature_trims_after_stripping_unit() {
        assert_eq!(temperature(Some(" 5 °C ")), Some("5".to_string()));
    }

    #[test]
    fn temperature_is_idempotent_on_normalized_input() {
        assert_eq!(temperature(Some("24.5")), Some("24.5".to_string()));
    }
}
