//! Text and value normalization
//!
//! Pure helpers shared by the filter engine and the view layer.

/// Case-fold and trim a text value
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Shortest display form of an amount (`42.0` reads as `"42"`, `3.5` as `"3.5"`)
pub fn amount_text(amount: f64) -> String {
    amount.to_string()
}

/// Format an amount with the en-CA dollar convention: `$1,234.50`
///
/// Non-finite amounts have no sensible rendering and yield `None`.
pub fn format_currency(amount: f64) -> Option<String> {
    if !amount.is_finite() {
        return None;
    }

    let fixed = format!("{:.2}", round_cents_half_up(amount.abs()));
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    Some(format!("{}${}.{}", sign, group_digits(whole), cents))
}

/// Round a non-negative amount to cents, ties away from zero
///
/// `{:.2}` rounds the exact binary value and sends exact ties to even. The
/// only amounts sitting exactly on a half cent are odd multiples of 1/8
/// (`0.125`, `0.375`, ...), so those are bumped up and the rest left alone.
fn round_cents_half_up(amount: f64) -> f64 {
    let eighths = amount * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        (amount * 100.0).ceil() / 100.0
    } else {
        amount
    }
}

/// Human-readable grouped count: `1234` reads as `"1,234"`
pub fn format_count(count: usize) -> String {
    group_digits(&count.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Escape text for embedding into markup (element content or quoted attributes)
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    // === normalize() ===

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  LiOn  "), "lion");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_amount_text() {
        assert_eq!(amount_text(42.0), "42");
        assert_eq!(amount_text(0.15), "0.15");
    }

    // === format_currency() ===

    #[test]
    fn test_format_currency_basic() {
        assert_eq!(format_currency(0.15).as_deref(), Some("$0.15"));
        assert_eq!(format_currency(42.0).as_deref(), Some("$42.00"));
        assert_eq!(format_currency(1234.5).as_deref(), Some("$1,234.50"));
        assert_eq!(format_currency(1234567.891).as_deref(), Some("$1,234,567.89"));
        assert_eq!(format_currency(0.125).as_deref(), Some("$0.13"));
    }

    #[test]
    fn test_format_currency_half_cent_rounds_away_from_zero() {
        assert_eq!(format_currency(0.375).as_deref(), Some("$0.38"));
        assert_eq!(format_currency(0.625).as_deref(), Some("$0.63"));
        assert_eq!(format_currency(2.875).as_deref(), Some("$2.88"));
        assert_eq!(format_currency(-0.125).as_deref(), Some("-$0.13"));
        // 1.115 is stored just below the half cent
        assert_eq!(format_currency(1.115).as_deref(), Some("$1.11"));
        assert_eq!(format_currency(0.25).as_deref(), Some("$0.25"));
    }

    #[test]
    fn test_format_currency_negative_and_zero() {
        assert_eq!(format_currency(-3.2).as_deref(), Some("-$3.20"));
        assert_eq!(format_currency(0.0).as_deref(), Some("$0.00"));
        assert_eq!(format_currency(-0.001).as_deref(), Some("$0.00"));
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), None);
        assert_eq!(format_currency(f64::INFINITY), None);
    }

    // === format_count() ===

    #[test]
    fn test_format_count_grouping() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    // === escape_html() ===

    #[test]
    fn test_escape_html_all_special_characters() {
        assert_eq!(
            escape_html(r#"<script>&"'"#),
            "&lt;script&gt;&amp;&quot;&#039;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("Plate 2 x 4"), "Plate 2 x 4");
    }
}
