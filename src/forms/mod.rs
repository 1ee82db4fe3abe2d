use thiserror::Error;

pub mod auth;
pub mod checkout;
pub mod inventory;
pub mod locations;
pub mod menu;
pub mod utilities;

/// Errors produced when parsing a decimal money amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("invalid price `{0}`")]
    Invalid(String),
    #[error("price `{0}` has more than two decimal places")]
    TooPrecise(String),
}

/// Parse a decimal price string like `9.99` into cents.
///
/// At most two decimal places are accepted; `9.999` is rejected rather than
/// rounded, since menu prices are entered by hand and a third decimal is
/// always a typo.
pub fn parse_price_cents(input: &str) -> Result<i64, PriceError> {
    let trimmed = input.trim();

    let (whole, frac) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };

    if whole.is_empty() || !whole.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(PriceError::Invalid(trimmed.to_string()));
    }
    if !frac.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(PriceError::Invalid(trimmed.to_string()));
    }
    if frac.len() > 2 {
        return Err(PriceError::TooPrecise(trimmed.to_string()));
    }

    let whole: i64 = whole
        .parse()
        .map_err(|_| PriceError::Invalid(trimmed.to_string()))?;

    let cents = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| PriceError::Invalid(trimmed.to_string()))? * 10,
        _ => frac.parse::<i64>().map_err(|_| PriceError::Invalid(trimmed.to_string()))?,
    };

    Ok(whole * 100 + cents)
}

/// Collapse runs of whitespace and strip control characters from a single-line
/// text field.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Sanitize a multi-line text field, trimming blank lines at both ends and
/// collapsing repeated blank lines.
pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    let mut lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();

    while matches!(lines.first(), Some(line) if line.is_empty()) {
        lines.remove(0);
    }
    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    let mut result = Vec::with_capacity(lines.len());
    let mut previous_empty = false;
    for line in lines {
        if line.is_empty() {
            if previous_empty {
                continue;
            }
            previous_empty = true;
            result.push(String::new());
        } else {
            previous_empty = false;
            result.push(line);
        }
    }

    result.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_accepts_two_decimal_places() {
        assert_eq!(parse_price_cents("9.99"), Ok(999));
        assert_eq!(parse_price_cents("12"), Ok(1_200));
        assert_eq!(parse_price_cents("0.5"), Ok(50));
        assert_eq!(parse_price_cents(" 4.25 "), Ok(425));
    }

    #[test]
    fn parse_price_rejects_three_decimal_places() {
        assert_eq!(
            parse_price_cents("9.999"),
            Err(PriceError::TooPrecise("9.999".to_string()))
        );
    }

    #[test]
    fn parse_price_rejects_garbage() {
        assert!(matches!(parse_price_cents(""), Err(PriceError::Invalid(_))));
        assert!(matches!(parse_price_cents("abc"), Err(PriceError::Invalid(_))));
        assert!(matches!(parse_price_cents("-3.00"), Err(PriceError::Invalid(_))));
        assert!(matches!(parse_price_cents("3.a0"), Err(PriceError::Invalid(_))));
        assert!(matches!(parse_price_cents("."), Err(PriceError::Invalid(_))));
    }

    #[test]
    fn sanitize_inline_text_collapses_whitespace() {
        assert_eq!(sanitize_inline_text("  Carne   Asada\tTaco  "), "Carne Asada Taco");
    }
}
