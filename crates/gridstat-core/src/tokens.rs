//! Numeric token parsing shared by the extractors.
//!
//! Reports print negative gains with a doubled dash (`--7`); a single leading
//! dash is also accepted.

use crate::error::ExtractError;

/// Parse a signed integer, restoring the sign of `--N` tokens.
///
/// `context` names the anchor or marker for error messages.
///
/// # Errors
///
/// [`ExtractError::MalformedToken`] when the token is not an integer.
pub fn parse_signed(token: &str, context: &str) -> Result<i32, ExtractError> {
    let normalized = token.strip_prefix('-').filter(|rest| rest.starts_with('-'));
    let candidate = normalized.unwrap_or(token);
    candidate
        .parse::<i32>()
        .map_err(|_| ExtractError::malformed(context, token))
}

/// Parse an integer, ignoring a trailing `%` or surrounding parentheses.
pub fn parse_count(token: &str, context: &str) -> Result<i32, ExtractError> {
    let trimmed = token.trim_matches(|c| c == '(' || c == ')').trim_end_matches('%');
    parse_signed(trimmed, context)
}

/// Split a combined token on `delimiter` and parse exactly `fields` integers.
///
/// `delimiter = None` parses the whole token as one field. Because `-` is also
/// a sign, splitting on `-` only accepts unsigned parts.
///
/// # Errors
///
/// [`ExtractError::MalformedToken`] when the part count differs from `fields`
/// or a part does not parse.
pub fn split_fields(
    token: &str,
    delimiter: Option<char>,
    fields: usize,
    context: &str,
) -> Result<Vec<i32>, ExtractError> {
    let parts: Vec<&str> = match delimiter {
        Some(d) => token.split(d).collect(),
        None => vec![token],
    };
    if parts.len() != fields {
        return Err(ExtractError::malformed(context, token));
    }
    parts
        .into_iter()
        .map(|p| {
            if p.is_empty() {
                Err(ExtractError::malformed(context, token))
            } else {
                parse_signed(p, context).map_err(|_| ExtractError::malformed(context, token))
            }
        })
        .collect()
}

/// Parse a whole `<n>y` yard token (`12y`, `-3y`, `--7y`).
///
/// Returns `None` when the token has any other shape.
pub fn parse_yard_token(token: &str) -> Option<i32> {
    let digits = token.strip_suffix('y')?;
    let unsigned = digits.trim_start_matches('-');
    let dashes = digits.len() - unsigned.len();
    if dashes > 2 || unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i32 = unsigned.parse().ok()?;
    Some(if dashes > 0 { -value } else { value })
}

/// Parse an `a/b` ratio token, returning `None` for anything else.
pub fn parse_ratio(token: &str) -> Option<(i32, i32)> {
    let (a, b) = token.split_once('/')?;
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(a) || !is_digits(b) {
        return None;
    }
    Some((a.parse().ok()?, b.parse().ok()?))
}

/// True if the token is an unsigned integer.
pub fn is_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signed_plain_and_negative() {
        assert_eq!(parse_signed("12", "x").unwrap(), 12);
        assert_eq!(parse_signed("-4", "x").unwrap(), -4);
    }

    #[test]
    fn test_parse_signed_double_dash_restores_sign() {
        assert_eq!(parse_signed("--7", "x").unwrap(), -7);
    }

    #[test]
    fn test_parse_signed_rejects_text() {
        let err = parse_signed("12a", "RUNプレイ数").unwrap_err();
        assert_eq!(err, ExtractError::malformed("RUNプレイ数", "12a"));
        assert!(parse_signed("---7", "x").is_err());
        assert!(parse_signed("", "x").is_err());
    }

    #[test]
    fn test_parse_count_strips_decoration() {
        assert_eq!(parse_count("(40%)", "x").unwrap(), 40);
        assert_eq!(parse_count("38%", "x").unwrap(), 38);
    }

    #[test]
    fn test_split_fields_triple() {
        assert_eq!(
            split_fields("20-12-1", Some('-'), 3, "PASS").unwrap(),
            vec![20, 12, 1]
        );
    }

    #[test]
    fn test_split_fields_time() {
        assert_eq!(split_fields("31:05", Some(':'), 2, "TOP").unwrap(), vec![31, 5]);
    }

    #[test]
    fn test_split_fields_single() {
        assert_eq!(split_fields("143", None, 1, "RUN").unwrap(), vec![143]);
    }

    #[test]
    fn test_split_fields_wrong_count_is_malformed() {
        let err = split_fields("2-1", Some('-'), 3, "PASS試投-成功-被INT").unwrap_err();
        assert_eq!(err, ExtractError::malformed("PASS試投-成功-被INT", "2-1"));
        assert!(split_fields("2--1", Some('-'), 2, "F").is_err());
    }

    #[test]
    fn test_parse_yard_token() {
        assert_eq!(parse_yard_token("15y"), Some(15));
        assert_eq!(parse_yard_token("-3y"), Some(-3));
        assert_eq!(parse_yard_token("--7y"), Some(-7));
        assert_eq!(parse_yard_token("---7y"), None);
        assert_eq!(parse_yard_token("5yラン"), None);
        assert_eq!(parse_yard_token("y"), None);
    }

    #[test]
    fn test_parse_ratio() {
        assert_eq!(parse_ratio("4/10"), Some((4, 10)));
        assert_eq!(parse_ratio("(40%)"), None);
        assert_eq!(parse_ratio("4/"), None);
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer("25"));
        assert!(!is_integer("-25"));
        assert!(!is_integer(""));
    }
}
