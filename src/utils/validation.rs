use validator::Validate;

use crate::error::{Error, Result};

pub fn validate<T: Validate>(val: &T) -> Result<()> {
    val.validate()?;
    Ok(())
}

/// Upper bound for nullable update fields; the `validator` derive does not
/// look inside `Option<Option<String>>`.
pub fn check_max_chars(field: &str, value: &Option<Option<String>>, max: usize) -> Result<()> {
    match value {
        Some(Some(v)) if v.chars().count() > max => Err(Error::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        ))),
        _ => Ok(()),
    }
}

/// Parses a numeric id taken from the request path.
pub fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| Error::BadRequest("invalid id".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("abc").is_err());
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
    }

    #[test]
    fn max_chars_counts_characters_and_ignores_clears() {
        assert!(check_max_chars("salary", &None, 3).is_ok());
        assert!(check_max_chars("salary", &Some(None), 3).is_ok());
        assert!(check_max_chars("salary", &Some(Some("€€€".into())), 3).is_ok());

        let err = check_max_chars("salary", &Some(Some("30k+".into())), 3).unwrap_err();
        assert!(matches!(err, Error::BadRequest(ref m) if m == "salary must be at most 3 characters"));
    }
}
