//! Helpers for partial updates.
//!
//! Nullable text columns use `Option<Option<String>>` in update payloads:
//! an absent key leaves the column alone, an explicit `null` clears it.
//! An empty string is treated like an absent key.

use serde::{Deserialize, Deserializer};

/// Distinguishes an explicit `null` from a missing key. Use together with
/// `#[serde(default)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

pub fn merge_required(target: &mut String, patch: Option<String>) {
    if let Some(value) = patch.filter(|v| !v.is_empty()) {
        *target = value;
    }
}

pub fn merge_nullable(target: &mut Option<String>, patch: Option<Option<String>>) {
    match patch {
        None => {}
        Some(None) => *target = None,
        Some(Some(value)) if value.is_empty() => {}
        Some(Some(value)) => *target = Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        salary: Option<Option<String>>,
    }

    #[test]
    fn absent_null_and_value_are_distinct() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"salary":null}"#).unwrap();
        let value: Patch = serde_json::from_str(r#"{"salary":"30k"}"#).unwrap();
        assert_eq!(absent.salary, None);
        assert_eq!(null.salary, Some(None));
        assert_eq!(value.salary, Some(Some("30k".to_string())));
    }

    #[test]
    fn empty_string_leaves_value_unchanged() {
        let mut title = Some("Backend Engineer".to_string());
        merge_nullable(&mut title, Some(Some(String::new())));
        assert_eq!(title.as_deref(), Some("Backend Engineer"));

        let mut company = "Acme".to_string();
        merge_required(&mut company, Some(String::new()));
        assert_eq!(company, "Acme");
    }

    #[test]
    fn null_clears_and_value_replaces() {
        let mut link = Some("https://meet.example/abc".to_string());
        merge_nullable(&mut link, Some(Some("https://meet.example/xyz".into())));
        assert_eq!(link.as_deref(), Some("https://meet.example/xyz"));
        merge_nullable(&mut link, Some(None));
        assert_eq!(link, None);
    }
}
