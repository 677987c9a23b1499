use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the type's default.
///
/// Pair with `#[serde(default)]` so a missing field behaves the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        count: i64,
    }

    #[test]
    fn null_missing_and_present() {
        let s: Sample = serde_json::from_str(r#"{"name": null, "count": 4}"#).unwrap();
        assert_eq!(s.name, "");
        assert_eq!(s.count, 4);

        let s: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(s.count, 0);
    }
}
