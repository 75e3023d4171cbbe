//! JSON helpers for resolved environments and settings.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::SerializationError;

/// Serializes a value to pretty JSON with 2-space indentation and a trailing newline.
///
/// Object keys come out in the source order, so `BTreeMap`-backed values are sorted.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Deserializes JSON from bytes.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::JsonDeserialize)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stratum_domain::{EffectiveMapping, OutputFormat, Settings};

    #[test]
    fn test_effective_mapping_renders_sorted_with_escapes() {
        let mut env = EffectiveMapping::new();
        env.insert("URL".to_string(), "postgres://db/app".to_string());
        env.insert("GREETING".to_string(), "say \"hi\"".to_string());
        env.insert("DB_PASS".to_string(), "secret://DB_PASS X".to_string());

        assert_eq!(
            to_json_stable(&env).unwrap(),
            concat!(
                "{\n",
                "  \"DB_PASS\": \"secret://DB_PASS X\",\n",
                "  \"GREETING\": \"say \\\"hi\\\"\",\n",
                "  \"URL\": \"postgres://db/app\"\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_empty_mapping() {
        assert_eq!(to_json_stable(&EffectiveMapping::new()).unwrap(), "{}\n");
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings {
            manifest: "deploy/stratum.yaml".to_string(),
            output: OutputFormat::Json,
            ..Settings::default()
        };

        let json = to_json_stable(&settings).unwrap();
        assert!(json.contains("  \"output\": \"json\""));

        let parsed: Settings = from_json_bytes(json.as_bytes()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_secret_map_from_bytes() {
        let json = r#"{"production/api/pod1/DB_PASS": "hunter2"}"#;
        let result: EffectiveMapping = from_json_bytes(json.as_bytes()).unwrap();
        assert_eq!(result["production/api/pod1/DB_PASS"], "hunter2");
    }

    #[test]
    fn test_from_json_bytes_invalid() {
        let result: Result<EffectiveMapping, _> = from_json_bytes(br#"{"invalid": }"#);
        assert!(matches!(result, Err(SerializationError::JsonDeserialize(_))));
    }
}
