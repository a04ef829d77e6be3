use crate::buffer::{self, OverreadPolicy};
use crate::divide::{self, Divisible, ZeroDivisorPolicy};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub buffer: BufferConfig,
    #[serde(default)]
    pub divide: DivideConfig,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BufferConfig {
    #[serde(default)]
    pub overread: OverreadPolicy,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DivideConfig {
    #[serde(default)]
    pub on_zero: ZeroDivisorPolicy,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse config: {e}")))
    }
}

/// Applies a [`Config`]'s policies to the guarded operations.
#[derive(Debug, Default)]
pub struct Guard {
    config: Config,
}

impl Guard {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn read_buffer<W: Write>(&self, out: &mut W, region: &[u8], len: usize) -> Result<usize> {
        buffer::read_buffer(out, region, len, self.config.buffer.overread)
    }

    pub fn divide<T: Divisible>(&self, a: T, b: T) -> Result<T> {
        divide::divide_with(a, b, self.config.divide.on_zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let toml = r#"
[buffer]
overread = "clamp"

[divide]
on_zero = "error"
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.buffer.overread, OverreadPolicy::Clamp);
        assert_eq!(config.divide.on_zero, ZeroDivisorPolicy::Error);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.buffer.overread, OverreadPolicy::Reject);
        assert_eq!(config.divide.on_zero, ZeroDivisorPolicy::ReturnZero);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("[buffer]\nlength = 3\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(Config::from_toml_str("[logging]\n").is_err());
    }

    #[test]
    fn unknown_policy_value_is_rejected() {
        assert!(Config::from_toml_str("[divide]\non_zero = \"panic\"\n").is_err());
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = Config::load(Path::new("/nonexistent/sample-guard.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn guard_applies_configured_policies() {
        let strict = Guard::default();
        let mut out = Vec::new();
        assert!(strict.read_buffer(&mut out, b"ab", 3).is_err());
        assert_eq!(strict.divide(4, 0).unwrap(), 0);

        let config = Config::from_toml_str(
            "[buffer]\noverread = \"clamp\"\n[divide]\non_zero = \"error\"\n",
        )
        .unwrap();
        let lenient = Guard::new(config);
        assert_eq!(lenient.read_buffer(&mut out, b"ab", 3).unwrap(), 2);
        assert!(lenient.divide(4, 0).is_err());
        assert_eq!(lenient.config().buffer.overread, OverreadPolicy::Clamp);
    }

    #[test]
    fn guard_keeps_every_parsed_config_as_given() {
        for toml in [
            "",
            "[buffer]\noverread = \"clamp\"\n",
            "[divide]\non_zero = \"error\"\n",
        ] {
            let expected = Config::from_toml_str(toml).unwrap();
            let guard = Guard::new(Config::from_toml_str(toml).unwrap());
            assert_eq!(guard.config(), &expected);
        }
    }
}
