//! Configuration fragment data model
//!
//! A configuration file is an ordered sequence of [`ConfigFragment`] records.
//! Each fragment scopes its language options and rule severities to the file
//! paths matched by its `files` patterns (minus its `ignores` patterns).
//!
//! The serde representations accept the loose spellings used by flat config
//! files in the wild: severities as `"warn"` or `1`, global permission
//! markers as `"readonly"` or `false`, `ecmaVersion` as `"latest"` or `2022`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FlatlintError;

/// One scoped configuration block in the ordered sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFragment {
    /// Glob patterns selecting the paths this fragment applies to.
    /// An empty list means the fragment applies to every path.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(description = "Glob patterns for files this fragment applies to")]
    pub files: Vec<String>,

    /// Glob patterns excluding paths even when `files` matches.
    /// Within a fragment, `ignores` always wins over `files`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(description = "Glob patterns for files this fragment never applies to")]
    pub ignores: Vec<String>,

    /// Parser options and the global-variable allowlist
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Parser options and global variable declarations")]
    pub language_options: Option<LanguageOptions>,

    /// Rule severity directives, keyed by rule name
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[schemars(description = "Rule severity configuration")]
    pub rules: IndexMap<String, RuleEntry>,
}

/// Parser options carried by a fragment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOptions {
    /// ECMAScript version, `"latest"` or a numeric year/edition
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "ECMAScript version: 'latest' or a numeric year/edition")]
    pub ecma_version: Option<EcmaVersion>,

    /// How source files are parsed: as scripts or as ES modules
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Source type: 'script' or 'module'")]
    pub source_type: Option<SourceType>,

    /// Identifiers assumed pre-declared, with their permission markers
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[schemars(description = "Global identifiers and their permission markers")]
    pub globals: IndexMap<String, GlobalValue>,
}

/// ECMAScript version marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcmaVersion {
    /// Track the most recent supported edition
    Latest,
    /// A specific year (`2022`) or edition number (`6`)
    Year(u16),
}

impl EcmaVersion {
    /// The JSON type this value was spelled as in the config file.
    /// Used by the resolver to detect cross-fragment type conflicts.
    pub fn shape(&self) -> &'static str {
        match self {
            EcmaVersion::Latest => "string",
            EcmaVersion::Year(_) => "number",
        }
    }
}

impl fmt::Display for EcmaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcmaVersion::Latest => write!(f, "latest"),
            EcmaVersion::Year(year) => write!(f, "{year}"),
        }
    }
}

impl Serialize for EcmaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EcmaVersion::Latest => serializer.serialize_str("latest"),
            EcmaVersion::Year(year) => serializer.serialize_u16(*year),
        }
    }
}

impl<'de> Deserialize<'de> for EcmaVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u16),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(year) => Ok(EcmaVersion::Year(year)),
            Raw::Text(text) if text == "latest" => Ok(EcmaVersion::Latest),
            Raw::Text(text) => Err(D::Error::custom(format!(
                "unknown ecmaVersion '{text}' (expected \"latest\" or a numeric year)"
            ))),
        }
    }
}

impl JsonSchema for EcmaVersion {
    fn schema_name() -> Cow<'static, str> {
        "EcmaVersion".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "string", "const": "latest" },
                { "type": "integer", "minimum": 3 }
            ]
        })
    }
}

/// How source files are parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Top-level code is a classic script
    Script,
    /// Top-level code is an ES module
    Module,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceType::Script => write!(f, "script"),
            SourceType::Module => write!(f, "module"),
        }
    }
}

/// Permission marker for a global identifier
///
/// Config files may spell these as `"readonly"`, `"writable"`, `"off"`,
/// `true` (writable) or `false` (readonly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalValue {
    /// Pre-declared; reassignment is flagged
    Readonly,
    /// Pre-declared and reassignable
    Writable,
    /// Not declared at all (retracts an earlier declaration)
    Off,
}

impl GlobalValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalValue::Readonly => "readonly",
            GlobalValue::Writable => "writable",
            GlobalValue::Off => "off",
        }
    }
}

impl fmt::Display for GlobalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GlobalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GlobalValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(true) => Ok(GlobalValue::Writable),
            Raw::Flag(false) => Ok(GlobalValue::Readonly),
            Raw::Text(text) => match text.as_str() {
                "readonly" => Ok(GlobalValue::Readonly),
                "writable" => Ok(GlobalValue::Writable),
                "off" => Ok(GlobalValue::Off),
                other => Err(D::Error::custom(format!(
                    "unknown global permission marker '{other}' \
                     (expected \"readonly\", \"writable\", \"off\", true, or false)"
                ))),
            },
        }
    }
}

impl JsonSchema for GlobalValue {
    fn schema_name() -> Cow<'static, str> {
        "GlobalValue".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "string", "enum": ["readonly", "writable", "off"] },
                { "type": "boolean" }
            ]
        })
    }
}

/// Rule severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Disable the rule
    Off,
    /// Report without failing the run
    Warn,
    /// Report and fail the run
    Error,
}

impl Severity {
    /// Parse a numeric severity (`0`, `1`, `2`)
    pub fn from_number(value: i64) -> Result<Self, FlatlintError> {
        match value {
            0 => Ok(Severity::Off),
            1 => Ok(Severity::Warn),
            2 => Ok(Severity::Error),
            other => Err(FlatlintError::unknown_severity(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl FromStr for Severity {
    type Err = FlatlintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "off" => Ok(Severity::Off),
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            other => Err(FlatlintError::unknown_severity(other)),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(value) => Severity::from_number(value).map_err(D::Error::custom),
            Raw::Text(value) => value.parse().map_err(D::Error::custom),
        }
    }
}

impl JsonSchema for Severity {
    fn schema_name() -> Cow<'static, str> {
        "Severity".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "string", "enum": ["off", "warn", "error"] },
                { "type": "integer", "minimum": 0, "maximum": 2 }
            ]
        })
    }
}

/// A rule severity directive: either a bare severity or a
/// `[severity, options]` tuple carrying rule-specific options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RuleEntry {
    Severity(Severity),
    WithOptions(Severity, serde_json::Value),
}

impl RuleEntry {
    /// The severity decision, regardless of spelling
    pub fn severity(&self) -> Severity {
        match self {
            RuleEntry::Severity(severity) => *severity,
            RuleEntry::WithOptions(severity, _) => *severity,
        }
    }

    /// Rule-specific options, if any were given
    pub fn options(&self) -> Option<&serde_json::Value> {
        match self {
            RuleEntry::Severity(_) => None,
            RuleEntry::WithOptions(_, options) => Some(options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_spellings() {
        let severity: Severity = serde_json::from_str(r#""warn""#).unwrap();
        assert_eq!(severity, Severity::Warn);

        let severity: Severity = serde_json::from_str("2").unwrap();
        assert_eq!(severity, Severity::Error);

        let severity: Severity = serde_json::from_str("0").unwrap();
        assert_eq!(severity, Severity::Off);
    }

    #[test]
    fn test_severity_serializes_as_string() {
        let json = serde_json::to_string(&Severity::Error).unwrap();
        assert_eq!(json, r#""error""#);
    }

    #[test]
    fn test_unknown_severity_rejected() {
        assert!(serde_json::from_str::<Severity>(r#""fatal""#).is_err());
        assert!(serde_json::from_str::<Severity>("3").is_err());
        assert!("loud".parse::<Severity>().is_err());
        assert!(Severity::from_number(-1).is_err());
    }

    #[test]
    fn test_global_value_spellings() {
        let value: GlobalValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, GlobalValue::Writable);

        let value: GlobalValue = serde_json::from_str("false").unwrap();
        assert_eq!(value, GlobalValue::Readonly);

        let value: GlobalValue = serde_json::from_str(r#""off""#).unwrap();
        assert_eq!(value, GlobalValue::Off);

        assert!(serde_json::from_str::<GlobalValue>(r#""frozen""#).is_err());
    }

    #[test]
    fn test_ecma_version_spellings() {
        let version: EcmaVersion = serde_json::from_str(r#""latest""#).unwrap();
        assert_eq!(version, EcmaVersion::Latest);
        assert_eq!(version.shape(), "string");

        let version: EcmaVersion = serde_json::from_str("2022").unwrap();
        assert_eq!(version, EcmaVersion::Year(2022));
        assert_eq!(version.shape(), "number");

        assert!(serde_json::from_str::<EcmaVersion>(r#""modern""#).is_err());
    }

    #[test]
    fn test_rule_entry_with_options() {
        let entry: RuleEntry =
            serde_json::from_str(r#"["warn", {"argsIgnorePattern": "^_"}]"#).unwrap();
        assert_eq!(entry.severity(), Severity::Warn);
        assert_eq!(
            entry.options().unwrap()["argsIgnorePattern"],
            serde_json::json!("^_")
        );

        let entry: RuleEntry = serde_json::from_str(r#""error""#).unwrap();
        assert_eq!(entry.severity(), Severity::Error);
        assert!(entry.options().is_none());
    }

    #[test]
    fn test_fragment_deserialization() {
        let json = r#"{
            "files": ["**/*.js"],
            "ignores": ["dist/**"],
            "languageOptions": {
                "ecmaVersion": "latest",
                "sourceType": "module",
                "globals": { "window": true, "process": "readonly" }
            },
            "rules": {
                "no-undef": "error",
                "no-unused-vars": ["warn", { "argsIgnorePattern": "^_" }]
            }
        }"#;

        let fragment: ConfigFragment = serde_json::from_str(json).unwrap();
        assert_eq!(fragment.files, vec!["**/*.js"]);
        assert_eq!(fragment.ignores, vec!["dist/**"]);

        let options = fragment.language_options.unwrap();
        assert_eq!(options.ecma_version, Some(EcmaVersion::Latest));
        assert_eq!(options.source_type, Some(SourceType::Module));
        assert_eq!(options.globals["window"], GlobalValue::Writable);
        assert_eq!(options.globals["process"], GlobalValue::Readonly);

        assert_eq!(fragment.rules["no-undef"].severity(), Severity::Error);
        assert_eq!(fragment.rules["no-unused-vars"].severity(), Severity::Warn);
    }

    #[test]
    fn test_fragment_defaults() {
        let fragment: ConfigFragment = serde_json::from_str("{}").unwrap();
        assert!(fragment.files.is_empty());
        assert!(fragment.ignores.is_empty());
        assert!(fragment.language_options.is_none());
        assert!(fragment.rules.is_empty());
    }

    #[test]
    fn test_fragment_yaml() {
        let yaml = r#"
files:
  - "**/*.js"
rules:
  no-console: 1
"#;
        let fragment: ConfigFragment = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(fragment.rules["no-console"].severity(), Severity::Warn);
    }
}
