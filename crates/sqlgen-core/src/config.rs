use crate::model::SuiteConfig;
use std::path::Path;

#[derive(Debug)]
pub struct ConfigError(pub String);

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ConfigError {}

pub fn parse_suite(raw: &str) -> Result<SuiteConfig, ConfigError> {
    let mut ignored_keys = std::collections::HashSet::new();
    let deserializer = serde_yaml::Deserializer::from_str(raw);

    let cfg: SuiteConfig = serde_ignored::deserialize(deserializer, |path| {
        ignored_keys.insert(path.to_string());
    })
    .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;

    if !ignored_keys.is_empty() {
        eprintln!("WARN: Ignored unknown suite fields: {:?}", ignored_keys);
    }

    if cfg.schema.trim().is_empty() {
        return Err(ConfigError("suite has an empty schema".into()));
    }
    if cfg.cases.is_empty() {
        return Err(ConfigError("suite has no cases".into()));
    }

    Ok(cfg)
}

pub fn load_suite(path: &Path) -> Result<SuiteConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read suite {}: {}", path.display(), e)))?;
    parse_suite(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = r#"
suite: demo
schema: |
  CREATE TABLE users (id INT PRIMARY KEY, name TEXT);
cases:
  - name: count users
    question: How many users are there?
"#;

    #[test]
    fn parses_valid_suite() {
        let suite = parse_suite(VALID).unwrap();
        assert_eq!(suite.suite, "demo");
        assert_eq!(suite.cases.len(), 1);
        assert!(suite.schema.contains("CREATE TABLE users"));
    }

    #[test]
    fn rejects_empty_cases() {
        let raw = "suite: demo\nschema: CREATE TABLE t (id INT);\ncases: []\n";
        let err = parse_suite(raw).unwrap_err();
        assert!(err.to_string().contains("no cases"));
    }

    #[test]
    fn rejects_empty_schema() {
        let raw = "suite: demo\nschema: \"  \"\ncases:\n  - name: a\n    question: b\n";
        let err = parse_suite(raw).unwrap_err();
        assert!(err.to_string().contains("empty schema"));
    }

    #[test]
    fn loads_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(VALID.as_bytes()).unwrap();
        let suite = load_suite(f.path()).unwrap();
        assert_eq!(suite.cases[0].name, "count users");
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = load_suite(Path::new("/nonexistent/suite.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read suite"));
    }
}
