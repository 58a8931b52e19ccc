use crate::model::TestOutcome;
use std::path::Path;

/// Write the ordered outcome list as pretty-printed JSON, overwriting any
/// existing file.
pub fn write_report(outcomes: &[TestOutcome], path: &Path) -> anyhow::Result<()> {
    let mut out = serde_json::to_string_pretty(outcomes)?;
    out.push('\n');
    std::fs::write(path, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str) -> TestOutcome {
        TestOutcome {
            name: name.into(),
            question: "q".into(),
            success: true,
            generated_sql: Some("SELECT 1;".into()),
            response_time: Some(0.5),
            error: None,
        }
    }

    #[test]
    fn writes_ordered_pretty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_results.json");

        write_report(&[outcome("first"), outcome("second")], &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n"));
        assert!(raw.ends_with("\n"));
        assert!(raw.contains("  {")); // 2-space indentation

        let parsed: Vec<TestOutcome> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "first");
        assert_eq!(parsed[1].name, "second");
    }

    #[test]
    fn overwrites_existing_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_results.json");

        std::fs::write(&path, "stale").unwrap();
        write_report(&[outcome("only")], &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("stale"));
        assert!(raw.contains("only"));
    }
}
