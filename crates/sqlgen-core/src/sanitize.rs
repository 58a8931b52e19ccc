use regex::Regex;
use std::sync::OnceLock;

fn fence_open() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^```(?:sql)?\s*").unwrap())
}

fn fence_close() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*```$").unwrap())
}

/// Strip one leading and one trailing fenced-code marker, if present.
///
/// Markers appearing mid-string are left alone, and at most a single
/// marker is removed at each end.
pub fn clean_sql(text: &str) -> String {
    let text = text.trim();
    let text = fence_open().replace(text, "");
    let text = fence_close().replace(&text, "");
    text.trim().to_string()
}

/// Collapse to a single line: trim each line, drop empties, join with spaces.
pub fn flatten_sql(sql: &str) -> String {
    sql.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full cleanup pipeline applied to raw model output.
pub fn sanitize(raw: &str) -> String {
    flatten_sql(&clean_sql(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_sql_fence() {
        assert_eq!(sanitize("```sql\nSELECT 1;\n```"), "SELECT 1;");
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(sanitize("```\nSELECT 1;\n```"), "SELECT 1;");
    }

    #[test]
    fn collapses_blank_lines() {
        assert_eq!(sanitize("SELECT *\n\nFROM t\n"), "SELECT * FROM t");
    }

    #[test]
    fn leaves_mid_string_fences_alone() {
        let raw = "SELECT '```' AS fence FROM t";
        assert_eq!(sanitize(raw), raw);
    }

    #[test]
    fn output_has_no_newlines() {
        let out = sanitize("```sql\nSELECT a,\n  b\nFROM t\nWHERE x = 1;\n```");
        assert!(!out.contains('\n'));
        assert_eq!(out, "SELECT a, b FROM t WHERE x = 1;");
    }

    #[test]
    fn idempotent() {
        for raw in [
            "```sql\nSELECT 1;\n```",
            "SELECT *\n\nFROM t\n",
            "  plain text  ",
            "",
        ] {
            let once = sanitize(raw);
            assert_eq!(sanitize(&once), once);
        }
    }

    #[test]
    fn fence_without_language_tag_and_whitespace() {
        assert_eq!(sanitize("```   SELECT 2;```"), "SELECT 2;");
    }

    #[test]
    fn empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("```sql\n```"), "");
    }
}
