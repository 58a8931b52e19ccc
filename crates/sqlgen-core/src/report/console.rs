use super::RunSummary;
use crate::model::{SuiteConfig, TestCase, TestOutcome};

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

pub fn print_run_header(api_url: &str, suite: &SuiteConfig) {
    let tables = suite.schema.matches("CREATE TABLE").count();
    println!("Testing endpoint: {}", api_url);
    println!(
        "Suite: {} ({} cases, {} tables)",
        suite.suite,
        suite.cases.len(),
        tables
    );
    println!("{}", "=".repeat(60));
}

pub fn print_case_start(index: usize, total: usize, tc: &TestCase) {
    println!("\n[{}/{}] {}", index, total, tc.name);
    println!("    {}", truncate(&tc.question, 100));
}

pub fn print_case_result(outcome: &TestOutcome) {
    if outcome.success {
        let secs = outcome.response_time.unwrap_or_default();
        println!("✅ ok ({:.2}s)", secs);
        if let Some(sql) = &outcome.generated_sql {
            println!("    {}", truncate(sql, 120));
        }
    } else {
        println!(
            "❌ failed: {}",
            outcome.error.as_deref().unwrap_or("unknown error")
        );
    }
}

pub fn print_summary(outcomes: &[TestOutcome]) {
    let summary = RunSummary::from_outcomes(outcomes);

    println!("\n{}", "=".repeat(60));
    println!(
        "Summary: {} passed, {} failed ({} total)",
        summary.passed, summary.failed, summary.total
    );

    if let Some(avg) = summary.avg_response_time {
        println!("Average response time: {:.2}s", avg);
    }
    if let Some((name, secs)) = &summary.fastest {
        println!("Fastest: {} ({:.2}s)", name, secs);
    }
    if let Some((name, secs)) = &summary.slowest {
        println!("Slowest: {} ({:.2}s)", name, secs);
    }

    let failed: Vec<_> = outcomes.iter().filter(|o| !o.success).collect();
    if !failed.is_empty() {
        println!("Failed:");
        for o in failed {
            println!(
                "  - {}: {}",
                o.name,
                o.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}
