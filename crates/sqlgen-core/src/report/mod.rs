use crate::model::TestOutcome;

pub mod console;
pub mod json;

/// Aggregate statistics over a batch run.
///
/// Timing fields cover successful cases only and are `None` when nothing
/// succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub avg_response_time: Option<f64>,
    pub fastest: Option<(String, f64)>,
    pub slowest: Option<(String, f64)>,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[TestOutcome]) -> Self {
        let passed = outcomes.iter().filter(|o| o.success).count();

        let timed: Vec<(&str, f64)> = outcomes
            .iter()
            .filter(|o| o.success)
            .filter_map(|o| o.response_time.map(|t| (o.name.as_str(), t)))
            .collect();

        let avg_response_time = if timed.is_empty() {
            None
        } else {
            Some(timed.iter().map(|(_, t)| t).sum::<f64>() / timed.len() as f64)
        };

        let fastest = timed
            .iter()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(n, t)| (n.to_string(), *t));
        let slowest = timed
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(n, t)| (n.to_string(), *t));

        Self {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
            avg_response_time,
            fastest,
            slowest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, success: bool, secs: Option<f64>) -> TestOutcome {
        TestOutcome {
            name: name.into(),
            question: "q".into(),
            success,
            generated_sql: success.then(|| "SELECT 1;".into()),
            response_time: secs,
            error: (!success).then(|| "HTTP 500: boom".into()),
        }
    }

    #[test]
    fn stats_cover_successes_only() {
        let outcomes = vec![
            outcome("fast", true, Some(1.0)),
            outcome("slow", true, Some(3.0)),
            outcome("broken", false, Some(99.0)),
        ];
        let summary = RunSummary::from_outcomes(&outcomes);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.avg_response_time, Some(2.0));
        assert_eq!(summary.fastest, Some(("fast".into(), 1.0)));
        assert_eq!(summary.slowest, Some(("slow".into(), 3.0)));
    }

    #[test]
    fn zero_successes_yields_no_stats() {
        let outcomes = vec![outcome("a", false, None), outcome("b", false, Some(2.0))];
        let summary = RunSummary::from_outcomes(&outcomes);
        assert_eq!(summary.passed, 0);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.avg_response_time, None);
        assert_eq!(summary.fastest, None);
        assert_eq!(summary.slowest, None);
    }

    #[test]
    fn empty_run() {
        let summary = RunSummary::from_outcomes(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.avg_response_time, None);
    }
}
