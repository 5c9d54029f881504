//! Post-response assertion evaluation
//!
//! Script lines are matched by substring pattern, never executed as code.
//! Two patterns are recognized: the status-ok check and the sample
//! collection's `args.source` comparison. Everything else is reported as
//! unsupported, once per test event.

use crate::models::{Event, Response};

/// The `args.source` value the sample-collection check compares against.
/// A hard-coded fixture match, deliberately not a general JSON-path engine.
pub const ARGS_SOURCE_EXPECTED: &str = "newman-sample-github-collection";

/// Outcome of one recognized assertion line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Check {
    /// `pm.response.to.be.ok` - passes iff the status code is 200.
    StatusOk { passed: bool },
    /// `pm.expect(pm.response.json()...` with an `args.source` field -
    /// passes iff it equals [`ARGS_SOURCE_EXPECTED`].
    ArgsSource { passed: bool },
    /// The response body could not be parsed as JSON for a json line.
    ResponseNotJson,
}

/// Evaluation of one `listen == "test"` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptReport {
    pub checks: Vec<Check>,
    /// True when no line in the event produced a pass/fail check.
    pub unsupported: bool,
}

/// Evaluate every test event of an item against the captured response.
pub fn evaluate(response: &Response, events: &[Event]) -> Vec<ScriptReport> {
    events
        .iter()
        .filter(|event| event.listen == "test")
        .map(|event| evaluate_script(response, &event.script.exec))
        .collect()
}

fn evaluate_script(response: &Response, exec: &[String]) -> ScriptReport {
    let mut checks = Vec::new();
    let mut handled = false;

    for line in exec {
        let trimmed = line.trim();

        if trimmed.contains("pm.response.to.be.ok") {
            checks.push(Check::StatusOk {
                passed: response.status == 200,
            });
            handled = true;
        } else if trimmed.contains("pm.expect(pm.response.json()") {
            let json: serde_json::Value = match serde_json::from_str(&response.body) {
                Ok(json) => json,
                Err(_) => {
                    checks.push(Check::ResponseNotJson);
                    continue;
                }
            };

            // Only the sample-collection shape is recognized: a top-level
            // "args" object carrying a "source" field. Anything else under
            // this pattern is silently not evaluated.
            if trimmed.contains("args") {
                if let Some(source) = json.get("args").and_then(|args| args.get("source")) {
                    checks.push(Check::ArgsSource {
                        passed: source.as_str() == Some(ARGS_SOURCE_EXPECTED),
                    });
                    handled = true;
                }
            }
        }
    }

    ScriptReport {
        checks,
        unsupported: !handled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Script;

    fn test_event(lines: &[&str]) -> Event {
        Event {
            listen: "test".to_string(),
            script: Script {
                script_type: "text/javascript".to_string(),
                exec: lines.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    fn response(status: u16, body: &str) -> Response {
        Response {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn status_ok_passes_on_200() {
        let events = [test_event(&[
            "pm.test('Status is ok', function () {pm.response.to.be.ok});",
        ])];

        let reports = evaluate(&response(200, ""), &events);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].checks, vec![Check::StatusOk { passed: true }]);
        assert!(!reports[0].unsupported);
    }

    #[test]
    fn status_ok_fails_on_404() {
        let events = [test_event(&[
            "pm.test('Status is ok', function () {pm.response.to.be.ok});",
        ])];

        let reports = evaluate(&response(404, "not found"), &events);
        assert_eq!(reports[0].checks, vec![Check::StatusOk { passed: false }]);
    }

    #[test]
    fn args_source_passes_on_expected_value() {
        let body = r#"{"args": {"source": "newman-sample-github-collection"}}"#;
        let events = [test_event(&[
            "pm.expect(pm.response.json().args.source).to.eql('newman-sample-github-collection');",
        ])];

        let reports = evaluate(&response(200, body), &events);
        assert_eq!(reports[0].checks, vec![Check::ArgsSource { passed: true }]);
        assert!(!reports[0].unsupported);
    }

    #[test]
    fn args_source_fails_on_other_value() {
        let body = r#"{"args": {"source": "something-else"}}"#;
        let events = [test_event(&[
            "pm.expect(pm.response.json().args.source).to.eql('newman-sample-github-collection');",
        ])];

        let reports = evaluate(&response(200, body), &events);
        assert_eq!(reports[0].checks, vec![Check::ArgsSource { passed: false }]);
    }

    #[test]
    fn args_line_with_unparseable_body_reports_parse_failure() {
        let events = [test_event(&[
            "pm.expect(pm.response.json().args.source).to.eql('newman-sample-github-collection');",
        ])];

        let reports = evaluate(&response(200, "<html>not json</html>"), &events);
        // A parse failure is reported, and no pass/fail is emitted.
        assert_eq!(reports[0].checks, vec![Check::ResponseNotJson]);
        assert!(reports[0].unsupported);
    }

    #[test]
    fn json_line_without_args_shape_is_not_evaluated() {
        let body = r#"{"data": {"id": 7}}"#;
        let events = [test_event(&[
            "pm.expect(pm.response.json().data.id).to.eql(7);",
        ])];

        let reports = evaluate(&response(200, body), &events);
        assert!(reports[0].checks.is_empty());
        assert!(reports[0].unsupported);
    }

    #[test]
    fn unrecognized_line_is_unsupported() {
        let events = [test_event(&["pm.test('unused');"])];

        let reports = evaluate(&response(200, "{}"), &events);
        assert!(reports[0].checks.is_empty());
        assert!(reports[0].unsupported);
    }

    #[test]
    fn one_recognized_line_clears_the_unsupported_flag() {
        let events = [test_event(&[
            "console.log('noise');",
            "pm.test('Status is ok', function () {pm.response.to.be.ok});",
        ])];

        let reports = evaluate(&response(200, ""), &events);
        assert_eq!(reports[0].checks.len(), 1);
        assert!(!reports[0].unsupported);
    }

    #[test]
    fn non_test_events_are_ignored() {
        let mut event = test_event(&["pm.response.to.be.ok"]);
        event.listen = "prerequest".to_string();

        let reports = evaluate(&response(200, ""), &[event]);
        assert!(reports.is_empty());
    }

    #[test]
    fn lines_are_trimmed_before_matching() {
        let events = [test_event(&["   pm.response.to.be.ok   "])];

        let reports = evaluate(&response(200, ""), &events);
        assert_eq!(reports[0].checks, vec![Check::StatusOk { passed: true }]);
    }
}
