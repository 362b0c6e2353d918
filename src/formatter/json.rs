use std::io::Write;

use serde::Serialize;

use crate::formatter::Formatter;
use crate::registry::PatternName;
use crate::verdict::{Summary, Verdict};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    metadata: Metadata<'a>,
    results: Vec<JsonResult<'a>>,
}

#[derive(Serialize)]
struct Metadata<'a> {
    pattern: &'a str,
    checked: usize,
    failed: usize,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    line: usize,
    item: &'a str,
    matched: bool,
}

impl Formatter for JsonFormatter {
    fn format_to(&self, pattern: PatternName, verdicts: &[Verdict], out: &mut dyn Write) {
        let summary = Summary::from_verdicts(verdicts);
        let output = JsonOutput {
            metadata: Metadata {
                pattern: pattern.as_str(),
                checked: summary.checked,
                failed: summary.failed,
            },
            results: verdicts
                .iter()
                .map(|v| JsonResult {
                    line: v.line,
                    item: &v.item,
                    matched: v.matched,
                })
                .collect(),
        };
        // Plain strings, numbers and bools always serialize.
        if let Ok(text) = serde_json::to_string_pretty(&output) {
            let _ = writeln!(out, "{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(verdicts: &[Verdict]) -> serde_json::Value {
        let mut buf = Vec::new();
        JsonFormatter.format_to(PatternName::EmailDomain, verdicts, &mut buf);
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn empty_produces_valid_json() {
        let parsed = render(&[]);
        assert_eq!(parsed["metadata"]["pattern"], "EmailDomain");
        assert_eq!(parsed["metadata"]["checked"], 0);
        assert_eq!(parsed["metadata"]["failed"], 0);
        assert_eq!(parsed["results"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn results_carry_line_and_outcome() {
        let parsed = render(&[
            Verdict {
                line: 3,
                item: "example.org".to_string(),
                matched: true,
            },
            Verdict {
                line: 7,
                item: "a-b".to_string(),
                matched: false,
            },
        ]);
        assert_eq!(parsed["metadata"]["checked"], 2);
        assert_eq!(parsed["metadata"]["failed"], 1);
        assert_eq!(parsed["results"][0]["line"], 3);
        assert_eq!(parsed["results"][0]["matched"], true);
        assert_eq!(parsed["results"][1]["item"], "a-b");
        assert_eq!(parsed["results"][1]["matched"], false);
    }
}
