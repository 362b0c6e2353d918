use std::io::Write;

use crate::formatter::Formatter;
use crate::registry::PatternName;
use crate::verdict::Verdict;

/// `OK: "item"` or `FAIL: "item"`, one line per item.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_to(&self, _pattern: PatternName, verdicts: &[Verdict], out: &mut dyn Write) {
        for v in verdicts {
            let _ = writeln!(out, "{v}");
        }
    }
}
