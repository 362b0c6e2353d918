use std::io::Write;

use crate::formatter::Formatter;
use crate::registry::PatternName;
use crate::verdict::Verdict;

/// No output; the exit status carries the result.
pub struct QuietFormatter;

impl Formatter for QuietFormatter {
    fn format_to(&self, _pattern: PatternName, _verdicts: &[Verdict], _out: &mut dyn Write) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_writes() {
        let mut buf = Vec::new();
        let v = Verdict {
            line: 1,
            item: "x".to_string(),
            matched: false,
        };
        QuietFormatter.format_to(PatternName::EmailAddress, &[v], &mut buf);
        assert!(buf.is_empty());
    }
}
