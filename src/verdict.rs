use std::fmt;

/// Outcome of checking one item against a grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// 1-indexed line for file input, 1-indexed position for arguments.
    pub line: usize,
    pub item: String,
    pub matched: bool,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        if self.matched { "OK" } else { "FAIL" }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.label(), self.item)
    }
}

/// Aggregate over a run: the exit status depends only on these counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub checked: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        Summary {
            checked: verdicts.len(),
            failed: verdicts.iter().filter(|v| !v.matched).count(),
        }
    }

    pub fn passed(&self) -> usize {
        self.checked - self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(item: &str, matched: bool) -> Verdict {
        Verdict {
            line: 1,
            item: item.to_string(),
            matched,
        }
    }

    #[test]
    fn display_quotes_item() {
        assert_eq!(
            verdict("john@example.org", true).to_string(),
            "OK: \"john@example.org\""
        );
        assert_eq!(verdict("a\"b", false).to_string(), "FAIL: \"a\\\"b\"");
        assert_eq!(verdict("tab\there", false).to_string(), "FAIL: \"tab\\there\"");
    }

    #[test]
    fn summary_counts() {
        let s = Summary::from_verdicts(&[
            verdict("a", true),
            verdict("b", false),
            verdict("c", true),
        ]);
        assert_eq!(s.checked, 3);
        assert_eq!(s.failed, 1);
        assert_eq!(s.passed(), 2);
        assert_eq!(Summary::from_verdicts(&[]), Summary::default());
    }
}
