use std::io::BufRead;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::registry::NamedPattern;
use crate::verdict::Verdict;

/// Applies one grammar to a batch of items. Matching runs in parallel; the
/// returned verdicts keep input order.
pub struct Checker<'a> {
    pattern: &'a NamedPattern,
    search: bool,
}

impl<'a> Checker<'a> {
    pub fn new(pattern: &'a NamedPattern, search: bool) -> Self {
        Self { pattern, search }
    }

    pub fn check(&self, item: &str) -> bool {
        if self.search {
            self.pattern.search(item)
        } else {
            self.pattern.matches(item)
        }
    }

    /// Check command-line items. Every argument counts, even an empty one.
    pub fn check_items(&self, items: &[String]) -> Vec<Verdict> {
        items
            .par_iter()
            .enumerate()
            .map(|(i, item)| Verdict {
                line: i + 1,
                item: item.clone(),
                matched: self.check(item),
            })
            .collect()
    }

    /// Check one item per line. Only completely empty lines are skipped;
    /// a line that is not valid UTF-8 is reported as a failure.
    pub fn check_lines<R: BufRead>(&self, reader: R) -> Result<Vec<Verdict>> {
        let mut numbered = Vec::new();
        for (i, line) in reader.split(b'\n').enumerate() {
            let mut line = line.with_context(|| format!("failed to read line {}", i + 1))?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            if line.is_empty() {
                continue;
            }
            numbered.push((i + 1, line));
        }

        Ok(numbered
            .into_par_iter()
            .map(|(line, bytes)| match String::from_utf8(bytes) {
                Ok(item) => {
                    let matched = self.check(&item);
                    Verdict {
                        line,
                        item,
                        matched,
                    }
                }
                Err(e) => Verdict {
                    line,
                    item: String::from_utf8_lossy(e.as_bytes()).into_owned(),
                    matched: false,
                },
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{PatternName, default_registry};

    fn checker(search: bool) -> Checker<'static> {
        Checker::new(default_registry().get(PatternName::EmailAddress), search)
    }

    #[test]
    fn items_keep_order_and_position() {
        let items: Vec<String> = (0..50)
            .map(|i| {
                if i % 3 == 0 {
                    format!("bad address {i}")
                } else {
                    format!("user{i}@example.org")
                }
            })
            .collect();
        let verdicts = checker(false).check_items(&items);
        assert_eq!(verdicts.len(), 50);
        for (i, v) in verdicts.iter().enumerate() {
            assert_eq!(v.line, i + 1);
            assert_eq!(v.item, items[i]);
            assert_eq!(v.matched, i % 3 != 0, "{}", v.item);
        }
    }

    #[test]
    fn empty_argument_is_checked() {
        let verdicts = checker(false).check_items(&[String::new()]);
        assert_eq!(verdicts.len(), 1);
        assert!(!verdicts[0].matched);
    }

    #[test]
    fn lines_skip_only_empty_lines_and_keep_line_numbers() {
        let input = "john@example.org\n\n   \nnot-an-address\r\n\"x y\"@example.org\n";
        let verdicts = checker(false).check_lines(input.as_bytes()).unwrap();
        let summary: Vec<(usize, &str, bool)> = verdicts
            .iter()
            .map(|v| (v.line, v.item.as_str(), v.matched))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, "john@example.org", true),
                (3, "   ", false),
                (4, "not-an-address", false),
                (5, "\"x y\"@example.org", true),
            ]
        );
    }

    #[test]
    fn only_empty_lines_checks_nothing() {
        let verdicts = checker(false).check_lines("\n\r\n\n".as_bytes()).unwrap();
        assert!(verdicts.is_empty());
    }

    #[test]
    fn whitespace_line_is_checked_and_fails() {
        let verdicts = checker(false).check_lines(" \t\n".as_bytes()).unwrap();
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].item, " \t");
        assert!(!verdicts[0].matched);
    }

    #[test]
    fn search_mode_accepts_embedded_match() {
        let item = "Name <john@example.org>";
        assert!(!checker(false).check(item));
        assert!(checker(true).check(item));
    }

    #[test]
    fn invalid_utf8_line_fails_without_stopping() {
        let input: &[u8] = b"john@example.org\n\xff\xfe\njane@example.org\n";
        let verdicts = checker(false).check_lines(input).unwrap();
        let summary: Vec<(usize, &str, bool)> = verdicts
            .iter()
            .map(|v| (v.line, v.item.as_str(), v.matched))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, "john@example.org", true),
                (2, "\u{fffd}\u{fffd}", false),
                (3, "jane@example.org", true),
            ]
        );
    }
}
