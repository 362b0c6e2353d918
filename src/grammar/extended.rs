//! Reduction of extended-syntax grammar blocks to compact pattern text.
//!
//! The local-part and domain grammars are written over several lines, with
//! indentation and `#` comment lines, so they can be read against the RFC
//! ABNF. `reduce` turns such a block into the single-line text the regex
//! engine sees.

/// Compact an extended-syntax block.
///
/// Each line is trimmed; a line whose first non-blank character is `#` is
/// dropped; every whitespace character left in the kept lines is removed.
/// Nothing else is touched, so a literal space inside a pattern has to be
/// written as an escape such as `\x20`.
pub fn reduce(extended: &str) -> String {
    extended
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(|line| line.chars().filter(|c| !c.is_whitespace()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_comment_lines() {
        let block = "
            # Dot-string
            a+
              # nested comment
            b
        ";
        assert_eq!(reduce(block), "a+b");
    }

    #[test]
    fn strips_interior_whitespace() {
        assert_eq!(reduce("(?: a | b )\t*\r\n c"), "(?:a|b)*c");
    }

    #[test]
    fn hash_after_content_is_kept() {
        // Only a leading `#` marks a comment; atext contains a literal `#`.
        assert_eq!(reduce("[!#$] # not a comment"), "[!#$]#notacomment");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(reduce(""), "");
        assert_eq!(reduce("   \n\t\n"), "");
        assert_eq!(reduce("# only a comment"), "");
    }

    #[test]
    fn escapes_survive() {
        assert_eq!(reduce(r"\x20 \. \\ \["), r"\x20\.\\\[");
    }

    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn reduction_is_idempotent(block in "[ \t\n#a-z(?:)|\\\\.*+]{0,80}") {
                let once = reduce(&block);
                prop_assert_eq!(reduce(&once), once.clone());
            }

            #[test]
            fn reduced_text_has_no_whitespace(block in "[ \t\na-z#]{0,80}") {
                prop_assert!(!reduce(&block).chars().any(char::is_whitespace));
            }

            #[test]
            fn compact_text_is_unchanged(text in "[a-z0-9(?:)|\\[\\]\\\\.*+@-]{0,60}") {
                // No whitespace, and not starting with `#`: already reduced.
                prop_assert_eq!(reduce(&text), text);
            }
        }
    }
}
