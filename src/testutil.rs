use regex::Regex;

use crate::grammar::Fragment;
use crate::grammar::fragment::anchored;

/// Compile `f` as a whole-input matcher.
pub fn compile_anchored(f: &Fragment) -> Regex {
    Regex::new(&anchored(f)).unwrap_or_else(|e| panic!("fragment does not compile: {e}"))
}

/// Assert each `(input, should_match)` pair against an anchored `f`,
/// reporting every mismatch rather than stopping at the first.
pub fn assert_cases(f: &Fragment, label: &str, cases: &[(&str, bool)]) {
    let re = compile_anchored(f);
    let failures: Vec<String> = cases
        .iter()
        .filter(|&&(text, expected)| re.is_match(text) != expected)
        .map(|&(text, expected)| {
            let fail_type = if expected {
                "does not match (but should)"
            } else {
                "matches (but should not)"
            };
            format!("  {label} against {text:?} {fail_type}")
        })
        .collect();
    assert!(
        failures.is_empty(),
        "{} case(s) failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_when_all_cases_agree() {
        let f = Fragment::new("(?:ab?)").unwrap();
        assert_cases(&f, "ab", &[("a", true), ("ab", true), ("abb", false)]);
    }

    #[test]
    #[should_panic(expected = "1 case(s) failed")]
    fn reports_mismatches() {
        let f = Fragment::new("(?:a)").unwrap();
        assert_cases(&f, "a", &[("a", true), ("b", true)]);
    }
}
