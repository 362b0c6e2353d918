use std::fmt;

use regex::Regex;

/// A grammar fragment: regex text that compiles on its own and defines no
/// capturing group, so it can be embedded anywhere without shifting the
/// caller's capture indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(String);

#[derive(Debug)]
pub enum GrammarError {
    /// The text is not a valid regex.
    Regex(regex::Error),
    /// The text compiles but introduces at least one capturing group.
    Capturing { text: String },
    /// An alternation was requested with no alternatives. `(?:)` would match
    /// the empty string, which no grammar here wants.
    EmptyAlternation,
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::Regex(e) => write!(f, "invalid pattern: {e}"),
            GrammarError::Capturing { text } => {
                write!(f, "pattern defines a capturing group: {text}")
            }
            GrammarError::EmptyAlternation => write!(f, "alternation with no alternatives"),
        }
    }
}

impl std::error::Error for GrammarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrammarError::Regex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<regex::Error> for GrammarError {
    fn from(e: regex::Error) -> Self {
        GrammarError::Regex(e)
    }
}

impl Fragment {
    /// Validate hand-written pattern text.
    pub fn new(text: impl Into<String>) -> Result<Self, GrammarError> {
        let text = text.into();
        let re = Regex::new(&text)?;
        // Group 0 is the implicit whole-match group.
        if re.captures_len() != 1 {
            return Err(GrammarError::Capturing { text });
        }
        Ok(Fragment(text))
    }

    /// A fragment matching `s` literally.
    pub fn literal(s: &str) -> Self {
        Fragment(regex::escape(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Concatenation of `parts`, wrapped as one unit.
pub fn seq(parts: &[&Fragment]) -> Fragment {
    let mut text = String::from("(?:");
    for part in parts {
        text.push_str(part.as_str());
    }
    text.push(')');
    Fragment(text)
}

/// Alternation of `parts`, wrapped as one unit.
pub fn alt(parts: &[&Fragment]) -> Result<Fragment, GrammarError> {
    if parts.is_empty() {
        return Err(GrammarError::EmptyAlternation);
    }
    let body: Vec<&str> = parts.iter().map(|p| p.as_str()).collect();
    Ok(Fragment(format!("(?:{})", body.join("|"))))
}

/// `(?:f)?`
pub fn optional(f: &Fragment) -> Fragment {
    Fragment(format!("(?:{f})?"))
}

/// `(?:f){n}`
pub fn exactly(f: &Fragment, n: u32) -> Fragment {
    Fragment(format!("(?:{f}){{{n}}}"))
}

/// `(?:f){min,max}`
pub fn between(f: &Fragment, min: u32, max: u32) -> Fragment {
    debug_assert!(min <= max, "bad repetition bounds {min},{max}");
    Fragment(format!("(?:{f}){{{min},{max}}}"))
}

/// Pattern text that only matches when `f` covers the entire input.
pub fn anchored(f: &Fragment) -> String {
    format!(r"\A{f}\z")
}
