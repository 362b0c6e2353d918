pub mod json;
pub mod quiet;
pub mod text;

use std::io::Write;

use crate::registry::PatternName;
use crate::verdict::Verdict;

pub trait Formatter {
    fn format_to(&self, pattern: PatternName, verdicts: &[Verdict], out: &mut dyn Write);
}

pub fn create_formatter(format: &str) -> Box<dyn Formatter> {
    match format {
        "json" => Box::new(json::JsonFormatter),
        "quiet" => Box::new(quiet::QuietFormatter),
        // "text" and any unknown value
        _ => Box::new(text::TextFormatter),
    }
}
