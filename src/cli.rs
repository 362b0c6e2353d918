use std::path::PathBuf;

use clap::Parser;

use crate::grammar::Ruleset;
use crate::registry::PatternName;

#[derive(Parser, Debug)]
#[command(
    name = "check-emailaddr",
    version,
    about = "Check whether strings are valid SMTP email addresses"
)]
pub struct Args {
    /// Strings to check
    pub items: Vec<String>,

    /// Read items from FILE, one per line (`-` for stdin); empty lines are skipped
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Grammar to check items against
    #[arg(short, long, value_name = "NAME", default_value = "EmailAddress")]
    pub pattern: PatternName,

    /// Accept items that merely contain a match instead of matching entirely
    #[arg(long)]
    pub search: bool,

    /// Local-part character classes [default: build-time choice, normally rfc5321]
    #[arg(long, value_name = "RULESET")]
    pub ruleset: Option<Ruleset>,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json", "quiet"])]
    pub format: String,

    /// List the available grammar names, one per line, then exit
    #[arg(long)]
    pub list_patterns: bool,

    /// Print the raw, embeddable text of the selected grammar, then exit
    #[arg(long)]
    pub print_pattern: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["check-emailaddr", "john@example.org"]);
        assert_eq!(args.items, vec!["john@example.org"]);
        assert_eq!(args.pattern, PatternName::EmailAddress);
        assert_eq!(args.format, "text");
        assert!(args.file.is_none());
        assert!(args.ruleset.is_none());
        assert!(!args.search);
    }

    #[test]
    fn file_and_pattern_flags() {
        let args = Args::parse_from([
            "check-emailaddr",
            "--file",
            "-",
            "--pattern",
            "ipv6-netblock",
            "--ruleset",
            "rfc2822",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("-")));
        assert_eq!(args.pattern, PatternName::Ipv6Netblock);
        assert_eq!(args.ruleset, Some(Ruleset::Rfc2822));
    }

    #[test]
    fn rejects_unknown_pattern() {
        let res = Args::try_parse_from(["check-emailaddr", "--pattern", "Nope", "x"]);
        assert!(res.is_err());
    }

    #[test]
    fn rejects_unknown_format() {
        let res = Args::try_parse_from(["check-emailaddr", "--format", "xml", "x"]);
        assert!(res.is_err());
    }
}
