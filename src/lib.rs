//! Composable regular-expression grammars for email addresses, IPv4/IPv6
//! addresses and netblocks.
//!
//! For every grammar in [`PatternName`] the [`Registry`] provides:
//!
//! * the raw pattern text, a single `(?:...)` group with no capturing
//!   groups, safe to embed in a larger expression;
//! * an anchored matcher that accepts only inputs the grammar covers
//!   entirely;
//! * an unanchored matcher for finding the grammar inside other text.
//!
//! ```
//! use addrgrammar::{PatternName, matches, search};
//!
//! assert!(matches(PatternName::EmailAddress, "john@[IPv6:2001:db8::42]"));
//! assert!(!matches(PatternName::EmailAddress, "<john@example.org>"));
//! assert!(search(PatternName::EmailAddress, "<john@example.org>"));
//! ```
//!
//! The local-part rules follow RFC 5321 unless the crate is built with the
//! `rfc2822` feature, or a registry is built explicitly with
//! [`Registry::new`].

pub mod checker;
pub mod cli;
pub mod formatter;
pub mod grammar;
pub mod registry;
pub mod verdict;

#[cfg(test)]
pub mod testutil;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::Result;

pub use grammar::{Fragment, GrammarError, Ruleset};
pub use registry::{
    NamedPattern, PatternName, Registry, default_registry, matches, raw_pattern, search,
};

use checker::Checker;
use cli::Args;
use formatter::create_formatter;
use verdict::Summary;

pub const PROGRAM: &str = "check-emailaddr";

// sysexits.h
pub const EX_OK: i32 = 0;
pub const EX_FAILED: i32 = 1;
pub const EX_USAGE: i32 = 64;
pub const EX_DATAERR: i32 = 65;
pub const EX_NOINPUT: i32 = 66;
pub const EX_IOERR: i32 = 74;

/// Run the checker on the process's standard streams.
pub fn run(args: Args) -> Result<i32> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_to(args, &mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
}

/// Run the checker. Returns the exit code: 0 = every item matched, 1 = at
/// least one item failed, 64 = usage error, 65 = nothing was checked,
/// 66 = the input file could not be opened.
pub fn run_to(
    args: Args,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32> {
    let ruleset = args.ruleset.unwrap_or_default();
    let built;
    let registry = if ruleset == default_registry().ruleset() {
        default_registry()
    } else {
        built = Registry::new(ruleset)?;
        &built
    };

    if args.debug {
        writeln!(err, "debug: ruleset: {ruleset}")?;
    }

    // --list-patterns: print every grammar name and exit
    if args.list_patterns {
        for p in registry.patterns() {
            writeln!(out, "{}", p.name())?;
        }
        return Ok(EX_OK);
    }

    let pattern = registry.get(args.pattern);

    if args.debug {
        writeln!(
            err,
            "debug: pattern: {} ({}, {} bytes)",
            pattern.name(),
            if args.search { "unanchored" } else { "anchored" },
            pattern.raw().len()
        )?;
    }

    // --print-pattern: print the embeddable text and exit
    if args.print_pattern {
        writeln!(out, "{}", pattern.raw())?;
        return Ok(EX_OK);
    }

    let checker = Checker::new(pattern, args.search);

    let verdicts = match &args.file {
        Some(path) => {
            if !args.items.is_empty() {
                writeln!(err, "{PROGRAM}: can't take parameters if using --file")?;
                return Ok(EX_USAGE);
            }
            if path.as_os_str() == "-" {
                if args.debug {
                    writeln!(err, "debug: reading items from stdin")?;
                }
                checker.check_lines(stdin)?
            } else {
                let fh = match File::open(path) {
                    Ok(fh) => fh,
                    Err(e) => {
                        writeln!(err, "{PROGRAM}: opening {path:?} failed: {e}")?;
                        return Ok(EX_NOINPUT);
                    }
                };
                if args.debug {
                    writeln!(err, "debug: reading items from {}", path.display())?;
                }
                checker.check_lines(BufReader::new(fh))?
            }
        }
        None => {
            if args.items.is_empty() {
                writeln!(err, "{PROGRAM}: need at least one parameter to check")?;
                return Ok(EX_USAGE);
            }
            checker.check_items(&args.items)
        }
    };

    let formatter = create_formatter(&args.format);
    formatter.format_to(pattern.name(), &verdicts, out);

    let summary = Summary::from_verdicts(&verdicts);
    if args.debug {
        writeln!(
            err,
            "debug: {} checked, {} passed, {} failed",
            summary.checked,
            summary.passed(),
            summary.failed
        )?;
    }

    if summary.failed > 0 {
        return Ok(EX_FAILED);
    }
    if summary.checked == 0 {
        // an empty input file, or one holding only empty lines
        writeln!(err, "{PROGRAM}: did not check any items")?;
        return Ok(EX_DATAERR);
    }
    Ok(EX_OK)
}
