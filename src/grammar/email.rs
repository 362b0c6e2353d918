//! RFC 5321 address grammar (with RFC 2822 atext and qtext as an option).
//!
//! This is the bare SMTP form, what goes inside angle brackets in a `MAIL
//! FROM` command. Display names, comments and other RFC 5322 header syntax
//! are not accepted. Domains are expected to be punycode already.

use super::extended::reduce;
use super::fragment::{Fragment, GrammarError, optional, seq};
use super::numeric::NumericGrammar;
use super::ruleset::Ruleset;

/// ASCII whitespace allowed ahead of each run inside a quoted string. This
/// is written without literal blanks so it survives `reduce`.
const QUOTED_WS: &str = r"[\t\n\x0C\r\x20]";

#[derive(Debug, Clone)]
pub struct EmailGrammar {
    pub ruleset: Ruleset,
    pub lhs: Fragment,
    pub domain: Fragment,
    pub address: Fragment,
    pub address_or_unqualified: Fragment,
}

impl EmailGrammar {
    pub fn build(ruleset: Ruleset, numeric: &NumericGrammar) -> Result<Self, GrammarError> {
        let lhs = local_part(ruleset)?;
        let domain = domain(numeric)?;
        let at = Fragment::literal("@");

        let address = seq(&[&lhs, &at, &domain]);
        let address_or_unqualified = seq(&[&lhs, &optional(&seq(&[&at, &domain]))]);

        Ok(EmailGrammar {
            ruleset,
            lhs,
            domain,
            address,
            address_or_unqualified,
        })
    }
}

fn local_part(ruleset: Ruleset) -> Result<Fragment, GrammarError> {
    let atext = ruleset.atext();
    let qtext = ruleset.qtext();
    let quoted_pair = ruleset.quoted_pair();
    Fragment::new(reduce(&format!(
        r#"
        # Local-part
        (?:
          (?:
            # Dot-string: atoms joined by single dots
            {atext}+ (?: \. {atext}+ )*
          ) | (?:
            # Quoted-string
            " (?: {QUOTED_WS}* (?:
                (?: {qtext}+ ) |
                (?: {quoted_pair} )
            ) )* "
          )
        )"#
    )))
}

fn domain(numeric: &NumericGrammar) -> Result<Fragment, GrammarError> {
    let ipv4 = &numeric.ipv4_address;
    let ipv6 = &numeric.ipv6_address;
    Fragment::new(reduce(&format!(
        r#"
        # Domain
        (?:
          (?:
            # dotted hostname, two labels at least
            (?: [A-Za-z0-9] (?: [A-Za-z0-9-]* [A-Za-z0-9] )? )
            (?: \. [A-Za-z0-9] (?: [A-Za-z0-9-]* [A-Za-z0-9] )? )+
          ) | (?:
            # address literal
            \[
              (?: {ipv4} | (?: [Ii][Pp][Vv]6: {ipv6} ) )
              # General-address-literal (tag:content) is a hook for future
              # literal types and is not accepted.
            \]
          )
        )"#
    )))
}
