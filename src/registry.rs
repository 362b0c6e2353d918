use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::grammar::fragment::anchored;
use crate::grammar::{EmailGrammar, Fragment, GrammarError, NumericGrammar, Ruleset};

/// Every published grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatternName {
    Ipv4Octet,
    Ipv4Address,
    Ipv4Netblock,
    Ipv6Address,
    Ipv6Netblock,
    IpNetblock,
    EmailLhs,
    EmailDomain,
    EmailAddress,
    EmailAddressOrUnqualified,
}

impl PatternName {
    /// In registry order; `name as usize` indexes into this.
    pub const ALL: [PatternName; 10] = [
        PatternName::Ipv4Octet,
        PatternName::Ipv4Address,
        PatternName::Ipv4Netblock,
        PatternName::Ipv6Address,
        PatternName::Ipv6Netblock,
        PatternName::IpNetblock,
        PatternName::EmailLhs,
        PatternName::EmailDomain,
        PatternName::EmailAddress,
        PatternName::EmailAddressOrUnqualified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternName::Ipv4Octet => "IPv4Octet",
            PatternName::Ipv4Address => "IPv4Address",
            PatternName::Ipv4Netblock => "IPv4Netblock",
            PatternName::Ipv6Address => "IPv6Address",
            PatternName::Ipv6Netblock => "IPv6Netblock",
            PatternName::IpNetblock => "IPNetblock",
            PatternName::EmailLhs => "EmailLHS",
            PatternName::EmailDomain => "EmailDomain",
            PatternName::EmailAddress => "EmailAddress",
            PatternName::EmailAddressOrUnqualified => "EmailAddressOrUnqualified",
        }
    }

    /// `ipv4-octet`, `email-address-or-unqualified`, ...
    pub fn kebab(&self) -> &'static str {
        match self {
            PatternName::Ipv4Octet => "ipv4-octet",
            PatternName::Ipv4Address => "ipv4-address",
            PatternName::Ipv4Netblock => "ipv4-netblock",
            PatternName::Ipv6Address => "ipv6-address",
            PatternName::Ipv6Netblock => "ipv6-netblock",
            PatternName::IpNetblock => "ip-netblock",
            PatternName::EmailLhs => "email-lhs",
            PatternName::EmailDomain => "email-domain",
            PatternName::EmailAddress => "email-address",
            PatternName::EmailAddressOrUnqualified => "email-address-or-unqualified",
        }
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternName::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(s) || n.kebab().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown pattern `{s}` (see --list-patterns)"))
    }
}

/// One grammar in its three forms. The matchers are compiled from the same
/// fragment, so they cannot drift apart.
#[derive(Debug, Clone)]
pub struct NamedPattern {
    name: PatternName,
    raw: Fragment,
    anchored: Regex,
    unanchored: Regex,
}

impl NamedPattern {
    fn compile(name: PatternName, raw: Fragment) -> Result<Self, GrammarError> {
        let anchored = Regex::new(&anchored(&raw))?;
        let unanchored = Regex::new(raw.as_str())?;
        Ok(NamedPattern {
            name,
            raw,
            anchored,
            unanchored,
        })
    }

    pub fn name(&self) -> PatternName {
        self.name
    }

    /// Embeddable pattern text: one non-capturing group.
    pub fn raw(&self) -> &str {
        self.raw.as_str()
    }

    pub fn fragment(&self) -> &Fragment {
        &self.raw
    }

    /// Matcher that requires the whole input to satisfy the grammar.
    pub fn anchored(&self) -> &Regex {
        &self.anchored
    }

    /// Matcher for finding the grammar anywhere in the input.
    pub fn unanchored(&self) -> &Regex {
        &self.unanchored
    }

    pub fn matches(&self, input: &str) -> bool {
        self.anchored.is_match(input)
    }

    pub fn search(&self, input: &str) -> bool {
        self.unanchored.is_match(input)
    }

    /// Byte range of the first match within `input`.
    pub fn find(&self, input: &str) -> Option<Range<usize>> {
        self.unanchored.find(input).map(|m| m.range())
    }
}

/// All published grammars for one ruleset. Immutable once built and safe to
/// share between threads.
#[derive(Debug, Clone)]
pub struct Registry {
    ruleset: Ruleset,
    patterns: Vec<NamedPattern>,
}

impl Registry {
    pub fn new(ruleset: Ruleset) -> Result<Self, GrammarError> {
        let numeric = NumericGrammar::build()?;
        let email = EmailGrammar::build(ruleset, &numeric)?;

        let patterns = PatternName::ALL
            .into_iter()
            .map(|name| {
                let raw = match name {
                    PatternName::Ipv4Octet => &numeric.ipv4_octet,
                    PatternName::Ipv4Address => &numeric.ipv4_address,
                    PatternName::Ipv4Netblock => &numeric.ipv4_netblock,
                    PatternName::Ipv6Address => &numeric.ipv6_address,
                    PatternName::Ipv6Netblock => &numeric.ipv6_netblock,
                    PatternName::IpNetblock => &numeric.ip_netblock,
                    PatternName::EmailLhs => &email.lhs,
                    PatternName::EmailDomain => &email.domain,
                    PatternName::EmailAddress => &email.address,
                    PatternName::EmailAddressOrUnqualified => &email.address_or_unqualified,
                };
                NamedPattern::compile(name, raw.clone())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Registry { ruleset, patterns })
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    pub fn get(&self, name: PatternName) -> &NamedPattern {
        &self.patterns[name as usize]
    }

    pub fn patterns(&self) -> &[NamedPattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

static DEFAULT_REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    Registry::new(Ruleset::default())
        .unwrap_or_else(|e| panic!("built-in grammar failed to compile: {e}"))
});

/// The registry for the build-time ruleset, compiled on first use.
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

pub fn raw_pattern(name: PatternName) -> &'static str {
    default_registry().get(name).raw()
}

/// Whole-input match against the default registry.
pub fn matches(name: PatternName, input: &str) -> bool {
    default_registry().get(name).matches(input)
}

/// Substring match against the default registry.
pub fn search(name: PatternName, input: &str) -> bool {
    default_registry().get(name).search(input)
}
