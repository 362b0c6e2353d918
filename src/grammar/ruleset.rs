use std::fmt;
use std::str::FromStr;

#[cfg(all(feature = "rfc2822", feature = "rfc5321"))]
compile_error!("features `rfc2822` and `rfc5321` are mutually exclusive");

/// Which RFC's character classes the local-part grammar uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ruleset {
    /// RFC 5321 `qtextSMTP` / `quoted-pairSMTP`: printable ASCII only.
    Rfc5321,
    /// RFC 2822 `qtext` / `quoted-pair`: also admits the obsolete control
    /// characters.
    Rfc2822,
}

/// atext is the same in both RFCs.
const ATEXT: &str = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-]";

// %d32-33 / %d35-91 / %d93-126
const QTEXT_5321: &str = r"[\x20\x21\x23-\x5b\x5d-\x7e]";
// "\" %d32-126
const QUOTED_PAIR_5321: &str = r"\\[\x20-\x7e]";

// NO-WS-CTL / %d33 / %d35-91 / %d93-126
const QTEXT_2822: &str = r"[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]";
// "\" text
const QUOTED_PAIR_2822: &str = r"\\[\x01-\x09\x0b\x0c\x0e-\x7f]";

impl Ruleset {
    pub const ALL: [Ruleset; 2] = [Ruleset::Rfc5321, Ruleset::Rfc2822];

    /// The ruleset chosen at build time through cargo features.
    pub const fn build_default() -> Ruleset {
        if cfg!(feature = "rfc2822") {
            Ruleset::Rfc2822
        } else {
            Ruleset::Rfc5321
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Ruleset::Rfc5321 => "rfc5321",
            Ruleset::Rfc2822 => "rfc2822",
        }
    }

    pub fn atext(&self) -> &'static str {
        ATEXT
    }

    pub fn qtext(&self) -> &'static str {
        match self {
            Ruleset::Rfc5321 => QTEXT_5321,
            Ruleset::Rfc2822 => QTEXT_2822,
        }
    }

    pub fn quoted_pair(&self) -> &'static str {
        match self {
            Ruleset::Rfc5321 => QUOTED_PAIR_5321,
            Ruleset::Rfc2822 => QUOTED_PAIR_2822,
        }
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset::build_default()
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ruleset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(' ', "").as_str() {
            "rfc5321" | "5321" => Ok(Ruleset::Rfc5321),
            "rfc2822" | "2822" => Ok(Ruleset::Rfc2822),
            other => Err(format!("unknown ruleset `{other}` (expected rfc5321 or rfc2822)")),
        }
    }
}
