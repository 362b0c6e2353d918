//! Grammar fragments and how they compose.
//!
//! Leaf numeric grammars (octet, IPv4, IPv6, netblocks) are built first; the
//! email grammars embed the IPv4 and IPv6 fragments for address literals.
//! Every fragment is wrapped in `(?:...)` and none defines a capturing group.

pub mod email;
pub mod extended;
pub mod fragment;
pub mod numeric;
pub mod ruleset;

pub use email::EmailGrammar;
pub use fragment::{Fragment, GrammarError};
pub use numeric::NumericGrammar;
pub use ruleset::Ruleset;
