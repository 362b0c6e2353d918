//! IPv4 and IPv6 address and netblock grammars.
//!
//! These do not handle IPv6 scoped addresses (`fe80::1%eth0`); SMTP address
//! literals cannot carry a zone.

use super::fragment::{Fragment, GrammarError, alt, between, exactly, optional, seq};

/// The numeric grammars, built once and shared by the email grammars for
/// address literals.
#[derive(Debug, Clone)]
pub struct NumericGrammar {
    pub ipv4_octet: Fragment,
    pub ipv4_address: Fragment,
    pub ipv4_netblock: Fragment,
    pub ipv6_h16: Fragment,
    pub ipv6_ls32: Fragment,
    pub ipv6_address: Fragment,
    pub ipv6_netblock: Fragment,
    pub ip_netblock: Fragment,
}

impl NumericGrammar {
    pub fn build() -> Result<Self, GrammarError> {
        let dot = Fragment::literal(".");
        let colon = Fragment::literal(":");
        let slash = Fragment::literal("/");

        // 0-255 with no leading zeros.
        let ipv4_octet = Fragment::new(r"(?:25[0-5]|(?:[1-9]|1[0-9]|2[0-4])?[0-9])")?;
        let ipv4_address = seq(&[&exactly(&seq(&[&ipv4_octet, &dot]), 3), &ipv4_octet]);
        let ipv4_prefix = Fragment::new(r"(?:[12]?[0-9]|3[0-2])")?;
        let ipv4_netblock = seq(&[&ipv4_address, &slash, &ipv4_prefix]);

        let ipv6_h16 = Fragment::new(r"(?:[0-9a-fA-F]{1,4})")?;
        let ipv6_ls32 = alt(&[&seq(&[&ipv6_h16, &colon, &ipv6_h16]), &ipv4_address])?;
        let ipv6_address = ipv6_address(&ipv6_h16, &ipv6_ls32)?;
        let ipv6_prefix = Fragment::new(r"(?:[1-9]?[0-9]|1[01][0-9]|12[0-8])")?;
        let ipv6_netblock = seq(&[&ipv6_address, &slash, &ipv6_prefix]);

        let ip_netblock = alt(&[&ipv4_netblock, &ipv6_netblock])?;

        Ok(NumericGrammar {
            ipv4_octet,
            ipv4_address,
            ipv4_netblock,
            ipv6_h16,
            ipv6_ls32,
            ipv6_address,
            ipv6_netblock,
            ip_netblock,
        })
    }
}

/// RFC 3986 section 3.2.2:
///
/// ```text
/// IPv6address =                            6( h16 ":" ) ls32
///             /                       "::" 5( h16 ":" ) ls32
///             / [               h16 ] "::" 4( h16 ":" ) ls32
///             / [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32
///             / [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32
///             / [ *3( h16 ":" ) h16 ] "::"    h16 ":"   ls32
///             / [ *4( h16 ":" ) h16 ] "::"              ls32
///             / [ *5( h16 ":" ) h16 ] "::"              h16
///             / [ *6( h16 ":" ) h16 ] "::"
/// ```
///
/// Row `i` (counting from zero) has a head of up to `i - 1` groups before
/// the `::` and `6 - i` groups plus ls32 after it; the last two rows end in
/// a lone h16 or nothing. Per RFC 4291 `::` stands for one or more zero
/// groups, so `1:2:3:4:5:6:7::` is legal. Every row consumes at least `::`,
/// so the empty string never matches.
fn ipv6_address(h16: &Fragment, ls32: &Fragment) -> Result<Fragment, GrammarError> {
    let colon = Fragment::literal(":");
    let elision = Fragment::literal("::");
    let h16_colon = seq(&[h16, &colon]);

    let mut rows = Vec::with_capacity(9);
    rows.push(seq(&[&exactly(&h16_colon, 6), ls32]));
    rows.push(seq(&[&elision, &exactly(&h16_colon, 5), ls32]));
    for i in 2..=8u32 {
        let head = if i == 2 {
            optional(h16)
        } else {
            optional(&seq(&[&between(&h16_colon, 0, i - 2), h16]))
        };
        let tail = match i {
            2..=6 => seq(&[&exactly(&h16_colon, 6 - i), ls32]),
            7 => h16.clone(),
            _ => seq(&[]),
        };
        rows.push(seq(&[&head, &elision, &tail]));
    }

    let rows: Vec<&Fragment> = rows.iter().collect();
    alt(&rows)
}
