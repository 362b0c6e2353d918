#![no_main]

use addrgrammar::{PatternName, default_registry};
use libfuzzer_sys::fuzz_target;

// Matching is total: any string gets a plain yes/no from every grammar, and
// a whole-input match always implies a substring match.
fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let registry = default_registry();
    for name in PatternName::ALL {
        let pattern = registry.get(name);
        if pattern.matches(input) {
            assert!(pattern.search(input), "{name}: anchored match without substring match");
        }
    }
});
