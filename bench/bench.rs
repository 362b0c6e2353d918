//! Benchmark grammar construction and matching throughput.
//!
//! Usage:
//!   cargo run --release --bin bench_addrgrammar                 # build + match
//!   cargo run --release --bin bench_addrgrammar -- build        # registry construction only
//!   cargo run --release --bin bench_addrgrammar -- match --iterations 200

use std::time::{Duration, Instant};

use clap::Parser;

use addrgrammar::{PatternName, Registry, Ruleset};

// --- CLI ---

#[derive(Parser)]
#[command(about = "Time registry construction and matching for every grammar.")]
struct Args {
    /// Mode: build, match, or omit for all
    #[arg(default_value = "all")]
    mode: String,

    /// Passes over the sample corpus per grammar
    #[arg(long, default_value_t = 100)]
    iterations: u32,

    /// Registry builds to average over
    #[arg(long, default_value_t = 20)]
    builds: u32,
}

// --- Corpus ---

static SAMPLES: &[(PatternName, &[&str])] = &[
    (
        PatternName::Ipv4Netblock,
        &["192.0.2.0/24", "10.0.0.0/8", "192.0.2.0/33", "256.1.1.1/8"],
    ),
    (
        PatternName::Ipv6Address,
        &[
            "::",
            "2001:db8::42",
            "2001:DB8:1234:5678:90ab:cdef:192.0.2.1",
            "2001:DB8::42::1",
            "1:2:3:4:5:6:7:8:9",
        ],
    ),
    (
        PatternName::IpNetblock,
        &["192.0.2.0/24", "2001:db8::/32", "fe02::/08"],
    ),
    (
        PatternName::EmailAddress,
        &[
            "john@example.org",
            "\"john doe\"@example.org",
            "john@[IPv6:2001:db8::42]",
            "<john@example.org>",
            "a.very.long.local.part.with.many.atoms@mail.sub.example.org",
        ],
    ),
    (
        PatternName::EmailAddressOrUnqualified,
        &["john", "john:", "\"john:\"@example.org"],
    ),
];

fn time_builds(builds: u32) -> Duration {
    let start = Instant::now();
    for _ in 0..builds {
        if let Err(e) = Registry::new(Ruleset::default()) {
            eprintln!("registry build failed: {e}");
            std::process::exit(1);
        }
    }
    start.elapsed() / builds.max(1)
}

fn time_matches(registry: &Registry, iterations: u32) {
    println!("| grammar | inputs | matches/s |");
    println!("|---|---:|---:|");
    for (name, inputs) in SAMPLES {
        let pattern = registry.get(*name);
        let start = Instant::now();
        let mut hits = 0usize;
        for _ in 0..iterations {
            for input in *inputs {
                if pattern.matches(input) {
                    hits += 1;
                }
            }
        }
        let elapsed = start.elapsed();
        let total = iterations as f64 * inputs.len() as f64;
        let rate = total / elapsed.as_secs_f64().max(f64::EPSILON);
        println!("| {name} | {} | {rate:.0} |", inputs.len());
        // keep the loop from being optimized away
        std::hint::black_box(hits);
    }
}

fn main() {
    let args = Args::parse();
    let run_build = matches!(args.mode.as_str(), "all" | "build");
    let run_match = matches!(args.mode.as_str(), "all" | "match");
    if !run_build && !run_match {
        eprintln!("unknown mode `{}` (expected build, match or all)", args.mode);
        std::process::exit(2);
    }

    if run_build {
        let avg = time_builds(args.builds);
        println!("registry build: {avg:.2?} average over {} builds", args.builds);
    }

    if run_match {
        let registry = match Registry::new(Ruleset::default()) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("registry build failed: {e}");
                std::process::exit(1);
            }
        };
        time_matches(&registry, args.iterations);
    }
}
