use std::process;

use clap::Parser;

use addrgrammar::cli::Args;
use addrgrammar::{EX_IOERR, EX_USAGE};

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { EX_USAGE } else { 0 });
        }
    };
    match addrgrammar::run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(EX_IOERR);
        }
    }
}
