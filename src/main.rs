mod analyze;

use self::analyze::*;

use std::env;
use std::io::{self, BufWriter};
use std::process;

use systemd_unit_paths::lookup::ProcessEnvironment;

fn main() {
    if let Err(e) = logger::init() {
        eprintln!("Failed to set up logging: {e}");
    }

    let mut out = BufWriter::new(io::stdout().lock());
    let status = run(
        env::args_os().collect(),
        &ProcessEnvironment,
        &mut out,
        &mut io::stderr(),
    );

    // process::exit() doesn't run destructors
    drop(out);
    process::exit(status)
}
