use std::{env, process};

use inventory_core::{cli, init};

fn main() {
    init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = cli::run_cli(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
