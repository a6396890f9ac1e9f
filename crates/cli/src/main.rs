// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! env-config generator binary entry point.

use clap::Parser;

use envgen::cli::Cli;
use envgen::generate::{check_report, Generator};
use envgen_config::{missing_warning, print_error, print_warning};

fn main() {
    let cli = Cli::parse();
    let code = if cli.check {
        run_check(&cli)
    } else {
        run_generate(&cli)
    };
    std::process::exit(code);
}

/// Generate the artifact and confirm the written path.
fn run_generate(cli: &Cli) -> i32 {
    match generator_for(cli).run() {
        Ok(path) => {
            println!("Generated {}", path.display());
            0
        }
        Err(e) => {
            print_error(e);
            1
        }
    }
}

/// Resolve and report without writing anything.
///
/// Missing mandatory values are a warning, not a failure: check mode is
/// advisory and always exits 0 unless resolution itself fails.
fn run_check(cli: &Cli) -> i32 {
    match generator_for(cli).resolve() {
        Ok(config) => {
            print!("{}", check_report(&config));
            if let Some(warning) = missing_warning(&config) {
                print_warning(warning);
            }
            0
        }
        Err(e) => {
            print_error(e);
            1
        }
    }
}

fn generator_for(cli: &Cli) -> Generator {
    let generator = Generator::new(&cli.root);
    match &cli.output {
        Some(output) => generator.with_output(output),
        None => generator,
    }
}
