use std::{fs, process::ExitCode};

use clap::Parser;
use tally::interpret;
use tracing_subscriber::EnvFilter;

/// Sample programs run by `--demo`.
const DEMO_PROGRAMS: [&str; 4] = ["x = 5;\ny = x + 3;\nz = -(-y * -2);",
                                  "x_2 = 0;",
                                  "x = 0\ny = x;\nz = ---(x+y);",
                                  "x = 1;\ny = 2;\nz = ---(x+y)*(x+-y);"];

/// tally runs small assignment programs over integer variables and prints
/// the final value of every variable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats every argument as a path to a program file instead of a
    /// program.
    #[arg(short, long)]
    file: bool,

    /// Runs the built-in sample programs.
    #[arg(short, long)]
    demo: bool,

    /// Programs to run, in order.
    #[arg(required_unless_present = "demo")]
    programs: Vec<String>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let mut scripts = Vec::new();
    if args.demo {
        scripts.extend(DEMO_PROGRAMS.iter().map(|program| (*program).to_string()));
    }
    for program in args.programs {
        if args.file {
            match fs::read_to_string(&program) {
                Ok(contents) => scripts.push(contents),
                Err(e) => {
                    eprintln!("Failed to read the input file '{program}': {e}");
                    return ExitCode::FAILURE;
                },
            }
        } else {
            scripts.push(program);
        }
    }

    let mut rejected = false;
    for script in &scripts {
        match interpret(script) {
            Ok(table) => {
                for (name, value) in &table {
                    println!("{name} = {value}");
                }
            },
            Err(e) => {
                tracing::info!("{e}");
                println!("error");
                rejected = true;
            },
        }
        println!();
    }

    if rejected { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
