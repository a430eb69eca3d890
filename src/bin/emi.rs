//! Loan installment calculator.
//!
//! Usage:
//!   cargo run --bin emi
//!
//! Prompts for principal, interest rate, whether the rate is annual, and
//! the tenure in months, then prints the monthly installment.

use guessing_game::build_info;
use guessing_game::emi::run_calculator;
use guessing_game::logging::{self, LogLevel};
use std::io;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line("emi"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'emi --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    logging::init(LogLevel::from_env());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let installment = run_calculator(&mut stdin.lock(), &mut stdout.lock())?;
    if installment.is_none() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_help() {
    println!("EMI Calculator\n");
    println!("Usage: emi [option]\n");
    println!("Options:");
    println!("  --version  Show version information");
    println!("  --help     Show this help message");
}
