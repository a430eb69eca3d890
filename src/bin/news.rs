//! Headline search client.
//!
//! Usage:
//!   NEWS_API_KEY=... cargo run --bin news
//!
//! The key may also come from a `.env` file in the working directory.
//!
//! Asks for a keyword, category, language and country, runs a top-headlines
//! search and a seven-day "everything" search, and appends the results to
//! `news_results.txt`.

use chrono::Utc;
use guessing_game::build_info;
use guessing_game::logging::{self, LogLevel};
use guessing_game::news::{read_search_params, run_searches, NewsClient, ResultsLog, SearchWindow};
use guessing_game::NewsConfig;
use std::io;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line("news"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'news --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    logging::init(LogLevel::from_env());

    // A .env file in the working directory may supply the key
    dotenvy::dotenv().ok();

    // Fail before asking anything if the key is missing
    let config = match NewsConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let client = NewsClient::new(&config);
    let log = ResultsLog::new(config.log_path.clone());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let params = read_search_params(&mut input, &mut output)?;
    let window = SearchWindow {
        now: Utc::now(),
        lookback_days: config.lookback_days,
        page_size: config.page_size,
    };

    let report = run_searches(&client, &log, &params, window, &mut output)?;
    if !report.all_succeeded() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_help() {
    println!("News Headline Search\n");
    println!("Usage: news [option]\n");
    println!("Environment:");
    println!("  NEWS_API_KEY  API key for the headline service (required, may be set in .env)");
    println!("  GUESS_LOG     Diagnostic log level: error, warn, info, debug, trace\n");
    println!("Options:");
    println!("  --version  Show version information");
    println!("  --help     Show this help message");
}
