mod cli;

use clap::Parser;
use cli::{Cli, help_text};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use taskbot_core::command;
use taskbot_core::config::{self, Config};
use taskbot_core::dispatch::dispatch;
use taskbot_core::error::AppError;
use taskbot_core::list::TaskList;
use taskbot_core::storage::line_store;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn resolve_data_path(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf, AppError> {
    match flag {
        Some(path) => Ok(path),
        None => line_store::data_path(config.data_file.as_deref()),
    }
}

fn run_line(line: &str, tasks: &mut TaskList, data_path: &Path) -> Result<taskbot_core::dispatch::Reply, AppError> {
    command::parse(line).and_then(|parsed| dispatch(parsed, tasks, data_path))
}

fn run_interactive(tasks: &mut TaskList, data_path: &Path, bot_name: &str) -> Result<(), AppError> {
    println!("Hello! I'm {bot_name}");
    println!("What can I do for you?");

    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    let mut input = String::new();

    loop {
        input.clear();
        let bytes = stdin_lock.read_line(&mut input).map_err(AppError::from)?;

        if bytes == 0 {
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        if line == "help" || line == "?" {
            println!("{}", help_text());
            continue;
        }

        match run_line(line, tasks, data_path) {
            Ok(reply) => {
                println!("{}", reply.message);
                if reply.exit {
                    break;
                }
            }
            Err(err) => eprintln!("ERROR: {err}"),
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_load = config::load_config_with_fallback();
    if let Some(err) = config_load.error {
        log::warn!("ignoring config: {err}");
    }
    let config = config_load.config;

    let data_path = match resolve_data_path(cli.data_file, &config) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
    };

    let outcome = match line_store::load(&data_path) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
    };
    if outcome.skipped > 0 {
        log::warn!(
            "skipped {} corrupt line(s) in {}",
            outcome.skipped,
            data_path.display()
        );
    }
    let mut tasks = outcome.tasks;

    if !cli.command.is_empty() {
        let line = cli.command.join(" ");
        match run_line(&line, &mut tasks, &data_path) {
            Ok(reply) => println!("{}", reply.message),
            Err(err) => {
                eprintln!("ERROR: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(err) = run_interactive(&mut tasks, &data_path, config.bot_name()) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
