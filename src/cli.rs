// src/cli.rs
use std::time::Duration;

use chrono::Local;
use url::Url;

use crate::config::options::AppOptions;
use crate::core::HttpFetcher;
use crate::error::{ CliError, RunError };
use crate::progress::Progress;
use crate::runner::{ self, RunSummary };

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(AppOptions),
    Help,
}

/// Entry point for the binary: args → options → run.
pub fn run() -> Result<(), RunError> {
    let options = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            eprintln!("{HELP}");
            return Ok(());
        }
        Command::Run(options) => options,
    };

    crate::log::init(if options.quiet { "warn" } else { "info" });

    let summary = run_with(&options)?;
    println!("Information has been stored in '{}'.", summary.path.display());
    Ok(())
}

pub fn run_with(options: &AppOptions) -> Result<RunSummary, RunError> {
    let fetcher = HttpFetcher::new(&options.fetch)?;
    let now = Local::now().naive_local();

    let mut console = ConsoleProgress { quiet: options.quiet };
    Ok(runner::run(options, &fetcher, now, Some(&mut console))?)
}

pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = AppOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-o" | "--out" => options.export.set_path(&value(&mut args, "--out")?),
            "--url" => options.scrape.directory_url = parse_url(&mut args, "--url")?,
            "--origin" => options.scrape.origin = parse_url(&mut args, "--origin")?,
            "--timeout" => {
                let secs: u64 = parse_num(&mut args, "--timeout")?;
                if secs == 0 { return Err(invalid("--timeout", "0")); }
                options.fetch.timeout = Duration::from_secs(secs); }
            "-w" | "--workers" => {
                let n: usize = parse_num(&mut args, "--workers")?;
                if n == 0 { return Err(invalid("--workers", "0")); }
                options.scrape.workers = n; }
            "--pause-ms" => options.scrape.pause = Duration::from_millis(parse_num(&mut args, "--pause-ms")?),
            "--indent" => options.export.indent = parse_num(&mut args, "--indent")?,
            "-q" | "--quiet" => options.quiet = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(CliError::UnknownArg(a)),
        }
    }

    Ok(Command::Run(options))
}

fn value(args: &mut impl Iterator<Item = String>, flag: &'static str) -> Result<String, CliError> {
    args.next().ok_or(CliError::MissingValue(flag))
}

fn parse_num<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<T, CliError> {
    let v = value(args, flag)?;
    v.trim().parse().map_err(|_| invalid(flag, &v))
}

fn parse_url(args: &mut impl Iterator<Item = String>, flag: &'static str) -> Result<Url, CliError> {
    let v = value(args, flag)?;
    Url::parse(v.trim()).map_err(|_| invalid(flag, &v))
}

fn invalid(flag: &'static str, value: &str) -> CliError {
    CliError::InvalidValue { flag, value: s!(value) }
}

/// One stdout line per shop, like the scraper always printed.
struct ConsoleProgress {
    quiet: bool,
}

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_started(&mut self, _index: usize, name: &str, url: &str) {
        if !self.quiet {
            println!("Processing shop: {name}, URL: {url}");
        }
    }

    fn item_done(&mut self, _index: usize, name: &str, flyers: usize) {
        if !self.quiet {
            println!("  {name}: {flyers} current flyer(s)");
        }
    }

    fn item_failed(&mut self, _index: usize, name: &str) {
        println!("  {name}: page could not be fetched");
    }
}
