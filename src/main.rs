use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{debug, warn};
use webclip::{HttpFetcher, ReadabilityExtractor, SystemClipboard, pipeline};

/// Fetch a web page and copy its readable text to the clipboard as JSON.
///
/// Every argument is data: there are no flags, so `-v` or `--help` is taken
/// as the URL. Logging is controlled through `WEBCLIP_LOG`.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(
        value_name = "URL",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    args: Vec<String>,
}

/// The URL when exactly one argument was given.
fn url_from_args<I, T>(args: I) -> Option<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).ok()?;
    let [url] = <[String; 1]>::try_from(cli.args).ok()?;
    Some(url)
}

fn main() -> ExitCode {
    #[cfg(target_os = "linux")]
    if webclip::clipboard::owner::requested() {
        return match webclip::clipboard::owner::serve() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::from(1),
        };
    }

    let Some(url) = url_from_args(std::env::args_os()) else {
        return usage();
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Error)
        .parse_env("WEBCLIP_LOG")
        .init();

    match run(&url) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(url: &str) -> anyhow::Result<()> {
    debug!("fetching {url}");
    let fetcher = HttpFetcher::new()
        .inspect_err(|err| warn!("http client unavailable: {err}"))
        .ok();

    pipeline::run(url, &fetcher, &ReadabilityExtractor::new(), &SystemClipboard)
        .context("failed to copy page to clipboard")?;

    println!("Copied to clipboard!");
    Ok(())
}

fn usage() -> ExitCode {
    let program = std::env::args_os()
        .next()
        .and_then(|arg| {
            Path::new(&arg)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    eprintln!("Usage: {program} <url>");
    ExitCode::from(1)
}
