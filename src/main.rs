//! go-go-web CLI - convert txt or md files, or a folder of them, to HTML

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use go_go_web::{output_dir, CliSettings, Converter, Error, Settings};

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert txt or md file or folder of files to html.
#[derive(Parser)]
#[command(name = "go-go-web", disable_version_flag = true)]
struct Cli {
    /// Display the app version.
    #[arg(short = 'v', long)]
    version: bool,

    /// Specify output directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Specify url for CSS stylesheet.
    #[arg(short, long)]
    stylesheet: Option<String>,

    /// Specify config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The input file or folder path.
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG controls library diagnostics; user-facing output is printed directly.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.version {
        println!("go-go-web {VERSION}");
        return ExitCode::SUCCESS;
    }

    let Some(path) = cli.path.clone() else {
        eprintln!("Error: no file or folder name specified");
        print_help();
        return ExitCode::FAILURE;
    };

    match run(&cli, &path) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err}");
            if matches!(err, Error::MissingInput(_)) {
                println!();
                print_help();
            }
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    if let Err(err) = Cli::command().print_help() {
        tracing::debug!(error = %err, "could not print help");
    }
}

/// Convert `path`. `Ok(false)` means some files failed and were reported.
fn run(cli: &Cli, path: &Path) -> Result<bool, Error> {
    let cli_settings = CliSettings {
        output: cli.output.clone(),
        stylesheet: cli.stylesheet.clone(),
    };
    let settings = Settings::load(cli.config.as_deref(), &cli_settings)?;

    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }

    let dir = settings.output_dir.display();
    if output_dir::recreate(&settings.output_dir, path)?.deleted {
        println!("{dir} folder deleted");
    }
    println!("{dir} folder created");

    let converter = Converter::from_settings(&settings)?;
    let report = converter.convert_path(path)?;

    for converted in &report.converted {
        println!(
            "{} converted to {} successfully!",
            converted.input.display(),
            converted.output.display()
        );
    }
    for (_, err) in &report.failed {
        eprintln!("Error: {err}");
    }

    Ok(report.is_success())
}
