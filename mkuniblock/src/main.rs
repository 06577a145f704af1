use anyhow::Context;
use clap::Parser;
use mkuniblock::InputPaths;
use mkuniblock_common::paths::path_to_string;
use std::{io, io::Write, path::PathBuf, process::ExitCode};
use tracing::{error, info};

/// Generates the OS/2 Unicode block table for makeotf's `uniblock.h`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The Unicode character database.
    #[arg(long, default_value = mkuniblock_common::paths::UNICODE_DATA_FILE)]
    unicode_data: PathBuf,

    /// The OS/2 Unicode range table, saved as tab separated text.
    #[arg(long, default_value = mkuniblock_common::paths::OS2_RANGES_FILE)]
    os2_ranges: PathBuf,

    /// Where to write the generated table. Defaults to standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Whether to enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let paths = InputPaths { unicode_data: args.unicode_data, os2_ranges: args.os2_ranges };
    let table = mkuniblock::generate(&paths)?;
    let text = table.render().to_string();

    if let Some(target) = args.output {
        info!("Writing {}...", target.display());
        std::fs::write(&target, text)
            .with_context(|| format!("could not write '{}'", path_to_string(&target)))?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(if args.verbose { mkuniblock_common::FILTER_SPEC } else { "info" })
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
