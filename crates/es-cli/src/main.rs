use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;

use es_core::{scan_file_parallel, write_report, MappedFile, ScanConfig};

/// Per-block Shannon entropy report for a file.
#[derive(Debug, Parser)]
#[command(
    name = "entroscope",
    version,
    about = "Partition a file into blocks and report each block's Shannon entropy"
)]
struct CliArgs {
    /// File to scan.
    filename: PathBuf,

    /// Block size in bytes. Zero or negative requests fall back to the
    /// default of 1024.
    #[arg(
        short = 'b',
        long = "block-size",
        default_value_t = 1024,
        allow_negative_numbers = true
    )]
    block_size: i64,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version print to stdout and succeed; genuine usage
            // errors print to stderr and fail.
            let is_info = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = err.print();
            return if is_info {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("entroscope: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    let cfg = ScanConfig::default().with_requested_block_size(args.block_size);

    let file = MappedFile::open(&args.filename)?;
    log::info!(
        "Opened: {} ({} bytes, block size {})",
        args.filename.display(),
        file.len(),
        cfg.block_size
    );

    let report = scan_file_parallel(&file, &cfg)
        .with_context(|| format!("failed to scan {}", args.filename.display()))?;
    log::info!(
        "Scanned {} blocks: {} low, {} high",
        report.results.len(),
        report.summary.low_blocks,
        report.summary.high_blocks
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &args.filename, &report, &cfg).context("failed to write report")?;
    out.flush().context("failed to flush report")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn filename_alone_uses_default_block_size() {
        let args = CliArgs::try_parse_from(["entroscope", "firmware.img"]).unwrap();
        assert_eq!(args.filename, PathBuf::from("firmware.img"));
        assert_eq!(args.block_size, 1024);
    }

    #[test]
    fn short_flag_sets_block_size() {
        let args = CliArgs::try_parse_from(["entroscope", "-b", "4096", "x.bin"]).unwrap();
        assert_eq!(args.block_size, 4096);
    }

    #[test]
    fn long_flag_sets_block_size() {
        let args =
            CliArgs::try_parse_from(["entroscope", "--block-size", "512", "x.bin"]).unwrap();
        assert_eq!(args.block_size, 512);
    }

    #[test]
    fn negative_block_size_parses_then_falls_back() {
        let args = CliArgs::try_parse_from(["entroscope", "-b", "-5", "x.bin"]).unwrap();
        assert_eq!(args.block_size, -5);

        let cfg = ScanConfig::default().with_requested_block_size(args.block_size);
        assert_eq!(cfg.block_size, 1024);
    }

    #[test]
    fn missing_filename_is_a_usage_error() {
        let err = CliArgs::try_parse_from(["entroscope"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn non_numeric_block_size_is_rejected() {
        let err = CliArgs::try_parse_from(["entroscope", "-b", "lots", "x.bin"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
