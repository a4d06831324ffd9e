use anyhow::Result;
use clap::Parser;
use kaspi_export::{default_output_path, export_csv};
use kaspi_ingest::{AmountParser, parse_statement_file};
use std::path::PathBuf;

mod config;
mod logging;
mod state;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("KASPI_BUILD_SHA"), ")");

/// Parse a Kaspi bank statement PDF and export its transactions to CSV.
#[derive(Parser, Debug)]
#[command(name = "kaspi", version, long_version = LONG_VERSION)]
struct Cli {
    /// Input statement PDF
    statement: PathBuf,

    /// Output CSV path (default: the statement path with a .csv extension)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Config file (default: ~/.kaspi/config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Expected currency symbol, overriding the config file
    #[arg(long)]
    currency: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = match config::load_config(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            logging::init(logging::DEFAULT_LEVEL);
            log::error!("Config error: {e:#}");
            return Err(e);
        }
    };
    let cfg = loaded.config;
    logging::init(&cfg.log.level);
    if let Some(e) = loaded.ignored {
        log::warn!("Ignoring config: {e:#}; using defaults");
    }

    let currency = cli.currency.unwrap_or(cfg.parser.currency);
    let amounts = AmountParser::new(currency);
    let output = cli
        .output
        .unwrap_or_else(|| default_output_path(&cli.statement));

    let report = parse_statement_file(&cli.statement, &amounts);
    if report.skipped_rows > 0 {
        log::warn!("Skipped {} unparseable rows", report.skipped_rows);
    }

    if let Err(e) = export_csv(&report.transactions, &output) {
        log::error!("Exporting to CSV error: {e:#}");
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_arguments() {
        let cli = Cli::try_parse_from(["kaspi", "march.pdf", "--output", "out.csv", "--currency", "$"])
            .unwrap();
        assert_eq!(cli.statement, PathBuf::from("march.pdf"));
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.currency.as_deref(), Some("$"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_long_version_carries_build_sha() {
        let sha = env!("KASPI_BUILD_SHA");
        assert!(!sha.is_empty());
        assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(LONG_VERSION.ends_with(&format!("({sha})")));
    }

    #[test]
    fn test_statement_is_required() {
        assert!(Cli::try_parse_from(["kaspi"]).is_err());
    }
}
