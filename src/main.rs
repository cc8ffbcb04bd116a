use anyhow::{Context, Result};
use clap::Parser;
use gedcom_audit::{AuditConfig, AuditPass, FileSink, Reporter, RuleCode, WriterSink, load_records};
use log::info;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gedcom-audit")]
#[command(version)]
#[command(about = "Check genealogy records against consistency user stories", long_about = None)]
struct Cli {
    /// JSON record document produced by the interchange parser
    #[arg(value_name = "RECORDS", required_unless_present = "list_rules")]
    records: Option<PathBuf>,

    /// Append the report to this file instead of printing it
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Comma-separated rule codes to run, in report order (e.g. US03,US16)
    #[arg(long, value_name = "CODES")]
    rules: Option<String>,

    /// chrono format of record dates
    #[arg(long, value_name = "FMT")]
    date_format: Option<String>,

    /// Print the rule catalog and exit
    #[arg(long)]
    list_rules: bool,
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.list_rules {
        for rule in RuleCode::ALL {
            println!("{}  {}", rule.code(), rule.label());
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => AuditConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AuditConfig::default(),
    };
    if let Some(codes) = &cli.rules {
        config.select_rules(codes)?;
    }
    if let Some(format) = cli.date_format {
        config.date_format = format;
    }
    config.validate()?;

    let records = cli.records.context("A record document is required")?;
    let store = load_records(&records)
        .with_context(|| format!("Failed to load records from {}", records.display()))?;
    let pass = AuditPass::new(&store, &config);

    let summary = match &cli.output {
        Some(path) => {
            let mut reporter = Reporter::new(FileSink::open(path)?, config.render_options());
            pass.run(&mut reporter)?
        }
        None => {
            let stdout = WriterSink::new(io::stdout().lock(), "stdout");
            let mut reporter = Reporter::new(stdout, config.render_options());
            pass.run(&mut reporter)?
        }
    };

    for (rule, count) in &summary.per_rule {
        info!("{rule} {}: {count} findings", rule.label());
    }
    info!("{} findings in total", summary.total());
    Ok(())
}
