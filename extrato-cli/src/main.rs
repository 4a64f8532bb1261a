use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use extrato_batch::{BatchRunner, CsvSink, DumpLinesDir, JsonSink, LogLevel, TransactionSink};
use extrato_ingest::{LineSource, ScanOptions, TextFile, WordsFile};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;

use config::{Config, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "extrato", version, about = "Extract transactions from bank statement text")]
struct Cli {
    /// Config file (default: ~/.extrato/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the institutions that can be extracted
    Adapters,

    /// Extract transactions from one or more statement documents
    Extract {
        /// Institution id (see `extrato adapters`)
        #[arg(long)]
        bank: String,

        /// Year for statements that print day/month only
        #[arg(long)]
        year: Option<i32>,

        /// Inputs are positioned-word tables (y<TAB>x<TAB>text) instead of plain text
        #[arg(long)]
        layout: bool,

        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Output format (default: from config, csv)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Write each document's extracted lines to DIR for inspection
        #[arg(long, value_name = "DIR")]
        dump_lines: Option<PathBuf>,

        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config file if it does not exist
    Init,

    /// Print the effective configuration
    Show,
}

struct ExtractArgs {
    bank: String,
    year: Option<i32>,
    layout: bool,
    out: Option<PathBuf>,
    format: Option<OutputFormat>,
    dump_lines: Option<PathBuf>,
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = match cli.config {
        Some(p) => p,
        None => config::config_path()?,
    };
    tracing::debug!(path = %config_path.display(), "using config");

    match cli.command {
        Command::Adapters => {
            let cfg = config::load_config(&config_path)?;
            let registry = cfg.registry()?;
            for adapter in registry.iter() {
                println!("{:<18} {}", adapter.id(), adapter.name());
            }
        }

        Command::Extract {
            bank,
            year,
            layout,
            out,
            format,
            dump_lines,
            files,
        } => {
            let cfg = config::load_config(&config_path)?;
            extract(
                &cfg,
                ExtractArgs {
                    bank,
                    year,
                    layout,
                    out,
                    format,
                    dump_lines,
                    files,
                },
            )?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(&config_path)?,
            ConfigCommand::Show => {
                let cfg = config::load_config(&config_path)?;
                println!("# {}", config_path.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn extract(cfg: &Config, args: ExtractArgs) -> Result<()> {
    let registry = cfg.registry()?;
    let adapter = registry
        .get(&args.bank)
        .with_context(|| format!("unknown bank {:?} (see `extrato adapters`)", args.bank))?;

    let docs: Vec<Box<dyn LineSource>> = args
        .files
        .into_iter()
        .map(|path| -> Box<dyn LineSource> {
            if args.layout {
                Box::new(WordsFile::new(path))
            } else {
                Box::new(TextFile::new(path))
            }
        })
        .collect();

    let mut dump = args.dump_lines.map(DumpLinesDir::new);
    let mut runner = BatchRunner::new(adapter).with_options(ScanOptions { year: args.year });
    if let Some(dump) = dump.as_mut() {
        runner = runner.with_diagnostics(dump);
    }

    let report = runner.run(
        &docs,
        |percent: u8| eprintln!("[{percent:>3}%]"),
        |level: LogLevel, message: &str| match level {
            LogLevel::Info => eprintln!("{message}"),
            LogLevel::Error => eprintln!("error: {message}"),
        },
    );

    if !report.produced_data() {
        bail!("no transactions extracted from {} document(s)", docs.len());
    }

    let writer: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let format = args.format.unwrap_or(cfg.output.format);
    let mut sink: Box<dyn TransactionSink> = match format {
        OutputFormat::Csv => Box::new(
            CsvSink::new(writer)
                .delimiter(cfg.output.delimiter_byte()?)
                .money_format(cfg.money.clone())
                .date_format(cfg.output.date_format.clone()),
        ),
        OutputFormat::Json => Box::new(JsonSink::new(writer)),
    };
    sink.write(adapter.columns(), &report.transactions)?;

    if let Some(path) = &args.out {
        eprintln!(
            "Wrote {} transaction(s) to {}",
            report.transactions.len(),
            path.display()
        );
    }
    Ok(())
}
