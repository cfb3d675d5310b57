use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use flagread::args::{read_all, FlagKey, FlagKind, FlagReader, FlagValue};
use flagread::config::{Config, OutputFormat};
use flagread::logging::init_tracing;

/// Exit code for `get --require` when the flag was not supplied.
const EXIT_ABSENT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "flagread", version, about = "Read --key and --key=value flags from an argument list")]
struct Cli {
    /// Config file (defaults to ~/.config/flagread/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read a single flag
    Get {
        /// Flag name without dashes (e.g. "port")
        key: String,

        /// Exit with status 2 when the flag is absent
        #[arg(long)]
        require: bool,

        /// Arguments to search, given after `--`
        #[arg(last = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Read every flag declared in the config file
    Check {
        /// Arguments to search, given after `--`
        #[arg(last = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List the flags declared in the config file
    List,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let format = cli
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.output.format);

    match cli.command {
        Command::Get { key, require, args } => {
            let key = FlagKey::parse(&key)?;
            let value = FlagReader::new(args).get_key(&key);
            info!(key = %key, value = %value, "flag read");
            print_value(&value, format)?;

            if require && value == FlagValue::Absent {
                return Ok(ExitCode::from(EXIT_ABSENT));
            }
        }
        Command::Check { args } => {
            let registry = config.registry()?;
            let report = read_all(&args, &registry);
            for warning in &report.warnings {
                eprintln!("warning: {}", warning);
            }
            match format {
                OutputFormat::Plain => {
                    for entry in &report.entries {
                        println!("{}={}", entry.key, entry.value);
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
            }
        }
        Command::List => {
            for def in config.registry()? {
                let kind = match def.kind {
                    FlagKind::Switch => "switch",
                    FlagKind::Valued => "valued",
                    FlagKind::Any => "any",
                };
                let default = def
                    .default
                    .as_deref()
                    .map(|d| format!(" (default: {})", d))
                    .unwrap_or_default();
                println!("{}\t{}\t{}{}", def.key.flag(), kind, def.description, default);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_value(value: &FlagValue, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => println!("{}", value),
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
    }
    Ok(())
}
