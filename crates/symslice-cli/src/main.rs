use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process;
use symslice_core::{parse_slice, unpack_slice, Error, ErrorKind, ExtInt, SymVar, UnpackedSlice};
use tracing_subscriber::EnvFilter;

/// symslice — slice unpacking with symbolic endpoints
///
/// Resolve `start:stop:step` slices the way a tensor indexing operator does.
#[derive(Parser)]
#[command(name = "symslice", version, about, long_about = None)]
struct Cli {
    /// Log normalization decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Unpack a slice literal such as `::-1` or `s0:10:2`
    Unpack {
        /// Slice literal (`start:stop[:step]`, symbols allowed for start/stop)
        #[arg(allow_hyphen_values = true)]
        slice: String,
        /// Also clamp against a sequence of this length
        #[arg(long)]
        len: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Commands::Unpack { slice, len, json } => match run_unpack(&slice, len, json) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                exit_code_for(&e)
            }
        },
        Commands::Version => {
            println!(
                "symslice {} (symslice-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            );
            0
        }
    };

    process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("logging already initialized: {}", err);
    }
}

/// 1 = slice rejected, 2 = malformed input
fn exit_code_for(err: &Error) -> i32 {
    match err.kind() {
        ErrorKind::Syntax => 2,
        _ => 1,
    }
}

fn run_unpack(literal: &str, len: Option<usize>, json: bool) -> symslice_core::Result<()> {
    let desc = parse_slice(literal)?;
    tracing::debug!(?desc, "parsed slice literal");
    let unpacked = unpack_slice(&desc)?;
    let adjusted = len.map(|n| unpacked.adjust_indices(n)).transpose()?;

    if json {
        let mut output = unpacked_json(&unpacked);
        if let Some(adjusted) = adjusted {
            output["adjusted"] = serde_json::json!({
                "start": adjusted.start,
                "stop": adjusted.stop,
                "step": adjusted.step,
                "len": adjusted.len,
                "indices": adjusted.iter().collect::<Vec<_>>(),
            });
        }
        println!("{:#}", output);
        return Ok(());
    }

    println!(
        "start={} stop={} step={}",
        unpacked.start, unpacked.stop, unpacked.step
    );
    if let Some(adjusted) = adjusted {
        println!(
            "{} start={} stop={} step={} len={}",
            "adjusted:".green().bold(),
            adjusted.start,
            adjusted.stop,
            adjusted.step,
            adjusted.len
        );
        let indices: Vec<String> = adjusted.iter().map(|i| i.to_string()).collect();
        println!("indices: [{}]", indices.join(", "));
    }
    Ok(())
}

fn unpacked_json(unpacked: &UnpackedSlice<SymVar>) -> serde_json::Value {
    serde_json::json!({
        "start": ext_json(&unpacked.start),
        "stop": ext_json(&unpacked.stop),
        "step": ext_json(&unpacked.step),
        "symbolic": !unpacked.is_concrete(),
    })
}

fn ext_json(value: &ExtInt<SymVar>) -> serde_json::Value {
    match value {
        ExtInt::Int(v) => serde_json::json!(v),
        ExtInt::Sym(s) => serde_json::json!(s.to_string()),
    }
}
