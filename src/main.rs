use cartera_format::cli;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};

#[derive(Parser)]
#[command(name = "cartera")]
#[command(about = "Rewrites a raw accounts-receivable detail workbook into the San Benito portfolio report.")]
#[command(long_about = "Cartera - San Benito portfolio report formatter

Reads the first sheet of INPUT (.xlsx) as the raw accounts-receivable detail
report and writes the formatted workbook to OUTPUT:

  Cartera_CxC_Det_Comple   pruned columns, cleared labels, grand totals,
                           overdue percentage, customer names filled down
  Cartera_CxC_Res_Comp ... placeholder auxiliary sheets

CONFIGURATION:
  Business constants (labels, keywords, pruned and summed columns, auxiliary
  sheet names) can be overridden with a YAML file:

    company_name: Ferreteria y Madereria San Benito
    sum_columns: [G, H, I, J, K, L, M, N, O]

LOGGING:
  Progress is logged to stderr. Use --verbose for step-by-step output or set
  RUST_LOG (e.g. RUST_LOG=cartera_format=debug).

EXAMPLES:
  cartera cartera.xlsx salida/cartera_formato.xlsx
  cartera cartera.xlsx out.xlsx --config sucursal.yaml

Exit status is 0 on success and 1 on any failure.")]
#[command(version)]
struct Cli {
    /// Source workbook (.xlsx)
    input: Option<PathBuf>,

    /// Destination workbook; missing parent directories are created
    output: Option<PathBuf>,

    /// Further positional arguments are accepted and ignored
    #[arg(hide = true)]
    extra: Vec<String>,

    /// YAML file overriding the report configuration
    #[arg(short, long, env = "CARTERA_CONFIG")]
    config: Option<PathBuf>,

    /// Show step-by-step processing logs
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "cartera=debug,cartera_format=debug"
    } else {
        "cartera=info,cartera_format=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Help and version text go to stdout
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            init_tracing(false);
            error!("Processing failed: {}", e.to_string().trim_end());
            return ExitCode::from(1);
        }
    };
    init_tracing(args.verbose);

    if !args.extra.is_empty() {
        warn!("Ignoring extra arguments: {}", args.extra.join(" "));
    }

    match cli::process(args.input, args.output, args.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Processing failed: {}", e);
            ExitCode::from(1)
        }
    }
}
