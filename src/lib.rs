//! visdrone2yolo: VisDrone DET annotations to YOLO label files.
//!
//! VisDrone annotation lines describe each object as a pixel-space
//! top-left box plus score, category, truncation and occlusion. This crate
//! rewrites them as normalized center boxes, one label file per image,
//! using each paired image's dimensions as the normalization denominators.
//!
//! # Modules
//!
//! - [`ir`]: Row and box types for both formats, plus line-level I/O
//! - [`conversion`]: Per-split conversion and its structured report
//! - [`config`]: Split triples and plan files
//! - [`probe`]: Image dimension probing
//! - [`error`]: Error types for visdrone2yolo operations

pub mod config;
pub mod conversion;
pub mod error;
pub mod ir;
pub mod probe;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use config::{ConversionPlan, SplitConfig, DEFAULT_OUTPUT_NAME};
use conversion::ConversionReport;
use probe::{DecodeProbe, HeaderProbe, ImageProbe};

pub use conversion::{convert, convert_split};
pub use error::ConvertError;

/// The visdrone2yolo CLI application.
#[derive(Parser)]
#[command(name = "visdrone2yolo")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Convert a single image/annotation/output directory triple.
    Convert(ConvertArgs),
    /// Convert every split listed in a YAML plan file.
    Plan(PlanArgs),
    /// Convert the train, val and test-dev splits of a VisDrone2019 DET root.
    Visdrone(VisdroneArgs),
}

/// Arguments for the convert subcommand.
#[derive(clap::Args)]
struct ConvertArgs {
    /// Directory containing the paired .jpg/.png images.
    #[arg(long)]
    images: PathBuf,

    /// Directory containing the VisDrone *.txt annotation files.
    #[arg(long)]
    annotations: PathBuf,

    /// Directory the YOLO label files are written to (created if absent).
    #[arg(long)]
    output: PathBuf,

    /// Split name shown in the summary.
    #[arg(long, default_value = "default")]
    name: String,

    #[command(flatten)]
    run: RunArgs,
}

/// Arguments for the plan subcommand.
#[derive(clap::Args)]
struct PlanArgs {
    /// YAML plan file; relative paths resolve against its directory.
    plan: PathBuf,

    #[command(flatten)]
    run: RunArgs,
}

/// Arguments for the visdrone subcommand.
#[derive(clap::Args)]
struct VisdroneArgs {
    /// Directory holding the VisDrone2019-DET-<split> directories.
    root: PathBuf,

    /// Name of the label directory created inside each split directory.
    #[arg(long, default_value = DEFAULT_OUTPUT_NAME)]
    output_name: String,

    #[command(flatten)]
    run: RunArgs,
}

/// Options shared by every conversion subcommand.
#[derive(clap::Args)]
struct RunArgs {
    /// Exit non-zero if any file or line was skipped.
    #[arg(long, env = "VISDRONE2YOLO_STRICT")]
    strict: bool,

    /// Read image sizes from file headers only instead of decoding each
    /// image. Faster, but images with a corrupt body are not skipped.
    #[arg(long)]
    header_only: bool,

    /// Output format for the per-split summary.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    report: ReportFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Run the visdrone2yolo CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ConvertError> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Convert(args)) => {
            let plan = ConversionPlan::single(SplitConfig::new(
                args.name,
                args.images,
                args.annotations,
                args.output,
            ));
            run_plan(&plan, &args.run)
        }
        Some(Commands::Plan(args)) => {
            let plan = ConversionPlan::from_yaml_file(&args.plan)?;
            run_plan(&plan, &args.run)
        }
        Some(Commands::Visdrone(args)) => {
            let plan = ConversionPlan::visdrone(&args.root, &args.output_name);
            run_plan(&plan, &args.run)
        }
        None => {
            println!("visdrone2yolo {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Convert VisDrone DET annotations to YOLO label files.");
            println!();
            println!("Run 'visdrone2yolo --help' for usage information.");
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Convert each split in order; a failed split does not stop the others.
fn run_plan(plan: &ConversionPlan, args: &RunArgs) -> Result<(), ConvertError> {
    let probe: &dyn ImageProbe = if args.header_only {
        &HeaderProbe
    } else {
        &DecodeProbe
    };
    let mut reports: Vec<ConversionReport> = Vec::with_capacity(plan.splits.len());
    let mut failed = 0usize;

    for split in &plan.splits {
        match convert_split(split, probe) {
            Ok(report) => {
                for issue in &report.issues {
                    warn!(split = %report.split, code = ?issue.code, "skipping {}", issue);
                }
                if args.report == ReportFormat::Text {
                    println!("{}", report);
                }
                reports.push(report);
            }
            Err(err) => {
                error!(split = %split.name, "{}", err);
                failed += 1;
            }
        }
    }

    if args.report == ReportFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if failed > 0 {
        return Err(ConvertError::SplitsFailed { failed });
    }

    let skipped: usize = reports.iter().map(ConversionReport::skipped_count).sum();
    if args.strict && skipped > 0 {
        return Err(ConvertError::StrictSkipped { skipped });
    }

    Ok(())
}
