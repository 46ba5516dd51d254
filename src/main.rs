use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hexpack::{Progress, ScanOrder};
use imagehex::models::{AppConfig, ColorMode, CONFIG_ENV_VAR};
use imagehex::services::{open_report, ConversionService, ImageLoader};

#[derive(Parser)]
#[command(name = "imagehex")]
#[command(version)]
#[command(about = "Convert images to 2-bit-per-channel hex reports")]
struct Cli {
    /// YAML config file (overrides IMAGEHEX_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image into a hex report
    Convert {
        /// Input image (PNG, JPEG, BMP, ...)
        input: PathBuf,

        /// Report file (default: output.txt next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Colour mode applied before encoding
        #[arg(short, long, value_enum)]
        mode: Option<ColorMode>,

        /// Scan order: "row-major" or "column-major"
        #[arg(long, value_parser = parse_scan_order)]
        order: Option<ScanOrder>,

        /// Open the report after writing it
        #[arg(long)]
        open: bool,

        /// Do not print per-row progress
        #[arg(short, long)]
        quiet: bool,
    },
    /// Show image size and format
    Info {
        /// Input image
        input: PathBuf,
    },
    /// Open an existing report with the system viewer
    Open {
        /// Report file
        output: PathBuf,
    },
}

fn parse_scan_order(s: &str) -> Result<ScanOrder, hexpack::ParseScanOrderError> {
    s.parse()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imagehex=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            mode,
            order,
            open,
            quiet,
        }) => {
            let config = load_config(cli.config.as_deref())?.with_overrides(mode, order);
            run_convert_command(config, &input, output, open, quiet)
        }
        Some(Commands::Info { input }) => run_info_command(&input),
        Some(Commands::Open { output }) => {
            open_report(&output)?;
            Ok(())
        }
        None => {
            run_status_command(cli.config.as_deref())?;
            Ok(())
        }
    }
}

/// Explicit `--config` must load; the env var falls back to defaults
fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    Ok(match path {
        Some(path) => AppConfig::load_file(path)?,
        None => AppConfig::load_from_env(),
    })
}

fn run_convert_command(
    config: AppConfig,
    input: &Path,
    output: Option<PathBuf>,
    open: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let service = ConversionService::new(config);
    let output = output.unwrap_or_else(|| service.default_output_for(input));

    let summary = service.convert_with_progress(input, &output, |progress| {
        if !quiet {
            print_progress(progress);
        }
    })?;

    let config = service.config();
    println!(
        "Wrote {} ({} rows x {} pixels, label {}, {} {})",
        summary.output.display(),
        summary.rows,
        summary.pixels_per_row,
        summary.label,
        config.color_mode,
        config.scan_order
    );

    if open {
        open_report(&summary.output)?;
    }

    Ok(())
}

fn print_progress(progress: Progress) {
    let mut stderr = std::io::stderr().lock();
    let _ = write!(
        stderr,
        "\rConverting: {}/{} rows ({:.0}%)",
        progress.completed,
        progress.total,
        progress.fraction() * 100.0
    );
    if progress.is_done() {
        let _ = writeln!(stderr);
    }
}

fn run_info_command(input: &Path) -> anyhow::Result<()> {
    let info = ImageLoader::new().probe(input)?;

    println!("{}", input.display());
    println!("  size:   {info} ({} pixels)", info.pixel_count());
    println!("  format: {}", info.format.as_deref().unwrap_or("unknown"));
    println!("  color:  {}", info.color_type);

    Ok(())
}

fn run_status_command(config_path: Option<&Path>) -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let env_config = std::env::var(CONFIG_ENV_VAR).ok();
    let config = load_config(config_path)?;

    println!("imagehex v{VERSION}");
    println!("Image to 2-bit-per-channel hex converter\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV_VAR} = {}",
        env_config.as_deref().unwrap_or("(not set)")
    );

    println!("\nEffective Configuration:");
    println!("  color_mode:  {}", config.color_mode);
    println!("  scan_order:  {}", config.scan_order);
    println!("  output_name: {}", config.output_name);

    println!("\nRun `imagehex --help` for commands.");
    Ok(())
}
