use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorteller::models::{
    resolve_hex_strings, AppConfig, ConfigOverrides, PaletteDocument, CONFIG_FILE_ENV,
};
use colorteller::services::{
    prepare_paths, run_benchmark, run_chain, to_json, write_json, BenchmarkRequest,
};
use palette_metrics::{MetricKind, ReferenceColor};

#[derive(Parser)]
#[command(name = "colorteller")]
#[command(about = "Colorteller - perceptual distance and lightness benchmarks for color palettes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute palette metrics and print or write them as JSON
    Benchmark {
        /// Color as hex, with or without '#' (repeatable)
        #[arg(short = 'x', long = "hex")]
        hex: Vec<String>,

        /// Palette JSON document ({"colors": [{"hex": ...}]})
        #[arg(short, long)]
        palette: Option<PathBuf>,

        /// Metric to compute (repeatable, default from config)
        #[arg(short, long = "metric")]
        metrics: Vec<String>,

        /// CIEDE2000 distance above which colors count as noticeably different
        #[arg(short, long)]
        threshold: Option<f64>,

        #[arg(long)]
        min_lightness: Option<f64>,

        #[arg(long)]
        max_lightness: Option<f64>,

        /// Write compact JSON to this file instead of stdout
        #[arg(long, conflicts_with = "target")]
        metrics_to: Option<PathBuf>,

        /// Output folder, created if missing; metrics go to metrics.json inside it
        #[arg(long)]
        target: Option<PathBuf>,

        /// Config file; must exist when given (defaults to $CONFIG_FILE)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the distances between neighbouring colors
    Chain {
        /// Color as hex, with or without '#' (repeatable)
        #[arg(short = 'x', long = "hex")]
        hex: Vec<String>,

        /// Palette JSON document ({"colors": [{"hex": ...}]})
        #[arg(short, long)]
        palette: Option<PathBuf>,

        /// Sort colors by distance to a reference first: white, black or a hex color
        #[arg(short, long)]
        sort: Option<ReferenceColor>,

        #[arg(short, long)]
        threshold: Option<f64>,

        /// Config file; must exist when given (defaults to $CONFIG_FILE)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Write the default config.yaml for customization
    Init {
        /// Destination (defaults to $CONFIG_FILE, then ./config.yaml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    match cli.command {
        Some(Commands::Benchmark {
            hex,
            palette,
            metrics,
            threshold,
            min_lightness,
            max_lightness,
            metrics_to,
            target,
            config,
        }) => {
            let overrides = ConfigOverrides {
                metrics,
                noticeable_threshold: threshold,
                min_lightness,
                max_lightness,
            };
            run_benchmark_command(
                hex,
                palette.as_deref(),
                overrides,
                metrics_to,
                target.as_deref(),
                config.as_deref(),
            )
        }
        Some(Commands::Chain {
            hex,
            palette,
            sort,
            threshold,
            config,
        }) => run_chain_command(hex, palette.as_deref(), sort, threshold, config.as_deref()),
        Some(Commands::Init { config, force }) => run_init_command(config, force),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout stays clean JSON
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorteller=warn,palette_metrics=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run_benchmark_command(
    hex: Vec<String>,
    palette: Option<&Path>,
    overrides: ConfigOverrides,
    metrics_to: Option<PathBuf>,
    target: Option<&Path>,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let config = AppConfig::load_for_command(config)?.with_overrides(overrides);

    let document = palette.map(PaletteDocument::load).transpose()?;
    let hex_strings = resolve_hex_strings(hex, document)?;

    let request = BenchmarkRequest::from_config(hex_strings, &config)?;
    let results = run_benchmark(&request)?;

    let metrics_to = match (metrics_to, target) {
        (Some(path), _) => Some(path),
        (None, Some(target)) => Some(prepare_paths(target)?.metrics_to),
        (None, None) => None,
    };

    match metrics_to {
        Some(path) => {
            write_json(&path, &results)?;
            eprintln!("Wrote {} metrics to {}", results.len(), path.display());
        }
        None => println!("{}", to_json(&results, true)?),
    }

    Ok(())
}

fn run_chain_command(
    hex: Vec<String>,
    palette: Option<&Path>,
    sort: Option<ReferenceColor>,
    threshold: Option<f64>,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let config = AppConfig::load_for_command(config)?.with_overrides(ConfigOverrides {
        noticeable_threshold: threshold,
        ..ConfigOverrides::default()
    });

    let document = palette.map(PaletteDocument::load).transpose()?;
    let hex_strings = resolve_hex_strings(hex, document)?;

    let chain = run_chain(&hex_strings, sort, config.noticeable_threshold)?;
    println!("{}", to_json(&chain, true)?);

    Ok(())
}

fn run_init_command(config: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = AppConfig::resolve_path(config).unwrap_or_else(|| PathBuf::from("config.yaml"));

    AppConfig::write_default(&path, force)?;
    println!("Extracted config:");
    println!("  + {}", path.display());

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var(CONFIG_FILE_ENV).ok();

    println!("Colorteller v{VERSION}");
    println!("Perceptual distance and lightness benchmarks for color palettes\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("colorteller=warn (default)")
    );

    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "built-in defaults (file not found)".to_string(),
        None => "built-in defaults".to_string(),
    };
    println!("\nConfig: {config_source}");

    let config = AppConfig::load(config_file.as_deref().map(Path::new));
    println!("  metrics              = {}", config.metrics.join(", "));
    println!("  noticeable_threshold = {}", config.noticeable_threshold);
    println!(
        "  lightness bounds     = {} ..= {}",
        config.min_lightness, config.max_lightness
    );

    println!("\nAvailable metrics: {}", MetricKind::valid_names());

    println!("\nCommands:");
    println!("  colorteller benchmark   Compute palette metrics as JSON");
    println!("  colorteller chain       Distances between neighbouring colors");
    println!("  colorteller init        Write the default config.yaml");
    println!("\nRun 'colorteller --help' for more details.");
}
