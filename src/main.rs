use anyhow::Context;
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lecroy_colorize::assets::{AssetLoader, DEFAULT_SETTINGS};
use lecroy_colorize::models::SettingsFile;
use lecroy_colorize::rendering::EncodeOptions;
use lecroy_colorize::services::{ColorizeService, GridLibrary};
use scope_recolor::{RgbImage, Settings};

#[derive(Parser)]
#[command(name = "lecroy-colorize")]
#[command(about = "Colorize screen captures from LeCroy 93xx oscilloscopes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Colorize a capture and write it as PNG
    Colorize {
        /// Input capture (any common image format)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Settings file laid over the built-in defaults
        #[arg(short, long, env = "LECROY_SETTINGS")]
        settings: Option<PathBuf>,

        /// Named color style from the settings
        #[arg(long)]
        style: Option<String>,

        /// Do not reconstruct trace pixels hidden by grid lines
        #[arg(short = 'r', long)]
        no_reconstruction: bool,

        /// Directory holding the grid bitmaps
        #[arg(long, env = "LECROY_DATA_DIR", default_value = "data")]
        data_dir: PathBuf,

        /// Re-compress the output with oxipng
        #[arg(long)]
        optimize: bool,
    },
    /// Identify the grid layout of one or more captures
    Identify {
        /// Input captures
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Settings file laid over the built-in defaults
        #[arg(short, long, env = "LECROY_SETTINGS")]
        settings: Option<PathBuf>,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// List the known layouts in classification order
    Layouts {
        /// Settings file laid over the built-in defaults
        #[arg(short, long, env = "LECROY_SETTINGS")]
        settings: Option<PathBuf>,
    },
    /// Write the built-in default settings to a file for customization
    Init {
        /// Where to write the settings
        #[arg(long, default_value = DEFAULT_SETTINGS)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // CLI logging: no timestamps
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lecroy_colorize=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Colorize {
            input,
            output,
            settings,
            style,
            no_reconstruction,
            data_dir,
            optimize,
        } => run_colorize_command(
            &input,
            &output,
            settings,
            style.as_deref(),
            !no_reconstruction,
            data_dir,
            optimize,
        ),
        Commands::Identify {
            inputs,
            settings,
            json,
        } => run_identify_command(&inputs, settings, json),
        Commands::Layouts { settings } => run_layouts_command(settings),
        Commands::Init { output, force } => run_init_command(&output, force),
    }
}

fn load_settings(settings_file: Option<PathBuf>, style: Option<&str>) -> anyhow::Result<Settings> {
    let loader = AssetLoader::new(settings_file);
    SettingsFile::load(&loader, style).with_context(|| match loader.settings_file() {
        Some(path) => format!("Failed to load settings from {}", path.display()),
        None => "Failed to load built-in settings".to_string(),
    })
}

/// Colorize one capture
fn run_colorize_command(
    input: &Path,
    output: &Path,
    settings_file: Option<PathBuf>,
    style: Option<&str>,
    reconstruct: bool,
    data_dir: PathBuf,
    optimize: bool,
) -> anyhow::Result<()> {
    let settings = load_settings(settings_file, style)?;
    let grids = GridLibrary::new(data_dir);
    if grids.data_dir().is_dir() {
        tracing::debug!(data_dir = %grids.data_dir().display(), "Grid bitmap directory");
    } else {
        tracing::warn!(data_dir = %grids.data_dir().display(), "Grid bitmap directory does not exist");
    }

    let service = ColorizeService::new(&settings, grids)
        .reconstruct(reconstruct)
        .encode_options(EncodeOptions { optimize });

    let result = service
        .colorize_file(input, output)
        .with_context(|| format!("Failed to colorize {}", input.display()))?;

    println!(
        "{} -> {} ({}, {} channel / {} menu boxes, {} pixels reconstructed)",
        input.display(),
        output.display(),
        result.layout_id,
        result.channel_boxes.len(),
        result.menu_boxes.len(),
        result.reconstructed
    );
    Ok(())
}

/// Classify captures without colorizing them
fn run_identify_command(
    inputs: &[PathBuf],
    settings_file: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let settings = load_settings(settings_file, None)?;
    // identify never loads grid bitmaps
    let service = ColorizeService::new(&settings, HashMap::<String, RgbImage>::new());

    let mut failures = 0;
    for input in inputs {
        match service.identify_file(input) {
            Ok(id) if json => println!("{}", serde_json::to_string(&id)?),
            Ok(id) => println!(
                "{}: {} ({}) - {} channel / {} menu boxes",
                input.display(),
                id.layout,
                id.description,
                id.channel_boxes.len(),
                id.menu_boxes.len()
            ),
            Err(e) => {
                failures += 1;
                tracing::error!(file = %input.display(), %e, "Cannot identify capture");
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} captures could not be identified", inputs.len());
    }
    Ok(())
}

/// List layouts in classification order
fn run_layouts_command(settings_file: Option<PathBuf>) -> anyhow::Result<()> {
    let settings = load_settings(settings_file, None)?;

    println!("Layouts (classification order):\n");
    for layout in settings.layouts() {
        let boxes: Vec<String> = layout.grid_boxes.iter().map(|b| b.to_string()).collect();
        println!(
            "  {:<10} {:<11} {:<14} {}",
            layout.id,
            layout.kind.as_str(),
            layout.grid_image.file,
            layout.grid_image.description
        );
        println!("  {:<10} boxes: {}", "", boxes.join(" "));
    }
    Ok(())
}

/// Extract the default settings to the filesystem
fn run_init_command(output: &Path, force: bool) -> anyhow::Result<()> {
    let report = AssetLoader::init(output, force)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    for f in &report.written {
        println!("  + {f}");
    }
    if !report.skipped.is_empty() {
        println!("Skipped existing files (use --force to overwrite):");
        for f in &report.skipped {
            println!("  - {f}");
        }
    }
    Ok(())
}
