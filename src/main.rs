use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use jointkit::settings::{BoxStyle, Config, ExportFormat};
use jointkit::{init_logging, render, write_output, BUILD_DATE, VERSION};
use tracing::info;

/// Generate finger-joint box panels for laser and CNC cutting
#[derive(Parser, Debug)]
#[command(name = "jointkit", version, about)]
struct Cli {
    /// Preset file (.toml or .json); the default preset is used when it exists
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write the drawing here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Store the merged settings as a preset
    #[arg(long, global = true)]
    save_config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Closed box with finger joints on all twelve edges
    Simple(BoxArgs),
    /// Box whose walls end in a straight top rim
    StraightTop(BoxArgs),
    /// Box with feet that nest into the slots of the box below
    Stackable(BoxArgs),
}

#[derive(Args, Debug, Default)]
struct BoxArgs {
    /// Outer size in mm
    #[arg(long, num_args = 3, value_names = ["LENGTH", "WIDTH", "HEIGHT"])]
    bound: Option<Vec<f64>>,

    /// Material thickness in mm
    #[arg(short = 'T', long)]
    thickness: Option<f64>,

    /// Laser kerf in mm
    #[arg(long)]
    kerf: Option<f64>,

    /// Fingers along length, width and height; a single value applies to all
    #[arg(long = "finger-count", num_args = 1..=3)]
    finger_counts: Option<Vec<u32>>,

    /// Minimum notch width in multiples of the thickness
    #[arg(long)]
    k_factor: Option<u32>,

    /// Notch to finger ratio; overrides the finger counts
    #[arg(long)]
    ratio: Option<f64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Svg,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Svg => ExportFormat::Svg,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

impl BoxArgs {
    fn apply(&self, config: &mut Config) {
        let params = &mut config.box_settings;
        if let Some([length, width, height]) = self.bound.as_deref() {
            params.length = *length;
            params.width = *width;
            params.height = *height;
        }
        if let Some(t) = self.thickness {
            params.thickness = t;
        }
        if self.kerf.is_some() {
            params.kerf = self.kerf;
        }
        match self.finger_counts.as_deref() {
            Some([n]) => params.finger_counts = [*n; 3],
            Some(counts) => {
                for (slot, n) in params.finger_counts.iter_mut().zip(counts) {
                    *slot = *n;
                }
            }
            None => {}
        }
        if let Some(k) = self.k_factor {
            params.k_factor = k;
        }
        if self.ratio.is_some() {
            params.finger_ratio = self.ratio;
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load_from_file(path)
            .with_context(|| format!("failed to load {}", path.display()));
    }
    match Config::default_path() {
        Ok(path) if path.exists() => Config::load_from_file(&path)
            .with_context(|| format!("failed to load {}", path.display())),
        _ => Ok(Config::new()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    info!("jointkit {} ({})", VERSION, BUILD_DATE);

    let mut config = load_config(cli.config.as_ref())?;
    if let Some(command) = &cli.command {
        let (style, args) = match command {
            Command::Simple(args) => (BoxStyle::Simple, args),
            Command::StraightTop(args) => (BoxStyle::StraightTop, args),
            Command::Stackable(args) => (BoxStyle::Stackable, args),
        };
        config.style = style;
        args.apply(&mut config);
    }
    if let Some(format) = cli.format {
        config.export.format = format.into();
    }
    config.validate()?;

    if let Some(path) = &cli.save_config {
        config.save_to_file(path)?;
        info!("saved preset to {}", path.display());
    }

    let drawing = render(&config)?;
    match &cli.output {
        Some(path) => {
            write_output(&config, path, &drawing)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(drawing.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
