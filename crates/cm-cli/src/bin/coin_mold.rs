use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use cm_mold::{CoinAssembly, Interpolation, MoldConfig, VentStyle, make_coin_from_paths};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "coin_mold")]
#[command(about = "Format coin designs into front, middle and back mold plates")]
#[command(version)]
struct Cli {
    /// Front design image.
    front: PathBuf,

    /// Back design image. When omitted the front design is used for both faces.
    back: Option<PathBuf>,

    /// Base name of the output plates (<BASE>Front.png, <BASE>Middle.png, <BASE>Back.png).
    #[arg(short = 'o', long = "output", default_value = "Output")]
    base: String,

    /// Directory receiving the plates.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Scale the designs by this factor before masking.
    #[arg(short, long, allow_negative_numbers = true)]
    scale: Option<f64>,

    /// Coin radius in pixels; defaults to half the smaller design dimension.
    #[arg(short, long)]
    diameter: Option<u32>,

    /// Threshold the designs with Otsu's method instead of keeping dithered grayscale.
    #[arg(short, long)]
    no_dithering: bool,

    /// Shape of the pour channel.
    #[arg(long, value_enum)]
    vent_style: Option<VentStyleArg>,

    #[arg(long, value_enum)]
    interpolation: Option<InterpolationArg>,

    /// JSON file with a mold configuration; flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write <BASE>.json describing the plate geometry.
    #[arg(long)]
    summary: bool,

    /// Vectorize the middle plate into <BASE>Middle.svg with autotrace.
    #[arg(long)]
    trace: bool,

    #[arg(long, default_value = "autotrace")]
    autotrace_bin: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VentStyleArg {
    Top,
    Side,
}

impl From<VentStyleArg> for VentStyle {
    fn from(arg: VentStyleArg) -> Self {
        match arg {
            VentStyleArg::Top => VentStyle::TopConverging,
            VentStyleArg::Side => VentStyle::SideConverging,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InterpolationArg {
    Nearest,
    Bilinear,
}

impl From<InterpolationArg> for Interpolation {
    fn from(arg: InterpolationArg) -> Self {
        match arg {
            InterpolationArg::Nearest => Interpolation::Nearest,
            InterpolationArg::Bilinear => Interpolation::Bilinear,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    ensure_file_exists(&cli.front, "front")?;
    if let Some(back) = &cli.back {
        ensure_file_exists(back, "back")?;
    }

    let config = build_config(cli)?;
    let coin = make_coin_from_paths(&cli.front, cli.back.as_deref(), &config)
        .with_context(|| format!("making coin from {}", cli.front.display()))?;

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating output directory {}", cli.out_dir.display()))?;
    let paths = coin
        .save(&cli.out_dir, &cli.base)
        .context("writing mold plates")?;

    if cli.summary {
        write_json(&cli.out_dir.join(format!("{}.json", cli.base)), &coin.summary())?;
    }

    if cli.trace {
        let svg = paths.middle.with_extension("svg");
        run_autotrace(&cli.autotrace_bin, &paths.middle, &svg)?;
    }

    report(&coin, &cli.out_dir, &cli.base);
    Ok(())
}

fn build_config(cli: &Cli) -> Result<MoldConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => MoldConfig::default(),
    };

    if let Some(scale) = cli.scale {
        config.scale = scale;
    }
    if cli.diameter.is_some() {
        config.diameter = cli.diameter;
    }
    if cli.no_dithering {
        config.no_dithering = true;
    }
    if let Some(style) = cli.vent_style {
        config.vent_style = style.into();
    }
    if let Some(interp) = cli.interpolation {
        config.interpolation = interp.into();
    }

    config.validate().context("validating mold configuration")?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<MoldConfig> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing mold config {}", path.display()))
}

fn run_autotrace(bin: &Path, png: &Path, svg: &Path) -> Result<()> {
    let status = Command::new(bin)
        .arg("--output-format")
        .arg("svg")
        .arg("--output-file")
        .arg(svg)
        .arg("--color-count")
        .arg("2")
        .arg(png)
        .status()
        .with_context(|| format!("launching {}", bin.display()))?;

    if !status.success() {
        bail!(
            "{} failed on {} with {}.",
            bin.display(),
            png.display(),
            status
        );
    }

    tracing::info!(svg = %svg.display(), "middle plate vectorized");
    Ok(())
}

fn report(coin: &CoinAssembly, out_dir: &Path, base: &str) {
    tracing::info!(
        out_dir = %out_dir.display(),
        base,
        width = coin.front.width(),
        height = coin.front.height(),
        diameter = coin.diameter,
        "done"
    );
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
