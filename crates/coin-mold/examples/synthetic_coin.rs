//! Example: build a mold kit from a generated coin design.
//!
//! Draws a simple emblem (concentric rings around a star) with the raster
//! primitives, runs it through the mold pipeline in both vent styles and
//! writes the plates plus a JSON timing report to the output directory.
//!
//! Run from the workspace root:
//!   cargo run -p coin-mold --example synthetic_coin -- --help
//!   cargo run -p coin-mold --example synthetic_coin -- --size 400

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use coin_mold::{
    AssemblySummary, CoinSources, Image, MoldConfig, Point2i, VentStyle, fill_circle,
    fill_convex_polygon, make_coin, stroke_circle,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(about = "Generate mold plates for a synthetic coin design")]
struct Args {
    /// Side length of the square design in pixels
    #[arg(long, default_value_t = 300)]
    size: usize,

    /// Threshold with Otsu instead of keeping the grayscale shading
    #[arg(long)]
    no_dithering: bool,

    #[arg(long, default_value = "synthetic_out")]
    out_dir: PathBuf,
}

#[derive(Serialize)]
struct StyleReport {
    base: String,
    elapsed_ms: f64,
    summary: AssemblySummary,
}

fn emblem(size: usize) -> Image<u8> {
    let mut img = Image::new_fill(size, size, 255u8);
    let c = (size / 2) as i64;
    let r = (size / 2) as u32;
    {
        let mut view = img.as_view_mut();
        stroke_circle(&mut view, Point2i::new(c, c), r * 4 / 5, 4, 40);
        stroke_circle(&mut view, Point2i::new(c, c), r * 3 / 5, 2, 90);
        fill_circle(&mut view, Point2i::new(c, c), r / 8, 0);

        // Four-pointed star as two thin diamonds.
        let arm = (r / 2) as i64;
        let waist = (r / 10).max(1) as i64;
        for (dx, dy) in [(arm, waist), (waist, arm)] {
            let diamond = [
                Point2i::new(c - dx, c),
                Point2i::new(c, c - dy),
                Point2i::new(c + dx, c),
                Point2i::new(c, c + dy),
            ];
            fill_convex_polygon(&mut view, &diamond, 128);
        }
    }
    img
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let design = emblem(args.size);
    let mut reports = Vec::new();

    for (style, base) in [
        (VentStyle::TopConverging, "SyntheticTop"),
        (VentStyle::SideConverging, "SyntheticSide"),
    ] {
        let config = MoldConfig {
            no_dithering: args.no_dithering,
            vent_style: style,
            ..MoldConfig::default()
        };

        let t0 = Instant::now();
        let coin = make_coin(CoinSources::Single(design.clone()), &config)
            .with_context(|| format!("building {base}"))?;
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

        let paths = coin.save(&args.out_dir, base)?;
        println!(
            "{base}: {}x{} plates in {elapsed_ms:.2} ms -> {}",
            coin.front.width(),
            coin.front.height(),
            paths.middle.display()
        );

        reports.push(StyleReport {
            base: base.to_string(),
            elapsed_ms,
            summary: coin.summary(),
        });
    }

    let json_path = args.out_dir.join("synthetic_report.json");
    let json = serde_json::to_string_pretty(&reports).context("serializing report")?;
    std::fs::write(&json_path, json)
        .with_context(|| format!("writing {}", json_path.display()))?;
    println!("report -> {}", json_path.display());

    Ok(())
}
