//! Renders a few palettes per sentiment category into a static HTML page so
//! profile tweaks can be eyeballed without running the server.

#![forbid(unsafe_code)]

mod html;

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
use emotion_palette_back::{
    config::AppConfig,
    palette::{PaletteResult, SentimentCategory},
};
use html::write_html_grid;
use rand::{SeedableRng, rngs::StdRng};

const SAMPLES_PER_CATEGORY: usize = 4;
const CONFIDENCES: [f64; SAMPLES_PER_CATEGORY] = [0.3, 0.55, 0.75, 1.0];
const SEED_ENV: &str = "PALETTE_PREVIEW_SEED";
const DEFAULT_SEED: u64 = 7;

/// One rendered row of the preview page.
pub struct Section {
    pub category: SentimentCategory,
    pub palettes: Vec<PaletteResult>,
}

pub fn run() -> Result<()> {
    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"));
    let out_dir = target_dir.join("tool-palette-preview");
    fs::create_dir_all(&out_dir)?;

    let seed = match env::var(SEED_ENV) {
        Ok(value) => value
            .parse::<u64>()
            .with_context(|| format!("{SEED_ENV} must be an unsigned integer"))?,
        Err(_) => DEFAULT_SEED,
    };

    let config = AppConfig::load().context("loading configuration")?;
    let engine = config.engine();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut sections = Vec::with_capacity(SentimentCategory::ALL.len());
    for category in SentimentCategory::ALL {
        let palettes = CONFIDENCES
            .iter()
            .map(|&confidence| {
                engine.generate_for(category, confidence, config.default_color_count, &mut rng)
            })
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("generating {category} palettes"))?;
        sections.push(Section { category, palettes });
    }

    let path = write_html_grid(
        &format!("Emotion palettes (seed {seed})"),
        &sections,
        out_dir.join("palettes.html"),
    )?;

    println!("Generated palette preview in {}", path.display());
    Ok(())
}
