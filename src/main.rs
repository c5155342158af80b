use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use usps_digits::{
    combine_data_sets, print_image, DatasetCache, DigitLabel, PipelineConfig, PrintOptions,
    RandShuffler,
};

/// Build binarized train/test datasets from USPS digit grid images.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON pipeline configuration (data_root, source_template).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the source template is resolved against; overrides the config file.
    #[arg(long)]
    data_root: Option<PathBuf>,

    /// Digits to load, comma separated. Defaults to all ten.
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(0..=9))]
    digits: Vec<u8>,

    /// Shuffle the combined training and testing sets.
    #[arg(long)]
    randomize: bool,

    /// Seed for `--randomize`; OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print this many training samples after combining.
    #[arg(long, default_value_t = 0)]
    preview: usize,

    /// Print the dataset summary as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(root) = args.data_root {
        config.data_root = root;
    }

    let labels: Vec<DigitLabel> = if args.digits.is_empty() {
        DigitLabel::ALL.to_vec()
    } else {
        args.digits
            .iter()
            .map(|&d| DigitLabel::new(d))
            .collect::<Result<_, _>>()?
    };

    let cache = DatasetCache::with_default_decoder(config);
    let data_sets = cache
        .get_data_sets(labels.iter().copied())
        .context("building digit datasets")?;

    let mut shuffler = match args.seed {
        Some(seed) => RandShuffler::seeded(seed),
        None => RandShuffler::new(),
    };
    let combined = combine_data_sets(&data_sets, args.randomize, &mut shuffler);
    let summary = combined.summary();
    info!(
        "combined {} digits: {} training, {} testing samples",
        labels.len(),
        summary.training,
        summary.testing
    );

    for sample in combined.training_set.iter().take(args.preview) {
        println!("digit {}", sample.label);
        print_image(&sample.matrix, |line| println!("{line}"), PrintOptions::default());
        println!();
    }

    if args.json {
        let text = serde_json::to_string_pretty(&summary).context("serializing summary")?;
        println!("{text}");
    }
    Ok(())
}
