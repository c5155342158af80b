use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use image::{DynamicImage, ImageBuffer, Rgba};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use usps_digits::constants::{CELL_SIZE, CHANNELS_PER_PIXEL};
use usps_digits::{DigitLabel, GridPartitioner, RawImage};

/// Write synthetic `usps_{DIGIT}.jpg` grids readable by the dataset builder.
#[derive(Debug, Parser)]
#[command(about)]
struct Args {
    /// Output directory.
    #[arg(long, default_value = "raw_data")]
    out: PathBuf,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Fraction of cells left blank so they are rejected.
    #[arg(long, default_value_t = 0.05)]
    blank_ratio: f64,

    /// Grid cells per side.
    #[arg(long, default_value_t = 34)]
    grid: usize,
}

/// Seven-segment strokes as (row_start, row_end, col_start, col_end) in cell coordinates.
const SEGMENTS: [(usize, usize, usize, usize); 7] = [
    (2, 5, 4, 13),   // a
    (2, 8, 10, 13),  // b
    (8, 14, 10, 13), // c
    (11, 14, 4, 13), // d
    (8, 14, 4, 7),   // e
    (2, 8, 4, 7),    // f
    (7, 10, 4, 13),  // g
];

/// Segment masks (bit i = SEGMENTS[i]) per digit.
const DIGIT_SEGMENTS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// One cell's intensities in local row-major order.
fn draw_glyph(label: DigitLabel, rng: &mut StdRng) -> Vec<u8> {
    let mut cell = vec![0u8; CELL_SIZE * CELL_SIZE];
    let mask = DIGIT_SEGMENTS[label.value() as usize];
    let shift_row: i32 = rng.random_range(-1..=1);
    let shift_col: i32 = rng.random_range(-1..=1);
    let intensity: u8 = rng.random_range(160..=255);

    for (bit, &(r0, r1, c0, c1)) in SEGMENTS.iter().enumerate() {
        if mask & (1 << bit) == 0 {
            continue;
        }
        for row in r0..r1 {
            for col in c0..c1 {
                let r = row as i32 + shift_row;
                let c = col as i32 + shift_col;
                if (0..CELL_SIZE as i32).contains(&r) && (0..CELL_SIZE as i32).contains(&c) {
                    cell[r as usize * CELL_SIZE + c as usize] = intensity;
                }
            }
        }
    }
    cell
}

fn generate(label: DigitLabel, args: &Args, rng: &mut StdRng) -> RawImage {
    let side = args.grid * CELL_SIZE;
    let mut image = RawImage::filled(side, side, 0);
    let grid = GridPartitioner::new(&image);

    let mut blanks = 0usize;
    for cell in grid.cells() {
        if rng.random_bool(args.blank_ratio) {
            blanks += 1;
            continue;
        }
        let glyph = draw_glyph(label, rng);
        for row in 0..CELL_SIZE {
            for col in 0..CELL_SIZE {
                let Ok(offset) = usize::try_from(grid.byte_offset(cell, row, col)) else {
                    continue;
                };
                let value = glyph[row * CELL_SIZE + col];
                if let Some(pixel) = image.pixels.get_mut(offset..offset + 3) {
                    pixel.fill(value);
                }
            }
        }
    }

    // Opaque alpha everywhere.
    image
        .pixels
        .chunks_exact_mut(CHANNELS_PER_PIXEL)
        .for_each(|px| px[3] = 255);

    info!("digit {label}: {} cells, {blanks} left blank", grid.capacity());
    image
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if !(0.0..=1.0).contains(&args.blank_ratio) {
        bail!("--blank-ratio must be within 0..=1, got {}", args.blank_ratio);
    }

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    for label in DigitLabel::ALL {
        let raw = generate(label, &args, &mut rng);
        let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(raw.width as u32, raw.height as u32, raw.pixels)
                .context("pixel buffer does not match image dimensions")?;

        let path = args.out.join(format!("usps_{label}.jpg"));
        DynamicImage::ImageRgba8(buffer)
            .to_rgb8()
            .save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
