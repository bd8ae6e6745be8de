//! hexpix - Convert grayscale rasters to/from hex pixel streams
//!
//! A command-line tool bridging image files and the plain hex token format
//! consumed by hardware-simulation testbenches.

use clap::{Parser, Subcommand};
use hexpix::{decode, difference, encode, normalize, LengthPolicy, PixelGrid, ValueRange};
use image::imageops::FilterType;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hexpix")]
#[command(version)]
#[command(about = "Convert grayscale rasters to/from hex pixel streams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode an image as a hex pixel stream
    Encode {
        /// Input image file (PNG, JPEG, GIF, WebP)
        input: PathBuf,

        /// Output hex file (default: input with .hex extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target width in pixels
        #[arg(long, default_value = "128")]
        width: usize,

        /// Target height in pixels
        #[arg(long, default_value = "128")]
        height: usize,
    },

    /// Decode a hex pixel stream to a grayscale PNG
    Decode {
        /// Input hex file (use - for stdin)
        input: PathBuf,

        /// Output PNG file (default: input with .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Grid width in pixels
        #[arg(long, default_value = "128")]
        width: usize,

        /// Grid height in pixels
        #[arg(long, default_value = "128")]
        height: usize,

        /// Truncate or zero-pad instead of failing on a token count mismatch
        #[arg(long)]
        fix: bool,
    },

    /// Visualize the difference of two hex pixel streams as a grayscale PNG
    Diff {
        /// Reference hex file (the sharper image)
        reference: PathBuf,

        /// Comparison hex file (e.g. the blurred image)
        comparison: PathBuf,

        /// Output PNG file (default: reference with .diff.png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Grid width in pixels
        #[arg(long, default_value = "128")]
        width: usize,

        /// Grid height in pixels
        #[arg(long, default_value = "128")]
        height: usize,

        /// Truncate or zero-pad instead of failing on a token count mismatch
        #[arg(long)]
        fix: bool,
    },

    /// Render a plain numeric text file as a normalized grayscale PNG
    Render {
        /// Input text file of whitespace-separated values (use - for stdin)
        input: PathBuf,

        /// Output PNG file (default: input with .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Grid width in pixels
        #[arg(long, default_value = "128")]
        width: usize,

        /// Grid height in pixels
        #[arg(long, default_value = "128")]
        height: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            width,
            height,
        } => {
            let (w, h) = checked_dimensions(width, height)?;
            let img = image::open(&input)
                .map_err(|e| format!("Failed to open '{}': {}", input.display(), e))?;

            // Grayscale first, then bilinear resize to the target grid
            let gray = img
                .grayscale()
                .resize_exact(w, h, FilterType::Triangle)
                .to_luma8();
            let grid = PixelGrid::from_raw(gray.into_raw(), width, height)?;
            let text = encode(&grid);

            let output_path = output.unwrap_or_else(|| input.with_extension("hex"));
            fs::write(&output_path, &text)
                .map_err(|e| format!("Failed to write '{}': {}", output_path.display(), e))?;

            eprintln!(
                "Encoded '{}' ({}x{}, {} pixels) -> '{}'",
                input.display(),
                width,
                height,
                width * height,
                output_path.display()
            );
        }

        Commands::Decode {
            input,
            output,
            width,
            height,
            fix,
        } => {
            let text = read_text(&input)?;
            let grid = decode(&text, width, height, length_policy(fix))?;

            let output_path = output.unwrap_or_else(|| {
                let mut p = input.clone();
                p.set_extension("png");
                p
            });
            save_grayscale(&grid, &output_path)?;

            eprintln!(
                "Decoded '{}' ({}x{}) -> '{}'",
                input.display(),
                width,
                height,
                output_path.display()
            );
        }

        Commands::Diff {
            reference,
            comparison,
            output,
            width,
            height,
            fix,
        } => {
            let policy = length_policy(fix);
            let ref_grid = decode(&read_text(&reference)?, width, height, policy)?;
            let cmp_grid = decode(&read_text(&comparison)?, width, height, policy)?;

            let delta = difference(&ref_grid, &cmp_grid)?;
            let result = normalize(&delta, width, height)?;
            report_range(&result.range);

            let output_path = output.unwrap_or_else(|| reference.with_extension("diff.png"));
            save_grayscale(&result.grid, &output_path)?;

            eprintln!("Saved difference image: '{}'", output_path.display());
        }

        Commands::Render {
            input,
            output,
            width,
            height,
        } => {
            let text = read_text(&input)?;
            let values = parse_values(&text)?;
            let result = normalize(&values, width, height)?;
            report_range(&result.range);

            let output_path = output.unwrap_or_else(|| {
                let mut p = input.clone();
                p.set_extension("png");
                p
            });
            save_grayscale(&result.grid, &output_path)?;

            eprintln!("Saved rendered image: '{}'", output_path.display());
        }
    }

    Ok(())
}

fn length_policy(fix: bool) -> LengthPolicy {
    if fix {
        LengthPolicy::AutoFix
    } else {
        LengthPolicy::Strict
    }
}

fn checked_dimensions(width: usize, height: usize) -> Result<(u32, u32), String> {
    if width == 0 || height == 0 || width > u32::MAX as usize || height > u32::MAX as usize {
        return Err(format!("Invalid dimensions: {}x{}", width, height));
    }
    Ok((width as u32, height as u32))
}

fn read_text(input: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if input.to_string_lossy() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(input)
            .map_err(|e| format!("Failed to read '{}': {}", input.display(), e))?)
    }
}

fn parse_values(text: &str) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    text.split_whitespace()
        .map(|s| {
            s.parse::<f64>()
                .map_err(|e| format!("Invalid value {:?}: {}", s, e).into())
        })
        .collect()
}

fn save_grayscale(grid: &PixelGrid, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (w, h) = checked_dimensions(grid.width, grid.height)?;
    let img = image::GrayImage::from_raw(w, h, grid.pixels.clone())
        .ok_or("Failed to create image from pixel grid")?;
    img.save(path)
        .map_err(|e| format!("Failed to save '{}': {}", path.display(), e))?;
    Ok(())
}

fn report_range(range: &ValueRange) {
    match range {
        ValueRange::Spread { lo, hi } => eprintln!("Difference range: {} to {}", lo, hi),
        ValueRange::Constant(v) => {
            eprintln!("Difference is constant at {}; output is flat mid-gray", v);
        }
    }
}
