use std::path::PathBuf;

use clap::Parser;
use trisoup_mesh::Color;

/// Parses a color given as `R,G,B`.
fn parse_color(s: &str) -> Result<Color, String> {
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<f32>().map_err(|e| format!("{:?}: {}", c, e)))
        .collect::<Result<Vec<_>, _>>()?;
    match channels[..] {
        [r, g, b] => Ok([r, g, b]),
        _ => Err(format!("expected 3 channels, got {}", channels.len())),
    }
}

/// Converts a Wavefront OBJ mesh into a binary triangle soup.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Mesh to read.
    pub input: PathBuf,

    /// Path of the binary file to write.
    pub output: PathBuf,

    /// Color written for every triangle instead of its material color, as
    /// R,G,B. Channels are clamped to [0, 1].
    #[arg(short, long, value_parser = parse_color)]
    pub color: Option<Color>,

    /// Material library to read. Defaults to the input path with an .mtl
    /// extension.
    #[arg(short, long)]
    pub materials: Option<PathBuf>,
}
