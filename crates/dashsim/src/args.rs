use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use lyon::math::{point, Point};
use shared::{Height, Width};
use std::convert::TryFrom;
use std::path::PathBuf;

/// dashsim: walk a stroke dash pattern one unit at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the on/off sequence of a dash pattern as `#` and `.`
    Sequence {
        #[command(flatten)]
        dash: DashArgs,

        /// Number of units to print
        #[arg(short, long, default_value_t = 70)]
        count: usize,
    },
    /// Stroke a polyline with a dash pattern onto a pixel grid
    Render(RenderArgs),
}

#[derive(Args, Debug)]
pub struct DashArgs {
    /// Comma separated run lengths, alternating painted and gap
    #[arg(short, long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub pattern: Vec<f32>,

    /// Units of the pattern skipped before the first one is drawn
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub phase: f32,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub dash: DashArgs,

    /// Raster size as WIDTHxHEIGHT
    #[arg(short, long, default_value = "64x16", value_parser = parse_size)]
    pub size: (Width, Height),

    /// Width of the square brush in pixels
    #[arg(long, default_value_t = 1.0)]
    pub line_width: f32,

    /// First point of the polyline as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub from: Point,

    /// Further points of the polyline as X,Y
    #[arg(long, value_parser = parse_point, required = true, allow_hyphen_values = true)]
    pub to: Vec<Point>,

    /// Join the last point back to the first
    #[arg(long)]
    pub close: bool,

    /// Curve flattening tolerance
    #[arg(long, default_value_t = 0.1)]
    pub tolerance: f32,

    /// Print the raster as text instead of writing an image
    #[arg(long, conflicts_with = "output")]
    pub ascii: bool,

    /// Path of the PNG file to write
    #[arg(short, long, required_unless_present = "ascii")]
    pub output: Option<PathBuf>,
}

pub fn parse_size(s: &str) -> Result<(Width, Height)> {
    let (w, h) = s
        .split_once(|c| c == 'x' || c == 'X')
        .ok_or_else(|| anyhow!("expected WIDTHxHEIGHT but got {:?}", s))?;
    let w: f32 = w.trim().parse().with_context(|| format!("invalid width {:?}", w))?;
    let h: f32 = h.trim().parse().with_context(|| format!("invalid height {:?}", h))?;
    Ok((Width::try_from(w)?, Height::try_from(h)?))
}

pub fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected X,Y but got {:?}", s))?;
    let x: f32 = x.trim().parse().with_context(|| format!("invalid x {:?}", x))?;
    let y: f32 = y.trim().parse().with_context(|| format!("invalid y {:?}", y))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(anyhow!("point {:?} is not finite", s));
    }
    Ok(point(x, y))
}
