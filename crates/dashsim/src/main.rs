use anyhow::{Context, Result};
use clap::Parser;
use image::{ImageBuffer, Luma};
use log::info;
use lyon::path::Path;
use shared::{DashPattern, DashSegment, LineWidth};
use stroke::{stroke_path, Raster, StrokeOptions};

mod args;

use args::{Cli, Command, DashArgs, RenderArgs};

const PAINT: u8 = 0;
const BACKGROUND: u8 = 255;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Sequence { dash, count } => {
            let pattern = dash_pattern(&dash)?;
            println!("{}", sequence(&pattern, count));
        }
        Command::Render(args) => render(&args)?,
    }
    Ok(())
}

fn dash_pattern(args: &DashArgs) -> Result<DashPattern> {
    DashPattern::new(args.pattern.clone(), args.phase).context("invalid dash pattern")
}

fn sequence(pattern: &DashPattern, count: usize) -> String {
    pattern
        .cursor()
        .take(count)
        .map(|s| match s {
            DashSegment::Paint => '#',
            DashSegment::Gap => '.',
        })
        .collect()
}

fn render(args: &RenderArgs) -> Result<()> {
    let line_width = LineWidth::try_new(args.line_width).context("invalid line width")?;
    let options = StrokeOptions::default()
        .with_dash(dash_pattern(&args.dash)?)
        .with_line_width(line_width)
        .with_tolerance(args.tolerance);

    let mut builder = Path::builder();
    builder.begin(args.from);
    for &to in &args.to {
        builder.line_to(to);
    }
    builder.end(args.close);
    let path = builder.build();

    let (width, height) = args.size;
    let mut raster = Raster::new(width, height);
    let stats = stroke_path(&mut raster, &path, &options)?;
    info!(
        "stroked {} contour(s): {} units painted, {} skipped, {} clipped",
        stats.contours, stats.painted, stats.skipped, stats.clipped
    );

    match &args.output {
        Some(output) => {
            to_image(&raster)
                .save(output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!("wrote {}", output.display());
        }
        None => print!("{}", raster.to_ascii()),
    }
    Ok(())
}

fn to_image(raster: &Raster) -> ImageBuffer<Luma<u8>, Vec<u8>> {
    ImageBuffer::from_fn(*raster.width(), *raster.height(), |x, y| {
        let painted = raster.get(i64::from(x), i64::from(y)).unwrap_or(false);
        Luma([if painted { PAINT } else { BACKGROUND }])
    })
}

#[cfg(test)]
mod test {
    use super::{sequence, to_image, BACKGROUND, PAINT};
    use shared::{DashPattern, Height, Width};
    use stroke::Raster;

    #[test]
    fn sequence_with_phase() {
        let pattern = DashPattern::new(vec![15.0, 5.0, 10.0, 5.0], 5.0).unwrap();
        let expected = format!("{}{}{}{}", "#".repeat(10), ".".repeat(5), "#".repeat(10), ".".repeat(5));
        assert_eq!(sequence(&pattern, 30), expected);
    }

    #[test]
    fn image_matches_raster() {
        let mut raster = Raster::new(Width::new(3), Height::new(2));
        raster.paint(1, 1);
        let image = to_image(&raster);
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(1, 1).0, [PAINT]);
        assert_eq!(image.get_pixel(0, 0).0, [BACKGROUND]);
    }
}
