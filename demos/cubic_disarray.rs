use std::f64::consts::PI;
use std::path::Path;

use sketchpath::prelude::*;

/// This is a take on the excellent: https://generativeartistry.com/tutorials/cubic-disarray/
///
/// Squares get more rotated and shoved about the further down the page they
/// are. Written in millimetres, for the plotter.
fn main() -> anyhow::Result<()> {
    let config = SketchConfig::from_ron(
        "(width: 210.0, height: 210.0, seed: Some(12345), units: Millimetres)",
    )?;
    let mut canvas = Canvas::from_config(&config)?;
    let square_count = 9;
    let rotate_mul = PI / 6.0;
    let displace_mul = 0.02;

    canvas.group(Attributes::stroked(), |c| {
        c.for_tiling(
            TilingConfig {
                n: square_count,
                margin: 0.05,
                order: TilingOrder::RowFirst,
                ..Default::default()
            },
            |c, tile| {
                let row = (tile.index / square_count) as f64;
                let disorder = row / square_count as f64;
                let rotation = disorder * c.uniform_random_float(-1.0, 1.0) * rotate_mul;
                let shove = disorder * c.uniform_random_float(-1.0, 1.0) * displace_mul;

                // Spin about the tile center, then shove sideways.
                let (cx, cy) = tile.center.x_y();
                let placement = transform::translate(cx + shove, cy)
                    * transform::rotate(rotation)
                    * transform::translate(-cx, -cy);
                let mut attributes = Attributes::new();
                attributes.transform(placement);
                c.path(attributes)
                    .rect(tile.center, tile.delta.x(), tile.delta.y(), Align::Center)
                    .close();
            },
        );
    });

    let fname = Path::new(file!())
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("cubic_disarray");
    std::fs::create_dir_all("images")?;
    svg::save(
        format!("images/{}.svg", fname),
        &canvas.to_document(config.units)?,
    )?;
    Ok(())
}
