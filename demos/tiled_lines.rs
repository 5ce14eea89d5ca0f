use std::path::Path;

use sketchpath::prelude::*;

/// This is a take on the excellent: https://generativeartistry.com/tutorials/tiled-lines/
fn main() -> anyhow::Result<()> {
    // A fixed seed, so the image doesn't change every time the demos run.
    let mut canvas = Canvas::seeded(800.0, 800.0, 12345);
    canvas.background(Color::white());

    let stroke = Attributes::stroked().with(|a| {
        a.stroke_width(0.004);
    });
    canvas.group(stroke, |c| {
        c.for_tiling(
            TilingConfig {
                n: 16,
                margin: 0.05,
                order: TilingOrder::RowFirst,
                ..Default::default()
            },
            |c, tile| {
                let (x0, y0) = tile.origin.x_y();
                let (x1, y1) = (tile.origin + tile.delta).x_y();
                // Heads: top left to bottom right. Tails: bottom left to top right.
                if c.random() < 0.5 {
                    c.path(Attributes::new()).move_to((x0, y0)).line_to((x1, y1));
                } else {
                    c.path(Attributes::new()).move_to((x0, y1)).line_to((x1, y0));
                }
            },
        );
    });

    // Write it out to images/$THIS_DEMO_FILE.svg
    let fname = Path::new(file!())
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("tiled_lines");
    std::fs::create_dir_all("images")?;
    svg::save(
        format!("images/{}.svg", fname),
        &canvas.to_document(Units::Pixels)?,
    )?;
    Ok(())
}
