use std::path::Path as FilePath;

use sketchpath::prelude::*;

/// Stems of random declarative curves, a wreath of smoothed polygons, and a
/// few circles, all driven from one seed. Pass a seed as the first argument to
/// grow a different garden.
fn main() -> anyhow::Result<()> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 2024,
    };
    let mut canvas = Canvas::seeded(1200.0, 800.0, seed);
    canvas.background(Color::hsl(40.0, 30.0, 95.0));
    let bottom = canvas.meta().bottom;

    // Stems: a run of curves from the ground up, each knob jittered.
    canvas.group(Attributes::stroked(), |c| {
        c.range(0.1, 0.9, 12, true, |c, x, i| {
            let hue = 90.0 + 40.0 * i as f64 / 12.0;
            let mut stem = Path::new(Attributes::stroked().with(|a| {
                a.stroke(Color::hsl(hue, 50.0, 35.0)).stroke_width(0.003);
            }));
            let mut at = Point::new(x, bottom - 0.05);
            stem.move_to(at);
            let segments = c.uniform_random_int(3, 6, true);
            for _ in 0..segments {
                let next = c.perturb(at - Point::new(0.0, 0.08), 0.06);
                let config = CurveConfig {
                    curve_size: c.uniform_random_float(0.3, 1.2),
                    polarity: c.random_polarity(),
                    bulbousness: c.uniform_random_float(0.5, 1.5),
                    curve_angle: c.gaussian(0.0, 0.2),
                    twist: c.gaussian(0.0, 0.2),
                };
                stem.curve_to(next, config);
                at = next;
            }
            c.draw(stem);
        });
    });

    // Wreath: chaikin rounded hexagons around the center.
    let center = canvas.meta().center;
    canvas.group(
        Attributes::new().with(|a| {
            a.class("wreath");
        }),
        |c| {
            c.around_circle(9, 0.2, center, |c, p, _| {
                let rotation = c.random() * std::f64::consts::PI;
                c.path(Attributes::filled(Color::hsla(340.0, 60.0, 60.0, 0.6)))
                    .regular_polygon(p, 6, 0.04, rotation, Align::Center)
                    .chaikin(3)
                    .close();
            });
        },
    );

    // Seeds scattered by a poisson count.
    let seeds = canvas.poisson(8.0);
    for _ in 0..seeds {
        let p = canvas.random_point();
        let r = canvas.uniform_random_float(0.004, 0.012);
        canvas
            .path(Attributes::filled(Color::oklch(55.0, 0.12, 60.0, 1.0)))
            .circle(p, r);
    }

    let fname = FilePath::new(file!())
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("curve_garden");
    std::fs::create_dir_all("images")?;
    std::fs::write(format!("images/{}.svg", fname), canvas.image()?)?;
    Ok(())
}
