//! Random helpers. All of them draw from the canvas's single [`Pcg32`] stream,
//! so two helpers called in a different order produce different drawings.
//!
//! [`Pcg32`]: crate::util::pcg::Pcg32
use std::f64::consts::PI;

use geo_types::Point;

use super::Canvas;

impl Canvas {
    /// Uniform in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        self.rng.number()
    }

    /// Uniform integer from `from` up to `to`, including `to` only when
    /// `inclusive`. An empty range yields `from`.
    pub fn uniform_random_int(&mut self, from: i32, to: i32, inclusive: bool) -> i32 {
        let span = i64::from(to) - i64::from(from) + i64::from(inclusive);
        if span <= 0 {
            return from;
        }
        let offset = self.rng.integer(span as u32);
        (i64::from(from) + i64::from(offset)) as i32
    }

    /// Uniform in `[from, to)`.
    pub fn uniform_random_float(&mut self, from: f64, to: f64) -> f64 {
        from + (to - from) * self.random()
    }

    /// `1.0` or `-1.0` with equal chance.
    pub fn random_polarity(&mut self) -> f64 {
        if self.random() > 0.5 {
            1.0
        } else {
            -1.0
        }
    }

    /// Run `draw` with probability `proportion`.
    pub fn do_proportion(&mut self, proportion: f64, draw: impl FnOnce(&mut Canvas)) {
        if self.random() < proportion {
            draw(self);
        }
    }

    /// Pick one of `cases`, each with chance proportional to its weight.
    ///
    /// Returns the item rather than calling it, so any type works; boxed
    /// closures make a weighted branch:
    ///
    /// ```rust
    /// use sketchpath::context::Canvas;
    ///
    /// let mut canvas = Canvas::seeded(100.0, 100.0, 3);
    /// let branch = canvas.proportionately(vec![
    ///     (2.0, Box::new(|c: &mut Canvas| c.random()) as Box<dyn FnOnce(&mut Canvas) -> f64>),
    ///     (1.0, Box::new(|_: &mut Canvas| 0.5)),
    /// ]);
    /// if let Some(branch) = branch {
    ///     let value = branch(&mut canvas);
    ///     assert!((0.0..1.0).contains(&value));
    /// }
    /// ```
    pub fn proportionately<T>(&mut self, cases: Vec<(f64, T)>) -> Option<T> {
        if cases.is_empty() {
            log::warn!("proportionately called with no cases");
            return None;
        }
        let total: f64 = cases.iter().map(|(weight, _)| weight).sum();
        let target = self.random() * total;
        let last = cases.len() - 1;
        let mut cumulative = 0.0;
        for (i, (weight, item)) in cases.into_iter().enumerate() {
            cumulative += weight;
            if target < cumulative || i == last {
                return Some(item);
            }
        }
        None
    }

    /// One element of `items`, or `None` if there are none.
    pub fn sample<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            log::warn!("sample called on an empty slice");
            return None;
        }
        let index = self.rng.integer(items.len() as u32) as usize;
        items.get(index)
    }

    /// Up to `n` distinct elements of `items`, in random order.
    pub fn samples<T: Clone>(&mut self, n: usize, items: &[T]) -> Vec<T> {
        let mut picked = items.to_vec();
        self.shuffle(&mut picked);
        picked.truncate(n);
        picked
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.integer((i + 1) as u32) as usize;
            items.swap(i, j);
        }
    }

    /// `point` moved by up to `magnitude / 2` along each axis.
    pub fn perturb(&mut self, point: Point<f64>, magnitude: f64) -> Point<f64> {
        let dx = (self.random() - 0.5) * magnitude;
        let dy = (self.random() - 0.5) * magnitude;
        point + Point::new(dx, dy)
    }

    /// Normally distributed value (Box-Muller).
    pub fn gaussian(&mut self, mean: f64, sd: f64) -> f64 {
        let u1 = 1.0 - self.random();
        let u2 = self.random();
        mean + sd * (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Poisson distributed count with mean `lambda` (Knuth's method, so keep
    /// `lambda` modest). Non-positive or non-finite `lambda` gives 0 without
    /// drawing.
    pub fn poisson(&mut self, lambda: f64) -> u32 {
        if !(lambda.is_finite() && lambda > 0.0) {
            return 0;
        }
        let limit = (-lambda).exp();
        let mut k = 0;
        let mut p = 1.0;
        loop {
            p *= self.random();
            if p <= limit {
                return k;
            }
            k += 1;
        }
    }

    /// Uniform point anywhere on the canvas.
    pub fn random_point(&mut self) -> Point<f64> {
        let x = self.random();
        let y = self.random() * self.meta.bottom;
        Point::new(x, y)
    }
}
