//! Simulated price grid.
//!
//! [`SimulationGrid`] pairs a uniform time grid on `[0, T]` with a price
//! matrix of shape `(n_steps + 1, n_paths)`.
//!
//! # Memory Layout
//!
//! Prices are stored step-major in one contiguous buffer:
//! `prices[step * n_paths + path]`. Row 0 holds the initial spot for every
//! path. This matches the draw order of the generator, which fills one row of
//! normals per step.

/// Time grid plus simulated prices.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationGrid {
    /// Time points `t_0 = 0, ..., t_n = T`.
    times: Vec<f64>,
    /// Prices, step-major, `(n_steps + 1) * n_paths` entries.
    prices: Vec<f64>,
    /// Number of paths (columns).
    n_paths: usize,
    /// Uniform time step.
    dt: f64,
}

impl SimulationGrid {
    /// Creates a grid with every row set to `spot`.
    ///
    /// The generator overwrites rows 1..=n_steps in place.
    pub(crate) fn filled(spot: f64, maturity: f64, n_steps: usize, n_paths: usize) -> Self {
        let dt = maturity / n_steps as f64;
        let times = (0..=n_steps)
            .map(|step| {
                if step == n_steps {
                    maturity
                } else {
                    step as f64 * dt
                }
            })
            .collect();

        Self {
            times,
            prices: vec![spot; (n_steps + 1) * n_paths],
            n_paths,
            dt,
        }
    }

    /// Returns the time points.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the uniform time step.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of time steps (rows minus one).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.times.len() - 1
    }

    /// Returns the number of paths (columns).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the full price buffer (step-major).
    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Returns the prices of every path at `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step > n_steps`.
    #[inline]
    pub fn row(&self, step: usize) -> &[f64] {
        let start = step * self.n_paths;
        &self.prices[start..start + self.n_paths]
    }

    /// Returns the price of `path` at `step`.
    #[inline]
    pub fn price(&self, step: usize, path: usize) -> f64 {
        self.prices[step * self.n_paths + path]
    }

    /// Iterates the prices of one path from `t = 0` to `t = T`.
    #[inline]
    pub fn path(&self, path: usize) -> impl Iterator<Item = f64> + '_ {
        debug_assert!(path < self.n_paths);
        self.prices
            .iter()
            .skip(path)
            .step_by(self.n_paths)
            .copied()
    }

    /// Returns the terminal price of `path`.
    #[inline]
    pub fn terminal(&self, path: usize) -> f64 {
        self.price(self.n_steps(), path)
    }

    /// Counts entries that are zero or negative.
    ///
    /// Non-zero only under the Euler scheme with a coarse step.
    pub fn count_non_positive(&self) -> usize {
        self.prices.iter().filter(|&&p| p <= 0.0).count()
    }

    /// Splits the buffer into the row at `step` and the row after it.
    #[inline]
    pub(crate) fn rows_mut(&mut self, step: usize) -> (&[f64], &mut [f64]) {
        let n = self.n_paths;
        let (head, tail) = self.prices.split_at_mut((step + 1) * n);
        (&head[step * n..], &mut tail[..n])
    }
}
