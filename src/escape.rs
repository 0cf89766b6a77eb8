// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time field generation.
//!
//! Every pixel of the grid is mapped onto the window, the recurrence
//! `z ← z² + c` is iterated from `z = 0` until `|z|² ≥ 4` or the
//! iteration cap is hit, and the natural log of that count is stored.
//! Pixels are independent of each other, so the threaded renderer can
//! hand out disjoint bands of rows without any locking and still
//! produce a field bitwise identical to the serial one.

use std::cmp;
use std::str::FromStr;

use crossbeam;
use errors::{Error, Result};
use num::Complex;
use planes::{Pixel, PlaneMapper};

/// The number of iterations it takes the point `c` to escape, capped
/// at `max_iterations`.  Never less than 1, so the log of the count is
/// always defined.
pub fn escape_time(c: Complex<f64>, max_iterations: usize) -> usize {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    let mut n = 0;
    while n < max_iterations && z.norm_sqr() < 4.0 {
        z = z * z + c;
        n += 1;
    }
    cmp::max(n, 1)
}

/// A dense, row-major grid of `ln(escape_time)` samples.  Every value
/// lies in `[0, ln(max_iterations)]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl ScalarField {
    /// Allocates a zero-filled field, reporting allocation failure
    /// instead of aborting.
    pub fn zeroed(width: usize, height: usize) -> Result<Self> {
        let cells = width
            .checked_mul(height)
            .ok_or(Error::Allocation { cells: usize::max_value() })?;
        let mut data = Vec::new();
        data.try_reserve_exact(cells)
            .map_err(|_| Error::Allocation { cells })?;
        data.resize(cells, 0.0);
        Ok(ScalarField { width, height, data })
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The value at column `column` of row `row`.
    pub fn get(&self, column: usize, row: usize) -> f64 {
        self.data[row * self.width + column]
    }

    /// All cells, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Dividing a cell by this maps it into `[0, 1)`.
    pub fn normaliser(max_iterations: usize) -> f64 {
        ((max_iterations + 1) as f64).ln()
    }
}

/// Fills `band`, which holds whole rows starting at `first_row`.
fn render_band(plane: &PlaneMapper, first_row: usize, band: &mut [f64], max_iterations: usize) {
    let width = plane.width();
    let rows = band.len() / width;
    let pixels = iproduct!(first_row..first_row + rows, 0..width);
    for ((row, column), cell) in pixels.zip(band.iter_mut()) {
        let c = plane.pixel_to_point(&Pixel(column, row));
        *cell = (escape_time(c, max_iterations) as f64).ln();
    }
}

/// Renders the whole field on the calling thread.
pub fn render_serial(plane: &PlaneMapper, max_iterations: usize) -> Result<ScalarField> {
    let mut field = ScalarField::zeroed(plane.width(), plane.height())?;
    render_band(plane, 0, &mut field.data, max_iterations);
    Ok(field)
}

/// Renders the field with one scoped thread per band of rows.
pub fn render_threaded(
    plane: &PlaneMapper,
    max_iterations: usize,
    threads: usize,
) -> Result<ScalarField> {
    let mut field = ScalarField::zeroed(plane.width(), plane.height())?;
    let threads = cmp::max(threads, 1);
    let rows_per_band = (plane.height() + threads - 1) / threads;
    let band_len = rows_per_band * plane.width();
    debug!(
        "rendering {}x{} with {} bands of {} rows",
        plane.width(),
        plane.height(),
        (plane.height() + rows_per_band - 1) / rows_per_band,
        rows_per_band
    );

    crossbeam::scope(|spawner| {
        for (i, band) in field.data.chunks_mut(band_len).enumerate() {
            spawner.spawn(move |_| {
                trace!("band {} starts at row {}", i, i * rows_per_band);
                render_band(plane, i * rows_per_band, band, max_iterations);
            });
        }
    })
    .map_err(|_| Error::WorkerPanicked)?;

    Ok(field)
}

/// Which fill a driver runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Renderer {
    /// [`render_serial`].
    Serial,
    /// [`render_threaded`].
    Threaded,
}

impl Renderer {
    /// Every renderer, in the order the driver runs them.
    pub const ALL: [Renderer; 2] = [Renderer::Serial, Renderer::Threaded];

    /// The label reported next to the timing.
    pub fn label(self) -> &'static str {
        match self {
            Renderer::Serial => "Serial",
            Renderer::Threaded => "Threaded",
        }
    }

    /// Renders the field.  `threads` is ignored by the serial fill.
    pub fn render(
        self,
        plane: &PlaneMapper,
        max_iterations: usize,
        threads: usize,
    ) -> Result<ScalarField> {
        match self {
            Renderer::Serial => render_serial(plane, max_iterations),
            Renderer::Threaded => render_threaded(plane, max_iterations, threads),
        }
    }
}

impl FromStr for Renderer {
    type Err = String;

    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "serial" => Ok(Renderer::Serial),
            "threaded" => Ok(Renderer::Threaded),
            _ => Err(format!("unknown renderer '{}'", s)),
        }
    }
}
