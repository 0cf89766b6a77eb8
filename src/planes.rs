// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a grid of pixels with an origin at 0,0 and a window on the
//! complex plane.  Pixel (0, 0) lands exactly on the window's
//! (x0, y0) corner and pixel (width - 1, height - 1) lands exactly on
//! its (x1, y1) corner.
use errors::{Error, Result};
use num::Complex;

/// Describes the width and height of the pixel grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// The (x0, y0) and (x1, y1) corners of the sampled window, with the
/// real part of each value as the x-component and the imaginary part
/// as the y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

impl ComplexPlane {
    /// Builds a window from its four bounds.
    pub fn from_bounds(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        ComplexPlane(Complex::new(x0, y0), Complex::new(x1, y1))
    }

    /// Horizontal extent of the window.
    pub fn width(&self) -> f64 {
        self.1.re - self.0.re
    }

    /// Vertical extent of the window.
    pub fn height(&self) -> f64 {
        self.1.im - self.0.im
    }
}

/// Column and row of a pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels onto points of the window and back.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The size of the pixel grid.
    pub integral_plane: IntegralPlane,
    /// The sampled window.
    pub complex_plane: ComplexPlane,
    // Distance on the complex plane between neighbouring columns and
    // neighbouring rows.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Validates the grid and window.  The linear mapping divides by
    /// `width - 1` and `height - 1`, so both sides must be at least 2.
    pub fn new(width: usize, height: usize, window: ComplexPlane) -> Result<PlaneMapper> {
        if width < 2 || height < 2 {
            return Err(Error::DegenerateGrid { width, height });
        }

        if window.width() < 0.0 || window.height() < 0.0 {
            return Err(Error::InvertedWindow);
        }

        let steps = (
            window.width() / ((width - 1) as f64),
            window.height() / ((height - 1) as f64),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: window,
            steps,
        })
    }

    /// Width of the pixel grid.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// Height of the pixel grid.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// Given a pixel, return the point of the window it samples.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.complex_plane.0.re + self.steps.0 * (pixel.0 as f64),
            self.complex_plane.0.im + self.steps.1 * (pixel.1 as f64),
        )
    }

    /// Given a point inside the window, return the nearest pixel.
    /// Points outside the window yield `None`.
    pub fn point_to_pixel(&self, point: &Complex<f64>) -> Option<Pixel> {
        let left = ((point.re - self.complex_plane.0.re) / self.steps.0).round();
        let top = ((point.im - self.complex_plane.0.im) / self.steps.1).round();
        if left < 0.0
            || top < 0.0
            || left >= self.integral_plane.0 as f64
            || top >= self.integral_plane.1 as f64
        {
            return None;
        }
        Some(Pixel(left as usize, top as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(x0: f64, y0: f64, x1: f64, y1: f64) -> ComplexPlane {
        ComplexPlane::from_bounds(x0, y0, x1, y1)
    }

    #[test]
    fn planemapper_fails_on_bad_shape() {
        let pm = PlaneMapper::new(4, 4, window(-1.0, 1.0, 1.0, -1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_single_row_or_column() {
        match PlaneMapper::new(1, 4, window(-1.0, -1.0, 1.0, 1.0)) {
            Err(Error::DegenerateGrid { width: 1, height: 4 }) => (),
            other => panic!("unexpected {:?}", other),
        }
        assert!(PlaneMapper::new(4, 1, window(-1.0, -1.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(4, 4, window(-1.0, -1.0, 1.0, 1.0));
        assert!(pm.is_ok());
    }

    #[test]
    fn corners_map_onto_window_corners() {
        let pm = PlaneMapper::new(9, 7, window(-2.5, -1.5, 1.5, 1.5)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.5, -1.5));
        assert_eq!(pm.pixel_to_point(&Pixel(8, 6)), Complex::new(1.5, 1.5));
    }

    #[test]
    fn pixel_to_point_on_mixed_planes() {
        let pm = PlaneMapper::new(5, 5, window(-2.0, -2.0, 2.0, 2.0)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(1, 3)), Complex::new(-1.0, 1.0));
    }

    #[test]
    fn point_to_pixel_finds_nearest() {
        let pm = PlaneMapper::new(5, 5, window(-2.0, -2.0, 2.0, 2.0)).unwrap();
        assert_eq!(pm.point_to_pixel(&Complex::new(0.0, 0.0)), Some(Pixel(2, 2)));
        assert_eq!(pm.point_to_pixel(&Complex::new(0.4, -0.6)), Some(Pixel(2, 1)));
        assert_eq!(pm.point_to_pixel(&Complex::new(3.0, 0.0)), None);
    }
}
