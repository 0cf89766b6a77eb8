// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a finished scalar field into a binary (P6) pixmap.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use colour::hsv_to_rgb;
use errors::Result;
use escape::ScalarField;
use image::{ImageBuffer, RgbImage};

/// Colours every cell of the field.  The hue is the cell divided by
/// `ln(max_iterations + 1)`; saturation and value are both full.
pub fn encode(field: &ScalarField, max_iterations: usize) -> RgbImage {
    let normaliser = ScalarField::normaliser(max_iterations);
    ImageBuffer::from_fn(field.width() as u32, field.height() as u32, |x, y| {
        hsv_to_rgb(field.get(x as usize, y as usize) / normaliser, 1.0, 1.0)
    })
}

/// Writes the `P6` header followed by the raw RGB triples, row-major.
pub fn write<W: Write>(writer: &mut W, image: &RgbImage) -> Result<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width(), image.height())?;
    let raw: &[u8] = image;
    writer.write_all(raw)?;
    Ok(())
}

/// Writes the image to a file, replacing anything already there.
pub fn save<P: AsRef<Path>>(path: P, image: &RgbImage) -> Result<()> {
    let mut output = BufWriter::new(File::create(path)?);
    write(&mut output, image)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape::render_serial;
    use image::Rgb;
    use planes::{ComplexPlane, PlaneMapper};

    fn small_field() -> ScalarField {
        let plane = PlaneMapper::new(3, 2, ComplexPlane::from_bounds(-1.0, -1.0, 1.0, 1.0)).unwrap();
        render_serial(&plane, 10).unwrap()
    }

    #[test]
    fn header_precedes_raw_triples() {
        let image = encode(&small_field(), 10);
        let mut out = Vec::new();
        write(&mut out, &image).unwrap();

        let header = b"P6\n3 2\n255\n";
        assert_eq!(&out[..header.len()], &header[..]);
        assert_eq!(out.len(), header.len() + 3 * 2 * 3);
    }

    #[test]
    fn first_pixel_is_the_window_origin() {
        let field = small_field();
        let image = encode(&field, 10);
        let expected = hsv_to_rgb(field.get(0, 0) / (11.0_f64).ln(), 1.0, 1.0);
        assert_eq!(*image.get_pixel(0, 0), expected);

        let mut out = Vec::new();
        write(&mut out, &image).unwrap();
        let start = b"P6\n3 2\n255\n".len();
        assert_eq!(Rgb([out[start], out[start + 1], out[start + 2]]), expected);
    }

    #[test]
    fn escaping_immediately_is_red() {
        // ln(1) = 0 maps to hue 0.
        let plane = PlaneMapper::new(2, 2, ComplexPlane::from_bounds(3.0, 3.0, 4.0, 4.0)).unwrap();
        let image = encode(&render_serial(&plane, 10).unwrap(), 10);
        assert!(image.pixels().all(|p| *p == Rgb([255, 0, 0])));
    }
}
