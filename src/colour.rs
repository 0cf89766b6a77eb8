// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! HSV to RGB conversion.

use image::Rgb;
use num::clamp;

fn channel(intensity: f64) -> u8 {
    (intensity * 255.0) as u8
}

/// Converts a hue/saturation/value triple, each in `[0, 1]`, to an
/// 8-bit RGB pixel using the usual six-sector decomposition of the
/// hue circle.  A hue of exactly 1 wraps around to red.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb<u8> {
    let hue = clamp(hue, 0.0, 1.0);
    let saturation = clamp(saturation, 0.0, 1.0);
    let value = clamp(value, 0.0, 1.0);

    if saturation == 0.0 {
        let v = channel(value);
        return Rgb([v, v, v]);
    }

    let sector = (hue * 6.0).floor();
    let f = hue * 6.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match (sector as u32) % 6 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };
    Rgb([channel(r), channel(g), channel(b)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hues_land_on_their_sectors() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb([255, 0, 0]));
        assert_eq!(hsv_to_rgb(0.125, 1.0, 1.0), Rgb([255, 191, 0]));
        assert_eq!(hsv_to_rgb(0.75, 1.0, 1.0), Rgb([127, 0, 255]));
    }

    #[test]
    fn secondaries_sit_between_primaries() {
        assert_eq!(hsv_to_rgb(0.5, 1.0, 1.0), Rgb([0, 255, 255]));
        assert_eq!(hsv_to_rgb(0.25, 1.0, 1.0), Rgb([127, 255, 0]));
    }

    #[test]
    fn full_hue_wraps_to_red() {
        assert_eq!(hsv_to_rgb(1.0, 1.0, 1.0), Rgb([255, 0, 0]));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(0.7, 0.0, 0.5), Rgb([127, 127, 127]));
    }

    #[test]
    fn out_of_range_hue_is_clamped() {
        assert_eq!(hsv_to_rgb(-0.3, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
    }
}
