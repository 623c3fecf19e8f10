// SPDX-FileCopyrightText: 2024 Alexandru Fikl <alexfikl@gmail.com>
// SPDX-License-Identifier: MIT

use colors_transform::{Color, Hsl};
use image::Rgb;

// 32-stop heat palette, dark blue through magenta to yellow.
const HEAT_PALETTE: [Rgb<u8>; 32] = [
    Rgb([13, 8, 135]),
    Rgb([28, 7, 139]),
    Rgb([42, 7, 144]),
    Rgb([57, 6, 148]),
    Rgb([71, 5, 152]),
    Rgb([86, 5, 156]),
    Rgb([100, 4, 161]),
    Rgb([115, 4, 165]),
    Rgb([128, 5, 167]),
    Rgb([139, 14, 160]),
    Rgb([149, 23, 154]),
    Rgb([159, 32, 148]),
    Rgb([169, 40, 142]),
    Rgb([179, 49, 136]),
    Rgb([189, 58, 129]),
    Rgb([199, 67, 123]),
    Rgb([207, 76, 116]),
    Rgb([213, 86, 109]),
    Rgb([218, 96, 102]),
    Rgb([224, 106, 95]),
    Rgb([230, 116, 88]),
    Rgb([235, 126, 80]),
    Rgb([241, 136, 73]),
    Rgb([247, 147, 66]),
    Rgb([247, 159, 61]),
    Rgb([246, 172, 57]),
    Rgb([245, 185, 53]),
    Rgb([244, 197, 49]),
    Rgb([243, 210, 45]),
    Rgb([242, 223, 41]),
    Rgb([241, 236, 37]),
    Rgb([240, 249, 33]),
];

/// Determine the color for a normalized escape count *c*.
///
/// This function takes a value *c* in [0, 1]. Counts at the top of the
/// range (samples that used up the whole iteration budget) map to black.
pub fn get_orbit_color(c: f64) -> Rgb<u8> {
    let n = c.clamp(0.0, 1.0);

    // NOTE: in HSL, we have that H in [0, 360], S in [0, 100] and L in [0, 100]
    let hue = (n * 360.0).round() as f32;
    let saturation = 100.0;
    let lightness = if n < 1.0 { 50.0 } else { 0.0 };

    let (r, g, b) = Hsl::from(hue, saturation, lightness).to_rgb().as_tuple();
    Rgb([b as u8, g as u8, r as u8])
}

/// Determine the heat-map color for a normalized escape count *c*.
///
/// This function takes a value *c* in [0, 1] and picks the nearest stop in
/// a fixed 32-entry palette.
pub fn get_heat_color(c: f64) -> Rgb<u8> {
    let n = c.clamp(0.0, 1.0);
    let i = (n * 31.0).round() as usize;

    HEAT_PALETTE[i.min(31)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_budget_is_black() {
        assert_eq!(get_orbit_color(1.0), Rgb([0, 0, 0]));
    }

    #[test]
    fn out_of_range_counts_are_clamped() {
        assert_eq!(get_orbit_color(-3.0), get_orbit_color(0.0));
        assert_eq!(get_orbit_color(17.0), get_orbit_color(1.0));
    }

    #[test]
    fn heat_palette_endpoints() {
        assert_eq!(get_heat_color(0.0), Rgb([13, 8, 135]));
        assert_eq!(get_heat_color(1.0), Rgb([240, 249, 33]));
    }

    #[test]
    fn heat_counts_are_clamped() {
        assert_eq!(get_heat_color(-3.0), get_heat_color(0.0));
        assert_eq!(get_heat_color(17.0), get_heat_color(1.0));
    }
}
