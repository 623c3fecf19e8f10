// SPDX-FileCopyrightText: 2024 Alexandru Fikl <alexfikl@gmail.com>
// SPDX-License-Identifier: MIT

use image::Rgb;
use nalgebra::DMatrix;

use crate::colorschemes::{get_heat_color, get_orbit_color};
use crate::escape::NEVER_ESCAPED;

// {{{ orbit colors

/// Render one image row of an escape-count field.
///
/// *band* holds 3 bytes per pixel for a single row. Field row 0 carries the
/// smallest imaginary part while image row 0 is the top of the picture, so
/// image row *row* reads the field bottom-up.
pub fn render_row(band: &mut [u8], counts: &DMatrix<f64>, row: usize, maxit: usize) {
    let (nrows, ncols) = counts.shape();
    assert!(band.len() == 3 * ncols);
    assert!(row < nrows);

    for column in 0..ncols {
        let count = counts[(nrows - 1 - row, column)];
        let color = if count == NEVER_ESCAPED {
            Rgb([0, 0, 0])
        } else {
            get_orbit_color(count / (maxit as f64))
        };

        let index = 3 * column;
        band[index] = color[0];
        band[index + 1] = color[1];
        band[index + 2] = color[2];
    }
}

/// Render a whole escape-count field into an RGB pixel buffer.
///
/// *pixels* holds 3 bytes per sample in row-major order, one image row per
/// field row.
pub fn render_field(pixels: &mut [u8], counts: &DMatrix<f64>, maxit: usize) {
    let (nrows, ncols) = counts.shape();
    assert!(pixels.len() == 3 * nrows * ncols);

    for (row, band) in pixels.chunks_mut(3 * ncols).enumerate() {
        render_row(band, counts, row, maxit);
    }
}

// }}}

// {{{ heat-map colors

/// Like [`render_row`], but colored through the fixed heat palette.
pub fn render_row_heat(band: &mut [u8], counts: &DMatrix<f64>, row: usize, maxit: usize) {
    let (nrows, ncols) = counts.shape();
    assert!(band.len() == 3 * ncols);
    assert!(row < nrows);

    for column in 0..ncols {
        let count = counts[(nrows - 1 - row, column)];
        let color = if count == NEVER_ESCAPED {
            Rgb([0, 0, 0])
        } else {
            get_heat_color(count / (maxit as f64))
        };

        let index = 3 * column;
        band[index] = color[0];
        band[index + 1] = color[1];
        band[index + 2] = color[2];
    }
}

/// Like [`render_field`], but colored through the fixed heat palette.
pub fn render_field_heat(pixels: &mut [u8], counts: &DMatrix<f64>, maxit: usize) {
    let (nrows, ncols) = counts.shape();
    assert!(pixels.len() == 3 * nrows * ncols);

    for (row, band) in pixels.chunks_mut(3 * ncols).enumerate() {
        render_row_heat(band, counts, row, maxit);
    }
}

// }}}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dmatrix;

    #[test]
    fn sentinel_renders_black_and_rows_flip() {
        // Field row 0 (bottom of the picture) holds the sentinel.
        let counts = dmatrix![
            NEVER_ESCAPED, NEVER_ESCAPED;
            1.0, 2.0
        ];

        let mut pixels = vec![0xffu8; 3 * 4];
        render_field(&mut pixels, &counts, 4);

        // Image row 1 is field row 0: both pixels black.
        assert_eq!(&pixels[6..12], &[0, 0, 0, 0, 0, 0]);
        // Image row 0 is field row 1: both pixels colored.
        assert_ne!(&pixels[0..3], &[0, 0, 0]);
        assert_ne!(&pixels[3..6], &[0, 0, 0]);
    }

    #[test]
    fn heat_rendering_matches_orbit_layout() {
        let counts = dmatrix![
            NEVER_ESCAPED, NEVER_ESCAPED;
            1.0, 2.0
        ];

        let mut pixels = vec![0xffu8; 3 * 4];
        render_field_heat(&mut pixels, &counts, 4);

        // Same row flip as the orbit renderer: sentinels land in image
        // row 1 as black, escaped samples in image row 0 as palette stops.
        assert_eq!(&pixels[6..12], &[0, 0, 0, 0, 0, 0]);
        assert_ne!(&pixels[0..3], &[0, 0, 0]);
        assert_ne!(&pixels[3..6], &[0, 0, 0]);
    }
}
