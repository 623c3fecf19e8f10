// SPDX-FileCopyrightText: 2024 Alexandru Fikl <alexfikl@gmail.com>
// SPDX-License-Identifier: MIT

use nalgebra::DMatrix;
use num::complex::{c64, Complex64};

/// Bounding box of the sampled region: the classically interesting part of
/// the complex plane for the quadratic Mandelbrot map.
pub const XMIN: f64 = -2.0;
pub const XMAX: f64 = 1.0;
pub const YMIN: f64 = -1.0;
pub const YMAX: f64 = 1.0;

/// Evenly spaced samples over $[a, b]$, endpoints included.
///
/// A request for zero samples gives an empty vector.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return vec![];
    }

    if n == 1 {
        return vec![a];
    }

    let h = (b - a) / ((n - 1) as f64);
    (0..n).map(|i| a + (i as f64) * h).collect()
}

/// Build the complex coordinate field for an *n x n* sample grid.
///
/// Row *i* varies the real part over $[-2, 1]$ and column *j* varies the
/// imaginary part over $[-1, 1]$, i.e. $C_{ij} = x_i + \imath y_j$.
pub fn coordinate_field(n: usize) -> DMatrix<Complex64> {
    let xs = linspace(XMIN, XMAX, n);
    let ys = linspace(YMIN, YMAX, n);

    DMatrix::from_fn(n, n, |i, j| c64(xs[i], ys[j]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_includes_endpoints() {
        let xs = linspace(-2.0, 1.0, 7);

        assert_eq!(xs.len(), 7);
        assert_relative_eq!(xs[0], -2.0);
        assert_relative_eq!(xs[6], 1.0);
    }

    #[test]
    fn linspace_is_strictly_increasing() {
        let ys = linspace(-1.0, 1.0, 100);
        assert!(ys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn linspace_single_sample() {
        assert_eq!(linspace(-2.0, 1.0, 1), vec![-2.0]);
    }

    #[test]
    fn linspace_no_samples() {
        assert!(linspace(-2.0, 1.0, 0).is_empty());
    }

    #[test]
    fn coordinate_field_corners() {
        let c = coordinate_field(7);

        assert_eq!(c.shape(), (7, 7));
        assert_relative_eq!(c[(0, 0)].re, XMIN);
        assert_relative_eq!(c[(0, 0)].im, YMIN);
        assert_relative_eq!(c[(6, 6)].re, XMAX);
        assert_relative_eq!(c[(6, 6)].im, YMAX);
    }
}
