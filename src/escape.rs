// SPDX-FileCopyrightText: 2024 Alexandru Fikl <alexfikl@gmail.com>
// SPDX-License-Identifier: MIT

use std::fmt;

use nalgebra::DMatrix;

use crate::grid::coordinate_field;

/// Sentinel for samples that stayed bounded for the whole iteration budget.
/// Escape counts are 1-based, so this can never clash with a real count.
pub const NEVER_ESCAPED: f64 = 0.0;

// {{{ Error

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidParameter {
    /// Grid resolution of zero, i.e. no samples at all.
    ZeroResolution,
    /// Iteration budget of zero, i.e. no sweeps at all.
    ZeroIterations,
    /// Escape radius that is not a positive number.
    NonPositiveRadius,
}

impl InvalidParameter {
    fn as_str(&self) -> &'static str {
        match *self {
            InvalidParameter::ZeroResolution => "Grid resolution must be at least 1",
            InvalidParameter::ZeroIterations => "Iteration budget must be at least 1",
            InvalidParameter::NonPositiveRadius => "Escape radius must be positive",
        }
    }
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

impl std::error::Error for InvalidParameter {}

// }}}

// {{{ escape

/// Compute the escape-time field for the quadratic Mandelbrot map
///
/// $$
///     f(z) = z^2 + c
/// $$
///
/// starting at $z_0 = c$, over an *n x n* grid of offsets $c$ covering
/// $[-2, 1] \times [-1, 1]$ (with $n$ given by *resolution*). The whole
/// field is advanced one step per sweep, for at most *maxit* sweeps.
///
/// Entry $(j, i)$ of the result holds the 1-based sweep at which the sample
/// $x_i + \imath y_j$ first reached the escape radius, or [`NEVER_ESCAPED`]
/// if it never did. A sample is frozen once it escapes: later sweeps touch
/// neither its iterate nor its count. The first axis of the result indexes
/// the imaginary part, so it can be consumed directly as image rows.
pub fn escape_time_field(
    maxit: usize,
    escape_radius: f64,
    resolution: usize,
) -> Result<DMatrix<f64>, InvalidParameter> {
    if resolution == 0 {
        return Err(InvalidParameter::ZeroResolution);
    }

    if maxit == 0 {
        return Err(InvalidParameter::ZeroIterations);
    }

    if !(escape_radius > 0.0) {
        return Err(InvalidParameter::NonPositiveRadius);
    }

    let n = resolution;
    let c = coordinate_field(n);
    let mut z = c.clone();
    let mut counts = DMatrix::from_element(n, n, NEVER_ESCAPED);
    let mut escaped = DMatrix::from_element(n, n, false);

    let escape_radius_squared = escape_radius * escape_radius;

    for k in 0..maxit {
        for j in 0..n {
            for i in 0..n {
                if escaped[(i, j)] {
                    continue;
                }

                let z_next = z[(i, j)] * z[(i, j)] + c[(i, j)];
                z[(i, j)] = z_next;

                // NOTE: diverging iterates overflow to inf within a few
                // sweeps; inf compares >= any finite radius, so they are
                // caught here rather than trapped as an error.
                if z_next.norm_sqr() >= escape_radius_squared {
                    counts[(i, j)] = (k + 1) as f64;
                    escaped[(i, j)] = true;
                }
            }
        }
    }

    Ok(counts.transpose())
}

// }}}
