// SPDX-FileCopyrightText: 2024 Alexandru Fikl <alexfikl@gmail.com>
// SPDX-License-Identifier: MIT

//! Escape-time evaluation for the quadratic Mandelbrot map over a fixed
//! rectangular grid of the complex plane, plus a small heat-map renderer
//! for the resulting count fields.

#![warn(rust_2018_idioms)]

pub mod colorschemes;
pub mod escape;
pub mod grid;
pub mod render;

pub use escape::{escape_time_field, InvalidParameter, NEVER_ESCAPED};
