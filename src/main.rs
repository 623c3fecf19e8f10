// SPDX-FileCopyrightText: 2024 Alexandru Fikl <alexfikl@gmail.com>
// SPDX-License-Identifier: MIT

#![warn(rust_2018_idioms)]

use std::time::Instant;

use image::RgbImage;
use rayon::prelude::*;

use gridbrot::escape::escape_time_field;
use gridbrot::render::render_row_heat;

const MAX_ITERATIONS: usize = 100;
const ESCAPE_RADIUS: f64 = 100.0;
const RESOLUTION: usize = 5000;

fn main() {
    println!("Executing...");
    let now = Instant::now();
    let counts = escape_time_field(MAX_ITERATIONS, ESCAPE_RADIUS, RESOLUTION).unwrap();
    let elapsed = now.elapsed().as_millis() as f32 / 1000.0;
    println!("Elapsed {}s!", elapsed);

    let mut pixels = RgbImage::new(RESOLUTION as u32, RESOLUTION as u32);

    // Scope of slicing up `pixels` into horizontal bands.
    {
        let bands: Vec<(usize, &mut [u8])> =
            pixels.chunks_mut(3 * RESOLUTION).enumerate().collect();

        bands.into_par_iter().for_each(|(row, band)| {
            render_row_heat(band, &counts, row, MAX_ITERATIONS);
        });
    }

    pixels.save("mandelbrot.png").unwrap();
}
