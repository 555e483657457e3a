#![allow(dead_code)]

use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::Array2;
use rendiff_core::frame::Frame;

/// Build a frame from a per-pixel function of (row, col).
pub fn frame_from_fn(h: usize, w: usize, f: impl Fn(usize, usize) -> f32) -> Frame {
    let mut data = Array2::<f32>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            data[[row, col]] = f(row, col);
        }
    }
    Frame::new(data, 8)
}

/// Uniform frame of one intensity.
pub fn solid_frame(h: usize, w: usize, value: f32) -> Frame {
    frame_from_fn(h, w, |_, _| value)
}

/// Diagonal gradient frame with values spread over [0, 1].
pub fn gradient_frame(h: usize, w: usize) -> Frame {
    frame_from_fn(h, w, |row, col| {
        (row + col) as f32 / (h + w - 2).max(1) as f32
    })
}

/// Write an 8-bit grayscale PNG built from a per-pixel function of
/// (x, y). PNG keeps fixtures lossless so identical sources decode to
/// identical frames.
pub fn write_gray_png(path: &Path, w: u32, h: u32, f: impl Fn(u32, u32) -> u8) {
    let mut img = GrayImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            img.put_pixel(x, y, Luma([f(x, y)]));
        }
    }
    img.save(path).expect("write test png");
}

/// Write a zero-padded numbered frame (`NNNN.png`) into a directory.
pub fn write_numbered_frame(dir: &Path, index: u32, w: u32, h: u32, f: impl Fn(u32, u32) -> u8) {
    write_gray_png(&dir.join(format!("{index:04}.png")), w, h, f);
}
