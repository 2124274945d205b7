//! Polygon rasterisation onto RGBA canvases.
//!
//! Pixels are replaced rather than blended, and anything falling outside
//! the canvas is clipped.

use image::RgbaImage;

use crate::types::{Colour, Hexagon};

/// Fill every pixel whose integer coordinate lies within the hexagon.
pub fn fill_hexagon(img: &mut RgbaImage, hex: &Hexagon, colour: Colour) {
    let (min_x, min_y, max_x, max_y) = hex.bounds();
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }

    let x0 = min_x.floor().max(0.0) as u32;
    let y0 = min_y.floor().max(0.0) as u32;
    let x1 = (max_x.ceil().max(0.0) as u32).min(w - 1);
    let y1 = (max_y.ceil().max(0.0) as u32).min(h - 1);

    let rgba = colour.to_rgba_pixel();
    for y in y0..=y1 {
        for x in x0..=x1 {
            if hex.contains(x as f64, y as f64) {
                img.put_pixel(x, y, rgba);
            }
        }
    }
}

/// Draw a one-pixel closed outline through the hexagon's rounded vertices.
pub fn outline_hexagon(img: &mut RgbaImage, hex: &Hexagon, colour: Colour) {
    let vertices = hex.vertices();
    let n = vertices.len();
    for i in 0..n {
        let (ax, ay) = vertices[i];
        let (bx, by) = vertices[(i + 1) % n];
        draw_line(
            img,
            (ax.round() as i64, ay.round() as i64),
            (bx.round() as i64, by.round() as i64),
            colour,
        );
    }
}

/// Draw a line between two pixel positions (Bresenham).
pub fn draw_line(img: &mut RgbaImage, from: (i64, i64), to: (i64, i64), colour: Colour) {
    let (mut x, mut y) = from;
    let (x1, y1) = to;
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let rgba = colour.to_rgba_pixel();
    loop {
        plot(img, x, y, rgba);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn plot(img: &mut RgbaImage, x: i64, y: i64, px: image::Rgba<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < img.width() && y < img.height() {
        img.put_pixel(x, y, px);
    }
}
