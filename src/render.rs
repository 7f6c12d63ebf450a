//! Flat wireframe raster of a scene: every live element drawn as its transformed layout box.

use std::path::Path;

use anyhow::Context;
use image::{Rgba, RgbaImage};

use crate::foundation::core::{Affine, Point, Vec2};
use crate::foundation::error::{AriseError, AriseResult};
use crate::scene::Scene;

const BACKGROUND: [u8; 3] = [10, 10, 18];
const FILL_ALPHA: f64 = 0.35;
const MAX_DIM: u32 = 16_384;

const PALETTE: [[u8; 3]; 8] = [
    [96, 165, 250],
    [167, 139, 250],
    [244, 114, 182],
    [251, 191, 36],
    [52, 211, 153],
    [248, 113, 113],
    [45, 212, 191],
    [226, 232, 240],
];

/// Stable color for an element name (FNV-1a into a fixed palette).
pub fn layer_color(name: &str) -> [u8; 3] {
    let mut h: u32 = 0x811c_9dc5;
    for b in name.bytes() {
        h ^= u32::from(b);
        h = h.wrapping_mul(0x0100_0193);
    }
    PALETTE[(h as usize) % PALETTE.len()]
}

/// Rasterize `scene` at viewport resolution, as seen at its current scroll offset.
pub fn render(scene: &Scene) -> AriseResult<RgbaImage> {
    let vp = scene.viewport();
    let (w, h) = (vp.width.round(), vp.height.round());
    if !(w >= 1.0 && h >= 1.0 && w <= f64::from(MAX_DIM) && h <= f64::from(MAX_DIM)) {
        return Err(AriseError::validation(format!(
            "cannot render a {}x{} viewport",
            vp.width, vp.height
        )));
    }
    let [r, g, b] = BACKGROUND;
    let mut img = RgbaImage::from_pixel(w as u32, h as u32, Rgba([r, g, b, 255]));

    for el in scene.elements().iter().filter(|e| !e.removed) {
        let opacity = scene.effective_opacity(el.id);
        if opacity <= 0.0 {
            continue;
        }
        let Some(world) = scene.world_transform(el.id) else {
            continue;
        };
        let view = if scene.is_fixed(el.id) {
            world
        } else {
            Affine::translate(Vec2::new(0.0, -scene.scroll_y())) * world
        };
        let l = el.layout;
        let quad = [
            Point::new(l.x0, l.y0),
            Point::new(l.x1, l.y0),
            Point::new(l.x1, l.y1),
            Point::new(l.x0, l.y1),
        ]
        .map(|p| view * p);

        let color = layer_color(&el.name);
        fill_quad(&mut img, &quad, color, opacity * FILL_ALPHA);
        stroke_quad(&mut img, &quad, color, opacity);
    }
    Ok(img)
}

/// Render and write a PNG.
pub fn write_png(scene: &Scene, path: impl AsRef<Path>) -> AriseResult<()> {
    let path = path.as_ref();
    let img = render(scene)?;
    img.save(path)
        .with_context(|| format!("write PNG '{}'", path.display()))?;
    Ok(())
}

fn blend(img: &mut RgbaImage, x: i64, y: i64, color: [u8; 3], alpha: f64) {
    if x < 0 || y < 0 || x >= i64::from(img.width()) || y >= i64::from(img.height()) {
        return;
    }
    let a = alpha.clamp(0.0, 1.0);
    let px = img.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in px.0.iter_mut().zip(color) {
        *dst = (f64::from(*dst) * (1.0 - a) + f64::from(src) * a).round() as u8;
    }
}

fn cross(a: Point, b: Point, p: Point) -> f64 {
    (b - a).cross(p - a)
}

/// Inside test against a convex quad of either winding.
fn inside(quad: &[Point; 4], p: Point) -> bool {
    let mut pos = false;
    let mut neg = false;
    for i in 0..4 {
        let c = cross(quad[i], quad[(i + 1) % 4], p);
        pos |= c > 0.0;
        neg |= c < 0.0;
    }
    !(pos && neg)
}

fn fill_quad(img: &mut RgbaImage, quad: &[Point; 4], color: [u8; 3], alpha: f64) {
    let (w, h) = (f64::from(img.width()), f64::from(img.height()));
    let xs = quad.map(|p| p.x);
    let ys = quad.map(|p| p.y);
    let x0 = xs.iter().copied().fold(f64::INFINITY, f64::min).floor().max(0.0);
    let x1 = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max).ceil().min(w);
    let y0 = ys.iter().copied().fold(f64::INFINITY, f64::min).floor().max(0.0);
    let y1 = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max).ceil().min(h);
    if x0 >= x1 || y0 >= y1 {
        return;
    }
    for y in y0 as i64..y1 as i64 {
        for x in x0 as i64..x1 as i64 {
            if inside(quad, Point::new(x as f64 + 0.5, y as f64 + 0.5)) {
                blend(img, x, y, color, alpha);
            }
        }
    }
}

fn stroke_quad(img: &mut RgbaImage, quad: &[Point; 4], color: [u8; 3], alpha: f64) {
    for i in 0..4 {
        let (a, b) = (quad[i], quad[(i + 1) % 4]);
        let steps = (b - a).hypot().ceil().clamp(1.0, 65_536.0) as i64;
        for s in 0..=steps {
            let p = a.lerp(b, s as f64 / steps as f64);
            blend(img, p.x.floor() as i64, p.y.floor() as i64, color, alpha);
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/render.rs"]
mod tests;
