//! Procedural shape drawing
//!
//! The whole game is drawn without textures: every saucer, bullet and
//! particle is built from SDL2 rectangles, the same way the bitmap font
//! builds glyphs. Circles and ellipses are filled with one horizontal span
//! per scanline.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Fills a circle centered at (`cx`, `cy`).
pub fn fill_circle(
    canvas: &mut Canvas<Window>,
    cx: i32,
    cy: i32,
    radius: i32,
    color: Color,
) -> Result<(), String> {
    if radius <= 0 {
        return Ok(());
    }

    canvas.set_draw_color(color);
    for dy in -radius..=radius {
        // Span half-width on this scanline: sqrt(r^2 - dy^2)
        let half = ((radius * radius - dy * dy) as f32).sqrt() as i32;
        canvas.fill_rect(Rect::new(cx - half, cy + dy, (half * 2 + 1) as u32, 1))?;
    }

    Ok(())
}

/// Fills an axis-aligned ellipse centered at (`cx`, `cy`).
pub fn fill_ellipse(
    canvas: &mut Canvas<Window>,
    cx: i32,
    cy: i32,
    radius_x: i32,
    radius_y: i32,
    color: Color,
) -> Result<(), String> {
    if radius_x <= 0 || radius_y <= 0 {
        return Ok(());
    }

    canvas.set_draw_color(color);
    for dy in -radius_y..=radius_y {
        let t = dy as f32 / radius_y as f32;
        let half = (radius_x as f32 * (1.0 - t * t).sqrt()) as i32;
        canvas.fill_rect(Rect::new(cx - half, cy + dy, (half * 2 + 1) as u32, 1))?;
    }

    Ok(())
}

/// Draws a one-pixel circle outline (midpoint algorithm).
pub fn draw_circle_outline(
    canvas: &mut Canvas<Window>,
    cx: i32,
    cy: i32,
    radius: i32,
    color: Color,
) -> Result<(), String> {
    if radius <= 0 {
        return Ok(());
    }

    canvas.set_draw_color(color);

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        let points = [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ];
        for (px, py) in points {
            canvas.draw_point(sdl2::rect::Point::new(px, py))?;
        }

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }

    Ok(())
}

/// Fills a translucent circle with additive blending, for glow halos.
///
/// Restores the canvas to alpha blending before returning.
pub fn fill_glow_circle(
    canvas: &mut Canvas<Window>,
    cx: i32,
    cy: i32,
    radius: i32,
    color: Color,
) -> Result<(), String> {
    canvas.set_blend_mode(BlendMode::Add);
    fill_circle(canvas, cx, cy, radius, color)?;
    canvas.set_blend_mode(BlendMode::Blend);
    Ok(())
}
