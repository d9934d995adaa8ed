//! Static nebula backdrop
//!
//! The backdrop is generated once at startup: a black fill with a handful of
//! additively-blended nebula blobs, rendered into an offscreen target
//! texture that the main loop copies every frame.

use rand::Rng;
use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::shapes;
use crate::{ARENA_HEIGHT, ARENA_WIDTH};

const NEBULA_COUNT: usize = 5;
const NEBULA_RINGS: u32 = 20;

/// Parameters of one nebula blob.
struct NebulaBlob {
    x: i32,
    y: i32,
    radius: i32,
    color: Color,
}

impl NebulaBlob {
    fn generate(rng: &mut impl Rng) -> Self {
        let value = rng.gen_range(20..=60u8);
        NebulaBlob {
            x: rng.gen_range(0..ARENA_WIDTH as i32),
            y: rng.gen_range(0..ARENA_HEIGHT as i32),
            radius: rng.gen_range(50..150),
            color: nebula_color(value),
        }
    }
}

/// Dim blue-violet tint derived from a single brightness value.
fn nebula_color(value: u8) -> Color {
    Color::RGB(value / 2, value / 3, value)
}

/// Renders the backdrop into a fresh target texture.
pub fn build_backdrop<'a>(
    canvas: &mut Canvas<Window>,
    texture_creator: &'a TextureCreator<WindowContext>,
    rng: &mut impl Rng,
) -> Result<Texture<'a>, String> {
    let mut texture = texture_creator
        .create_texture_target(
            texture_creator.default_pixel_format(),
            ARENA_WIDTH,
            ARENA_HEIGHT,
        )
        .map_err(|e| e.to_string())?;

    let blobs: Vec<NebulaBlob> = (0..NEBULA_COUNT)
        .map(|_| NebulaBlob::generate(rng))
        .collect();

    let mut draw_result: Result<(), String> = Ok(());
    canvas
        .with_texture_canvas(&mut texture, |target| {
            draw_result = draw_backdrop(target, &blobs);
        })
        .map_err(|e| e.to_string())?;
    draw_result?;

    Ok(texture)
}

fn draw_backdrop(canvas: &mut Canvas<Window>, blobs: &[NebulaBlob]) -> Result<(), String> {
    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.clear();

    canvas.set_blend_mode(BlendMode::Add);
    for blob in blobs {
        // Concentric discs with falling alpha build the soft cloud edge
        for i in 0..NEBULA_RINGS {
            let alpha = 150u32.saturating_sub(i * 7) as u8;
            if alpha == 0 {
                break;
            }
            let ring_radius = blob.radius - (i as i32 * 2);
            if ring_radius <= 0 {
                break;
            }
            shapes::fill_circle(
                canvas,
                blob.x,
                blob.y,
                ring_radius,
                Color::RGBA(blob.color.r, blob.color.g, blob.color.b, alpha),
            )?;
        }
    }
    canvas.set_blend_mode(BlendMode::Blend);

    Ok(())
}
