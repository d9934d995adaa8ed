use rand::Rng;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::shapes;

const PARTICLE_COUNT: usize = 20;
const RING_START_RADIUS: f32 = 5.0;
const RING_MAX_RADIUS: f32 = 30.0;

/// One debris fragment of an explosion.
struct Particle {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    size: f32,
    color: (u8, u8, u8),
    alpha: f32,
}

/// A one-shot explosion: an expanding, fading ring plus a burst of warm
/// debris particles. Finished explosions are removed by the main loop.
pub struct Explosion {
    pub x: f32,
    pub y: f32,
    ring_radius: f32,
    ring_alpha: f32,
    particles: Vec<Particle>,
}

impl Explosion {
    pub fn new(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        let mut particles = Vec::with_capacity(PARTICLE_COUNT);
        for _ in 0..PARTICLE_COUNT {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.gen_range(1.0..5.0);
            particles.push(Particle {
                x,
                y,
                dx: angle.cos() * speed,
                dy: angle.sin() * speed,
                size: rng.gen_range(2.0..6.0),
                color: (
                    rng.gen_range(200..=255),
                    rng.gen_range(100..=200),
                    rng.gen_range(0..=50),
                ),
                alpha: 255.0,
            });
        }

        Explosion {
            x,
            y,
            ring_radius: RING_START_RADIUS,
            ring_alpha: 255.0,
            particles,
        }
    }

    /// Advances ring expansion and particle motion/fade one frame.
    pub fn update(&mut self, rng: &mut impl Rng) {
        self.ring_radius += 2.0;
        self.ring_alpha = (self.ring_alpha - 10.0).max(0.0);

        for p in &mut self.particles {
            p.x += p.dx;
            p.y += p.dy;
            p.alpha -= rng.gen_range(5.0..=15.0);
            p.size *= 0.95;
        }
        self.particles.retain(|p| p.alpha > 0.0 && p.size > 0.5);
    }

    /// True once the ring has fully expanded and every particle has faded.
    pub fn is_finished(&self) -> bool {
        self.ring_radius >= RING_MAX_RADIUS && self.particles.is_empty()
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, offset: (i32, i32)) -> Result<(), String> {
        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);

        let cx = self.x as i32 + offset.0;
        let cy = self.y as i32 + offset.1;

        if self.ring_alpha > 0.0 {
            shapes::draw_circle_outline(
                canvas,
                cx,
                cy,
                self.ring_radius as i32,
                Color::RGBA(255, 165, 0, self.ring_alpha as u8),
            )?;
        }

        for p in &self.particles {
            shapes::fill_circle(
                canvas,
                p.x as i32 + offset.0,
                p.y as i32 + offset.1,
                p.size as i32,
                Color::RGBA(p.color.0, p.color.1, p.color.2, p.alpha as u8),
            )?;
        }

        // Soft additive bloom over the whole blast
        shapes::fill_glow_circle(
            canvas,
            cx,
            cy,
            (self.ring_radius * 2.0) as i32,
            Color::RGBA(255, 165, 0, 100),
        )?;

        Ok(())
    }
}
