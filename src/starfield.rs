use rand::Rng;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::shapes;
use crate::{ARENA_HEIGHT, ARENA_WIDTH};

/// One background star. Larger stars fall faster for a cheap parallax
/// effect, and each star twinkles on its own sine phase.
struct Star {
    x: f32,
    y: f32,
    size: f32,
    speed: f32,
    brightness: u8,
    twinkle_speed: f32,
    twinkle_phase: f32,
}

impl Star {
    fn new(rng: &mut impl Rng) -> Self {
        let size = rng.gen_range(0.5..3.0);
        Star {
            x: rng.gen_range(0.0..ARENA_WIDTH as f32),
            y: rng.gen_range(0.0..ARENA_HEIGHT as f32),
            size,
            speed: size * 0.8,
            brightness: rng.gen_range(150..=255),
            twinkle_speed: rng.gen_range(0.02..0.1),
            twinkle_phase: rng.gen_range(0.0..std::f32::consts::TAU),
        }
    }

    fn update(&mut self, rng: &mut impl Rng) {
        self.y += self.speed;
        if self.y > ARENA_HEIGHT as f32 {
            self.y = 0.0;
            self.x = rng.gen_range(0.0..ARENA_WIDTH as f32);
        }

        self.twinkle_phase += self.twinkle_speed;
        self.brightness = (150.0 + 50.0 * self.twinkle_phase.sin()) as u8;
    }

    fn render(&self, canvas: &mut Canvas<Window>, offset: (i32, i32)) -> Result<(), String> {
        let color = Color::RGB(self.brightness, self.brightness, self.brightness);
        let cx = self.x as i32 + offset.0;
        let cy = self.y as i32 + offset.1;

        shapes::fill_circle(canvas, cx, cy, self.size as i32, color)?;

        // Big stars get a soft halo
        if self.size > 2.0 {
            shapes::fill_glow_circle(
                canvas,
                cx,
                cy,
                (self.size * 3.0) as i32,
                Color::RGBA(color.r, color.g, color.b, 50),
            )?;
        }

        Ok(())
    }
}

/// The scrolling star layer drawn between the nebula backdrop and the ships.
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        Starfield {
            stars: (0..count).map(|_| Star::new(rng)).collect(),
        }
    }

    pub fn update(&mut self, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.update(rng);
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, offset: (i32, i32)) -> Result<(), String> {
        for star in &self.stars {
            star.render(canvas, offset)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_requested_count_inside_arena() {
        let mut rng = StdRng::seed_from_u64(12);
        let field = Starfield::new(100, &mut rng);

        assert_eq!(field.stars.len(), 100);
        for star in &field.stars {
            assert!(star.x >= 0.0 && star.x < ARENA_WIDTH as f32);
            assert!(star.y >= 0.0 && star.y < ARENA_HEIGHT as f32);
        }
    }

    #[test]
    fn stars_wrap_to_the_top() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut star = Star::new(&mut rng);
        star.y = ARENA_HEIGHT as f32 - 0.1;
        star.speed = 2.0;

        star.update(&mut rng);
        assert_eq!(star.y, 0.0);
        assert!(star.x >= 0.0 && star.x < ARENA_WIDTH as f32);
    }

    #[test]
    fn brightness_stays_in_twinkle_band() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut star = Star::new(&mut rng);

        for _ in 0..1000 {
            star.update(&mut rng);
            assert!((100..=200).contains(&star.brightness));
        }
    }

    #[test]
    fn parallax_speed_follows_size() {
        let mut rng = StdRng::seed_from_u64(15);
        for _ in 0..50 {
            let star = Star::new(&mut rng);
            assert!((star.speed - star.size * 0.8).abs() < f32::EPSILON);
        }
    }
}
