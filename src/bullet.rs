use std::collections::VecDeque;

use rand::Rng;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::collision::Collidable;
use crate::config::BulletTuning;
use crate::shapes;
use crate::ARENA_HEIGHT;

/// Which ship fired a bullet. Decides its color and which hull it can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Opponent,
}

pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub owner: BulletOwner,
    pub active: bool,
    vy: f32,
    trail: VecDeque<(f32, f32)>,
    trail_capacity: usize,
    glow_radius: i32,
}

impl Bullet {
    pub fn new(
        x: f32,
        y: f32,
        vy: f32,
        owner: BulletOwner,
        tuning: &BulletTuning,
        rng: &mut impl Rng,
    ) -> Self {
        Bullet {
            x,
            y,
            radius: tuning.radius,
            owner,
            active: true,
            vy,
            trail: VecDeque::with_capacity(tuning.trail_length),
            trail_capacity: tuning.trail_length,
            glow_radius: rng.gen_range(5..=10),
        }
    }

    /// Advances the bullet one frame and records the trail. Bullets leaving
    /// the arena vertically deactivate themselves.
    pub fn update(&mut self) {
        self.trail.push_back((self.x, self.y));
        if self.trail.len() > self.trail_capacity {
            self.trail.pop_front();
        }

        self.y += self.vy;

        if self.y < 0.0 || self.y > ARENA_HEIGHT as f32 {
            self.active = false;
        }
    }

    fn color(&self) -> Color {
        match self.owner {
            BulletOwner::Player => Color::RGB(0, 255, 200),
            BulletOwner::Opponent => Color::RGB(255, 100, 0),
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, offset: (i32, i32)) -> Result<(), String> {
        let color = self.color();

        // Trail: oldest points smallest and dimmest
        let len = self.trail.len();
        for (i, &(tx, ty)) in self.trail.iter().enumerate() {
            let fade = (i + 1) as f32 / (len + 1) as f32;
            let trail_color = Color::RGB(
                (color.r as f32 * fade) as u8,
                (color.g as f32 * fade) as u8,
                (color.b as f32 * fade) as u8,
            );
            let trail_radius = (self.radius * fade) as i32;
            shapes::fill_circle(
                canvas,
                tx as i32 + offset.0,
                ty as i32 + offset.1,
                trail_radius,
                trail_color,
            )?;
        }

        let cx = self.x as i32 + offset.0;
        let cy = self.y as i32 + offset.1;

        // White core with a colored additive halo
        shapes::fill_circle(canvas, cx, cy, self.radius as i32, Color::RGB(255, 255, 255))?;
        shapes::fill_glow_circle(
            canvas,
            cx,
            cy,
            self.glow_radius,
            Color::RGBA(color.r, color.g, color.b, 100),
        )?;

        Ok(())
    }
}

impl Collidable for Bullet {
    fn bounds(&self) -> Rect {
        let r = self.radius as i32;
        Rect::new(
            self.x as i32 - r,
            self.y as i32 - r,
            (r * 2) as u32,
            (r * 2) as u32,
        )
    }
}
