use rand::Rng;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::bullet::{Bullet, BulletOwner};
use crate::collision::Collidable;
use crate::config::{BulletTuning, PlayerTuning};
use crate::health::Health;
use crate::shapes;
use crate::{ARENA_HEIGHT, ARENA_WIDTH};

/// Margin the hull center keeps from the arena's side edges.
const EDGE_MARGIN: f32 = 20.0;

/// The human-controlled saucer at the bottom of the arena.
pub struct PlayerShip {
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    pub health: Health,
    speed: f32,
    cooldown: u32,
    cooldown_max: u32,
    bullet_speed: f32,
    glow_pulse: f32,
    glow_direction: f32,
}

impl PlayerShip {
    pub fn new(tuning: &PlayerTuning) -> Self {
        PlayerShip {
            x: ARENA_WIDTH as f32 / 2.0,
            y: ARENA_HEIGHT as f32 - 50.0,
            width: 50,
            height: 30,
            health: Health::new(tuning.max_health),
            speed: tuning.speed,
            cooldown: 0,
            cooldown_max: tuning.fire_cooldown,
            bullet_speed: tuning.bullet_speed,
            glow_pulse: 0.0,
            glow_direction: 1.0,
        }
    }

    /// Advances one frame: held-key movement, edge clamp, cooldown tick,
    /// engine-glow pulse.
    pub fn update(&mut self, left_held: bool, right_held: bool) {
        if left_held {
            self.x -= self.speed;
        }
        if right_held {
            self.x += self.speed;
        }
        self.x = self.x.clamp(EDGE_MARGIN, ARENA_WIDTH as f32 - EDGE_MARGIN);

        self.cooldown = self.cooldown.saturating_sub(1);

        // Glow bounces between 0 and 3
        self.glow_pulse += 0.1 * self.glow_direction;
        if self.glow_pulse > 3.0 || self.glow_pulse < 0.0 {
            self.glow_direction = -self.glow_direction;
        }
    }

    /// Fires if the cooldown has expired, spawning an upward bullet just
    /// above the hull. Returns `None` while on cooldown.
    pub fn try_fire(&mut self, bullet_tuning: &BulletTuning, rng: &mut impl Rng) -> Option<Bullet> {
        if self.cooldown > 0 {
            return None;
        }
        self.cooldown = self.cooldown_max;
        Some(Bullet::new(
            self.x,
            self.y - 20.0,
            -self.bullet_speed,
            BulletOwner::Player,
            bullet_tuning,
            rng,
        ))
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, offset: (i32, i32)) -> Result<(), String> {
        let cx = self.x as i32 + offset.0;
        let cy = self.y as i32 + offset.1;

        // Saucer drawn bottom-up: underside shadow, hull, dome, cockpit
        shapes::fill_ellipse(canvas, cx, cy + 12, 25, 7, Color::RGB(0, 100, 0))?;
        shapes::fill_ellipse(canvas, cx, cy + 7, 25, 7, Color::RGB(0, 255, 0))?;
        shapes::fill_ellipse(canvas, cx, cy, 15, 10, Color::RGB(100, 255, 100))?;
        shapes::fill_ellipse(canvas, cx, cy, 10, 5, Color::RGB(150, 255, 255))?;

        // Pulsing engine glow under each side of the hull
        let glow_radius = (5.0 + self.glow_pulse) as i32;
        shapes::fill_circle(canvas, cx - 10, cy + 10, glow_radius, Color::RGB(100, 255, 200))?;
        shapes::fill_circle(canvas, cx + 10, cy + 10, glow_radius, Color::RGB(100, 255, 200))?;

        Ok(())
    }
}

impl Collidable for PlayerShip {
    fn bounds(&self) -> Rect {
        Rect::new(
            self.x as i32 - self.width as i32 / 2,
            self.y as i32 - self.height as i32 / 2,
            self.width,
            self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_player() -> PlayerShip {
        PlayerShip::new(&PlayerTuning::default())
    }

    #[test]
    fn holds_position_without_input() {
        let mut player = test_player();
        let x = player.x;
        player.update(false, false);
        assert_eq!(player.x, x);
    }

    #[test]
    fn clamps_at_left_edge() {
        let mut player = test_player();
        for _ in 0..200 {
            player.update(true, false);
        }
        assert_eq!(player.x, EDGE_MARGIN);
    }

    #[test]
    fn clamps_at_right_edge() {
        let mut player = test_player();
        for _ in 0..200 {
            player.update(false, true);
        }
        assert_eq!(player.x, ARENA_WIDTH as f32 - EDGE_MARGIN);
    }

    #[test]
    fn fire_respects_cooldown() {
        let mut player = test_player();
        let mut rng = StdRng::seed_from_u64(1);
        let tuning = BulletTuning::default();

        let first = player.try_fire(&tuning, &mut rng);
        assert!(first.is_some());
        assert!(player.try_fire(&tuning, &mut rng).is_none());

        // Cooldown expires after fire_cooldown frames
        for _ in 0..PlayerTuning::default().fire_cooldown {
            player.update(false, false);
        }
        assert!(player.try_fire(&tuning, &mut rng).is_some());
    }

    #[test]
    fn bullet_spawns_above_hull_moving_up() {
        let mut player = test_player();
        let mut rng = StdRng::seed_from_u64(1);
        let bullet = player.try_fire(&BulletTuning::default(), &mut rng).unwrap();

        assert_eq!(bullet.x, player.x);
        assert_eq!(bullet.y, player.y - 20.0);
        let before = bullet.y;
        let mut bullet = bullet;
        bullet.update();
        assert!(bullet.y < before);
    }

    #[test]
    fn glow_pulse_stays_bounded() {
        let mut player = test_player();
        for _ in 0..500 {
            player.update(false, false);
            assert!(player.glow_pulse > -0.2 && player.glow_pulse < 3.2);
        }
    }
}
