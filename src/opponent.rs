use rand::Rng;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::bullet::{Bullet, BulletOwner};
use crate::collision::Collidable;
use crate::config::{BulletTuning, OpponentTuning};
use crate::health::Health;
use crate::shapes;
use crate::ARENA_WIDTH;

/// Margin the hull center keeps from the arena's side edges.
const EDGE_MARGIN: f32 = 30.0;

/// Steering choice made each time the decision timer expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Maneuver {
    /// Uniformly random direction
    Wander,
    /// Head toward the player's column
    Pursue,
    /// Pursue decision inverted to stay unpredictable
    Feint,
}

/// The scripted saucer at the top of the arena.
///
/// Movement is driven by a randomized decision timer: whenever it expires
/// the ship either wanders or pursues the player (occasionally feinting the
/// other way), then re-arms the timer with a fresh random duration.
pub struct OpponentShip {
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    pub health: Health,
    speed: f32,
    cooldown: u32,
    cooldown_max: u32,
    bullet_speed: f32,
    fire_chance: f32,
    direction: f32,
    decision_timer: u32,
    decision_min: u32,
    decision_max: u32,
    random_dir_chance: f32,
    feint_chance: f32,
    maneuver: Maneuver,
    hover_offset: f32,
    hover_direction: f32,
    beacon_angle: f32,
}

impl OpponentShip {
    pub fn new(tuning: &OpponentTuning, rng: &mut impl Rng) -> Self {
        OpponentShip {
            x: rng.gen_range(50.0..=ARENA_WIDTH as f32 - 50.0),
            y: 50.0,
            width: 50,
            height: 30,
            health: Health::new(tuning.max_health),
            speed: tuning.speed,
            cooldown: 0,
            cooldown_max: tuning.fire_cooldown,
            bullet_speed: tuning.bullet_speed,
            fire_chance: tuning.fire_chance,
            direction: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            decision_timer: 0,
            decision_min: tuning.decision_min,
            decision_max: tuning.decision_max,
            random_dir_chance: tuning.random_dir_chance,
            feint_chance: tuning.feint_chance,
            maneuver: Maneuver::Wander,
            hover_offset: 0.0,
            hover_direction: 1.0,
            beacon_angle: 0.0,
        }
    }

    /// Picks a new direction and re-arms the decision timer.
    fn decide(&mut self, player_x: f32, rng: &mut impl Rng) {
        if rng.gen_bool(self.random_dir_chance as f64) {
            self.direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            self.maneuver = Maneuver::Wander;
        } else {
            self.direction = if player_x > self.x { 1.0 } else { -1.0 };
            self.maneuver = Maneuver::Pursue;
            if rng.gen_bool(self.feint_chance as f64) {
                self.direction = -self.direction;
                self.maneuver = Maneuver::Feint;
            }
        }

        self.decision_timer = rng.gen_range(self.decision_min..=self.decision_max);
        log::debug!(
            "opponent maneuver {:?}, direction {:+.0}, next decision in {} frames",
            self.maneuver,
            self.direction,
            self.decision_timer
        );
    }

    /// Advances one frame: decision timer, movement with edge reversal,
    /// fire cooldown, hover and beacon animation.
    pub fn update(&mut self, player_x: f32, rng: &mut impl Rng) {
        if self.decision_timer == 0 {
            self.decide(player_x, rng);
        } else {
            self.decision_timer -= 1;
        }

        self.x += self.speed * self.direction;

        // Edge contact clamps position and forces the direction inward
        if self.x < EDGE_MARGIN {
            self.x = EDGE_MARGIN;
            self.direction = 1.0;
        } else if self.x > ARENA_WIDTH as f32 - EDGE_MARGIN {
            self.x = ARENA_WIDTH as f32 - EDGE_MARGIN;
            self.direction = -1.0;
        }

        self.cooldown = self.cooldown.saturating_sub(1);

        // Hover bounces between -2 and 2
        self.hover_offset += 0.05 * self.hover_direction;
        if self.hover_offset.abs() > 2.0 {
            self.hover_direction = -self.hover_direction;
        }

        self.beacon_angle = (self.beacon_angle + 2.0) % 360.0;
    }

    /// Rolls the per-frame fire chance once the cooldown has expired,
    /// spawning a downward bullet just below the hull on success.
    pub fn try_fire(&mut self, bullet_tuning: &BulletTuning, rng: &mut impl Rng) -> Option<Bullet> {
        if self.cooldown > 0 || !rng.gen_bool(self.fire_chance as f64) {
            return None;
        }
        self.cooldown = self.cooldown_max;
        Some(Bullet::new(
            self.x,
            self.y + 20.0,
            self.bullet_speed,
            BulletOwner::Opponent,
            bullet_tuning,
            rng,
        ))
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, offset: (i32, i32)) -> Result<(), String> {
        let cx = self.x as i32 + offset.0;
        let cy = (self.y + self.hover_offset) as i32 + offset.1;

        // Saucer hull, dome, darkened cockpit
        shapes::fill_ellipse(canvas, cx, cy + 7, 25, 7, Color::RGB(150, 0, 0))?;
        shapes::fill_ellipse(canvas, cx, cy, 15, 10, Color::RGB(255, 0, 0))?;
        shapes::fill_ellipse(canvas, cx, cy, 10, 5, Color::RGB(50, 0, 0))?;

        // Three beacon lights circling the rim
        for i in 0..3 {
            let angle = (self.beacon_angle + i as f32 * 120.0).to_radians();
            let light_x = cx + (15.0 * angle.cos()) as i32;
            let light_y = cy + (5.0 * angle.sin()) as i32;
            shapes::fill_circle(canvas, light_x, light_y, 3, Color::RGB(255, 200, 0))?;
        }

        Ok(())
    }

    /// Vertical hover displacement, needed to anchor the health bar.
    pub fn hover_offset(&self) -> f32 {
        self.hover_offset
    }
}

impl Collidable for OpponentShip {
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

    fn test_opponent(seed: u64) -> (OpponentShip, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let ship = OpponentShip::new(&OpponentTuning::default(), &mut rng);
        (ship, rng)
    }

    #[test]
    fn spawns_inside_the_arena() {
        for seed in 0..64 {
            let (ship, _) = test_opponent(seed);
            assert!(ship.x >= 50.0 && ship.x <= ARENA_WIDTH as f32 - 50.0);
            assert_eq!(ship.y, 50.0);
        }
    }

    #[test]
    fn direction_is_always_a_unit_sign() {
        let (mut ship, mut rng) = test_opponent(3);
        for _ in 0..1000 {
            ship.update(400.0, &mut rng);
            assert!(ship.direction == 1.0 || ship.direction == -1.0);
        }
    }

    #[test]
    fn stays_inside_edge_margins() {
        let (mut ship, mut rng) = test_opponent(11);
        for _ in 0..2000 {
            ship.update(400.0, &mut rng);
            assert!(ship.x >= EDGE_MARGIN);
            assert!(ship.x <= ARENA_WIDTH as f32 - EDGE_MARGIN);
        }
    }

    #[test]
    fn decision_timer_rearms_in_configured_range() {
        let (mut ship, mut rng) = test_opponent(5);
        ship.decision_timer = 0;
        ship.decide(400.0, &mut rng);
        let tuning = OpponentTuning::default();
        assert!(ship.decision_timer >= tuning.decision_min);
        assert!(ship.decision_timer <= tuning.decision_max);
    }

    #[test]
    fn all_maneuvers_occur_across_decisions() {
        let (mut ship, mut rng) = test_opponent(17);
        let mut seen_wander = false;
        let mut seen_pursue = false;
        let mut seen_feint = false;

        for _ in 0..500 {
            ship.decide(400.0, &mut rng);
            match ship.maneuver {
                Maneuver::Wander => seen_wander = true,
                Maneuver::Pursue => seen_pursue = true,
                Maneuver::Feint => seen_feint = true,
            }
        }

        assert!(seen_wander && seen_pursue && seen_feint);
    }

    #[test]
    fn pursue_heads_toward_the_player() {
        // random_dir_chance 0 and feint_chance 0 make every decision a pursue
        let tuning = OpponentTuning {
            random_dir_chance: 0.0,
            feint_chance: 0.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(23);
        let mut ship = OpponentShip::new(&tuning, &mut rng);
        ship.x = 400.0;

        ship.decide(700.0, &mut rng);
        assert_eq!(ship.direction, 1.0);
        ship.decide(100.0, &mut rng);
        assert_eq!(ship.direction, -1.0);
    }

    #[test]
    fn fire_waits_for_cooldown_and_spawns_downward_bullet() {
        let tuning = OpponentTuning {
            fire_chance: 1.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(29);
        let mut ship = OpponentShip::new(&tuning, &mut rng);

        let bullet = ship.try_fire(&BulletTuning::default(), &mut rng).unwrap();
        assert_eq!(bullet.y, ship.y + 20.0);
        let before = bullet.y;
        let mut bullet = bullet;
        bullet.update();
        assert!(bullet.y > before);

        // Immediately after firing the cooldown blocks another shot
        assert!(ship.try_fire(&BulletTuning::default(), &mut rng).is_none());
    }

    #[test]
    fn hover_stays_bounded() {
        let (mut ship, mut rng) = test_opponent(31);
        for _ in 0..1000 {
            ship.update(400.0, &mut rng);
            assert!(ship.hover_offset.abs() < 2.2);
        }
    }
}
