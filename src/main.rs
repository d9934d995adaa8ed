use rand::Rng;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::BlendMode;

mod background;
mod bullet;
mod collision;
mod config;
mod explosion;
mod gui;
mod health;
mod opponent;
mod player;
mod scoreboard;
mod shake;
mod shapes;
mod starfield;
mod text;
mod ui;

use bullet::Bullet;
use collision::Collidable;
use config::{EffectsTuning, GameConfig};
use explosion::Explosion;
use gui::GameOverScreen;
use health::Health;
use opponent::OpponentShip;
use player::PlayerShip;
use scoreboard::{RoundRecord, Scoreboard, Winner};
use shake::ScreenShake;
use starfield::Starfield;
use ui::{HealthBar, HealthBarStyle};

/// Logical playfield size; the OS window is scaled onto it by SDL.
pub const ARENA_WIDTH: u32 = 800;
pub const ARENA_HEIGHT: u32 = 600;

const CONFIG_PATH: &str = "assets/config/game.json";

/// Round phase. The winner itself lives in the game-over overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Playing,
    GameOver,
}

/// Advances one side's bullets and applies their hits to the target hull.
///
/// Spent bullets (off-screen or impacted) are removed. Every impact spawns
/// an explosion and raises the screen shake; a killing blow raises it
/// further. Returns true if the target was destroyed this frame.
fn resolve_bullet_hits(
    bullets: &mut Vec<Bullet>,
    target_bounds: Rect,
    target_health: &mut Health,
    damage: f32,
    explosions: &mut Vec<Explosion>,
    shake: &mut ScreenShake,
    effects: &EffectsTuning,
    rng: &mut impl Rng,
) -> bool {
    for bullet in bullets.iter_mut() {
        bullet.update();
    }

    let mut fatal = false;
    bullets.retain(|bullet| {
        if !bullet.active {
            return false;
        }
        if collision::circle_hits_rect(bullet.x, bullet.y, bullet.radius, &target_bounds) {
            let result = target_health.take_damage(damage);
            explosions.push(Explosion::new(bullet.x, bullet.y, rng));
            shake.trigger(effects.shake_hit);
            if result.is_fatal {
                fatal = true;
                shake.trigger(effects.shake_kill);
            }
            return false;
        }
        true
    });

    fatal
}

/// Debug overlay: hull and bullet bounding boxes. A bullet's box lights up
/// red while it AABB-overlaps the hull it can damage.
fn render_collision_boxes(
    canvas: &mut sdl2::render::Canvas<sdl2::video::Window>,
    player: &PlayerShip,
    opponent: &OpponentShip,
    player_bullets: &[Bullet],
    opponent_bullets: &[Bullet],
    offset: (i32, i32),
) -> Result<(), String> {
    let shifted = |rect: Rect| {
        Rect::new(
            rect.x() + offset.0,
            rect.y() + offset.1,
            rect.width(),
            rect.height(),
        )
    };

    canvas.set_draw_color(Color::RGB(255, 255, 255));
    canvas.draw_rect(shifted(player.bounds()))?;
    canvas.draw_rect(shifted(opponent.bounds()))?;

    for (bullets, target) in [
        (player_bullets, opponent.bounds()),
        (opponent_bullets, player.bounds()),
    ] {
        for bullet in bullets {
            let bounds = bullet.bounds();
            if collision::aabb_intersect(&bounds, &target) {
                canvas.set_draw_color(Color::RGB(255, 0, 0));
            } else {
                canvas.set_draw_color(Color::RGB(0, 255, 255));
            }
            canvas.draw_rect(shifted(bounds))?;
        }
    }

    Ok(())
}

/// Ends the round: flips the phase, shows the overlay and appends the
/// outcome to the scoreboard (failures are logged, never fatal).
fn finish_round(
    winner: Winner,
    victor_health: f32,
    frames: u64,
    scoreboard: &mut Option<Scoreboard>,
    game_over: &mut GameOverScreen,
    phase: &mut Phase,
) {
    *phase = Phase::GameOver;
    game_over.trigger(winner);
    log::info!("Round over after {} frames: {:?} wins", frames, winner);

    if let Some(board) = scoreboard {
        if let Err(e) = board.record(RoundRecord::now(winner, victor_health, frames)) {
            log::warn!("Failed to record round outcome: {}", e);
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let config = GameConfig::load_or_default(CONFIG_PATH)
        .map_err(|e| format!("Failed to load {}: {}", CONFIG_PATH, e))?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Space War", ARENA_WIDTH, ARENA_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(ARENA_WIDTH, ARENA_HEIGHT)
        .map_err(|e| e.to_string())?;
    canvas.set_blend_mode(BlendMode::Blend);

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;
    let mut rng = rand::thread_rng();

    let backdrop = background::build_backdrop(&mut canvas, &texture_creator, &mut rng)?;

    let mut scoreboard = match dirs::home_dir() {
        Some(home) => match Scoreboard::open(home.join(".space-war")) {
            Ok(board) => {
                let (player_wins, opponent_wins) = board.tally();
                log::info!(
                    "Scoreboard loaded: {} rounds (player {} - {} opponent)",
                    board.rounds().len(),
                    player_wins,
                    opponent_wins
                );
                Some(board)
            }
            Err(e) => {
                log::warn!("Scoreboard unavailable: {}", e);
                None
            }
        },
        None => {
            log::warn!("No home directory found; scoreboard disabled");
            None
        }
    };

    let mut player = PlayerShip::new(&config.player);
    let mut opponent = OpponentShip::new(&config.opponent, &mut rng);
    let mut player_bullets: Vec<Bullet> = Vec::new();
    let mut opponent_bullets: Vec<Bullet> = Vec::new();
    let mut explosions: Vec<Explosion> = Vec::new();
    let mut starfield = Starfield::new(config.effects.star_count, &mut rng);
    let mut shake = ScreenShake::new(config.effects.shake_decay);
    let mut game_over = GameOverScreen::new();

    // Player bar hangs below the hull, the opponent's floats above it
    let player_health_bar = HealthBar::new();
    let opponent_health_bar = HealthBar::with_style(HealthBarStyle {
        offset_y: -30,
        ..Default::default()
    });

    let mut phase = Phase::Playing;
    let mut round_frames: u64 = 0;
    let mut show_collision_boxes = false;

    log::info!(
        "Controls: Left/Right arrows to move, Space to fire, R to restart, Q to quit, B for collision boxes"
    );

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::Q | Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    ..
                } if phase == Phase::Playing => {
                    if let Some(bullet) = player.try_fire(&config.bullet, &mut rng) {
                        player_bullets.push(bullet);
                    }
                }
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    ..
                } if phase == Phase::GameOver => {
                    player = PlayerShip::new(&config.player);
                    opponent = OpponentShip::new(&config.opponent, &mut rng);
                    player_bullets.clear();
                    opponent_bullets.clear();
                    explosions.clear();
                    game_over.reset();
                    phase = Phase::Playing;
                    round_frames = 0;
                    log::info!("New round started");
                }
                Event::KeyDown {
                    keycode: Some(Keycode::B),
                    ..
                } => {
                    show_collision_boxes = !show_collision_boxes;
                    log::info!(
                        "Collision boxes: {}",
                        if show_collision_boxes { "ON" } else { "OFF" }
                    );
                }
                _ => {}
            }
        }

        if phase == Phase::Playing {
            round_frames += 1;

            let keyboard_state = event_pump.keyboard_state();
            player.update(
                keyboard_state.is_scancode_pressed(Scancode::Left),
                keyboard_state.is_scancode_pressed(Scancode::Right),
            );

            opponent.update(player.x, &mut rng);
            if let Some(bullet) = opponent.try_fire(&config.bullet, &mut rng) {
                opponent_bullets.push(bullet);
            }

            // Player bullets vs opponent hull
            let opponent_bounds = opponent.bounds();
            if resolve_bullet_hits(
                &mut player_bullets,
                opponent_bounds,
                &mut opponent.health,
                config.bullet.damage,
                &mut explosions,
                &mut shake,
                &config.effects,
                &mut rng,
            ) {
                explosions.push(Explosion::new(opponent.x, opponent.y, &mut rng));
                finish_round(
                    Winner::Player,
                    player.health.current(),
                    round_frames,
                    &mut scoreboard,
                    &mut game_over,
                    &mut phase,
                );
            }

            // Opponent bullets vs player hull (skipped once the round ended)
            if phase == Phase::Playing {
                let player_bounds = player.bounds();
                if resolve_bullet_hits(
                    &mut opponent_bullets,
                    player_bounds,
                    &mut player.health,
                    config.bullet.damage,
                    &mut explosions,
                    &mut shake,
                    &config.effects,
                    &mut rng,
                ) {
                    explosions.push(Explosion::new(player.x, player.y, &mut rng));
                    finish_round(
                        Winner::Opponent,
                        opponent.health.current(),
                        round_frames,
                        &mut scoreboard,
                        &mut game_over,
                        &mut phase,
                    );
                }
            }
        } else {
            // Round is over: bullets fly out without colliding
            for bullet in player_bullets.iter_mut().chain(opponent_bullets.iter_mut()) {
                bullet.update();
            }
            player_bullets.retain(|b| b.active);
            opponent_bullets.retain(|b| b.active);
        }

        // Cosmetics keep animating in both phases
        for explosion in &mut explosions {
            explosion.update(&mut rng);
        }
        explosions.retain(|e| !e.is_finished());
        starfield.update(&mut rng);
        shake.update();

        // Render: backdrop, stars, ships with bars, bullets, explosions,
        // overlay. World layers take the shake offset, the overlay does not.
        let offset = shake.offset(&mut rng);

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        canvas.copy(
            &backdrop,
            None,
            Rect::new(offset.0, offset.1, ARENA_WIDTH, ARENA_HEIGHT),
        )?;

        starfield.render(&mut canvas, offset)?;

        player.render(&mut canvas, offset)?;
        player_health_bar.render(
            &mut canvas,
            player.x as i32 + offset.0,
            player.y as i32 + offset.1,
            player.health.percentage(),
        )?;

        opponent.render(&mut canvas, offset)?;
        opponent_health_bar.render(
            &mut canvas,
            opponent.x as i32 + offset.0,
            (opponent.y + opponent.hover_offset()) as i32 + offset.1,
            opponent.health.percentage(),
        )?;

        for bullet in player_bullets.iter().chain(opponent_bullets.iter()) {
            bullet.render(&mut canvas, offset)?;
        }
        for explosion in &explosions {
            explosion.render(&mut canvas, offset)?;
        }

        if show_collision_boxes {
            render_collision_boxes(
                &mut canvas,
                &player,
                &opponent,
                &player_bullets,
                &opponent_bullets,
                offset,
            )?;
        }

        game_over.render(&mut canvas, scoreboard.as_ref().map(|b| b.tally()))?;

        canvas.present();
    }

    Ok(())
}
