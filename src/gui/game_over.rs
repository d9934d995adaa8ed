//! End-of-round overlay
//!
//! Darkens the arena and announces the winner, with the restart/quit prompt
//! and the running win tally from the scoreboard. Triggered when a ship's
//! health reaches zero; cleared on restart.

use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::scoreboard::Winner;
use crate::text::draw_text_centered;

/// Visual configuration for the overlay.
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    /// Overlay darkness (0-255)
    pub overlay_alpha: u8,
    pub title_color: Color,
    pub winner_color: Color,
    pub instruction_color: Color,
    pub tally_color: Color,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            overlay_alpha: 180,
            title_color: Color::RGB(255, 255, 255),
            winner_color: Color::RGB(255, 255, 100),
            instruction_color: Color::RGB(170, 170, 180),
            tally_color: Color::RGB(120, 200, 255),
        }
    }
}

/// State of the end-of-round screen.
pub struct GameOverScreen {
    winner: Option<Winner>,
    style: GameOverStyle,
}

impl GameOverScreen {
    pub fn new() -> Self {
        GameOverScreen {
            winner: None,
            style: GameOverStyle::default(),
        }
    }

    /// Shows the overlay announcing `winner`.
    pub fn trigger(&mut self, winner: Winner) {
        self.winner = Some(winner);
    }

    /// Hides the overlay (round restart).
    pub fn reset(&mut self) {
        self.winner = None;
    }

    #[allow(dead_code)] // Reserved for future state queries
    pub fn is_active(&self) -> bool {
        self.winner.is_some()
    }

    /// Renders the overlay if a round has ended. `tally` is the historic
    /// (player, opponent) win count shown under the prompt.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        tally: Option<(u32, u32)>,
    ) -> Result<(), String> {
        let Some(winner) = self.winner else {
            return Ok(());
        };

        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(None)?;

        let (width, height) = canvas.logical_size();
        let center_x = width as i32 / 2;
        let center_y = height as i32 / 2;

        draw_text_centered(
            canvas,
            "GAME OVER",
            center_x,
            center_y - 80,
            self.style.title_color,
            4,
        )?;

        let winner_line = match winner {
            Winner::Player => "PLAYER WINS!",
            Winner::Opponent => "OPPONENT WINS!",
        };
        draw_text_centered(
            canvas,
            winner_line,
            center_x,
            center_y - 20,
            self.style.winner_color,
            3,
        )?;

        draw_text_centered(
            canvas,
            "PRESS R TO RESTART OR Q TO QUIT",
            center_x,
            center_y + 40,
            self.style.instruction_color,
            2,
        )?;

        if let Some((player_wins, opponent_wins)) = tally {
            let tally_line = format!("PLAYER {} - {} OPPONENT", player_wins, opponent_wins);
            draw_text_centered(
                canvas,
                &tally_line,
                center_x,
                center_y + 90,
                self.style.tally_color,
                1,
            )?;
        }

        Ok(())
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive() {
        let screen = GameOverScreen::new();
        assert!(!screen.is_active());
    }

    #[test]
    fn trigger_and_reset_toggle_activity() {
        let mut screen = GameOverScreen::new();
        screen.trigger(Winner::Player);
        assert!(screen.is_active());
        screen.reset();
        assert!(!screen.is_active());
    }
}
