//! Hull health bars
//!
//! Each ship carries an always-visible health bar, rendered as procedural
//! SDL2 rectangles anchored to the hull center. The bar is a stateless
//! component: create one per style and call `render` with the ship's
//! current values each frame.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Visual configuration for a health bar.
#[derive(Debug, Clone)]
pub struct HealthBarStyle {
    /// Bar width in pixels (matches the hull width)
    pub width: u32,
    /// Bar height in pixels
    pub height: u32,
    /// Vertical offset from the hull center (negative = above)
    pub offset_y: i32,
    /// Depleted-portion color
    pub background_color: Color,
    /// Filled-portion color
    pub fill_color: Color,
    /// Filled-portion color below 30% health
    pub low_fill_color: Color,
}

impl Default for HealthBarStyle {
    fn default() -> Self {
        HealthBarStyle {
            width: 50,
            height: 5,
            offset_y: 25,
            background_color: Color::RGB(255, 0, 0),
            fill_color: Color::RGB(0, 255, 0),
            low_fill_color: Color::RGB(255, 160, 0),
        }
    }
}

/// A stateless health bar renderer.
pub struct HealthBar {
    style: HealthBarStyle,
}

impl HealthBar {
    pub fn new() -> Self {
        HealthBar {
            style: HealthBarStyle::default(),
        }
    }

    pub fn with_style(style: HealthBarStyle) -> Self {
        HealthBar { style }
    }

    /// Renders the bar centered on `center_x`, displaced from `center_y` by
    /// the style's vertical offset. `percentage` is clamped to 0.0..=1.0.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        center_x: i32,
        center_y: i32,
        percentage: f32,
    ) -> Result<(), String> {
        let bar_x = center_x - self.style.width as i32 / 2;
        let bar_y = center_y + self.style.offset_y;

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(Rect::new(bar_x, bar_y, self.style.width, self.style.height))?;

        let fill_width = (self.style.width as f32 * percentage.clamp(0.0, 1.0)) as u32;
        if fill_width > 0 {
            let fill_color = if percentage < 0.3 {
                self.style.low_fill_color
            } else {
                self.style.fill_color
            };
            canvas.set_draw_color(fill_color);
            canvas.fill_rect(Rect::new(bar_x, bar_y, fill_width, self.style.height))?;
        }

        Ok(())
    }

    #[allow(dead_code)] // Reserved for future style inspection
    pub fn style(&self) -> &HealthBarStyle {
        &self.style
    }
}

impl Default for HealthBar {
    fn default() -> Self {
        Self::new()
    }
}
