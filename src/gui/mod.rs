//! Screen-space overlays (drawn in screen coordinates, unaffected by the
//! world shake offset).

mod game_over;

pub use game_over::GameOverScreen;
