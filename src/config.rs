//! Gameplay tuning configuration
//!
//! All of the numeric knobs for the game (ship speeds, cooldowns, bullet
//! speeds, AI timer ranges, shake strengths) live here. The `Default` impls
//! carry the canonical values; an optional JSON file at
//! `assets/config/game.json` can override any subset of them.

use serde::Deserialize;

/// Player ship tuning
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Horizontal movement speed in pixels per frame
    pub speed: f32,
    /// Frames between shots
    pub fire_cooldown: u32,
    /// Upward bullet speed in pixels per frame
    pub bullet_speed: f32,
    /// Starting health
    pub max_health: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        PlayerTuning {
            speed: 5.0,
            fire_cooldown: 15,
            bullet_speed: 10.0,
            max_health: 100.0,
        }
    }
}

/// Opponent ship tuning
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpponentTuning {
    /// Horizontal movement speed in pixels per frame
    pub speed: f32,
    /// Frames between shots
    pub fire_cooldown: u32,
    /// Downward bullet speed in pixels per frame
    pub bullet_speed: f32,
    /// Starting health
    pub max_health: f32,
    /// Decision timer re-arm range in frames (both ends inclusive)
    pub decision_min: u32,
    pub decision_max: u32,
    /// Chance to pick a fully random direction when deciding
    pub random_dir_chance: f32,
    /// Chance to invert a player-tracking decision (feint)
    pub feint_chance: f32,
    /// Per-frame chance to fire once the cooldown has expired
    pub fire_chance: f32,
}

impl Default for OpponentTuning {
    fn default() -> Self {
        OpponentTuning {
            speed: 3.0,
            fire_cooldown: 30,
            bullet_speed: 8.0,
            max_health: 100.0,
            decision_min: 20,
            decision_max: 60,
            random_dir_chance: 0.3,
            feint_chance: 0.2,
            fire_chance: 0.05,
        }
    }
}

/// Bullet tuning shared by both ships
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BulletTuning {
    /// Collision radius in pixels
    pub radius: f32,
    /// Number of trail positions kept for rendering
    pub trail_length: usize,
    /// Damage dealt per hit
    pub damage: f32,
}

impl Default for BulletTuning {
    fn default() -> Self {
        BulletTuning {
            radius: 5.0,
            trail_length: 5,
            damage: 10.0,
        }
    }
}

/// Cosmetic tuning: starfield density and screen-shake strengths
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EffectsTuning {
    /// Number of background stars
    pub star_count: usize,
    /// Shake raised on an ordinary hit
    pub shake_hit: f32,
    /// Shake raised on a killing blow
    pub shake_kill: f32,
    /// Shake decay per frame
    pub shake_decay: f32,
}

impl Default for EffectsTuning {
    fn default() -> Self {
        EffectsTuning {
            star_count: 100,
            shake_hit: 5.0,
            shake_kill: 10.0,
            shake_decay: 0.5,
        }
    }
}

/// Root configuration for a game session
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerTuning,
    pub opponent: OpponentTuning,
    pub bullet: BulletTuning,
    pub effects: EffectsTuning,
}

impl GameConfig {
    /// Loads a configuration file, merging it over the defaults.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Loads the configuration at `path` if it exists, otherwise returns
    /// the built-in defaults. A present-but-malformed file is an error.
    pub fn load_or_default(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if std::path::Path::new(path).exists() {
            Self::load_from_file(path)
        } else {
            Ok(GameConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_canonical_values() {
        let config = GameConfig::default();
        assert_eq!(config.player.speed, 5.0);
        assert_eq!(config.player.fire_cooldown, 15);
        assert_eq!(config.opponent.fire_cooldown, 30);
        assert_eq!(config.opponent.decision_min, 20);
        assert_eq!(config.opponent.decision_max, 60);
        assert_eq!(config.bullet.damage, 10.0);
        assert_eq!(config.effects.star_count, 100);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let json = r#"{ "player": { "speed": 7.5 }, "effects": { "star_count": 40 } }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.player.speed, 7.5);
        assert_eq!(config.effects.star_count, 40);
        // Everything not named keeps its default
        assert_eq!(config.player.fire_cooldown, 15);
        assert_eq!(config.opponent.speed, 3.0);
    }

    #[test]
    fn empty_json_is_all_defaults() {
        let config: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.bullet.radius, 5.0);
        assert_eq!(config.effects.shake_kill, 10.0);
    }
}
