//! Game configuration
//!
//! Defaults come from the constants in the types crate. A driver may override
//! the seed and the two timing values through environment variables.

use crate::types::{
    GAME_OVER_ROWS, GRAVITY_INTERVAL_SECS, SPAWN_POSITION, TRANSITION_SECS,
};

/// Tunables for a [`Game`](crate::Game)
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Seed for the default random source
    pub seed: u32,
    pub spawn_x: i8,
    pub spawn_y: i8,
    /// Lifetime of a cell transition once it starts
    pub transition_secs: f32,
    /// Seconds between gravity steps in [`Game::update`](crate::Game::update)
    pub gravity_interval_secs: f32,
    /// A lock that leaves any block in rows `0..game_over_rows` ends the game
    pub game_over_rows: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            spawn_x: SPAWN_POSITION.0,
            spawn_y: SPAWN_POSITION.1,
            transition_secs: TRANSITION_SECS,
            gravity_interval_secs: GRAVITY_INTERVAL_SECS,
            game_over_rows: GAME_OVER_ROWS,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `POVTRIS_SEED`: RNG seed
    /// - `POVTRIS_GRAVITY_MS`: gravity interval in milliseconds
    /// - `POVTRIS_TRANSITION_MS`: transition duration in milliseconds
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("POVTRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let gravity_interval_secs = lookup("POVTRIS_GRAVITY_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .map(|ms| ms as f32 / 1000.0)
            .unwrap_or(defaults.gravity_interval_secs);

        let transition_secs = lookup("POVTRIS_TRANSITION_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .map(|ms| ms as f32 / 1000.0)
            .unwrap_or(defaults.transition_secs);

        Self {
            seed,
            transition_secs,
            gravity_interval_secs,
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = GameConfig::default();
        assert_eq!((config.spawn_x, config.spawn_y), (3, 0));
        assert_eq!(config.game_over_rows, 3);
        assert_eq!(config.transition_secs, 0.1);
        assert_eq!(config.gravity_interval_secs, 0.5);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = GameConfig::from_lookup(|key| match key {
            "POVTRIS_SEED" => Some("99".to_string()),
            "POVTRIS_GRAVITY_MS" => Some(" 250 ".to_string()),
            "POVTRIS_TRANSITION_MS" => Some("200".to_string()),
            _ => None,
        });
        assert_eq!(config.seed, 99);
        assert_eq!(config.gravity_interval_secs, 0.25);
        assert_eq!(config.transition_secs, 0.2);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = GameConfig::from_lookup(|key| match key {
            "POVTRIS_SEED" => Some("abc".to_string()),
            "POVTRIS_GRAVITY_MS" => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = GameConfig::from_env();
    }
}
