use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::Side;
use crate::params::Params;

/// Errors raised while building a [`Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Device speed profile, picked from the screen size at session start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpeedProfile {
    /// Slower ball for small touch screens
    Reduced,
    #[default]
    Standard,
}

impl SpeedProfile {
    /// Pick a profile from the host screen width in CSS pixels
    pub fn for_screen_width(width: u32) -> Self {
        if width <= Params::SMALL_SCREEN_MAX_WIDTH {
            SpeedProfile::Reduced
        } else {
            SpeedProfile::Standard
        }
    }

    pub fn ball_speed(&self) -> f32 {
        match self {
            SpeedProfile::Reduced => Params::REDUCED_BALL_SPEED,
            SpeedProfile::Standard => Params::STANDARD_BALL_SPEED,
        }
    }

    pub fn computer_speed(&self) -> f32 {
        match self {
            SpeedProfile::Reduced => Params::REDUCED_COMPUTER_SPEED,
            SpeedProfile::Standard => Params::STANDARD_COMPUTER_SPEED,
        }
    }

    /// Added once to the computer speed when the ball first hits the cap
    pub fn opponent_boost(&self) -> f32 {
        match self {
            SpeedProfile::Reduced => Params::REDUCED_OPPONENT_BOOST,
            SpeedProfile::Standard => Params::STANDARD_OPPONENT_BOOST,
        }
    }

    /// Paddle step per frame while a movement key is held
    pub fn key_step(&self) -> f32 {
        match self {
            SpeedProfile::Reduced => Params::REDUCED_KEY_STEP,
            SpeedProfile::Standard => Params::STANDARD_KEY_STEP,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_reach: f32,
    pub paddle_inset: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_hit_increment: f32,
    pub deflection_factor: f32,
    pub reset_damping: f32,
    pub win_score: u8,
    pub computer_speed: f32,
    pub opponent_boost: f32,
    pub key_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_profile(SpeedProfile::default())
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default geometry with the speeds of `profile`
    pub fn with_profile(profile: SpeedProfile) -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_reach: Params::PADDLE_REACH,
            paddle_inset: Params::PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: profile.ball_speed(),
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_hit_increment: Params::BALL_HIT_INCREMENT,
            deflection_factor: Params::DEFLECTION_FACTOR,
            reset_damping: Params::RESET_DAMPING,
            win_score: Params::WIN_SCORE,
            computer_speed: profile.computer_speed(),
            opponent_boost: profile.opponent_boost(),
            key_step: profile.key_step(),
        }
    }

    /// Parse a JSON override document on top of the standard profile
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_json_with_profile(json, SpeedProfile::default())
    }

    /// Parse a JSON override document on top of `profile`; fields missing
    /// from the document keep the profile's values
    pub fn from_json_with_profile(
        json: &str,
        profile: SpeedProfile,
    ) -> Result<Self, ConfigError> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(overrides) = overrides else {
            return Err(ConfigError::Invalid {
                field: "config",
                reason: "must be a JSON object",
            });
        };

        let mut merged = serde_json::to_value(Self::with_profile(profile))?;
        if let serde_json::Value::Object(base) = &mut merged {
            base.extend(overrides);
        }
        let config: Config = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }

        fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: "must be a non-negative finite number",
                })
            }
        }

        positive("playfield_width", self.playfield_width)?;
        positive("playfield_height", self.playfield_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_reach", self.paddle_reach)?;
        positive("ball_radius", self.ball_radius)?;
        positive("ball_speed_initial", self.ball_speed_initial)?;
        positive("ball_speed_max", self.ball_speed_max)?;
        positive("reset_damping", self.reset_damping)?;
        positive("computer_speed", self.computer_speed)?;
        positive("key_step", self.key_step)?;
        non_negative("paddle_inset", self.paddle_inset)?;
        non_negative("ball_hit_increment", self.ball_hit_increment)?;
        non_negative("deflection_factor", self.deflection_factor)?;
        non_negative("opponent_boost", self.opponent_boost)?;

        if self.paddle_height > self.playfield_height {
            return Err(ConfigError::Invalid {
                field: "paddle_height",
                reason: "paddle is taller than the playfield",
            });
        }
        if self.paddle_reach * 2.0 >= self.playfield_width {
            return Err(ConfigError::Invalid {
                field: "paddle_reach",
                reason: "paddle zones overlap",
            });
        }
        if self.ball_speed_max < self.ball_speed_initial {
            return Err(ConfigError::Invalid {
                field: "ball_speed_max",
                reason: "speed cap is below the initial speed",
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::Invalid {
                field: "win_score",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Center of the playfield, where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.playfield_width / 2.0, self.playfield_height / 2.0)
    }

    /// Top of a paddle centered vertically
    pub fn paddle_spawn_y(&self) -> f32 {
        self.playfield_height / 2.0 - self.paddle_height / 2.0
    }

    /// Left edge of a paddle, used for rendering only
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.playfield_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Clamp a paddle top to the playfield
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.playfield_height - self.paddle_height)
    }
}
