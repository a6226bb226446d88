use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use game_core::Config;

/// Optional tuning overrides, overlaid on the default [`Config`]. Every
/// field is optional so a file only needs the values it changes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tuning {
    pub bullet_speed: Option<f32>,
    pub bullet_lifetime: Option<f32>,
    pub bullet_pool_size: Option<usize>,
    pub enemy_base_speed: Option<f32>,
    pub enemy_spawn_interval: Option<f32>,
    pub enemy_contact_damage: Option<i32>,
    pub reload_time: Option<f32>,
    pub shield_duration: Option<f32>,
    pub shield_cooldown: Option<f32>,
    pub shoot_cooldown: Option<f32>,
    pub max_particles: Option<usize>,
}

pub fn load(path: &Path) -> Result<Tuning> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading tuning file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing tuning file {}", path.display()))
}

impl Tuning {
    pub fn apply(&self, config: &mut Config) {
        if let Some(v) = self.bullet_speed {
            config.bullet_speed = v;
        }
        if let Some(v) = self.bullet_lifetime {
            config.bullet_lifetime = v;
        }
        if let Some(v) = self.bullet_pool_size {
            config.bullet_pool_size = v;
        }
        if let Some(v) = self.enemy_base_speed {
            config.enemy_base_speed = v;
        }
        if let Some(v) = self.enemy_spawn_interval {
            config.enemy_spawn_interval = v;
        }
        if let Some(v) = self.enemy_contact_damage {
            config.enemy_contact_damage = v;
        }
        if let Some(v) = self.reload_time {
            config.reload_time = v;
        }
        if let Some(v) = self.shield_duration {
            config.shield_duration = v;
        }
        if let Some(v) = self.shield_cooldown {
            config.shield_cooldown = v;
        }
        if let Some(v) = self.shoot_cooldown {
            config.shoot_cooldown = v;
        }
        if let Some(v) = self.max_particles {
            config.max_particles = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_overrides_only_named_fields() {
        let tuning: Tuning = toml::from_str(
            r#"
            bullet_speed = 600.0
            enemy_spawn_interval = 3.5
            "#,
        )
        .unwrap();

        let mut config = Config::new();
        let default_lifetime = config.bullet_lifetime;
        tuning.apply(&mut config);

        assert_eq!(config.bullet_speed, 600.0);
        assert_eq!(config.enemy_spawn_interval, 3.5);
        assert_eq!(config.bullet_lifetime, default_lifetime, "untouched field");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let parsed: Result<Tuning, _> = toml::from_str("no_such_knob = 1.0");
        assert!(parsed.is_err(), "typos in tuning files must not pass silently");
    }

    #[test]
    fn test_empty_file_is_valid() {
        let tuning: Tuning = toml::from_str("").unwrap();
        let mut config = Config::new();
        let before = config.clone();
        tuning.apply(&mut config);
        assert_eq!(config.bullet_speed, before.bullet_speed);
    }
}
