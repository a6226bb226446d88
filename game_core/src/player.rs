use glam::Vec2;
use rand::Rng;

use crate::config::{Config, Params};
use crate::resources::{Events, GameRng};

/// The defender: a gun orbiting the central core, aimed by the cursor.
///
/// Health belongs to the core; the gun itself is invulnerable. Reload is
/// automatic when ammo runs out, and the shield is a timed bubble with a
/// cooldown.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub health: i32,
    pub ammo: u32,
    pub alive: bool,

    pub is_reloading: bool,
    pub reload_timer: f32,
    pub shield_active: bool,
    pub shield_timer: f32,
    pub shield_cooldown: f32,
    pub shoot_cooldown: f32,

    // Recoil pulls the gun back along the barrel axis briefly after a shot.
    recoil_offset: f32,
    recoil_timer: f32,
    recoil_target: f32,

    /// Aim angle in radians, updated from the cursor each tick.
    pub gun_angle: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            health: Params::PLAYER_MAX_HEALTH,
            ammo: Params::PLAYER_MAX_AMMO,
            alive: true,
            is_reloading: false,
            reload_timer: 0.0,
            shield_active: false,
            shield_timer: 0.0,
            shield_cooldown: 0.0,
            shoot_cooldown: 0.0,
            recoil_offset: 0.0,
            recoil_timer: 0.0,
            recoil_target: 0.0,
            gun_angle: 0.0,
        }
    }

    /// Advance timers and re-aim for one tick.
    pub fn update(&mut self, dt: f32, cursor: Vec2, config: &Config, events: &mut Events) {
        if !self.alive {
            return;
        }

        // Point the gun at the cursor; hold the old angle when the cursor
        // sits on the core (no meaningful direction).
        let to_cursor = cursor - config.core_pos();
        if to_cursor.length_squared() > 1.0 {
            self.gun_angle = to_cursor.y.atan2(to_cursor.x);
        }

        if self.shoot_cooldown > 0.0 {
            self.shoot_cooldown = (self.shoot_cooldown - dt).max(0.0);
        }

        // Auto-reload
        if self.is_reloading {
            self.reload_timer -= dt;
            if self.reload_timer <= 0.0 {
                self.ammo = Params::PLAYER_MAX_AMMO;
                self.is_reloading = false;
                self.reload_timer = 0.0;
                events.reload_finished = true;
            }
        } else if self.ammo == 0 {
            self.is_reloading = true;
            self.reload_timer = config.reload_time;
            events.reload_started = true;
        }

        // Shield lifetime and cooldown
        if self.shield_active {
            self.shield_timer -= dt;
            if self.shield_timer <= 0.0 {
                self.shield_active = false;
                self.shield_timer = 0.0;
                self.shield_cooldown = config.shield_cooldown;
                events.shield_off = true;
            }
        } else if self.shield_cooldown > 0.0 {
            self.shield_cooldown = (self.shield_cooldown - dt).max(0.0);
        }

        // Recoil recovery
        if self.recoil_timer > 0.0 {
            self.recoil_timer -= dt;
            let t = (self.recoil_timer / Params::RECOIL_RECOVER).max(0.0);
            self.recoil_offset = self.recoil_target * t;
        } else {
            self.recoil_offset = 0.0;
        }

        if self.health <= 0 {
            self.health = 0;
            self.alive = false;
        }
    }

    /// Gun mount position on the orbit ring, recoil applied.
    pub fn gun_pos(&self, config: &Config) -> Vec2 {
        let r = config.orbit_radius - self.recoil_offset;
        config.core_pos() + Vec2::from_angle(self.gun_angle) * r
    }

    /// Muzzle position - where bullets spawn.
    pub fn gun_tip(&self, config: &Config) -> Vec2 {
        self.gun_pos(config) + Vec2::from_angle(self.gun_angle) * config.gun_length
    }

    pub fn can_shoot(&self) -> bool {
        self.alive && self.ammo > 0 && !self.is_reloading && self.shoot_cooldown <= 0.0
    }

    /// Spend one round: arms the shot cooldown and a randomized recoil
    /// impulse. Callers check `can_shoot` and pool capacity first.
    pub fn consume_ammo(&mut self, config: &Config, rng: &mut GameRng) {
        self.ammo = self.ammo.saturating_sub(1);
        self.shoot_cooldown = config.shoot_cooldown;
        self.recoil_target = rng.0.gen_range(Params::RECOIL_MIN..Params::RECOIL_MAX);
        self.recoil_timer = Params::RECOIL_RECOVER;
    }

    /// Returns false while the shield is already up or cooling down.
    pub fn activate_shield(&mut self, config: &Config) -> bool {
        if self.shield_active || self.shield_cooldown > 0.0 {
            return false;
        }
        self.shield_active = true;
        self.shield_timer = config.shield_duration;
        true
    }

    /// Apply contact damage. Returns true if health was actually deducted
    /// (false when the shield absorbed it).
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.shield_active {
            return false;
        }
        self.health -= amount;
        true
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
