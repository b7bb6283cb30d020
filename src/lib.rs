//! Tidelord boss engine - encounter choreography for a 2D water arena
//!
//! Core modules:
//! - `recipe`: Data-driven pattern configuration (attack sets, cooldowns, movement envelopes)
//! - `sim`: Deterministic boss simulation (motion, attack scheduling, hazards, collisions)
//!
//! The crate owns simulation only. Rendering, input, audio and the player's
//! health live in the host game; every outward effect goes through the
//! collaborator traits in [`sim::hooks`]. The host drives one fixed tick per
//! frame and supplies the player's position each tick.

pub mod recipe;
pub mod sim;

pub use recipe::{AttackKind, PatternId, PatternRecipe};
pub use sim::hooks::{CoverObstacles, EncounterHooks, HazardPool, TickCtx};
pub use sim::state::Encounter;
pub use sim::tick::tick;

use glam::Vec2;

/// Engine configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Arena dimensions (y grows downward, screen convention)
    pub const ARENA_WIDTH: f32 = 960.0;
    pub const ARENA_HEIGHT: f32 = 540.0;
    /// Waterline; surface-riding hazards travel along it
    pub const SURFACE_Y: f32 = 120.0;

    /// Hazards further than this outside the arena are retired
    pub const DESPAWN_MARGIN: f32 = 80.0;

    /// Player hit-circle radius used by the resolver
    pub const PLAYER_RADIUS: f32 = 14.0;
}

/// Exponentially damped approach toward a target value.
///
/// Frame-rate independent: the same elapsed time converges the same amount
/// regardless of how it is sliced into ticks. Never snaps.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-rate * dt).exp())
}

/// Unit vector from `from` toward `to`; falls back to `fallback` when the
/// points coincide.
#[inline]
pub fn aim(from: Vec2, to: Vec2, fallback: Vec2) -> Vec2 {
    (to - from).normalize_or(fallback)
}

/// Rotate a vector by `angle` radians.
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_converges_without_overshoot() {
        let mut x = 0.0;
        for _ in 0..600 {
            x = approach(x, 100.0, 3.0, consts::SIM_DT);
            assert!(x <= 100.0);
        }
        assert!((x - 100.0).abs() < 0.1);
    }

    #[test]
    fn test_approach_zero_dt_is_identity() {
        assert_eq!(approach(42.0, 100.0, 3.0, 0.0), 42.0);
    }

    #[test]
    fn test_aim_fallback_on_coincident_points() {
        let p = Vec2::new(5.0, 5.0);
        assert_eq!(aim(p, p, Vec2::NEG_X), Vec2::NEG_X);
    }
}
