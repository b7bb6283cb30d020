//! Collaborator seams
//!
//! The engine never renders, reads input or owns the player's health; every
//! outward effect goes through these traits. The host game implements them
//! and hands mutable references to [`tick`](crate::sim::tick::tick) via
//! [`TickCtx`] each frame.

use glam::Vec2;

use super::hazard::{Surge, Torpedo};

/// UI flash kinds requested by the engine (fire-and-forget).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    /// Player took damage
    PlayerHit,
    /// A rare attack is winding up
    UltimateWarning,
}

/// Parameters for a collectible coin scatter.
#[derive(Debug, Clone, Copy)]
pub struct CoinDropSpec {
    pub pos: Vec2,
    pub count: u32,
    pub value: u32,
}

/// Opaque handle into the host's cover-obstacle field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleId(pub u32);

/// Scripted dodge returned by the obstacle collaborator; the motion
/// controller suspends tracking and runs it to completion.
#[derive(Debug, Clone, Copy)]
pub struct DetourPlan {
    pub velocity: Vec2,
    pub duration: f32,
}

/// Outward effects: damage, knockback, score, economy, UI feedback.
pub trait EncounterHooks {
    /// The only path by which the engine affects player health.
    fn damage_player(&mut self, amount: f32);
    /// Knockback and field-pull impulses applied to the player.
    fn push_player(&mut self, impulse: Vec2);
    fn award_score(&mut self, amount: u32);
    fn spawn_coin_drop(&mut self, drop: CoinDropSpec);
    fn trigger_flash(&mut self, kind: FlashKind);
}

/// Cover-obstacle collision, consumed by the motion controller and the
/// ballistic families.
pub trait CoverObstacles {
    /// Obstacle overlapping the padded point, if any.
    fn find_obstacle_hit(&self, pos: Vec2, pad: Vec2) -> Option<ObstacleId>;
    /// A hazard struck the obstacle with the given strength.
    fn register_impact(&mut self, obstacle: ObstacleId, strength: f32);
    /// Detour to run when the boss should dodge an obstacle ahead.
    fn plan_avoidance(&self, pos: Vec2, facing: f32) -> Option<DetourPlan>;
}

/// Object pool for the high-churn families. `acquire_*` hands back a
/// previously released shell (its fields are stale; the spawner rewrites
/// them); `release_*` only ever receives pooled-provenance entities.
pub trait HazardPool {
    fn acquire_torpedo(&mut self) -> Option<Torpedo>;
    fn release_torpedoes(&mut self, shells: Vec<Torpedo>);
    fn acquire_surge(&mut self) -> Option<Surge>;
    fn release_surges(&mut self, shells: Vec<Surge>);
}

/// Per-tick reads and collaborator handles, rebuilt by the host each frame.
pub struct TickCtx<'a> {
    pub player_pos: Vec2,
    /// Terminal player condition; the resolver fast-skips when set
    pub player_down: bool,
    pub hooks: &'a mut dyn EncounterHooks,
    pub obstacles: &'a mut dyn CoverObstacles,
    pub pool: &'a mut dyn HazardPool,
}
