//! Hazard entity records
//!
//! One struct per hazard family, with its stage enum where the family runs a
//! multi-stage life. Shared conventions across every family:
//! - all timers count down in seconds and clamp at zero
//! - `dead` is only ever set, never cleared; advancing a dead entity is a no-op
//! - re-hit cooldowns are per instance, never shared across entities
//! - `pooled` marks pool provenance on the high-churn families; only pooled
//!   shells are ever handed back to the pooling collaborator

use glam::Vec2;

/// Family ids for registry dispatch.
///
/// Wake waves, treasure waves and fin sweeps share the `Surge` family: same
/// ellipse geometry, stages and waterline motion, distinguished by
/// [`SurgeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardFamily {
    Torpedo,
    Speedboat,
    Katapult,
    CoinBurst,
    CoinExplosion,
    Shockwave,
    Whirlpool,
    CardBoomerang,
    DiamondBeam,
    Surge,
    CrownColumn,
    PerfumeOrb,
    FragranceCloud,
}

impl HazardFamily {
    pub const ALL: [HazardFamily; 13] = [
        HazardFamily::Torpedo,
        HazardFamily::Speedboat,
        HazardFamily::Katapult,
        HazardFamily::CoinBurst,
        HazardFamily::CoinExplosion,
        HazardFamily::Shockwave,
        HazardFamily::Whirlpool,
        HazardFamily::CardBoomerang,
        HazardFamily::DiamondBeam,
        HazardFamily::Surge,
        HazardFamily::CrownColumn,
        HazardFamily::PerfumeOrb,
        HazardFamily::FragranceCloud,
    ];
}

// --- Torpedo (pooled, high churn) ---
pub const TORPEDO_RADIUS: f32 = 10.0;
pub const TORPEDO_SPEED: f32 = 260.0;
pub const TORPEDO_LIFE: f32 = 6.0;
pub const TORPEDO_DAMAGE: f32 = 1.0;
pub const TORPEDO_KNOCKBACK: f32 = 180.0;
pub const TORPEDO_IMPACT_STRENGTH: f32 = 1.0;

/// Straight-running projectile; consumed on hit.
#[derive(Debug, Clone, Default)]
pub struct Torpedo {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub life: f32,
    pub damage: f32,
    pub knockback: f32,
    pub pooled: bool,
    pub dead: bool,
}

// --- Speedboat (regatta ultimate) ---
pub const SPEEDBOAT_RADIUS: f32 = 26.0;
pub const SPEEDBOAT_SPEED: f32 = 520.0;
pub const SPEEDBOAT_REV_TIME: f32 = 1.1;
pub const SPEEDBOAT_DAMAGE: f32 = 2.0;
pub const SPEEDBOAT_KNOCKBACK: f32 = 340.0;
pub const SPEEDBOAT_REHIT: f32 = 0.8;
pub const SPEEDBOAT_IMPACT_STRENGTH: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedboatStage {
    /// Engine rev at the arena edge; harmless wind-up
    Rev,
    /// Full-speed run across the arena
    Charge,
}

#[derive(Debug, Clone)]
pub struct Speedboat {
    pub pos: Vec2,
    pub vel: Vec2,
    pub stage: SpeedboatStage,
    pub stage_timer: f32,
    pub radius: f32,
    pub damage: f32,
    pub knockback: f32,
    pub hit_cooldown: f32,
    pub dead: bool,
}

// --- Katapult shot ---
pub const KATAPULT_RADIUS: f32 = 12.0;
pub const KATAPULT_LAUNCH_VX: f32 = 180.0;
pub const KATAPULT_LAUNCH_VY: f32 = -240.0;
pub const KATAPULT_GRAVITY: f32 = 170.0;
pub const KATAPULT_LIFE: f32 = 4.6;
pub const KATAPULT_BLAST_RADIUS: f32 = 54.0;
pub const KATAPULT_BLAST_TIME: f32 = 0.5;
pub const KATAPULT_DAMAGE: f32 = 1.0;
pub const KATAPULT_BLAST_DAMAGE: f32 = 1.5;
pub const KATAPULT_KNOCKBACK: f32 = 220.0;
pub const KATAPULT_IMPACT_STRENGTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KatapultStage {
    Flight,
    /// Secondary radius hazard after landing or expiry
    Exploding,
}

#[derive(Debug, Clone)]
pub struct KatapultShot {
    pub pos: Vec2,
    pub vel: Vec2,
    pub gravity: f32,
    pub radius: f32,
    pub life: f32,
    pub stage: KatapultStage,
    pub stage_timer: f32,
    pub blast_radius: f32,
    pub damage: f32,
    pub blast_damage: f32,
    pub knockback: f32,
    pub blast_hit: bool,
    pub dead: bool,
}

impl KatapultShot {
    /// Flip into the exploding stage. Idempotent; never revives a dead shot.
    pub fn detonate(&mut self) {
        if self.dead || self.stage == KatapultStage::Exploding {
            return;
        }
        self.stage = KatapultStage::Exploding;
        self.stage_timer = KATAPULT_BLAST_TIME;
        self.vel = Vec2::ZERO;
    }
}

// --- Coin burst / coin explosion ---
pub const COIN_BURST_RADIUS: f32 = 9.0;
pub const COIN_BURST_GRAVITY: f32 = 210.0;
pub const COIN_BURST_LIFE: f32 = 3.4;
pub const COIN_BURST_DAMAGE: f32 = 1.0;
pub const COIN_BURST_KNOCKBACK: f32 = 150.0;
pub const COIN_DROP_COUNT: u32 = 3;
pub const COIN_DROP_VALUE: u32 = 5;

pub const COIN_EXPLOSION_RADIUS: f32 = 46.0;
pub const COIN_EXPLOSION_LIFE: f32 = 0.45;
pub const COIN_EXPLOSION_DAMAGE: f32 = 1.0;
pub const COIN_EXPLOSION_KNOCKBACK: f32 = 240.0;

/// Lobbed coin; scatters a drop and leaves a pulse zone where it lands.
#[derive(Debug, Clone)]
pub struct CoinBurst {
    pub pos: Vec2,
    pub vel: Vec2,
    pub gravity: f32,
    pub radius: f32,
    pub life: f32,
    pub damage: f32,
    pub knockback: f32,
    pub dead: bool,
}

/// Fixed-duration single-pulse zone spawned by a landed coin burst.
#[derive(Debug, Clone)]
pub struct CoinExplosion {
    pub pos: Vec2,
    pub radius: f32,
    pub life: f32,
    pub damage: f32,
    pub knockback: f32,
    pub hit: bool,
    pub dead: bool,
}

impl CoinExplosion {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            radius: COIN_EXPLOSION_RADIUS,
            life: COIN_EXPLOSION_LIFE,
            damage: COIN_EXPLOSION_DAMAGE,
            knockback: COIN_EXPLOSION_KNOCKBACK,
            hit: false,
            dead: false,
        }
    }
}

// --- Shockwave (double expanding ring) ---
pub const SHOCKWAVE_TELEGRAPH: f32 = 0.9;
pub const SHOCKWAVE_PAUSE: f32 = 0.55;
pub const SHOCKWAVE_CLEANUP: f32 = 0.4;
pub const SHOCKWAVE_START_RADIUS: f32 = 24.0;
pub const SHOCKWAVE_MAX_RADIUS: f32 = 240.0;
pub const SHOCKWAVE_GROWTH: f32 = 320.0;
pub const SHOCKWAVE_BAND: f32 = 16.0;
pub const SHOCKWAVE_DAMAGE: f32 = 1.0;
pub const SHOCKWAVE_KNOCKBACK: f32 = 260.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShockwaveStage {
    Telegraph,
    Wave1,
    Pause,
    Wave2,
    Cleanup,
}

/// Two expanding rings with an independent damage flag per wave.
#[derive(Debug, Clone)]
pub struct Shockwave {
    pub pos: Vec2,
    pub stage: ShockwaveStage,
    pub stage_timer: f32,
    pub ring_radius: f32,
    pub growth: f32,
    pub max_radius: f32,
    pub band: f32,
    pub wave1_hit: bool,
    pub wave2_hit: bool,
    pub damage: f32,
    pub knockback: f32,
    pub dead: bool,
}

// --- Whirlpool ---
pub const WHIRLPOOL_TELEGRAPH: f32 = 0.8;
pub const WHIRLPOOL_LIFE: f32 = 5.0;
pub const WHIRLPOOL_PULL_START: f32 = 40.0;
pub const WHIRLPOOL_PULL_MAX: f32 = 170.0;
pub const WHIRLPOOL_PULL_GROWTH: f32 = 60.0;
pub const WHIRLPOOL_PULL_STRENGTH: f32 = 240.0;
pub const WHIRLPOOL_CORE_RADIUS: f32 = 28.0;
pub const WHIRLPOOL_CONTACT_REHIT: f32 = 0.9;
pub const WHIRLPOOL_BLAST_DELAY: f32 = 0.6;
pub const WHIRLPOOL_BLAST_RADIUS: f32 = 120.0;
pub const WHIRLPOOL_BLAST_LINGER: f32 = 0.2;
pub const WHIRLPOOL_DAMAGE: f32 = 1.0;
pub const WHIRLPOOL_BLAST_DAMAGE: f32 = 2.0;
pub const WHIRLPOOL_KNOCKBACK: f32 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhirlpoolStage {
    Telegraph,
    /// Growing pull field with an inner contact zone
    Pull,
    /// One-shot delayed explosion, then dead
    Detonating,
}

#[derive(Debug, Clone)]
pub struct Whirlpool {
    pub pos: Vec2,
    pub stage: WhirlpoolStage,
    pub stage_timer: f32,
    pub pull_radius: f32,
    pub max_pull_radius: f32,
    pub pull_growth: f32,
    pub pull_strength: f32,
    pub core_radius: f32,
    pub contact_cooldown: f32,
    pub life: f32,
    pub blast_radius: f32,
    pub blast_damage: f32,
    pub exploded: bool,
    pub blast_hit: bool,
    pub damage: f32,
    pub knockback: f32,
    pub dead: bool,
}

// --- Card boomerang ---
pub const CARD_RADIUS: f32 = 12.0;
pub const CARD_OUTBOUND_SPEED: f32 = 320.0;
pub const CARD_RETURN_SPEED: f32 = 280.0;
pub const CARD_BOUNCE_RANGE: f32 = 300.0;
pub const CARD_ARRIVE_EPS: f32 = 12.0;
pub const CARD_ORBIT_RADIUS: f32 = 70.0;
pub const CARD_ORBIT_SPEED: f32 = 4.2;
pub const CARD_ORBIT_TIME: f32 = 1.8;
pub const CARD_BURST_TIME: f32 = 0.5;
pub const CARD_BURST_GROWTH: f32 = 260.0;
pub const CARD_BURST_BAND: f32 = 12.0;
pub const CARD_DAMAGE: f32 = 1.0;
pub const CARD_KNOCKBACK: f32 = 170.0;
pub const CARD_REHIT: f32 = 0.7;

/// Four-phase cycle; every transition is condition-driven, no external signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoomerangPhase {
    Outbound,
    Return,
    Orbit,
    Burst,
}

#[derive(Debug, Clone)]
pub struct CardBoomerang {
    pub pos: Vec2,
    pub vel: Vec2,
    pub phase: BoomerangPhase,
    /// Distance covered during outbound; phase flips at `bounce_range`
    pub traveled: f32,
    pub bounce_range: f32,
    /// Return/orbit anchor, captured at spawn
    pub target: Vec2,
    pub orbit_angle: f32,
    pub orbit_radius: f32,
    pub orbit_speed: f32,
    pub orbit_timer: f32,
    pub burst_radius: f32,
    pub burst_growth: f32,
    pub burst_timer: f32,
    pub burst_hit: bool,
    pub radius: f32,
    pub damage: f32,
    pub knockback: f32,
    pub hit_cooldown: f32,
    pub dead: bool,
}

// --- Diamond beam ---
pub const BEAM_TELEGRAPH: f32 = 0.7;
pub const BEAM_ACTIVE: f32 = 1.4;
pub const BEAM_FADE: f32 = 0.3;
pub const BEAM_LENGTH: f32 = 420.0;
pub const BEAM_HALF_WIDTH: f32 = 26.0;
pub const BEAM_PAD: f32 = 8.0;
pub const BEAM_DAMAGE: f32 = 1.0;
pub const BEAM_KNOCKBACK: f32 = 190.0;
pub const BEAM_REHIT: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeamStage {
    Telegraph,
    Active,
    Fade,
}

/// Oriented rectangle: origin, direction angle, length, half-width.
#[derive(Debug, Clone)]
pub struct DiamondBeam {
    pub origin: Vec2,
    pub angle: f32,
    pub length: f32,
    pub half_width: f32,
    pub pad: f32,
    pub stage: BeamStage,
    pub stage_timer: f32,
    pub damage: f32,
    pub knockback: f32,
    pub hit_cooldown: f32,
    pub dead: bool,
}

// --- Surge (wake wave / treasure wave / fin sweep; pooled, high churn) ---
pub const SURGE_TELEGRAPH: f32 = 0.5;
pub const SURGE_FOAM: f32 = 0.6;
pub const WAKE_SPEED: f32 = 230.0;
pub const WAKE_LIFE: f32 = 4.0;
pub const WAKE_RX: f32 = 46.0;
pub const WAKE_RY: f32 = 22.0;
pub const TREASURE_SPEED: f32 = 190.0;
pub const TREASURE_LIFE: f32 = 5.0;
pub const TREASURE_RX: f32 = 64.0;
pub const TREASURE_RY: f32 = 30.0;
pub const FIN_SPEED: f32 = 310.0;
pub const FIN_LIFE: f32 = 2.6;
pub const FIN_RX: f32 = 38.0;
pub const FIN_RY: f32 = 26.0;
pub const SURGE_WOBBLE_AMP: f32 = 14.0;
pub const SURGE_WOBBLE_SPEED: f32 = 5.0;
pub const SURGE_DAMAGE: f32 = 1.0;
pub const SURGE_KNOCKBACK: f32 = 210.0;
pub const SURGE_REHIT: f32 = 0.8;
pub const TREASURE_SCORE: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurgeKind {
    #[default]
    WakeWave,
    TreasureWave,
    FinSweep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurgeStage {
    #[default]
    Telegraph,
    /// Damaging run along the waterline
    Surge,
    /// Harmless fade
    Foam,
}

/// Elliptical surge riding a baseline with sinusoidal wobble.
#[derive(Debug, Clone, Default)]
pub struct Surge {
    pub kind: SurgeKind,
    pub pos: Vec2,
    pub baseline_y: f32,
    pub vel_x: f32,
    pub wobble_amp: f32,
    pub wobble_speed: f32,
    pub wobble_phase: f32,
    pub rx: f32,
    pub ry: f32,
    pub stage: SurgeStage,
    pub stage_timer: f32,
    pub life: f32,
    pub damage: f32,
    pub knockback: f32,
    pub hit_cooldown: f32,
    /// Treasure wash-up effects fired once
    pub scored: bool,
    pub pooled: bool,
    pub dead: bool,
}

// --- Crown column (cashfish ultimate) ---
pub const COLUMN_TELEGRAPH: f32 = 1.0;
pub const COLUMN_ACTIVE: f32 = 1.6;
pub const COLUMN_FADE: f32 = 0.35;
pub const COLUMN_HALF_WIDTH: f32 = 42.0;
pub const COLUMN_DAMAGE: f32 = 2.0;
pub const COLUMN_KNOCKBACK: f32 = 280.0;
pub const COLUMN_REHIT: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnStage {
    Telegraph,
    Active,
    Fade,
}

/// Axis-aligned damage rectangle spanning fixed top/bottom.
#[derive(Debug, Clone)]
pub struct CrownColumn {
    pub center_x: f32,
    pub half_width: f32,
    pub top: f32,
    pub bottom: f32,
    pub stage: ColumnStage,
    pub stage_timer: f32,
    pub damage: f32,
    pub knockback: f32,
    pub hit_cooldown: f32,
    pub dead: bool,
}

// --- Perfume orb / fragrance cloud ---
pub const ORB_RADIUS: f32 = 11.0;
pub const ORB_GRAVITY: f32 = 150.0;
pub const ORB_LIFE: f32 = 2.8;
pub const ORB_DAMAGE: f32 = 1.0;
pub const ORB_KNOCKBACK: f32 = 140.0;

pub const CLOUD_START_RADIUS: f32 = 30.0;
pub const CLOUD_MAX_RADIUS: f32 = 85.0;
pub const CLOUD_GROWTH: f32 = 28.0;
pub const CLOUD_LIFE: f32 = 3.5;
pub const CLOUD_DAMAGE: f32 = 0.5;
pub const CLOUD_KNOCKBACK: f32 = 60.0;
pub const CLOUD_REHIT: f32 = 0.75;

/// Lobbed orb; leaves a lingering cloud where it lands.
#[derive(Debug, Clone)]
pub struct PerfumeOrb {
    pub pos: Vec2,
    pub vel: Vec2,
    pub gravity: f32,
    pub radius: f32,
    pub life: f32,
    pub damage: f32,
    pub knockback: f32,
    pub dead: bool,
}

/// Lingering area field; damages repeatedly on its own cooldown.
#[derive(Debug, Clone)]
pub struct FragranceCloud {
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub growth: f32,
    pub life: f32,
    pub damage: f32,
    pub knockback: f32,
    pub hit_cooldown: f32,
    pub dead: bool,
}

impl FragranceCloud {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            radius: CLOUD_START_RADIUS,
            max_radius: CLOUD_MAX_RADIUS,
            growth: CLOUD_GROWTH,
            life: CLOUD_LIFE,
            damage: CLOUD_DAMAGE,
            knockback: CLOUD_KNOCKBACK,
            hit_cooldown: 0.0,
            dead: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_katapult_detonate_is_idempotent() {
        let mut shot = KatapultShot {
            pos: Vec2::ZERO,
            vel: Vec2::new(100.0, -50.0),
            gravity: KATAPULT_GRAVITY,
            radius: KATAPULT_RADIUS,
            life: 0.0,
            stage: KatapultStage::Flight,
            stage_timer: 0.0,
            blast_radius: KATAPULT_BLAST_RADIUS,
            damage: KATAPULT_DAMAGE,
            blast_damage: KATAPULT_BLAST_DAMAGE,
            knockback: KATAPULT_KNOCKBACK,
            blast_hit: false,
            dead: false,
        };
        shot.detonate();
        assert_eq!(shot.stage, KatapultStage::Exploding);
        let timer = shot.stage_timer;
        shot.detonate();
        assert_eq!(shot.stage_timer, timer);
    }

    #[test]
    fn test_katapult_detonate_never_revives() {
        let mut shot = KatapultShot {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            gravity: 0.0,
            radius: KATAPULT_RADIUS,
            life: 0.0,
            stage: KatapultStage::Flight,
            stage_timer: 0.0,
            blast_radius: KATAPULT_BLAST_RADIUS,
            damage: KATAPULT_DAMAGE,
            blast_damage: KATAPULT_BLAST_DAMAGE,
            knockback: KATAPULT_KNOCKBACK,
            blast_hit: false,
            dead: true,
        };
        shot.detonate();
        assert_eq!(shot.stage, KatapultStage::Flight);
        assert!(shot.dead);
    }
}
