//! Pattern recipes - static per-boss configuration
//!
//! A recipe fixes a boss's eligible attack set, cooldowns, enrage behavior,
//! ultimate locks and movement envelope. Recipes are read-only inputs to the
//! engine; nothing in `sim` ever mutates one. Every field carries an explicit
//! serde default so partial JSON recipes load with deliberate fallbacks
//! rather than errors.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Named behavior profile assigned to a boss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternId {
    /// Money-themed fish: coin volleys, beams, boomerang cards, crown drop
    Cashfish,
    /// Race-boat boss: torpedoes, wakes, katapult shots, speedboat run
    Regatta,
    /// Perfume boss: lobbed orbs, fin sweeps, whirlpool
    Parfumier,
}

/// Everything the director can ask a spawner to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackKind {
    Torpedo,
    WakeWave,
    KatapultShot,
    Shockwave,
    Speedboat,
    CoinBurst,
    DiamondBeam,
    CardBoomerang,
    TreasureWave,
    CrownColumn,
    PerfumeOrb,
    FinSweep,
    Whirlpool,
}

impl AttackKind {
    /// Every attack kind; used by the registry completeness check.
    pub const ALL: [AttackKind; 13] = [
        AttackKind::Torpedo,
        AttackKind::WakeWave,
        AttackKind::KatapultShot,
        AttackKind::Shockwave,
        AttackKind::Speedboat,
        AttackKind::CoinBurst,
        AttackKind::DiamondBeam,
        AttackKind::CardBoomerang,
        AttackKind::TreasureWave,
        AttackKind::CrownColumn,
        AttackKind::PerfumeOrb,
        AttackKind::FinSweep,
        AttackKind::Whirlpool,
    ];
}

/// One eligible attack with its base decision cooldown
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackEntry {
    pub kind: AttackKind,
    /// Seconds until the next decision after this attack fires
    #[serde(default = "default_attack_cooldown")]
    pub cooldown: f32,
}

/// A rare attack gated by its own lock timer, separate from normal scheduling
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UltimateEntry {
    pub kind: AttackKind,
    #[serde(default = "default_ultimate_cooldown")]
    pub cooldown: f32,
    /// Seconds the attack stays locked after firing
    #[serde(default = "default_ultimate_lock")]
    pub lock: f32,
}

/// Movement envelope for steady-state tracking
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MotionEnvelope {
    /// Hard position bounds per axis
    #[serde(default = "default_env_min")]
    pub min: Vec2,
    #[serde(default = "default_env_max")]
    pub max: Vec2,
    /// Tracking center the oscillation plays around
    #[serde(default = "default_env_center")]
    pub center: Vec2,
    /// Constant offset added to the desired position
    #[serde(default)]
    pub bias: Vec2,
    #[serde(default = "default_osc_amplitude")]
    pub osc_amplitude: Vec2,
    /// Radians per second, per axis
    #[serde(default = "default_osc_speed")]
    pub osc_speed: Vec2,
    /// Horizontal excursion scale toward the player (negative-x half)
    #[serde(default = "default_one")]
    pub forward_scale: f32,
    /// Horizontal excursion scale away from the player
    #[serde(default = "default_one")]
    pub backward_scale: f32,
    /// Kept clear of the envelope bounds on both axes
    #[serde(default = "default_edge_padding")]
    pub edge_padding: f32,
    /// Exponential approach rate toward the desired position
    #[serde(default = "default_approach_rate")]
    pub approach_rate: f32,
    /// Secondary idle bob layered on the vertical desired position
    #[serde(default = "default_bob_amplitude")]
    pub bob_amplitude: f32,
    #[serde(default = "default_bob_speed")]
    pub bob_speed: f32,
    /// Facing flips only when horizontal displacement exceeds this
    #[serde(default = "default_facing_deadzone")]
    pub facing_deadzone: f32,
}

impl Default for MotionEnvelope {
    fn default() -> Self {
        Self {
            min: default_env_min(),
            max: default_env_max(),
            center: default_env_center(),
            bias: Vec2::ZERO,
            osc_amplitude: default_osc_amplitude(),
            osc_speed: default_osc_speed(),
            forward_scale: 1.0,
            backward_scale: 1.0,
            edge_padding: default_edge_padding(),
            approach_rate: default_approach_rate(),
            bob_amplitude: default_bob_amplitude(),
            bob_speed: default_bob_speed(),
            facing_deadzone: default_facing_deadzone(),
        }
    }
}

/// Scripted entrance: travel from off-screen to an arrival point
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntryScript {
    pub from: Vec2,
    pub arrive: Vec2,
    #[serde(default = "default_entry_speed")]
    pub speed: f32,
}

/// Read-only per-pattern configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRecipe {
    pub pattern: PatternId,
    #[serde(default = "default_boss_hp")]
    pub boss_hp: f32,
    /// Eligible attack set with base cooldowns
    pub attacks: Vec<AttackEntry>,
    /// Enrage once hp <= threshold * max_hp
    #[serde(default = "default_enrage_threshold")]
    pub enrage_threshold: f32,
    /// Cooldown multiplier applied while enraged (< 1 speeds decisions up)
    #[serde(default = "default_enrage_cooldown_scale")]
    pub enrage_cooldown_scale: f32,
    /// Entries duplicated into the pool while enraged (weighting without weights)
    #[serde(default)]
    pub enrage_bias: Vec<AttackKind>,
    /// Attacks that only become eligible while enraged
    #[serde(default)]
    pub enrage_extra: Vec<AttackKind>,
    #[serde(default)]
    pub ultimates: Vec<UltimateEntry>,
    /// Bounded random jitter (+/- seconds) added to every rearmed cooldown
    #[serde(default = "default_cooldown_jitter")]
    pub cooldown_jitter: f32,
    /// Delay before the first decision once the entrance completes
    #[serde(default = "default_first_decision_delay")]
    pub first_decision_delay: f32,
    #[serde(default)]
    pub envelope: MotionEnvelope,
    #[serde(default)]
    pub entry: Option<EntryScript>,
}

impl PatternRecipe {
    /// Built-in recipe for a pattern.
    pub fn builtin(pattern: PatternId) -> Self {
        match pattern {
            PatternId::Cashfish => Self {
                pattern,
                boss_hp: 40.0,
                attacks: vec![
                    AttackEntry { kind: AttackKind::CoinBurst, cooldown: 3.2 },
                    AttackEntry { kind: AttackKind::CardBoomerang, cooldown: 5.0 },
                    AttackEntry { kind: AttackKind::TreasureWave, cooldown: 4.4 },
                ],
                enrage_threshold: 0.35,
                enrage_cooldown_scale: 0.6,
                enrage_bias: vec![AttackKind::CoinBurst],
                enrage_extra: vec![AttackKind::DiamondBeam],
                ultimates: vec![UltimateEntry {
                    kind: AttackKind::CrownColumn,
                    cooldown: 6.0,
                    lock: 20.0,
                }],
                cooldown_jitter: 0.5,
                first_decision_delay: 1.2,
                envelope: MotionEnvelope {
                    forward_scale: 1.25,
                    backward_scale: 0.8,
                    ..MotionEnvelope::default()
                },
                entry: Some(EntryScript {
                    from: Vec2::new(ARENA_WIDTH + 90.0, 240.0),
                    arrive: Vec2::new(760.0, 240.0),
                    speed: default_entry_speed(),
                }),
            },
            PatternId::Regatta => Self {
                pattern,
                boss_hp: 60.0,
                attacks: vec![
                    AttackEntry { kind: AttackKind::Torpedo, cooldown: 2.8 },
                    AttackEntry { kind: AttackKind::WakeWave, cooldown: 3.6 },
                    AttackEntry { kind: AttackKind::KatapultShot, cooldown: 4.2 },
                ],
                enrage_threshold: 0.4,
                enrage_cooldown_scale: 0.65,
                enrage_bias: vec![AttackKind::Torpedo],
                enrage_extra: vec![AttackKind::Shockwave],
                ultimates: vec![UltimateEntry {
                    kind: AttackKind::Speedboat,
                    cooldown: 5.5,
                    lock: 18.0,
                }],
                cooldown_jitter: 0.4,
                first_decision_delay: 1.0,
                envelope: MotionEnvelope {
                    osc_amplitude: Vec2::new(110.0, 40.0),
                    ..MotionEnvelope::default()
                },
                entry: Some(EntryScript {
                    from: Vec2::new(ARENA_WIDTH + 120.0, 180.0),
                    arrive: Vec2::new(780.0, 200.0),
                    speed: 260.0,
                }),
            },
            PatternId::Parfumier => Self {
                pattern,
                boss_hp: 50.0,
                attacks: vec![
                    AttackEntry { kind: AttackKind::PerfumeOrb, cooldown: 3.8 },
                    AttackEntry { kind: AttackKind::FinSweep, cooldown: 3.0 },
                ],
                enrage_threshold: 0.3,
                enrage_cooldown_scale: 0.7,
                enrage_bias: vec![AttackKind::PerfumeOrb],
                enrage_extra: vec![],
                ultimates: vec![UltimateEntry {
                    kind: AttackKind::Whirlpool,
                    cooldown: 5.0,
                    lock: 16.0,
                }],
                cooldown_jitter: 0.45,
                first_decision_delay: 1.4,
                envelope: MotionEnvelope {
                    osc_speed: Vec2::new(0.6, 1.4),
                    bob_amplitude: 9.0,
                    ..MotionEnvelope::default()
                },
                entry: None,
            },
        }
    }

    /// Load a recipe from JSON. Absent fields take their documented defaults;
    /// this is deliberate configuration layering, not error recovery.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Base cooldown for an attack; explicit default when the recipe omits it.
    pub fn cooldown_for(&self, kind: AttackKind) -> f32 {
        self.attacks
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.cooldown)
            .or_else(|| {
                self.ultimates
                    .iter()
                    .find(|u| u.kind == kind)
                    .map(|u| u.cooldown)
            })
            .unwrap_or_else(default_attack_cooldown)
    }

    /// The pattern's base eligible attack kinds, in recipe order.
    pub fn eligible(&self) -> impl Iterator<Item = AttackKind> + '_ {
        self.attacks.iter().map(|a| a.kind)
    }

    pub fn ultimate(&self, kind: AttackKind) -> Option<&UltimateEntry> {
        self.ultimates.iter().find(|u| u.kind == kind)
    }

    pub fn is_ultimate(&self, kind: AttackKind) -> bool {
        self.ultimate(kind).is_some()
    }
}

fn default_attack_cooldown() -> f32 {
    3.5
}

fn default_ultimate_cooldown() -> f32 {
    5.5
}

fn default_ultimate_lock() -> f32 {
    18.0
}

fn default_boss_hp() -> f32 {
    40.0
}

fn default_enrage_threshold() -> f32 {
    0.35
}

fn default_enrage_cooldown_scale() -> f32 {
    0.6
}

fn default_cooldown_jitter() -> f32 {
    0.5
}

fn default_first_decision_delay() -> f32 {
    1.2
}

fn default_entry_speed() -> f32 {
    220.0
}

fn default_env_min() -> Vec2 {
    Vec2::new(600.0, 70.0)
}

fn default_env_max() -> Vec2 {
    Vec2::new(ARENA_WIDTH - 40.0, ARENA_HEIGHT - 80.0)
}

fn default_env_center() -> Vec2 {
    Vec2::new(770.0, 240.0)
}

fn default_osc_amplitude() -> Vec2 {
    Vec2::new(90.0, 60.0)
}

fn default_osc_speed() -> Vec2 {
    Vec2::new(0.8, 1.1)
}

fn default_one() -> f32 {
    1.0
}

fn default_edge_padding() -> f32 {
    12.0
}

fn default_approach_rate() -> f32 {
    3.0
}

fn default_bob_amplitude() -> f32 {
    6.0
}

fn default_bob_speed() -> f32 {
    2.4
}

fn default_facing_deadzone() -> f32 {
    8.0
}
