//! Encounter state and core simulation types
//!
//! All mutable encounter state lives here: the boss record, the director's
//! scheduling bookkeeping and the per-family hazard collections. The module
//! must stay pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Collections are append-at-end, compacted stably, never reordered
//!   mid-tick - presentation can safely iterate a snapshot

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::recipe::{AttackKind, PatternId, PatternRecipe};

use super::hazard::*;
use super::hooks::HazardPool;

/// Scripted obstacle dodge in progress; tracking is suspended while one runs.
#[derive(Debug, Clone, Copy)]
pub struct Detour {
    pub velocity: Vec2,
    pub remaining: f32,
}

/// The one boss of the encounter.
#[derive(Debug, Clone)]
pub struct Boss {
    pub pattern: PatternId,
    pub pos: Vec2,
    pub hp: f32,
    pub max_hp: f32,
    /// Dormant bosses do not move, decide or attack
    pub active: bool,
    /// Scripted entrance in progress
    pub entering: bool,
    /// Clamped [0,1] fraction of the entry path traveled
    pub entry_progress: f32,
    /// -1.0 facing the player (left), +1.0 facing away
    pub facing: f32,
    /// Oscillation phase per axis, advanced every tick
    pub osc_phase: Vec2,
    pub bob_phase: f32,
    pub detour: Option<Detour>,
}

impl Boss {
    /// Derived enrage signal; never stored, never mutates hp.
    pub fn enraged(&self, recipe: &PatternRecipe) -> bool {
        self.max_hp > 0.0 && self.hp <= recipe.enrage_threshold * self.max_hp
    }
}

/// Which rare attacks have fired and how long each stays locked.
/// Reset only at encounter start.
#[derive(Debug, Clone, Default)]
pub struct UltimateBook {
    locks: Vec<(AttackKind, f32)>,
    fired: Vec<AttackKind>,
}

impl UltimateBook {
    pub fn lock_remaining(&self, kind: AttackKind) -> f32 {
        self.locks
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, t)| *t)
            .unwrap_or(0.0)
    }

    pub fn unlocked(&self, kind: AttackKind) -> bool {
        self.lock_remaining(kind) <= 0.0
    }

    pub fn has_fired(&self, kind: AttackKind) -> bool {
        self.fired.contains(&kind)
    }

    /// Record a firing and (re)arm the lock timer.
    pub fn arm(&mut self, kind: AttackKind, lock: f32) {
        if let Some(entry) = self.locks.iter_mut().find(|(k, _)| *k == kind) {
            entry.1 = lock;
        } else {
            self.locks.push((kind, lock));
        }
        if !self.fired.contains(&kind) {
            self.fired.push(kind);
        }
    }

    /// Tick lock timers down, clamping at zero.
    pub fn advance(&mut self, dt: f32) {
        for (_, t) in &mut self.locks {
            *t = (*t - dt).max(0.0);
        }
    }
}

/// Attack scheduling bookkeeping.
#[derive(Debug, Clone)]
pub struct Director {
    /// Seconds until the next decision
    pub attack_timer: f32,
    /// Excluded from the next candidate pool (no immediate repeats)
    pub last_attack: Option<AttackKind>,
    pub ultimates: UltimateBook,
}

/// One ordered collection per hazard family. Insertion order is spawn order;
/// removal is stable compaction, so relative order of survivors is preserved.
#[derive(Debug, Clone, Default)]
pub struct Hazards {
    pub torpedoes: Vec<Torpedo>,
    pub speedboats: Vec<Speedboat>,
    pub katapults: Vec<KatapultShot>,
    pub coin_bursts: Vec<CoinBurst>,
    pub coin_explosions: Vec<CoinExplosion>,
    pub shockwaves: Vec<Shockwave>,
    pub whirlpools: Vec<Whirlpool>,
    pub boomerangs: Vec<CardBoomerang>,
    pub beams: Vec<DiamondBeam>,
    pub surges: Vec<Surge>,
    pub columns: Vec<CrownColumn>,
    pub orbs: Vec<PerfumeOrb>,
    pub clouds: Vec<FragranceCloud>,
}

impl Hazards {
    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    pub fn live_count(&self) -> usize {
        self.torpedoes.len()
            + self.speedboats.len()
            + self.katapults.len()
            + self.coin_bursts.len()
            + self.coin_explosions.len()
            + self.shockwaves.len()
            + self.whirlpools.len()
            + self.boomerangs.len()
            + self.beams.len()
            + self.surges.len()
            + self.columns.len()
            + self.orbs.len()
            + self.clouds.len()
    }

    /// Append everything from `other`, preserving its order.
    pub fn append(&mut self, other: &mut Hazards) {
        self.torpedoes.append(&mut other.torpedoes);
        self.speedboats.append(&mut other.speedboats);
        self.katapults.append(&mut other.katapults);
        self.coin_bursts.append(&mut other.coin_bursts);
        self.coin_explosions.append(&mut other.coin_explosions);
        self.shockwaves.append(&mut other.shockwaves);
        self.whirlpools.append(&mut other.whirlpools);
        self.boomerangs.append(&mut other.boomerangs);
        self.beams.append(&mut other.beams);
        self.surges.append(&mut other.surges);
        self.columns.append(&mut other.columns);
        self.orbs.append(&mut other.orbs);
        self.clouds.append(&mut other.clouds);
    }

    /// Drop dead entries, preserving survivor order. Dead pooled shells go
    /// back to the pooling collaborator instead of being discarded.
    pub fn compact(&mut self, pool: &mut dyn HazardPool) {
        let mut released = Vec::new();
        let mut survivors = Vec::with_capacity(self.torpedoes.len());
        for t in self.torpedoes.drain(..) {
            if !t.dead {
                survivors.push(t);
            } else if t.pooled {
                released.push(t);
            }
        }
        self.torpedoes = survivors;
        if !released.is_empty() {
            pool.release_torpedoes(released);
        }

        let mut released = Vec::new();
        let mut survivors = Vec::with_capacity(self.surges.len());
        for s in self.surges.drain(..) {
            if !s.dead {
                survivors.push(s);
            } else if s.pooled {
                released.push(s);
            }
        }
        self.surges = survivors;
        if !released.is_empty() {
            pool.release_surges(released);
        }

        self.speedboats.retain(|e| !e.dead);
        self.katapults.retain(|e| !e.dead);
        self.coin_bursts.retain(|e| !e.dead);
        self.coin_explosions.retain(|e| !e.dead);
        self.shockwaves.retain(|e| !e.dead);
        self.whirlpools.retain(|e| !e.dead);
        self.boomerangs.retain(|e| !e.dead);
        self.beams.retain(|e| !e.dead);
        self.columns.retain(|e| !e.dead);
        self.orbs.retain(|e| !e.dead);
        self.clouds.retain(|e| !e.dead);
    }

    /// Unconditionally drop everything, returning pooled shells first.
    pub fn clear_into_pool(&mut self, pool: &mut dyn HazardPool) {
        let pooled: Vec<_> = self.torpedoes.drain(..).filter(|t| t.pooled).collect();
        if !pooled.is_empty() {
            pool.release_torpedoes(pooled);
        }
        let pooled: Vec<_> = self.surges.drain(..).filter(|s| s.pooled).collect();
        if !pooled.is_empty() {
            pool.release_surges(pooled);
        }
        self.speedboats.clear();
        self.katapults.clear();
        self.coin_bursts.clear();
        self.coin_explosions.clear();
        self.shockwaves.clear();
        self.whirlpools.clear();
        self.boomerangs.clear();
        self.beams.clear();
        self.columns.clear();
        self.orbs.clear();
        self.clouds.clear();
    }
}

/// Complete encounter state. Deterministic: identical seeds and tick inputs
/// reproduce identical encounters.
#[derive(Debug, Clone)]
pub struct Encounter {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tick_count: u64,
    pub recipe: PatternRecipe,
    pub boss: Boss,
    pub director: Director,
    /// Live hazards, advanced and collided every tick
    pub hazards: Hazards,
    /// Entities spawned this tick; merged into `hazards` after the resolve
    /// pass so nothing is simulated or collided in its spawn tick
    pub(crate) pending: Hazards,
}

impl Encounter {
    /// Start an encounter with the pattern's built-in recipe.
    pub fn new(pattern: PatternId, seed: u64) -> Self {
        Self::from_recipe(PatternRecipe::builtin(pattern), seed)
    }

    pub fn from_recipe(recipe: PatternRecipe, seed: u64) -> Self {
        let entering = recipe.entry.is_some();
        let pos = recipe
            .entry
            .map(|e| e.from)
            .unwrap_or(recipe.envelope.center);
        log::info!(
            "encounter start: pattern {:?}, seed {}, hp {}",
            recipe.pattern,
            seed,
            recipe.boss_hp
        );
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tick_count: 0,
            boss: Boss {
                pattern: recipe.pattern,
                pos,
                hp: recipe.boss_hp,
                max_hp: recipe.boss_hp,
                active: true,
                entering,
                entry_progress: if entering { 0.0 } else { 1.0 },
                facing: -1.0,
                osc_phase: Vec2::ZERO,
                bob_phase: 0.0,
                detour: None,
            },
            director: Director {
                // With no scripted entrance the first timer starts immediately
                attack_timer: recipe.first_decision_delay,
                last_attack: None,
                ultimates: UltimateBook::default(),
            },
            recipe,
            hazards: Hazards::default(),
            pending: Hazards::default(),
        }
    }

    /// Encounter cancellation (boss defeat, level change, game over):
    /// unconditionally clears every hazard collection, handing pooled
    /// shells back to the pooling collaborator.
    pub fn clear_hazards(&mut self, pool: &mut dyn HazardPool) {
        log::info!("encounter reset: clearing hazards");
        self.hazards.clear_into_pool(pool);
        self.pending.clear_into_pool(pool);
    }

    pub(crate) fn merge_pending(&mut self) {
        let mut pending = std::mem::take(&mut self.pending);
        self.hazards.append(&mut pending);
    }
}
