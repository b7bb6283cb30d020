//! Deterministic encounter simulation
//!
//! All boss gameplay logic lives here. This module must be pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, injected per encounter
//! - Stable collection order (append-at-end, compacted stably)
//! - No rendering or platform dependencies; outward effects go through the
//!   collaborator traits in [`hooks`]

pub mod advance;
pub mod boss;
pub mod collision;
pub mod director;
pub mod hazard;
pub mod hooks;
pub mod registry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use hazard::HazardFamily;
pub use hooks::{
    CoinDropSpec, CoverObstacles, DetourPlan, EncounterHooks, FlashKind, HazardPool, ObstacleId,
    TickCtx,
};
pub use registry::{ATTACK_HANDLERS, FAMILY_HANDLERS, attack_handler, family_handler};
pub use state::{Boss, Director, Encounter, Hazards, UltimateBook};
pub use tick::tick;

/// Recording collaborator stubs shared by the unit tests.
#[cfg(test)]
pub(crate) mod harness {
    use std::cell::Cell;

    use glam::Vec2;

    use super::hazard::{Surge, Torpedo};
    use super::hooks::*;

    #[derive(Debug, Default)]
    pub(crate) struct RecordingHooks {
        pub damage: Vec<f32>,
        pub impulses: Vec<Vec2>,
        pub score: u32,
        pub coins: Vec<CoinDropSpec>,
        pub flashes: Vec<FlashKind>,
    }

    impl EncounterHooks for RecordingHooks {
        fn damage_player(&mut self, amount: f32) {
            self.damage.push(amount);
        }

        fn push_player(&mut self, impulse: Vec2) {
            self.impulses.push(impulse);
        }

        fn award_score(&mut self, amount: u32) {
            self.score += amount;
        }

        fn spawn_coin_drop(&mut self, drop: CoinDropSpec) {
            self.coins.push(drop);
        }

        fn trigger_flash(&mut self, kind: FlashKind) {
            self.flashes.push(kind);
        }
    }

    /// Open water: nothing to hit, nothing to dodge.
    #[derive(Debug, Default)]
    pub(crate) struct NoObstacles;

    impl CoverObstacles for NoObstacles {
        fn find_obstacle_hit(&self, _pos: Vec2, _pad: Vec2) -> Option<ObstacleId> {
            None
        }

        fn register_impact(&mut self, _obstacle: ObstacleId, _strength: f32) {}

        fn plan_avoidance(&self, _pos: Vec2, _facing: f32) -> Option<DetourPlan> {
            None
        }
    }

    /// Hands out one detour plan, then goes quiet.
    #[derive(Debug, Default)]
    pub(crate) struct DetourOnce {
        pub plan: Cell<Option<DetourPlan>>,
    }

    impl CoverObstacles for DetourOnce {
        fn find_obstacle_hit(&self, _pos: Vec2, _pad: Vec2) -> Option<ObstacleId> {
            None
        }

        fn register_impact(&mut self, _obstacle: ObstacleId, _strength: f32) {}

        fn plan_avoidance(&self, _pos: Vec2, _facing: f32) -> Option<DetourPlan> {
            self.plan.take()
        }
    }

    /// A rock at a fixed position; records every impact strength.
    #[derive(Debug)]
    pub(crate) struct SingleRock {
        pub pos: Vec2,
        pub radius: f32,
        pub impacts: Vec<f32>,
    }

    impl CoverObstacles for SingleRock {
        fn find_obstacle_hit(&self, pos: Vec2, pad: Vec2) -> Option<ObstacleId> {
            let reach = self.radius + pad.x.max(pad.y);
            (self.pos.distance_squared(pos) <= reach * reach).then_some(ObstacleId(0))
        }

        fn register_impact(&mut self, _obstacle: ObstacleId, strength: f32) {
            self.impacts.push(strength);
        }

        fn plan_avoidance(&self, _pos: Vec2, _facing: f32) -> Option<DetourPlan> {
            None
        }
    }

    /// Shell store that counts releases.
    #[derive(Debug, Default)]
    pub(crate) struct CountingPool {
        pub torpedo_shells: Vec<Torpedo>,
        pub surge_shells: Vec<Surge>,
        pub released_torpedoes: usize,
        pub released_surges: usize,
    }

    impl HazardPool for CountingPool {
        fn acquire_torpedo(&mut self) -> Option<Torpedo> {
            self.torpedo_shells.pop()
        }

        fn release_torpedoes(&mut self, shells: Vec<Torpedo>) {
            self.released_torpedoes += shells.len();
            self.torpedo_shells.extend(shells);
        }

        fn acquire_surge(&mut self) -> Option<Surge> {
            self.surge_shells.pop()
        }

        fn release_surges(&mut self, shells: Vec<Surge>) {
            self.released_surges += shells.len();
            self.surge_shells.extend(shells);
        }
    }

    pub(crate) fn ctx_parts() -> (RecordingHooks, NoObstacles, CountingPool) {
        (
            RecordingHooks::default(),
            NoObstacles,
            CountingPool::default(),
        )
    }

    /// Run a closure with a throwaway context and a player parked at a
    /// neutral spot.
    pub(crate) fn test_ctx<R>(f: impl FnOnce(&mut TickCtx) -> R) -> R {
        test_ctx_with_player(Vec2::new(200.0, 240.0), f)
    }

    pub(crate) fn test_ctx_with_player<R>(player: Vec2, f: impl FnOnce(&mut TickCtx) -> R) -> R {
        let (mut hooks, mut obstacles, mut pool) = ctx_parts();
        let mut ctx = TickCtx {
            player_pos: player,
            player_down: false,
            hooks: &mut hooks,
            obstacles: &mut obstacles,
            pool: &mut pool,
        };
        f(&mut ctx)
    }
}
