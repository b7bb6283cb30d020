//! Boss motion controller
//!
//! Drives the boss through its scripted entrance, then steady-state tracking:
//! independent per-axis oscillation around the envelope center with an
//! exponentially damped approach, clamped to the envelope. Obstacle dodges
//! come from the cover-obstacle collaborator as scripted detours that suspend
//! tracking for a fixed duration.

use glam::Vec2;

use crate::approach;

use super::hooks::TickCtx;
use super::state::{Detour, Encounter};

pub(crate) fn update(enc: &mut Encounter, ctx: &mut TickCtx, dt: f32) {
    let Encounter {
        boss,
        recipe,
        director,
        ..
    } = enc;

    if !boss.active {
        return;
    }

    // Scripted entrance: travel to the arrival point, then start the clock.
    if boss.entering {
        let Some(entry) = recipe.entry else {
            boss.entering = false;
            boss.entry_progress = 1.0;
            return;
        };
        let to_arrive = entry.arrive - boss.pos;
        let step = entry.speed * dt;
        let total = (entry.arrive - entry.from).length().max(f32::EPSILON);
        if to_arrive.length() <= step {
            boss.pos = entry.arrive;
            boss.entering = false;
            boss.entry_progress = 1.0;
            director.attack_timer = recipe.first_decision_delay;
            log::debug!("boss entrance complete, first decision armed");
        } else {
            boss.pos += to_arrive.normalize() * step;
            let remaining = (entry.arrive - boss.pos).length();
            boss.entry_progress = (1.0 - remaining / total).clamp(0.0, 1.0);
        }
        return;
    }

    // A running detour suspends the trackers entirely.
    if let Some(detour) = &mut boss.detour {
        boss.pos += detour.velocity * dt;
        detour.remaining = (detour.remaining - dt).max(0.0);
        if detour.remaining <= 0.0 {
            boss.detour = None;
            log::debug!("boss detour complete, tracking resumed");
        }
        let env = &recipe.envelope;
        boss.pos = boss.pos.clamp(
            env.min + Vec2::splat(env.edge_padding),
            env.max - Vec2::splat(env.edge_padding),
        );
        return;
    }

    if let Some(plan) = ctx.obstacles.plan_avoidance(boss.pos, boss.facing) {
        boss.detour = Some(Detour {
            velocity: plan.velocity,
            remaining: plan.duration,
        });
        log::debug!("boss detour started ({:.2}s)", plan.duration);
        return;
    }

    // Steady-state tracking: desired = center + bias + oscillation + bob,
    // approached exponentially, never snapped.
    let env = &recipe.envelope;
    boss.osc_phase += env.osc_speed * dt;
    boss.bob_phase += env.bob_speed * dt;

    let sx = boss.osc_phase.x.sin();
    // Excursions toward the player (negative x) scale independently from
    // excursions away.
    let x_scale = if sx < 0.0 {
        env.forward_scale
    } else {
        env.backward_scale
    };
    let dx = sx * env.osc_amplitude.x * x_scale;
    let dy = boss.osc_phase.y.sin() * env.osc_amplitude.y;
    let bob = boss.bob_phase.sin() * env.bob_amplitude;

    let desired = env.center + env.bias + Vec2::new(dx, dy + bob);
    boss.pos.x = approach(boss.pos.x, desired.x, env.approach_rate, dt);
    boss.pos.y = approach(boss.pos.y, desired.y, env.approach_rate, dt);
    boss.pos = boss.pos.clamp(
        env.min + Vec2::splat(env.edge_padding),
        env.max - Vec2::splat(env.edge_padding),
    );

    // Facing only flips outside the dead-zone, so tiny corrections don't
    // make the sprite jitter.
    let displacement = desired.x - boss.pos.x;
    if displacement.abs() > env.facing_deadzone {
        boss.facing = displacement.signum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::recipe::{PatternId, PatternRecipe};
    use crate::sim::harness::{ctx_parts, DetourOnce};
    use crate::sim::hooks::DetourPlan;
    use crate::sim::state::Encounter;
    use proptest::prelude::*;

    #[test]
    fn test_entry_progress_reaches_one_and_arms_timer() {
        let mut enc = Encounter::new(PatternId::Cashfish, 3);
        assert!(enc.boss.entering);
        enc.director.attack_timer = 99.0;
        let (mut hooks, mut obstacles, mut pool) = ctx_parts();
        let mut progress = 0.0;
        for _ in 0..1200 {
            let mut ctx = TickCtx {
                player_pos: Vec2::new(200.0, 240.0),
                player_down: false,
                hooks: &mut hooks,
                obstacles: &mut obstacles,
                pool: &mut pool,
            };
            update(&mut enc, &mut ctx, SIM_DT);
            assert!(enc.boss.entry_progress >= progress, "progress regressed");
            progress = enc.boss.entry_progress;
            if !enc.boss.entering {
                break;
            }
        }
        assert!(!enc.boss.entering);
        assert_eq!(enc.boss.entry_progress, 1.0);
        assert_eq!(
            enc.director.attack_timer,
            enc.recipe.first_decision_delay
        );
    }

    #[test]
    fn test_dormant_boss_does_not_move() {
        let mut enc = Encounter::new(PatternId::Parfumier, 3);
        enc.boss.active = false;
        let start = enc.boss.pos;
        let (mut hooks, mut obstacles, mut pool) = ctx_parts();
        let mut ctx = TickCtx {
            player_pos: Vec2::new(200.0, 240.0),
            player_down: false,
            hooks: &mut hooks,
            obstacles: &mut obstacles,
            pool: &mut pool,
        };
        for _ in 0..60 {
            update(&mut enc, &mut ctx, SIM_DT);
        }
        assert_eq!(enc.boss.pos, start);
    }

    #[test]
    fn test_detour_suspends_tracking_then_resumes() {
        let mut enc = Encounter::new(PatternId::Parfumier, 3);
        let mut detour = DetourOnce {
            plan: std::cell::Cell::new(Some(DetourPlan {
                velocity: Vec2::new(0.0, 40.0),
                duration: 0.5,
            })),
        };
        let (mut hooks, _, mut pool) = ctx_parts();
        let mut ctx = TickCtx {
            player_pos: Vec2::new(200.0, 240.0),
            player_down: false,
            hooks: &mut hooks,
            obstacles: &mut detour,
            pool: &mut pool,
        };
        update(&mut enc, &mut ctx, SIM_DT);
        assert!(enc.boss.detour.is_some());
        // Run the detour out
        for _ in 0..40 {
            update(&mut enc, &mut ctx, SIM_DT);
        }
        assert!(enc.boss.detour.is_none());
    }

    proptest! {
        /// Under pure tracking the boss never leaves the envelope, for
        /// arbitrarily many ticks and irregular frame times.
        #[test]
        fn prop_tracking_stays_in_envelope(
            seed in 0u64..1000,
            dts in prop::collection::vec(0.001f32..0.05, 1..400)
        ) {
            let mut recipe = PatternRecipe::builtin(PatternId::Parfumier);
            recipe.entry = None;
            let mut enc = Encounter::from_recipe(recipe, seed);
            let (mut hooks, mut obstacles, mut pool) = ctx_parts();
            for dt in dts {
                let mut ctx = TickCtx {
                    player_pos: Vec2::new(200.0, 240.0),
                    player_down: false,
                    hooks: &mut hooks,
                    obstacles: &mut obstacles,
                    pool: &mut pool,
                };
                update(&mut enc, &mut ctx, dt);
                let env = &enc.recipe.envelope;
                prop_assert!(enc.boss.pos.x >= env.min.x && enc.boss.pos.x <= env.max.x);
                prop_assert!(enc.boss.pos.y >= env.min.y && enc.boss.pos.y <= env.max.y);
            }
        }
    }
}
