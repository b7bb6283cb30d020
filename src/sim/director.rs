//! Attack director
//!
//! A scheduler over decision instants. Each tick the attack timer counts
//! down; on crossing zero exactly one attack is chosen and spawned, then the
//! timer rearms from the chosen attack's cooldown. While the boss is dormant
//! or still entering, the timer does not even decrement.
//!
//! Pool construction:
//! 1. eligible attacks minus the last one fired (full set if that empties it)
//! 2. while enraged: enrage-only attacks join, biased entries are duplicated
//!    (weighting without a weight table), and unlocked ultimates are appended
//! 3. the first time an ultimate is eligible it fires unconditionally;
//!    afterwards it competes with the rest of the pool

use rand::Rng;
use rand_pcg::Pcg32;

use crate::recipe::{AttackKind, PatternRecipe};

use super::hooks::TickCtx;
use super::registry;
use super::state::{Director, Encounter, UltimateBook};

/// Floor on the rearmed timer so jitter can never wedge the boss into
/// back-to-back decisions.
const MIN_DECISION_GAP: f32 = 0.25;

pub(crate) fn update(enc: &mut Encounter, ctx: &mut TickCtx, dt: f32) {
    if !enc.boss.active || enc.boss.entering {
        return;
    }

    enc.director.ultimates.advance(dt);
    enc.director.attack_timer -= dt;
    if enc.director.attack_timer > 0.0 {
        return;
    }

    let enraged = enc.boss.enraged(&enc.recipe);
    let choice = choose_attack(&enc.recipe, &enc.director, enraged, &mut enc.rng);
    log::debug!(
        "attack decision: {:?} (enraged: {}, last: {:?})",
        choice,
        enraged,
        enc.director.last_attack
    );

    (registry::attack_handler(choice).spawn)(enc, ctx);

    let base = enc.recipe.cooldown_for(choice);
    let scale = if enraged {
        enc.recipe.enrage_cooldown_scale
    } else {
        1.0
    };
    let jitter = if enc.recipe.cooldown_jitter > 0.0 {
        let j = enc.recipe.cooldown_jitter;
        enc.rng.random_range(-j..=j)
    } else {
        0.0
    };
    enc.director.attack_timer = (base * scale + jitter).max(MIN_DECISION_GAP);
    enc.director.last_attack = Some(choice);

    if let Some(ultimate) = enc.recipe.ultimate(choice) {
        enc.director.ultimates.arm(choice, ultimate.lock);
        log::info!(
            "ultimate {:?} fired, locked for {:.1}s",
            choice,
            ultimate.lock
        );
    }
}

/// Pick the next attack. Pure over its inputs apart from the RNG draw.
pub(crate) fn choose_attack(
    recipe: &PatternRecipe,
    director: &Director,
    enraged: bool,
    rng: &mut Pcg32,
) -> AttackKind {
    if enraged {
        // Forced first appearance: an ultimate that has never fired is chosen
        // outright the first time its lock allows it.
        let forced = recipe.ultimates.iter().find(|u| {
            director.ultimates.unlocked(u.kind) && !director.ultimates.has_fired(u.kind)
        });
        if let Some(ultimate) = forced {
            return ultimate.kind;
        }
    }

    let pool = candidate_pool(recipe, director.last_attack, enraged, &director.ultimates);
    assert!(
        !pool.is_empty(),
        "pattern {:?} has no eligible attacks",
        recipe.pattern
    );
    pool[rng.random_range(0..pool.len())]
}

/// Build the candidate pool for one decision.
pub(crate) fn candidate_pool(
    recipe: &PatternRecipe,
    last: Option<AttackKind>,
    enraged: bool,
    ultimates: &UltimateBook,
) -> Vec<AttackKind> {
    let mut pool: Vec<AttackKind> = recipe.eligible().filter(|k| Some(*k) != last).collect();
    if pool.is_empty() {
        // Exclusion emptied the pool (single-attack pattern): fall back to
        // the full eligible set rather than stalling.
        pool.extend(recipe.eligible());
    }

    if enraged {
        for &kind in &recipe.enrage_extra {
            if Some(kind) != last {
                pool.push(kind);
            }
        }
        for &kind in &recipe.enrage_bias {
            if pool.contains(&kind) {
                pool.push(kind);
            }
        }
        for ultimate in &recipe.ultimates {
            if ultimates.unlocked(ultimate.kind) && Some(ultimate.kind) != last {
                pool.push(ultimate.kind);
            }
        }
    }

    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::recipe::{AttackEntry, PatternId};
    use crate::sim::harness::test_ctx;
    use rand::SeedableRng;

    /// Force the timer to expire and run one tick; exactly one decision fires.
    fn force_decision(enc: &mut Encounter) -> AttackKind {
        enc.director.attack_timer = 0.0;
        test_ctx(|ctx| update(enc, ctx, SIM_DT));
        enc.director.last_attack.expect("decision fired")
    }

    #[test]
    fn test_no_immediate_repeat() {
        let mut enc = Encounter::new(PatternId::Regatta, 42);
        enc.boss.entering = false;
        let mut previous = None;
        for _ in 0..200 {
            let choice = force_decision(&mut enc);
            if let Some(prev) = previous {
                assert_ne!(choice, prev, "immediate repeat of {:?}", prev);
            }
            previous = Some(choice);
        }
    }

    #[test]
    fn test_singleton_eligible_set_may_repeat() {
        let mut recipe = PatternRecipe::builtin(PatternId::Regatta);
        recipe.attacks = vec![AttackEntry {
            kind: AttackKind::Torpedo,
            cooldown: 1.0,
        }];
        recipe.enrage_extra.clear();
        recipe.ultimates.clear();
        recipe.entry = None;
        let mut enc = Encounter::from_recipe(recipe, 9);
        for _ in 0..10 {
            let choice = force_decision(&mut enc);
            assert_eq!(choice, AttackKind::Torpedo);
        }
    }

    #[test]
    fn test_enraged_pool_includes_enrage_only_attacks() {
        // hp 14 of 40 is exactly the cashfish 35% threshold
        let enc = Encounter::new(PatternId::Cashfish, 5);
        let mut boss = enc.boss.clone();
        boss.hp = 14.0;
        assert!(boss.enraged(&enc.recipe));

        let pool = candidate_pool(&enc.recipe, None, true, &enc.director.ultimates);
        assert!(pool.contains(&AttackKind::DiamondBeam));
        // Bias duplicates its entry
        let coin_count = pool.iter().filter(|k| **k == AttackKind::CoinBurst).count();
        assert_eq!(coin_count, 2);
        // Unlocked ultimate appears
        assert!(pool.contains(&AttackKind::CrownColumn));
    }

    #[test]
    fn test_calm_pool_excludes_enrage_material() {
        let enc = Encounter::new(PatternId::Cashfish, 5);
        let pool = candidate_pool(&enc.recipe, None, false, &enc.director.ultimates);
        assert!(!pool.contains(&AttackKind::DiamondBeam));
        assert!(!pool.contains(&AttackKind::CrownColumn));
    }

    #[test]
    fn test_locked_ultimate_stays_out_of_pool() {
        let enc = Encounter::new(PatternId::Cashfish, 5);
        let mut book = UltimateBook::default();
        book.arm(AttackKind::CrownColumn, 20.0);
        let pool = candidate_pool(&enc.recipe, None, true, &book);
        assert!(!pool.contains(&AttackKind::CrownColumn));
    }

    #[test]
    fn test_first_eligible_ultimate_is_forced() {
        let enc = Encounter::new(PatternId::Cashfish, 5);
        let mut rng = Pcg32::seed_from_u64(0);
        // Regardless of seed, the never-fired ultimate wins the first
        // enraged decision.
        let choice = choose_attack(&enc.recipe, &enc.director, true, &mut rng);
        assert_eq!(choice, AttackKind::CrownColumn);
    }

    #[test]
    fn test_ultimate_never_fires_twice_inside_lock_window() {
        let mut enc = Encounter::new(PatternId::Cashfish, 11);
        enc.boss.entering = false;
        enc.boss.hp = 10.0; // permanently enraged
        let lock = enc.recipe.ultimate(AttackKind::CrownColumn).unwrap().lock;

        let mut elapsed = 0.0f32;
        let mut prev_timer = enc.director.attack_timer;
        let mut fire_times = Vec::new();
        while elapsed < lock * 3.0 {
            test_ctx(|ctx| update(&mut enc, ctx, SIM_DT));
            elapsed += SIM_DT;
            // A decision always rearms the timer upward
            let decided = enc.director.attack_timer > prev_timer;
            if decided && enc.director.last_attack == Some(AttackKind::CrownColumn) {
                fire_times.push(elapsed);
            }
            prev_timer = enc.director.attack_timer;
        }
        assert!(!fire_times.is_empty(), "ultimate never fired");
        for pair in fire_times.windows(2) {
            assert!(
                pair[1] - pair[0] >= lock - SIM_DT,
                "ultimate refired after {:.2}s inside {:.2}s lock",
                pair[1] - pair[0],
                lock
            );
        }
    }

    #[test]
    fn test_dormant_timer_does_not_decrement() {
        let mut enc = Encounter::new(PatternId::Regatta, 3);
        enc.boss.entering = false;
        enc.boss.active = false;
        enc.director.attack_timer = 1.0;
        for _ in 0..120 {
            test_ctx(|ctx| update(&mut enc, ctx, SIM_DT));
        }
        assert_eq!(enc.director.attack_timer, 1.0);
        assert!(enc.director.last_attack.is_none());
    }

    #[test]
    fn test_entering_boss_timer_frozen() {
        let mut enc = Encounter::new(PatternId::Regatta, 3);
        assert!(enc.boss.entering);
        let timer = enc.director.attack_timer;
        for _ in 0..30 {
            test_ctx(|ctx| update(&mut enc, ctx, SIM_DT));
        }
        assert_eq!(enc.director.attack_timer, timer);
    }

    #[test]
    fn test_decision_rearms_timer_and_spawns() {
        let mut enc = Encounter::new(PatternId::Regatta, 21);
        enc.boss.entering = false;
        enc.director.attack_timer = SIM_DT / 2.0;
        test_ctx(|ctx| update(&mut enc, ctx, SIM_DT));
        assert!(enc.director.attack_timer >= MIN_DECISION_GAP);
        assert!(enc.director.last_attack.is_some());
        // The spawn landed in the pending buffer, not the live collections
        assert!(enc.hazards.is_empty());
        assert!(!enc.pending.is_empty());
    }
}
