//! Hazard simulator
//!
//! One advance routine per family, all sharing the tick contract:
//! `advance(dt)` mutates in place, marks `dead` when finished, never
//! resurrects a dead entity, and is a no-op on dead entities. Everything is
//! driven by accumulated elapsed time, never wall clock, so a run resumes
//! deterministically tick to tick. Secondary spawns (coin explosions,
//! fragrance clouds) go to the pending buffer and join the live collections
//! only after this tick's resolve pass.

use glam::Vec2;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, DESPAWN_MARGIN};

use super::hazard::*;
use super::hooks::{CoinDropSpec, TickCtx};
use super::state::Encounter;

fn out_of_bounds(pos: Vec2) -> bool {
    pos.x < -DESPAWN_MARGIN
        || pos.x > ARENA_WIDTH + DESPAWN_MARGIN
        || pos.y < -DESPAWN_MARGIN
        || pos.y > ARENA_HEIGHT + DESPAWN_MARGIN
}

pub(crate) fn advance_torpedoes(enc: &mut Encounter, ctx: &mut TickCtx, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    for torpedo in &mut enc.hazards.torpedoes {
        if torpedo.dead {
            continue;
        }
        torpedo.life = (torpedo.life - dt).max(0.0);
        torpedo.pos += torpedo.vel * dt;
        if let Some(obstacle) = ctx
            .obstacles
            .find_obstacle_hit(torpedo.pos, Vec2::splat(torpedo.radius))
        {
            ctx.obstacles
                .register_impact(obstacle, TORPEDO_IMPACT_STRENGTH);
            torpedo.dead = true;
            continue;
        }
        if torpedo.life <= 0.0 || out_of_bounds(torpedo.pos) {
            torpedo.dead = true;
        }
    }
}

pub(crate) fn advance_speedboats(enc: &mut Encounter, ctx: &mut TickCtx, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    for boat in &mut enc.hazards.speedboats {
        if boat.dead {
            continue;
        }
        boat.hit_cooldown = (boat.hit_cooldown - dt).max(0.0);
        match boat.stage {
            SpeedboatStage::Rev => {
                boat.stage_timer = (boat.stage_timer - dt).max(0.0);
                if boat.stage_timer <= 0.0 {
                    boat.stage = SpeedboatStage::Charge;
                }
            }
            SpeedboatStage::Charge => {
                boat.pos += boat.vel * dt;
                // Plows straight through cover rocks
                if let Some(obstacle) = ctx
                    .obstacles
                    .find_obstacle_hit(boat.pos, Vec2::splat(boat.radius))
                {
                    ctx.obstacles
                        .register_impact(obstacle, SPEEDBOAT_IMPACT_STRENGTH);
                }
                if out_of_bounds(boat.pos) {
                    boat.dead = true;
                }
            }
        }
    }
}

pub(crate) fn advance_katapults(enc: &mut Encounter, ctx: &mut TickCtx, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    for shot in &mut enc.hazards.katapults {
        if shot.dead {
            continue;
        }
        match shot.stage {
            KatapultStage::Flight => {
                shot.vel.y += shot.gravity * dt;
                shot.pos += shot.vel * dt;
                shot.life = (shot.life - dt).max(0.0);
                if let Some(obstacle) = ctx
                    .obstacles
                    .find_obstacle_hit(shot.pos, Vec2::splat(shot.radius))
                {
                    ctx.obstacles
                        .register_impact(obstacle, KATAPULT_IMPACT_STRENGTH);
                    shot.detonate();
                } else if shot.life <= 0.0 {
                    // Expiry flips into the exploding stage, never a silent
                    // disappearance
                    shot.detonate();
                }
            }
            KatapultStage::Exploding => {
                shot.stage_timer = (shot.stage_timer - dt).max(0.0);
                if shot.stage_timer <= 0.0 {
                    shot.dead = true;
                }
            }
        }
    }
}

pub(crate) fn advance_coin_bursts(enc: &mut Encounter, ctx: &mut TickCtx, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    let Encounter {
        hazards, pending, ..
    } = enc;
    for coin in &mut hazards.coin_bursts {
        if coin.dead {
            continue;
        }
        coin.vel.y += coin.gravity * dt;
        coin.pos += coin.vel * dt;
        coin.life = (coin.life - dt).max(0.0);

        let landed = if let Some(obstacle) = ctx
            .obstacles
            .find_obstacle_hit(coin.pos, Vec2::splat(coin.radius))
        {
            ctx.obstacles.register_impact(obstacle, 1.0);
            true
        } else {
            coin.life <= 0.0 || coin.pos.y > ARENA_HEIGHT
        };

        if landed {
            coin.dead = true;
            pending.coin_explosions.push(CoinExplosion::at(coin.pos));
            ctx.hooks.spawn_coin_drop(CoinDropSpec {
                pos: coin.pos,
                count: COIN_DROP_COUNT,
                value: COIN_DROP_VALUE,
            });
        } else if out_of_bounds(coin.pos) {
            coin.dead = true;
        }
    }
}

pub(crate) fn advance_coin_explosions(enc: &mut Encounter, _ctx: &mut TickCtx, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    for blast in &mut enc.hazards.coin_explosions {
        if blast.dead {
            continue;
        }
        blast.life = (blast.life - dt).max(0.0);
        if blast.life <= 0.0 {
            blast.dead = true;
        }
    }
}

pub(crate) fn advance_shockwaves(enc: &mut Encounter, _ctx: &mut TickCtx, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    for wave in &mut enc.hazards.shockwaves {
        if wave.dead {
            continue;
        }
        match wave.stage {
            ShockwaveStage::Telegraph => {
                wave.stage_timer = (wave.stage_timer - dt).max(0.0);
                if wave.stage_timer <= 0.0 {
                    wave.stage = ShockwaveStage::Wave1;
                    wave.ring_radius = SHOCKWAVE_START_RADIUS;
                }
            }
            ShockwaveStage::Wave1 => {
                wave.ring_radius = (wave.ring_radius + wave.growth * dt).min(wave.max_radius);
                if wave.ring_radius >= wave.max_radius {
                    wave.stage = ShockwaveStage::Pause;
                    wave.stage_timer = SHOCKWAVE_PAUSE;
                }
            }
            ShockwaveStage::Pause => {
                wave.stage_timer = (wave.stage_timer - dt).max(0.0);
                if wave.stage_timer <= 0.0 {
                    wave.stage = ShockwaveStage::Wave2;
                    wave.ring_radius = SHOCKWAVE_START_RADIUS;
                }
            }
            ShockwaveStage::Wave2 => {
                wave.ring_radius = (wave.ring_radius + wave.growth * dt).min(wave.max_radius);
                if wave.ring_radius >= wave.max_radius {
                    wave.stage = ShockwaveStage::Cleanup;
                    wave.stage_timer = SHOCKWAVE_CLEANUP;
                }
            }
            ShockwaveStage::Cleanup => {
                wave.stage_timer = (wave.stage_timer - dt).max(0.0);
                if wave.stage_timer <= 0.0 {
                    wave.dead = true;
                }
            }
        }
    }
}

pub(crate) fn advance_whirlpools(enc: &mut Encounter, _ctx: &mut TickCtx, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    for pool in &mut enc.hazards.whirlpools {
        if pool.dead {
            continue;
        }
        pool.contact_cooldown = (pool.contact_cooldown - dt).max(0.0);
        match pool.stage {
            WhirlpoolStage::Telegraph => {
                pool.stage_timer = (pool.stage_timer - dt).max(0.0);
                if pool.stage_timer <= 0.0 {
                    pool.stage = WhirlpoolStage::Pull;
                }
            }
            WhirlpoolStage::Pull => {
                pool.pull_radius =
                    (pool.pull_radius + pool.pull_growth * dt).min(pool.max_pull_radius);
                pool.life = (pool.life - dt).max(0.0);
                if pool.life <= 0.0 {
                    pool.stage = WhirlpoolStage::Detonating;
                    pool.stage_timer = WHIRLPOOL_BLAST_DELAY;
                }
            }
            WhirlpoolStage::Detonating => {
                pool.stage_timer = (pool.stage_timer - dt).max(0.0);
                if pool.stage_timer <= 0.0 {
                    if pool.exploded {
                        pool.dead = true;
                    } else {
                        pool.exploded = true;
                        pool.stage_timer = WHIRLPOOL_BLAST_LINGER;
                    }
                }
            }
        }
    }
}

pub(crate) fn advance_boomerangs(enc: &mut Encounter, _ctx: &mut TickCtx, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    for card in &mut enc.hazards.boomerangs {
        if card.dead {
            continue;
        }
        card.hit_cooldown = (card.hit_cooldown - dt).max(0.0);
        match card.phase {
            BoomerangPhase::Outbound => {
                card.pos += card.vel * dt;
                card.traveled += card.vel.length() * dt;
                if card.traveled >= card.bounce_range {
                    card.phase = BoomerangPhase::Return;
                }
            }
            BoomerangPhase::Return => {
                let to_target = card.target - card.pos;
                let step = CARD_RETURN_SPEED * dt;
                if to_target.length() <= step.max(CARD_ARRIVE_EPS) {
                    card.phase = BoomerangPhase::Orbit;
                    let offset = card.pos - card.target;
                    card.orbit_angle = offset.y.atan2(offset.x);
                } else {
                    card.vel = to_target.normalize() * CARD_RETURN_SPEED;
                    card.pos += card.vel * dt;
                }
            }
            BoomerangPhase::Orbit => {
                card.orbit_angle += card.orbit_speed * dt;
                card.pos = card.target
                    + Vec2::from_angle(card.orbit_angle) * card.orbit_radius;
                card.orbit_timer = (card.orbit_timer - dt).max(0.0);
                if card.orbit_timer <= 0.0 {
                    card.phase = BoomerangPhase::Burst;
                    card.burst_radius = card.orbit_radius;
                }
            }
            BoomerangPhase::Burst => {
                card.burst_radius += card.burst_growth * dt;
                card.burst_timer = (card.burst_timer - dt).max(0.0);
                if card.burst_timer <= 0.0 {
                    card.dead = true;
                }
            }
        }
    }
}

pub(crate) fn advance_beams(enc: &mut Encounter, _ctx: &mut TickCtx, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    for beam in &mut enc.hazards.beams {
        if beam.dead {
            continue;
        }
        beam.hit_cooldown = (beam.hit_cooldown - dt).max(0.0);
        beam.stage_timer = (beam.stage_timer - dt).max(0.0);
        if beam.stage_timer > 0.0 {
            continue;
        }
        match beam.stage {
            BeamStage::Telegraph => {
                beam.stage = BeamStage::Active;
                beam.stage_timer = BEAM_ACTIVE;
            }
            BeamStage::Active => {
                beam.stage = BeamStage::Fade;
                beam.stage_timer = BEAM_FADE;
            }
            BeamStage::Fade => beam.dead = true,
        }
    }
}

pub(crate) fn advance_surges(enc: &mut Encounter, ctx: &mut TickCtx, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    for surge in &mut enc.hazards.surges {
        if surge.dead {
            continue;
        }
        surge.hit_cooldown = (surge.hit_cooldown - dt).max(0.0);
        match surge.stage {
            SurgeStage::Telegraph => {
                surge.stage_timer = (surge.stage_timer - dt).max(0.0);
                if surge.stage_timer <= 0.0 {
                    surge.stage = SurgeStage::Surge;
                }
            }
            SurgeStage::Surge => {
                surge.wobble_phase += surge.wobble_speed * dt;
                surge.pos.x += surge.vel_x * dt;
                surge.pos.y = surge.baseline_y + surge.wobble_phase.sin() * surge.wobble_amp;
                surge.life = (surge.life - dt).max(0.0);
                if surge.life <= 0.0 || out_of_bounds(surge.pos) {
                    surge.stage = SurgeStage::Foam;
                    surge.stage_timer = SURGE_FOAM;
                    if surge.kind == SurgeKind::TreasureWave && !surge.scored {
                        // Treasure washes up where the wave dies down
                        surge.scored = true;
                        ctx.hooks.award_score(TREASURE_SCORE);
                        ctx.hooks.spawn_coin_drop(CoinDropSpec {
                            pos: surge.pos,
                            count: 4,
                            value: 2,
                        });
                    }
                }
            }
            SurgeStage::Foam => {
                // Foam drifts on at half speed, harmless
                surge.pos.x += surge.vel_x * 0.5 * dt;
                surge.stage_timer = (surge.stage_timer - dt).max(0.0);
                if surge.stage_timer <= 0.0 {
                    surge.dead = true;
                }
            }
        }
    }
}

pub(crate) fn advance_columns(enc: &mut Encounter, _ctx: &mut TickCtx, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    for column in &mut enc.hazards.columns {
        if column.dead {
            continue;
        }
        column.hit_cooldown = (column.hit_cooldown - dt).max(0.0);
        column.stage_timer = (column.stage_timer - dt).max(0.0);
        if column.stage_timer > 0.0 {
            continue;
        }
        match column.stage {
            ColumnStage::Telegraph => {
                column.stage = ColumnStage::Active;
                column.stage_timer = COLUMN_ACTIVE;
            }
            ColumnStage::Active => {
                column.stage = ColumnStage::Fade;
                column.stage_timer = COLUMN_FADE;
            }
            ColumnStage::Fade => column.dead = true,
        }
    }
}

pub(crate) fn advance_orbs(enc: &mut Encounter, ctx: &mut TickCtx, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    let Encounter {
        hazards, pending, ..
    } = enc;
    for orb in &mut hazards.orbs {
        if orb.dead {
            continue;
        }
        orb.vel.y += orb.gravity * dt;
        orb.pos += orb.vel * dt;
        orb.life = (orb.life - dt).max(0.0);

        let burst = if let Some(obstacle) = ctx
            .obstacles
            .find_obstacle_hit(orb.pos, Vec2::splat(orb.radius))
        {
            ctx.obstacles.register_impact(obstacle, 1.0);
            true
        } else {
            orb.life <= 0.0 || orb.pos.y > ARENA_HEIGHT
        };

        if burst {
            orb.dead = true;
            pending.clouds.push(FragranceCloud::at(orb.pos));
        } else if out_of_bounds(orb.pos) {
            orb.dead = true;
        }
    }
}

pub(crate) fn advance_clouds(enc: &mut Encounter, _ctx: &mut TickCtx, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    for cloud in &mut enc.hazards.clouds {
        if cloud.dead {
            continue;
        }
        cloud.hit_cooldown = (cloud.hit_cooldown - dt).max(0.0);
        cloud.radius = (cloud.radius + cloud.growth * dt).min(cloud.max_radius);
        cloud.life = (cloud.life - dt).max(0.0);
        if cloud.life <= 0.0 {
            cloud.dead = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::recipe::PatternId;
    use crate::sim::harness::test_ctx;
    use crate::sim::spawn;
    use proptest::prelude::*;

    fn regatta() -> Encounter {
        let mut enc = Encounter::new(PatternId::Regatta, 17);
        enc.boss.entering = false;
        enc.boss.pos = Vec2::new(760.0, 240.0);
        enc
    }

    #[test]
    fn test_katapult_expiry_detonates_instead_of_vanishing() {
        let mut enc = regatta();
        test_ctx(|ctx| spawn::spawn_katapult_shot(&mut enc, ctx));
        enc.merge_pending();
        assert_eq!(enc.hazards.katapults[0].life, 4.6);

        let mut elapsed = 0.0;
        while elapsed < 4.6 + 0.1 {
            test_ctx(|ctx| advance_katapults(&mut enc, ctx, SIM_DT));
            elapsed += SIM_DT;
        }
        let shot = &enc.hazards.katapults[0];
        assert_eq!(shot.stage, KatapultStage::Exploding);
        assert!(!shot.dead, "must explode, not disappear");

        // The explosion runs its course, then the shot dies
        for _ in 0..((KATAPULT_BLAST_TIME / SIM_DT) as usize + 2) {
            test_ctx(|ctx| advance_katapults(&mut enc, ctx, SIM_DT));
        }
        assert!(enc.hazards.katapults[0].dead);
    }

    #[test]
    fn test_shockwave_wave1_completes_before_wave2() {
        let mut enc = regatta();
        test_ctx(|ctx| spawn::spawn_shockwave(&mut enc, ctx));
        enc.merge_pending();

        let mut seen_wave1_max = false;
        let mut seen_wave2 = false;
        for _ in 0..3000 {
            test_ctx(|ctx| advance_shockwaves(&mut enc, ctx, SIM_DT));
            let wave = match enc.hazards.shockwaves.first() {
                Some(w) if !w.dead => w,
                _ => break,
            };
            match wave.stage {
                ShockwaveStage::Wave1 => {
                    assert!(!seen_wave2, "wave1 after wave2");
                    if wave.ring_radius >= wave.max_radius {
                        seen_wave1_max = true;
                    }
                }
                ShockwaveStage::Pause => {
                    assert!(seen_wave1_max, "pause before wave1 reached max radius");
                }
                ShockwaveStage::Wave2 => {
                    assert!(seen_wave1_max, "wave2 before wave1 reached max radius");
                    seen_wave2 = true;
                }
                _ => {}
            }
            if enc.hazards.shockwaves[0].dead {
                break;
            }
        }
        assert!(seen_wave1_max && seen_wave2);
    }

    #[test]
    fn test_boomerang_phases_in_order_for_any_seed() {
        for seed in 0..20u64 {
            let mut enc = Encounter::new(PatternId::Cashfish, seed);
            enc.boss.entering = false;
            enc.boss.pos = Vec2::new(760.0, 240.0);
            test_ctx(|ctx| spawn::spawn_card_boomerang(&mut enc, ctx));
            enc.merge_pending();

            let mut phases = vec![enc.hazards.boomerangs[0].phase];
            for _ in 0..5000 {
                test_ctx(|ctx| advance_boomerangs(&mut enc, ctx, SIM_DT));
                let card = &enc.hazards.boomerangs[0];
                if *phases.last().unwrap() != card.phase {
                    phases.push(card.phase);
                }
                if card.dead {
                    break;
                }
            }
            assert_eq!(
                phases,
                vec![
                    BoomerangPhase::Outbound,
                    BoomerangPhase::Return,
                    BoomerangPhase::Orbit,
                    BoomerangPhase::Burst,
                ],
                "seed {} skipped a phase",
                seed
            );
            assert!(enc.hazards.boomerangs[0].dead);
        }
    }

    #[test]
    fn test_coin_burst_landing_spawns_explosion_and_drop() {
        let mut enc = Encounter::new(PatternId::Cashfish, 23);
        enc.boss.entering = false;
        enc.boss.pos = Vec2::new(760.0, 240.0);
        test_ctx(|ctx| spawn::spawn_coin_burst(&mut enc, ctx));
        enc.merge_pending();
        let spawned = enc.hazards.coin_bursts.len();
        assert!(spawned > 0);

        let mut hooks = crate::sim::harness::RecordingHooks::default();
        let mut obstacles = crate::sim::harness::NoObstacles;
        let mut pool = crate::sim::harness::CountingPool::default();
        for _ in 0..2000 {
            let mut ctx = TickCtx {
                player_pos: Vec2::new(-500.0, -500.0),
                player_down: false,
                hooks: &mut hooks,
                obstacles: &mut obstacles,
                pool: &mut pool,
            };
            advance_coin_bursts(&mut enc, &mut ctx, SIM_DT);
            if enc.hazards.coin_bursts.iter().all(|c| c.dead) {
                break;
            }
        }
        assert!(enc.hazards.coin_bursts.iter().all(|c| c.dead));
        assert_eq!(enc.pending.coin_explosions.len(), hooks.coins.len());
        assert!(!enc.pending.coin_explosions.is_empty());
    }

    #[test]
    fn test_torpedo_dies_on_obstacle_and_registers_impact() {
        let mut enc = regatta();
        enc.hazards.torpedoes.push(Torpedo {
            pos: Vec2::new(500.0, 240.0),
            vel: Vec2::new(-TORPEDO_SPEED, 0.0),
            radius: TORPEDO_RADIUS,
            life: TORPEDO_LIFE,
            damage: TORPEDO_DAMAGE,
            knockback: TORPEDO_KNOCKBACK,
            pooled: false,
            dead: false,
        });
        let mut rock = crate::sim::harness::SingleRock {
            pos: Vec2::new(400.0, 240.0),
            radius: 30.0,
            impacts: Vec::new(),
        };
        let mut hooks = crate::sim::harness::RecordingHooks::default();
        let mut pool = crate::sim::harness::CountingPool::default();
        for _ in 0..120 {
            let mut ctx = TickCtx {
                player_pos: Vec2::new(-500.0, -500.0),
                player_down: false,
                hooks: &mut hooks,
                obstacles: &mut rock,
                pool: &mut pool,
            };
            advance_torpedoes(&mut enc, &mut ctx, SIM_DT);
            if enc.hazards.torpedoes[0].dead {
                break;
            }
        }
        assert!(enc.hazards.torpedoes[0].dead);
        assert_eq!(rock.impacts, vec![TORPEDO_IMPACT_STRENGTH]);
        // Died on the rock, well short of its lifetime
        assert!(enc.hazards.torpedoes[0].life > 0.0);
    }

    #[test]
    fn test_advancing_dead_entity_is_noop() {
        let mut enc = regatta();
        test_ctx(|ctx| spawn::spawn_torpedo_volley(&mut enc, ctx));
        enc.merge_pending();
        enc.hazards.torpedoes[0].dead = true;
        let frozen = enc.hazards.torpedoes[0].pos;
        for _ in 0..10 {
            test_ctx(|ctx| advance_torpedoes(&mut enc, ctx, SIM_DT));
        }
        assert_eq!(enc.hazards.torpedoes[0].pos, frozen);
        assert!(enc.hazards.torpedoes[0].dead);
    }

    #[test]
    fn test_advance_zero_dt_changes_nothing() {
        // Spawn one of everything stage-driven, advance with dt = 0, and the
        // computed stages and fields must be unchanged.
        let mut enc = regatta();
        test_ctx(|ctx| {
            spawn::spawn_katapult_shot(&mut enc, ctx);
            spawn::spawn_shockwave(&mut enc, ctx);
            spawn::spawn_diamond_beam(&mut enc, ctx);
            spawn::spawn_wake_wave(&mut enc, ctx);
            spawn::spawn_whirlpool(&mut enc, ctx);
            spawn::spawn_crown_column(&mut enc, ctx);
        });
        enc.merge_pending();

        let before = enc.hazards.clone();
        test_ctx(|ctx| {
            advance_katapults(&mut enc, ctx, 0.0);
            advance_shockwaves(&mut enc, ctx, 0.0);
            advance_beams(&mut enc, ctx, 0.0);
            advance_surges(&mut enc, ctx, 0.0);
            advance_whirlpools(&mut enc, ctx, 0.0);
            advance_columns(&mut enc, ctx, 0.0);
        });

        assert_eq!(before.katapults[0].stage, enc.hazards.katapults[0].stage);
        assert_eq!(before.katapults[0].life, enc.hazards.katapults[0].life);
        assert_eq!(before.shockwaves[0].stage, enc.hazards.shockwaves[0].stage);
        assert_eq!(
            before.shockwaves[0].ring_radius,
            enc.hazards.shockwaves[0].ring_radius
        );
        assert_eq!(before.beams[0].stage, enc.hazards.beams[0].stage);
        assert_eq!(before.surges[0].stage, enc.hazards.surges[0].stage);
        assert_eq!(before.surges[0].pos, enc.hazards.surges[0].pos);
        assert_eq!(before.whirlpools[0].stage, enc.hazards.whirlpools[0].stage);
        assert_eq!(before.columns[0].stage, enc.hazards.columns[0].stage);
    }

    proptest! {
        /// Life and timer fields never increase and clamp at zero across
        /// arbitrary advance sequences.
        #[test]
        fn prop_torpedo_life_monotonic(dts in prop::collection::vec(0.0f32..0.2, 1..200)) {
            let mut enc = regatta();
            test_ctx(|ctx| spawn::spawn_torpedo_volley(&mut enc, ctx));
            enc.merge_pending();
            let mut last_life = enc.hazards.torpedoes[0].life;
            for dt in dts {
                test_ctx(|ctx| advance_torpedoes(&mut enc, ctx, dt));
                let life = enc.hazards.torpedoes[0].life;
                prop_assert!(life <= last_life);
                prop_assert!(life >= 0.0);
                last_life = life;
            }
        }

        #[test]
        fn prop_cloud_timers_monotonic(dts in prop::collection::vec(0.0f32..0.2, 1..200)) {
            let mut enc = regatta();
            enc.hazards.clouds.push(FragranceCloud::at(Vec2::new(300.0, 300.0)));
            let mut last_life = enc.hazards.clouds[0].life;
            for dt in dts {
                test_ctx(|ctx| advance_clouds(&mut enc, ctx, dt));
                let cloud = &enc.hazards.clouds[0];
                prop_assert!(cloud.life <= last_life && cloud.life >= 0.0);
                prop_assert!(cloud.radius <= cloud.max_radius);
                last_life = cloud.life;
            }
        }
    }
}
