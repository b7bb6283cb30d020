//! Hazard spawner
//!
//! One routine per attack kind, invoked by the director through the registry.
//! Spawns always land in the encounter's pending buffer - never directly in
//! the live collections - so nothing is simulated or collided in its spawn
//! tick. Aiming reads the boss and player positions at decision time.

use glam::Vec2;
use rand::Rng;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, SURFACE_Y};
use crate::{aim, rotate};

use super::hazard::*;
use super::hooks::{FlashKind, TickCtx};
use super::state::Encounter;

/// Torpedoes per volley, fanned around the aim line
const TORPEDO_VOLLEY: usize = 3;
const TORPEDO_SPREAD: f32 = 0.18;
/// Coins per burst
const COIN_VOLLEY: usize = 5;
const COIN_FAN: f32 = 0.5;

pub(crate) fn spawn_torpedo_volley(enc: &mut Encounter, ctx: &mut TickCtx) {
    let Encounter {
        boss, rng, pending, ..
    } = enc;
    let dir = aim(boss.pos, ctx.player_pos, Vec2::NEG_X);
    for i in 0..TORPEDO_VOLLEY {
        let fan = (i as f32 - (TORPEDO_VOLLEY as f32 - 1.0) / 2.0) * TORPEDO_SPREAD;
        let jitter = rng.random_range(-0.04..=0.04);
        let shell = ctx.pool.acquire_torpedo();
        let pooled = shell.is_some();
        let mut torpedo = shell.unwrap_or_default();
        torpedo.pos = boss.pos;
        torpedo.vel = rotate(dir, fan + jitter) * TORPEDO_SPEED;
        torpedo.radius = TORPEDO_RADIUS;
        torpedo.life = TORPEDO_LIFE;
        torpedo.damage = TORPEDO_DAMAGE;
        torpedo.knockback = TORPEDO_KNOCKBACK;
        torpedo.pooled = pooled;
        torpedo.dead = false;
        pending.torpedoes.push(torpedo);
    }
}

pub(crate) fn spawn_wake_wave(enc: &mut Encounter, ctx: &mut TickCtx) {
    spawn_surge(enc, ctx, SurgeKind::WakeWave);
}

pub(crate) fn spawn_treasure_wave(enc: &mut Encounter, ctx: &mut TickCtx) {
    spawn_surge(enc, ctx, SurgeKind::TreasureWave);
}

pub(crate) fn spawn_fin_sweep(enc: &mut Encounter, ctx: &mut TickCtx) {
    spawn_surge(enc, ctx, SurgeKind::FinSweep);
}

fn spawn_surge(enc: &mut Encounter, ctx: &mut TickCtx, kind: SurgeKind) {
    let Encounter {
        boss, rng, pending, ..
    } = enc;
    let (speed, life, rx, ry) = match kind {
        SurgeKind::WakeWave => (WAKE_SPEED, WAKE_LIFE, WAKE_RX, WAKE_RY),
        SurgeKind::TreasureWave => (TREASURE_SPEED, TREASURE_LIFE, TREASURE_RX, TREASURE_RY),
        SurgeKind::FinSweep => (FIN_SPEED, FIN_LIFE, FIN_RX, FIN_RY),
    };
    // Waves ride the waterline; a fin sweep slices at the player's depth.
    let baseline = match kind {
        SurgeKind::FinSweep => ctx.player_pos.y,
        _ => SURFACE_Y + rng.random_range(-8.0..=8.0),
    };
    let toward_player = (ctx.player_pos.x - boss.pos.x).signum();

    let shell = ctx.pool.acquire_surge();
    let pooled = shell.is_some();
    let mut surge = shell.unwrap_or_default();
    surge.kind = kind;
    surge.pos = Vec2::new(boss.pos.x, baseline);
    surge.baseline_y = baseline;
    surge.vel_x = toward_player * speed;
    surge.wobble_amp = SURGE_WOBBLE_AMP;
    surge.wobble_speed = SURGE_WOBBLE_SPEED;
    surge.wobble_phase = rng.random_range(0.0..std::f32::consts::TAU);
    surge.rx = rx;
    surge.ry = ry;
    surge.stage = SurgeStage::Telegraph;
    surge.stage_timer = SURGE_TELEGRAPH;
    surge.life = life;
    surge.damage = SURGE_DAMAGE;
    surge.knockback = SURGE_KNOCKBACK;
    surge.hit_cooldown = 0.0;
    surge.scored = false;
    surge.pooled = pooled;
    surge.dead = false;
    pending.surges.push(surge);
}

pub(crate) fn spawn_katapult_shot(enc: &mut Encounter, ctx: &mut TickCtx) {
    let Encounter {
        boss, rng, pending, ..
    } = enc;
    let toward_player = (ctx.player_pos.x - boss.pos.x).signum();
    let vx = toward_player * (KATAPULT_LAUNCH_VX + rng.random_range(-30.0..=30.0));
    pending.katapults.push(KatapultShot {
        pos: boss.pos,
        vel: Vec2::new(vx, KATAPULT_LAUNCH_VY),
        gravity: KATAPULT_GRAVITY,
        radius: KATAPULT_RADIUS,
        life: KATAPULT_LIFE,
        stage: KatapultStage::Flight,
        stage_timer: 0.0,
        blast_radius: KATAPULT_BLAST_RADIUS,
        damage: KATAPULT_DAMAGE,
        blast_damage: KATAPULT_BLAST_DAMAGE,
        knockback: KATAPULT_KNOCKBACK,
        blast_hit: false,
        dead: false,
    });
}

pub(crate) fn spawn_shockwave(enc: &mut Encounter, _ctx: &mut TickCtx) {
    let Encounter { boss, pending, .. } = enc;
    pending.shockwaves.push(Shockwave {
        pos: boss.pos,
        stage: ShockwaveStage::Telegraph,
        stage_timer: SHOCKWAVE_TELEGRAPH,
        ring_radius: SHOCKWAVE_START_RADIUS,
        growth: SHOCKWAVE_GROWTH,
        max_radius: SHOCKWAVE_MAX_RADIUS,
        band: SHOCKWAVE_BAND,
        wave1_hit: false,
        wave2_hit: false,
        damage: SHOCKWAVE_DAMAGE,
        knockback: SHOCKWAVE_KNOCKBACK,
        dead: false,
    });
}

pub(crate) fn spawn_speedboat(enc: &mut Encounter, ctx: &mut TickCtx) {
    let Encounter { pending, .. } = enc;
    // Races in from the far edge at the player's depth.
    let y = ctx.player_pos.y.clamp(60.0, ARENA_HEIGHT - 60.0);
    ctx.hooks.trigger_flash(FlashKind::UltimateWarning);
    log::info!("speedboat run winding up");
    pending.speedboats.push(Speedboat {
        pos: Vec2::new(ARENA_WIDTH + 60.0, y),
        vel: Vec2::new(-SPEEDBOAT_SPEED, 0.0),
        stage: SpeedboatStage::Rev,
        stage_timer: SPEEDBOAT_REV_TIME,
        radius: SPEEDBOAT_RADIUS,
        damage: SPEEDBOAT_DAMAGE,
        knockback: SPEEDBOAT_KNOCKBACK,
        hit_cooldown: 0.0,
        dead: false,
    });
}

pub(crate) fn spawn_coin_burst(enc: &mut Encounter, ctx: &mut TickCtx) {
    let Encounter {
        boss, rng, pending, ..
    } = enc;
    let dir = aim(boss.pos, ctx.player_pos, Vec2::NEG_X);
    for i in 0..COIN_VOLLEY {
        let fan = (i as f32 - (COIN_VOLLEY as f32 - 1.0) / 2.0) * (COIN_FAN / 2.0);
        let speed = rng.random_range(150.0..=230.0);
        // Lobbed: aimed component plus an upward kick, pulled down by gravity
        let vel = rotate(dir, fan) * speed + Vec2::new(0.0, -120.0);
        pending.coin_bursts.push(CoinBurst {
            pos: boss.pos,
            vel,
            gravity: COIN_BURST_GRAVITY,
            radius: COIN_BURST_RADIUS,
            life: COIN_BURST_LIFE,
            damage: COIN_BURST_DAMAGE,
            knockback: COIN_BURST_KNOCKBACK,
            dead: false,
        });
    }
}

pub(crate) fn spawn_diamond_beam(enc: &mut Encounter, ctx: &mut TickCtx) {
    let Encounter { boss, pending, .. } = enc;
    let to_player = ctx.player_pos - boss.pos;
    pending.beams.push(DiamondBeam {
        origin: boss.pos,
        angle: to_player.y.atan2(to_player.x),
        length: BEAM_LENGTH,
        half_width: BEAM_HALF_WIDTH,
        pad: BEAM_PAD,
        stage: BeamStage::Telegraph,
        stage_timer: BEAM_TELEGRAPH,
        damage: BEAM_DAMAGE,
        knockback: BEAM_KNOCKBACK,
        hit_cooldown: 0.0,
        dead: false,
    });
}

pub(crate) fn spawn_card_boomerang(enc: &mut Encounter, ctx: &mut TickCtx) {
    let Encounter {
        boss, rng, pending, ..
    } = enc;
    let dir = aim(boss.pos, ctx.player_pos, Vec2::NEG_X);
    let skew = rng.random_range(-0.25..=0.25);
    pending.boomerangs.push(CardBoomerang {
        pos: boss.pos,
        vel: rotate(dir, skew) * CARD_OUTBOUND_SPEED,
        phase: BoomerangPhase::Outbound,
        traveled: 0.0,
        bounce_range: CARD_BOUNCE_RANGE,
        target: ctx.player_pos,
        orbit_angle: 0.0,
        orbit_radius: CARD_ORBIT_RADIUS,
        orbit_speed: CARD_ORBIT_SPEED,
        orbit_timer: CARD_ORBIT_TIME,
        burst_radius: 0.0,
        burst_growth: CARD_BURST_GROWTH,
        burst_timer: CARD_BURST_TIME,
        burst_hit: false,
        radius: CARD_RADIUS,
        damage: CARD_DAMAGE,
        knockback: CARD_KNOCKBACK,
        hit_cooldown: 0.0,
        dead: false,
    });
}

pub(crate) fn spawn_crown_column(enc: &mut Encounter, ctx: &mut TickCtx) {
    let Encounter { pending, .. } = enc;
    ctx.hooks.trigger_flash(FlashKind::UltimateWarning);
    log::info!("crown column telegraphed over the player");
    pending.columns.push(CrownColumn {
        center_x: ctx.player_pos.x,
        half_width: COLUMN_HALF_WIDTH,
        top: 0.0,
        bottom: ARENA_HEIGHT,
        stage: ColumnStage::Telegraph,
        stage_timer: COLUMN_TELEGRAPH,
        damage: COLUMN_DAMAGE,
        knockback: COLUMN_KNOCKBACK,
        hit_cooldown: 0.0,
        dead: false,
    });
}

pub(crate) fn spawn_perfume_orb(enc: &mut Encounter, ctx: &mut TickCtx) {
    let Encounter {
        boss, rng, pending, ..
    } = enc;
    let toward_player = (ctx.player_pos.x - boss.pos.x).signum();
    let vx = toward_player * rng.random_range(120.0..=200.0);
    pending.orbs.push(PerfumeOrb {
        pos: boss.pos,
        vel: Vec2::new(vx, -180.0),
        gravity: ORB_GRAVITY,
        radius: ORB_RADIUS,
        life: ORB_LIFE,
        damage: ORB_DAMAGE,
        knockback: ORB_KNOCKBACK,
        dead: false,
    });
}

pub(crate) fn spawn_whirlpool(enc: &mut Encounter, ctx: &mut TickCtx) {
    let Encounter {
        boss, rng, pending, ..
    } = enc;
    ctx.hooks.trigger_flash(FlashKind::UltimateWarning);
    // Opens between boss and player, nudged so it never sits on either.
    let mid = (boss.pos + ctx.player_pos) * 0.5;
    let nudge = Vec2::new(
        rng.random_range(-40.0..=40.0),
        rng.random_range(-30.0..=30.0),
    );
    let pos = (mid + nudge).clamp(
        Vec2::new(120.0, 100.0),
        Vec2::new(ARENA_WIDTH - 120.0, ARENA_HEIGHT - 100.0),
    );
    log::info!("whirlpool opening at {:.0},{:.0}", pos.x, pos.y);
    pending.whirlpools.push(Whirlpool {
        pos,
        stage: WhirlpoolStage::Telegraph,
        stage_timer: WHIRLPOOL_TELEGRAPH,
        pull_radius: WHIRLPOOL_PULL_START,
        max_pull_radius: WHIRLPOOL_PULL_MAX,
        pull_growth: WHIRLPOOL_PULL_GROWTH,
        pull_strength: WHIRLPOOL_PULL_STRENGTH,
        core_radius: WHIRLPOOL_CORE_RADIUS,
        contact_cooldown: 0.0,
        life: WHIRLPOOL_LIFE,
        blast_radius: WHIRLPOOL_BLAST_RADIUS,
        blast_damage: WHIRLPOOL_BLAST_DAMAGE,
        exploded: false,
        blast_hit: false,
        damage: WHIRLPOOL_DAMAGE,
        knockback: WHIRLPOOL_KNOCKBACK,
        dead: false,
    });
}
