//! Collision resolver and per-family hit geometry
//!
//! The tricky part of the boss engine: every hazard family carries its own
//! hit geometry against the player - circles, expanding ring bands, oriented
//! beam rectangles, normalized ellipses and axis-aligned columns.
//!
//! Every resolve routine shares one contract: fast-skip when the player is
//! down or the collection is empty; test only live, correctly-staged
//! entities; emit exactly one damage event per hit, gated by the entity's own
//! cooldown (never a shared one); knock the player away from the hazard's
//! anchor; mark one-shot hazards consumed. Resolvers mark entities dead but
//! never structurally remove them - compaction happens after the pass.

use glam::Vec2;

use crate::consts::PLAYER_RADIUS;

use super::hazard::*;
use super::hooks::{FlashKind, TickCtx};
use super::state::Encounter;

/// Circle vs the player's hit circle.
#[inline]
pub(crate) fn circle_hit(center: Vec2, radius: f32, player: Vec2) -> bool {
    center.distance_squared(player) <= (radius + PLAYER_RADIUS) * (radius + PLAYER_RADIUS)
}

/// Expanding ring band vs the player's hit circle.
#[inline]
pub(crate) fn ring_hit(center: Vec2, ring_radius: f32, band: f32, player: Vec2) -> bool {
    (center.distance(player) - ring_radius).abs() <= band + PLAYER_RADIUS
}

/// Oriented beam rectangle vs the player's position.
///
/// Projects the player's offset onto the beam's forward axis (must fall in
/// `[-pad, length + pad]`) and perpendicular axis (must fall within the
/// half-width, boundary inclusive).
#[inline]
pub(crate) fn beam_hit(
    origin: Vec2,
    angle: f32,
    length: f32,
    half_width: f32,
    pad: f32,
    player: Vec2,
) -> bool {
    let forward = Vec2::from_angle(angle);
    let offset = player - origin;
    let along = offset.dot(forward);
    if along < -pad || along > length + pad {
        return false;
    }
    offset.perp_dot(forward).abs() <= half_width
}

/// Normalized-ellipse containment.
#[inline]
pub(crate) fn ellipse_hit(center: Vec2, rx: f32, ry: f32, player: Vec2) -> bool {
    let nx = (player.x - center.x) / rx;
    let ny = (player.y - center.y) / ry;
    nx * nx + ny * ny < 1.0
}

/// Axis-aligned column vs the player's hit circle.
#[inline]
pub(crate) fn column_hit(center_x: f32, half_width: f32, top: f32, bottom: f32, player: Vec2) -> bool {
    (player.x - center_x).abs() <= half_width + PLAYER_RADIUS
        && player.y >= top - PLAYER_RADIUS
        && player.y <= bottom + PLAYER_RADIUS
}

/// One resolved hit: damage, knockback away from the anchor, UI flash.
fn strike(ctx: &mut TickCtx, anchor: Vec2, damage: f32, knockback: f32) {
    ctx.hooks.damage_player(damage);
    let away = (ctx.player_pos - anchor).normalize_or(Vec2::NEG_X);
    ctx.hooks.push_player(away * knockback);
    ctx.hooks.trigger_flash(FlashKind::PlayerHit);
}

pub(crate) fn collide_torpedoes(enc: &mut Encounter, ctx: &mut TickCtx, _dt: f32) {
    if ctx.player_down || enc.hazards.torpedoes.is_empty() {
        return;
    }
    for torpedo in &mut enc.hazards.torpedoes {
        if torpedo.dead {
            continue;
        }
        if circle_hit(torpedo.pos, torpedo.radius, ctx.player_pos) {
            strike(ctx, torpedo.pos, torpedo.damage, torpedo.knockback);
            // Consumed on impact; cannot hit twice
            torpedo.dead = true;
        }
    }
}

pub(crate) fn collide_speedboats(enc: &mut Encounter, ctx: &mut TickCtx, _dt: f32) {
    if ctx.player_down || enc.hazards.speedboats.is_empty() {
        return;
    }
    for boat in &mut enc.hazards.speedboats {
        if boat.dead || boat.stage != SpeedboatStage::Charge || boat.hit_cooldown > 0.0 {
            continue;
        }
        if circle_hit(boat.pos, boat.radius, ctx.player_pos) {
            strike(ctx, boat.pos, boat.damage, boat.knockback);
            boat.hit_cooldown = SPEEDBOAT_REHIT;
        }
    }
}

pub(crate) fn collide_katapults(enc: &mut Encounter, ctx: &mut TickCtx, _dt: f32) {
    if ctx.player_down || enc.hazards.katapults.is_empty() {
        return;
    }
    for shot in &mut enc.hazards.katapults {
        if shot.dead {
            continue;
        }
        match shot.stage {
            KatapultStage::Flight => {
                if circle_hit(shot.pos, shot.radius, ctx.player_pos) {
                    strike(ctx, shot.pos, shot.damage, shot.knockback);
                    // Direct hits are consumed without the landing blast
                    shot.dead = true;
                }
            }
            KatapultStage::Exploding => {
                if !shot.blast_hit && circle_hit(shot.pos, shot.blast_radius, ctx.player_pos) {
                    strike(ctx, shot.pos, shot.blast_damage, shot.knockback);
                    shot.blast_hit = true;
                }
            }
        }
    }
}

pub(crate) fn collide_coin_bursts(enc: &mut Encounter, ctx: &mut TickCtx, _dt: f32) {
    if ctx.player_down || enc.hazards.coin_bursts.is_empty() {
        return;
    }
    for coin in &mut enc.hazards.coin_bursts {
        if coin.dead {
            continue;
        }
        if circle_hit(coin.pos, coin.radius, ctx.player_pos) {
            strike(ctx, coin.pos, coin.damage, coin.knockback);
            // Consumed; a caught coin never leaves a blast zone
            coin.dead = true;
        }
    }
}

pub(crate) fn collide_coin_explosions(enc: &mut Encounter, ctx: &mut TickCtx, _dt: f32) {
    if ctx.player_down || enc.hazards.coin_explosions.is_empty() {
        return;
    }
    for blast in &mut enc.hazards.coin_explosions {
        if blast.dead || blast.hit {
            continue;
        }
        if circle_hit(blast.pos, blast.radius, ctx.player_pos) {
            strike(ctx, blast.pos, blast.damage, blast.knockback);
            blast.hit = true;
        }
    }
}

pub(crate) fn collide_shockwaves(enc: &mut Encounter, ctx: &mut TickCtx, _dt: f32) {
    if ctx.player_down || enc.hazards.shockwaves.is_empty() {
        return;
    }
    for wave in &mut enc.hazards.shockwaves {
        if wave.dead {
            continue;
        }
        // Each wave stage carries its own already-damaged flag
        let hit_flag = match wave.stage {
            ShockwaveStage::Wave1 => &mut wave.wave1_hit,
            ShockwaveStage::Wave2 => &mut wave.wave2_hit,
            _ => continue,
        };
        if *hit_flag {
            continue;
        }
        if ring_hit(wave.pos, wave.ring_radius, wave.band, ctx.player_pos) {
            *hit_flag = true;
            let (damage, knockback) = (wave.damage, wave.knockback);
            let anchor = wave.pos;
            strike(ctx, anchor, damage, knockback);
        }
    }
}

pub(crate) fn collide_whirlpools(enc: &mut Encounter, ctx: &mut TickCtx, dt: f32) {
    if ctx.player_down || enc.hazards.whirlpools.is_empty() {
        return;
    }
    for pool in &mut enc.hazards.whirlpools {
        if pool.dead {
            continue;
        }
        match pool.stage {
            WhirlpoolStage::Telegraph => {}
            WhirlpoolStage::Pull => {
                // Attraction scales with proximity: full strength at the
                // center, nothing at the rim.
                let dist = pool.pos.distance(ctx.player_pos);
                if dist < pool.pull_radius && dist > f32::EPSILON {
                    let toward = (pool.pos - ctx.player_pos) / dist;
                    let strength = pool.pull_strength * (1.0 - dist / pool.pull_radius);
                    ctx.hooks.push_player(toward * strength * dt);
                }
                // Inner contact zone on its own cooldown
                if pool.contact_cooldown <= 0.0
                    && circle_hit(pool.pos, pool.core_radius, ctx.player_pos)
                {
                    strike(ctx, pool.pos, pool.damage, pool.knockback);
                    pool.contact_cooldown = WHIRLPOOL_CONTACT_REHIT;
                }
            }
            WhirlpoolStage::Detonating => {
                if pool.exploded
                    && !pool.blast_hit
                    && circle_hit(pool.pos, pool.blast_radius, ctx.player_pos)
                {
                    strike(ctx, pool.pos, pool.blast_damage, pool.knockback);
                    pool.blast_hit = true;
                }
            }
        }
    }
}

pub(crate) fn collide_boomerangs(enc: &mut Encounter, ctx: &mut TickCtx, _dt: f32) {
    if ctx.player_down || enc.hazards.boomerangs.is_empty() {
        return;
    }
    for card in &mut enc.hazards.boomerangs {
        if card.dead {
            continue;
        }
        match card.phase {
            BoomerangPhase::Burst => {
                if !card.burst_hit
                    && ring_hit(card.target, card.burst_radius, CARD_BURST_BAND, ctx.player_pos)
                {
                    strike(ctx, card.target, card.damage, card.knockback);
                    card.burst_hit = true;
                }
            }
            _ => {
                if card.hit_cooldown <= 0.0
                    && circle_hit(card.pos, card.radius, ctx.player_pos)
                {
                    strike(ctx, card.pos, card.damage, card.knockback);
                    card.hit_cooldown = CARD_REHIT;
                }
            }
        }
    }
}

pub(crate) fn collide_beams(enc: &mut Encounter, ctx: &mut TickCtx, _dt: f32) {
    if ctx.player_down || enc.hazards.beams.is_empty() {
        return;
    }
    for beam in &mut enc.hazards.beams {
        // Each beam instance cools down independently of any other active beam
        if beam.dead || beam.stage != BeamStage::Active || beam.hit_cooldown > 0.0 {
            continue;
        }
        if beam_hit(
            beam.origin,
            beam.angle,
            beam.length,
            beam.half_width,
            beam.pad,
            ctx.player_pos,
        ) {
            strike(ctx, beam.origin, beam.damage, beam.knockback);
            beam.hit_cooldown = BEAM_REHIT;
        }
    }
}

pub(crate) fn collide_surges(enc: &mut Encounter, ctx: &mut TickCtx, _dt: f32) {
    if ctx.player_down || enc.hazards.surges.is_empty() {
        return;
    }
    for surge in &mut enc.hazards.surges {
        // Foam is harmless; only the surge stage damages
        if surge.dead || surge.stage != SurgeStage::Surge || surge.hit_cooldown > 0.0 {
            continue;
        }
        if ellipse_hit(surge.pos, surge.rx, surge.ry, ctx.player_pos) {
            strike(ctx, surge.pos, surge.damage, surge.knockback);
            surge.hit_cooldown = SURGE_REHIT;
        }
    }
}

pub(crate) fn collide_columns(enc: &mut Encounter, ctx: &mut TickCtx, _dt: f32) {
    if ctx.player_down || enc.hazards.columns.is_empty() {
        return;
    }
    for column in &mut enc.hazards.columns {
        if column.dead || column.stage != ColumnStage::Active || column.hit_cooldown > 0.0 {
            continue;
        }
        if column_hit(
            column.center_x,
            column.half_width,
            column.top,
            column.bottom,
            ctx.player_pos,
        ) {
            // Knock straight out of the column, never along it
            let anchor = Vec2::new(column.center_x, ctx.player_pos.y);
            strike(ctx, anchor, column.damage, column.knockback);
            column.hit_cooldown = COLUMN_REHIT;
        }
    }
}

pub(crate) fn collide_orbs(enc: &mut Encounter, ctx: &mut TickCtx, _dt: f32) {
    if ctx.player_down || enc.hazards.orbs.is_empty() {
        return;
    }
    for orb in &mut enc.hazards.orbs {
        if orb.dead {
            continue;
        }
        if circle_hit(orb.pos, orb.radius, ctx.player_pos) {
            strike(ctx, orb.pos, orb.damage, orb.knockback);
            // Consumed; a caught orb never leaves a cloud
            orb.dead = true;
        }
    }
}

pub(crate) fn collide_clouds(enc: &mut Encounter, ctx: &mut TickCtx, _dt: f32) {
    if ctx.player_down || enc.hazards.clouds.is_empty() {
        return;
    }
    for cloud in &mut enc.hazards.clouds {
        if cloud.dead || cloud.hit_cooldown > 0.0 {
            continue;
        }
        if circle_hit(cloud.pos, cloud.radius, ctx.player_pos) {
            strike(ctx, cloud.pos, cloud.damage, cloud.knockback);
            cloud.hit_cooldown = CLOUD_REHIT;
        }
    }
}
