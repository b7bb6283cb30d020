//! Fixed timestep encounter tick
//!
//! Core loop that advances one encounter deterministically. Within a tick the
//! order is fixed:
//!
//! 1. director (may spawn into the pending buffer)
//! 2. simulator (advances existing hazards only)
//! 3. motion controller (independent of hazards)
//! 4. resolver (reads the just-advanced hazard state)
//!
//! then dead entries are compacted (stably, pooled shells returned) and the
//! pending buffer merges into the live collections. Entities spawned during a
//! tick - by the director or by another hazard - are therefore never
//! advanced or collided in their spawn tick.

use super::hooks::TickCtx;
use super::registry::FAMILY_HANDLERS;
use super::state::Encounter;
use super::{boss, director};

/// Advance the encounter by one fixed timestep.
pub fn tick(enc: &mut Encounter, ctx: &mut TickCtx, dt: f32) {
    enc.tick_count += 1;

    director::update(enc, ctx, dt);

    for handler in FAMILY_HANDLERS {
        (handler.advance)(enc, ctx, dt);
    }

    boss::update(enc, ctx, dt);

    for handler in FAMILY_HANDLERS {
        (handler.collide)(enc, ctx, dt);
    }

    enc.hazards.compact(ctx.pool);
    enc.merge_pending();
}
