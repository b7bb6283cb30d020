//! Dispatch tables
//!
//! Adding a hazard family is a registration here, not an edit to a central
//! branch: each family row carries its advance and collide routines, and each
//! attack kind maps to its spawn routine. A lookup miss is an integration
//! error (a wired-up attack nobody implemented) and fails fast so it cannot
//! silently present as "boss does nothing".

use crate::recipe::AttackKind;

use super::hazard::HazardFamily;
use super::hooks::TickCtx;
use super::state::Encounter;
use super::{advance, collision, spawn};

type AdvanceFn = fn(&mut Encounter, &mut TickCtx, f32);
type CollideFn = fn(&mut Encounter, &mut TickCtx, f32);
type SpawnFn = fn(&mut Encounter, &mut TickCtx);

pub struct FamilyHandler {
    pub family: HazardFamily,
    pub advance: AdvanceFn,
    pub collide: CollideFn,
}

pub struct AttackHandler {
    pub kind: AttackKind,
    pub spawn: SpawnFn,
}

pub const FAMILY_HANDLERS: &[FamilyHandler] = &[
    FamilyHandler {
        family: HazardFamily::Torpedo,
        advance: advance::advance_torpedoes,
        collide: collision::collide_torpedoes,
    },
    FamilyHandler {
        family: HazardFamily::Speedboat,
        advance: advance::advance_speedboats,
        collide: collision::collide_speedboats,
    },
    FamilyHandler {
        family: HazardFamily::Katapult,
        advance: advance::advance_katapults,
        collide: collision::collide_katapults,
    },
    FamilyHandler {
        family: HazardFamily::CoinBurst,
        advance: advance::advance_coin_bursts,
        collide: collision::collide_coin_bursts,
    },
    FamilyHandler {
        family: HazardFamily::CoinExplosion,
        advance: advance::advance_coin_explosions,
        collide: collision::collide_coin_explosions,
    },
    FamilyHandler {
        family: HazardFamily::Shockwave,
        advance: advance::advance_shockwaves,
        collide: collision::collide_shockwaves,
    },
    FamilyHandler {
        family: HazardFamily::Whirlpool,
        advance: advance::advance_whirlpools,
        collide: collision::collide_whirlpools,
    },
    FamilyHandler {
        family: HazardFamily::CardBoomerang,
        advance: advance::advance_boomerangs,
        collide: collision::collide_boomerangs,
    },
    FamilyHandler {
        family: HazardFamily::DiamondBeam,
        advance: advance::advance_beams,
        collide: collision::collide_beams,
    },
    FamilyHandler {
        family: HazardFamily::Surge,
        advance: advance::advance_surges,
        collide: collision::collide_surges,
    },
    FamilyHandler {
        family: HazardFamily::CrownColumn,
        advance: advance::advance_columns,
        collide: collision::collide_columns,
    },
    FamilyHandler {
        family: HazardFamily::PerfumeOrb,
        advance: advance::advance_orbs,
        collide: collision::collide_orbs,
    },
    FamilyHandler {
        family: HazardFamily::FragranceCloud,
        advance: advance::advance_clouds,
        collide: collision::collide_clouds,
    },
];

pub const ATTACK_HANDLERS: &[AttackHandler] = &[
    AttackHandler {
        kind: AttackKind::Torpedo,
        spawn: spawn::spawn_torpedo_volley,
    },
    AttackHandler {
        kind: AttackKind::WakeWave,
        spawn: spawn::spawn_wake_wave,
    },
    AttackHandler {
        kind: AttackKind::KatapultShot,
        spawn: spawn::spawn_katapult_shot,
    },
    AttackHandler {
        kind: AttackKind::Shockwave,
        spawn: spawn::spawn_shockwave,
    },
    AttackHandler {
        kind: AttackKind::Speedboat,
        spawn: spawn::spawn_speedboat,
    },
    AttackHandler {
        kind: AttackKind::CoinBurst,
        spawn: spawn::spawn_coin_burst,
    },
    AttackHandler {
        kind: AttackKind::DiamondBeam,
        spawn: spawn::spawn_diamond_beam,
    },
    AttackHandler {
        kind: AttackKind::CardBoomerang,
        spawn: spawn::spawn_card_boomerang,
    },
    AttackHandler {
        kind: AttackKind::TreasureWave,
        spawn: spawn::spawn_treasure_wave,
    },
    AttackHandler {
        kind: AttackKind::CrownColumn,
        spawn: spawn::spawn_crown_column,
    },
    AttackHandler {
        kind: AttackKind::PerfumeOrb,
        spawn: spawn::spawn_perfume_orb,
    },
    AttackHandler {
        kind: AttackKind::FinSweep,
        spawn: spawn::spawn_fin_sweep,
    },
    AttackHandler {
        kind: AttackKind::Whirlpool,
        spawn: spawn::spawn_whirlpool,
    },
];

/// Spawn handler for an attack kind; panics on a missing registration.
pub fn attack_handler(kind: AttackKind) -> &'static AttackHandler {
    ATTACK_HANDLERS
        .iter()
        .find(|h| h.kind == kind)
        .unwrap_or_else(|| panic!("no spawn handler registered for attack {kind:?}"))
}

/// Family handler row; panics on a missing registration.
pub fn family_handler(family: HazardFamily) -> &'static FamilyHandler {
    FAMILY_HANDLERS
        .iter()
        .find(|h| h.family == family)
        .unwrap_or_else(|| panic!("no handler registered for family {family:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_attack_kind_has_a_spawn_handler() {
        for kind in AttackKind::ALL {
            let handler = attack_handler(kind);
            assert_eq!(handler.kind, kind);
        }
    }

    #[test]
    fn test_every_family_has_a_handler() {
        for family in HazardFamily::ALL {
            let handler = family_handler(family);
            assert_eq!(handler.family, family);
        }
    }
}
