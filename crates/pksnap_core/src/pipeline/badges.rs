use crate::oracle::SaveSession;

use super::guard::guard;
use super::snapshot::Badges;

/// Event-flag indices backing the eight badge slots. Generation-specific;
/// callers targeting another save format supply their own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeFlags {
    pub boulder: u32,
    pub cascade: u32,
    pub thunder: u32,
    pub rainbow: u32,
    pub soul: u32,
    pub marsh: u32,
    pub volcano: u32,
    pub earth: u32,
}

/// FireRed/LeafGreen badge flag indices.
pub const FRLG_BADGE_FLAGS: BadgeFlags = BadgeFlags {
    boulder: 2049,
    cascade: 2050,
    thunder: 2051,
    rainbow: 2052,
    soul: 2053,
    marsh: 2054,
    volcano: 2055,
    earth: 2056,
};

/// Resolve every badge through the guard; a flag that cannot be read
/// resolves to `false` without affecting the others.
pub fn resolve_badges<S: SaveSession>(session: &S, flags: &BadgeFlags) -> Badges {
    let flag = |name: &'static str, index: u32| guard(name, || session.event_flag(index))
        .unwrap_or(false);

    Badges {
        boulder: flag("badge Boulder", flags.boulder),
        cascade: flag("badge Cascade", flags.cascade),
        thunder: flag("badge Thunder", flags.thunder),
        rainbow: flag("badge Rainbow", flags.rainbow),
        soul: flag("badge Soul", flags.soul),
        marsh: flag("badge Marsh", flags.marsh),
        volcano: flag("badge Volcano", flags.volcano),
        earth: flag("badge Earth", flags.earth),
    }
}
