//! The seven faction identities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven competing factions.
///
/// Declaration order is the canonical order: the default turn order, the
/// order the encounter scan walks, and the order of every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactionId {
    /// Tianhe Sword Sect.
    Tianhe,
    /// Beige Academy.
    Beige,
    /// Wangsheng Gate.
    Wangsheng,
    /// Fulong Manor.
    Fulong,
    /// Nantuo Mountain.
    Nantuo,
    /// Xueyi Tower.
    Xueyi,
    /// Dari Glazed Palace.
    Dari,
}

/// Number of factions in the race.
pub const FACTION_COUNT: usize = 7;

/// Static display information for a faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactionInfo {
    /// Display name.
    pub name: &'static str,
    /// Epithet used in narration.
    pub title: &'static str,
}

impl FactionId {
    /// Every faction, in canonical order.
    pub const ALL: [FactionId; FACTION_COUNT] = [
        FactionId::Tianhe,
        FactionId::Beige,
        FactionId::Wangsheng,
        FactionId::Fulong,
        FactionId::Nantuo,
        FactionId::Xueyi,
        FactionId::Dari,
    ];

    /// Position of this faction in [`FactionId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase key, identical to the serialized form.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            FactionId::Tianhe => "tianhe",
            FactionId::Beige => "beige",
            FactionId::Wangsheng => "wangsheng",
            FactionId::Fulong => "fulong",
            FactionId::Nantuo => "nantuo",
            FactionId::Xueyi => "xueyi",
            FactionId::Dari => "dari",
        }
    }

    /// Display information for this faction.
    #[must_use]
    pub const fn info(self) -> FactionInfo {
        match self {
            FactionId::Tianhe => FactionInfo {
                name: "Tianhe Sword Sect",
                title: "Swords of the Heavenly River",
            },
            FactionId::Beige => FactionInfo {
                name: "Beige Academy",
                title: "Scholars of the Elegy",
            },
            FactionId::Wangsheng => FactionInfo {
                name: "Wangsheng Gate",
                title: "Keepers of the Crossing",
            },
            FactionId::Fulong => FactionInfo {
                name: "Fulong Manor",
                title: "Dragon-Taming Household",
            },
            FactionId::Nantuo => FactionInfo {
                name: "Nantuo Mountain",
                title: "Monks of the Hard Road",
            },
            FactionId::Xueyi => FactionInfo {
                name: "Xueyi Tower",
                title: "Snow-Robed Blades",
            },
            FactionId::Dari => FactionInfo {
                name: "Dari Glazed Palace",
                title: "Court of the Great Sun",
            },
        }
    }

    /// Display name; shorthand for `self.info().name`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.info().name
    }
}

impl fmt::Display for FactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_canonical_order() {
        for (position, id) in FactionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), position);
        }
    }

    #[test]
    fn test_serialized_form_matches_key() {
        for id in FactionId::ALL {
            let json = serde_json::to_value(id).unwrap();
            assert_eq!(json, serde_json::Value::String(id.key().to_owned()));
        }
    }
}
