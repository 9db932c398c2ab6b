#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Semantic type of a command parameter.
///
/// On disk every type is a single ASCII character inside the parameter
/// types field; `None` (`-`) marks an unused slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParameterType {
    #[default]
    None,
    Weapon,
    Ammo,
    Direction,
    Event,
    Equip,
    Face,
    Flag,
    Graphic,
    Illustration,
    Item,
    Map,
    Music,
    NpcNumber,
    NpcType,
    Sound,
    Tile,
    XCoord,
    YCoord,
    Number,
    Ticks,
}

// Presentation order, `None` first.
const CATALOG: [(ParameterType, char, &str); 21] = [
    (ParameterType::None, '-', "None"),
    (ParameterType::Weapon, 'a', "Weapon"),
    (ParameterType::Ammo, 'A', "Ammo"),
    (ParameterType::Direction, 'd', "Direction"),
    (ParameterType::Event, 'e', "Event"),
    (ParameterType::Equip, 'E', "Equip"),
    (ParameterType::Face, 'f', "Face"),
    (ParameterType::Flag, 'F', "Flag"),
    (ParameterType::Graphic, 'g', "Graphic"),
    (ParameterType::Illustration, 'l', "Illustration"),
    (ParameterType::Item, 'i', "Item"),
    (ParameterType::Map, 'm', "Map"),
    (ParameterType::Music, 'u', "Music"),
    (ParameterType::NpcNumber, 'N', "NPC Number"),
    (ParameterType::NpcType, 'n', "NPC Type"),
    (ParameterType::Sound, 's', "Sound"),
    (ParameterType::Tile, 't', "Tile"),
    (ParameterType::XCoord, 'x', "X Coordinate"),
    (ParameterType::YCoord, 'y', "Y Coordinate"),
    (ParameterType::Number, '#', "Number"),
    (ParameterType::Ticks, '.', "Ticks"),
];

impl ParameterType {
    pub const ALL: [ParameterType; 21] = {
        let mut all = [ParameterType::None; 21];
        let mut i = 0;
        while i < CATALOG.len() {
            all[i] = CATALOG[i].0;
            i += 1;
        }
        all
    };

    /// Resolves an on-disk type character. Unknown characters yield `None`
    /// (the Rust one, not [`ParameterType::None`]).
    pub fn from_char(ch: char) -> Option<Self> {
        CATALOG.iter().find(|(_, c, _)| *c == ch).map(|(t, _, _)| *t)
    }

    pub fn to_char(self) -> char {
        CATALOG[self.index()].1
    }

    /// Human readable name, e.g. "NPC Number".
    pub fn name(self) -> &'static str {
        CATALOG[self.index()].2
    }

    /// Looks a type up by its display name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        CATALOG.iter().find(|(_, _, n)| n.eq_ignore_ascii_case(name)).map(|(t, _, _)| *t)
    }

    pub fn is_none(self) -> bool {
        self == ParameterType::None
    }

    fn index(self) -> usize {
        match self {
            ParameterType::None => 0,
            ParameterType::Weapon => 1,
            ParameterType::Ammo => 2,
            ParameterType::Direction => 3,
            ParameterType::Event => 4,
            ParameterType::Equip => 5,
            ParameterType::Face => 6,
            ParameterType::Flag => 7,
            ParameterType::Graphic => 8,
            ParameterType::Illustration => 9,
            ParameterType::Item => 10,
            ParameterType::Map => 11,
            ParameterType::Music => 12,
            ParameterType::NpcNumber => 13,
            ParameterType::NpcType => 14,
            ParameterType::Sound => 15,
            ParameterType::Tile => 16,
            ParameterType::XCoord => 17,
            ParameterType::YCoord => 18,
            ParameterType::Number => 19,
            ParameterType::Ticks => 20,
        }
    }
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
