use std::fmt;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The closed set of playable classes.
///
/// Quota conditions match against subsets of this list; there is no
/// user-defined class. Serialized as stable snake_case strings, and unknown
/// strings are a deserialization error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassName {
    Warrior,
    Swordmaster,
    Greatsword,
    Archer,
    Crossbowman,
    Longbowman,
    Healer,
    Priest,
    Monk,
    Warlock,
    Bard,
    Musician,
    Dancer,
    Mage,
    FireMage,
    IceMage,
    LightningMage,
    Rogue,
    DualBlade,
    Brawler,
}

/// All classes, in the order class pickers present them.
pub const CLASS_LIST: [ClassName; 20] = [
    ClassName::Warrior,
    ClassName::Swordmaster,
    ClassName::Greatsword,
    ClassName::Archer,
    ClassName::Crossbowman,
    ClassName::Longbowman,
    ClassName::Healer,
    ClassName::Priest,
    ClassName::Monk,
    ClassName::Warlock,
    ClassName::Bard,
    ClassName::Musician,
    ClassName::Dancer,
    ClassName::Mage,
    ClassName::FireMage,
    ClassName::IceMage,
    ClassName::LightningMage,
    ClassName::Rogue,
    ClassName::DualBlade,
    ClassName::Brawler,
];

impl ClassName {
    pub fn as_str(self) -> &'static str {
        match self {
            ClassName::Warrior => "warrior",
            ClassName::Swordmaster => "swordmaster",
            ClassName::Greatsword => "greatsword",
            ClassName::Archer => "archer",
            ClassName::Crossbowman => "crossbowman",
            ClassName::Longbowman => "longbowman",
            ClassName::Healer => "healer",
            ClassName::Priest => "priest",
            ClassName::Monk => "monk",
            ClassName::Warlock => "warlock",
            ClassName::Bard => "bard",
            ClassName::Musician => "musician",
            ClassName::Dancer => "dancer",
            ClassName::Mage => "mage",
            ClassName::FireMage => "fire_mage",
            ClassName::IceMage => "ice_mage",
            ClassName::LightningMage => "lightning_mage",
            ClassName::Rogue => "rogue",
            ClassName::DualBlade => "dual_blade",
            ClassName::Brawler => "brawler",
        }
    }

    pub fn from_str_exact(s: &str) -> Option<Self> {
        CLASS_LIST.into_iter().find(|c| c.as_str() == s)
    }

    /// The category line this class belongs to.
    pub fn category(self) -> ClassCategory {
        CLASS_CATEGORIES
            .iter()
            .find(|cat| cat.classes.contains(&self))
            .map(|cat| cat.category)
            .expect("every class belongs to a category line")
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ClassName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ClassName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClassName::from_str_exact(&s)
            .ok_or_else(|| de::Error::custom(format!("unknown class: {s}")))
    }
}

/// The six class lines quota pickers group by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassCategory {
    WarriorLine,
    ArcherLine,
    HealerLine,
    BardLine,
    MageLine,
    RogueLine,
}

pub struct CategoryClasses {
    pub category: ClassCategory,
    pub classes: &'static [ClassName],
}

/// Category lines, in picker order. Every class appears in exactly one line.
pub const CLASS_CATEGORIES: [CategoryClasses; 6] = [
    CategoryClasses {
        category: ClassCategory::WarriorLine,
        classes: &[
            ClassName::Warrior,
            ClassName::Swordmaster,
            ClassName::Greatsword,
        ],
    },
    CategoryClasses {
        category: ClassCategory::ArcherLine,
        classes: &[
            ClassName::Archer,
            ClassName::Crossbowman,
            ClassName::Longbowman,
        ],
    },
    CategoryClasses {
        category: ClassCategory::HealerLine,
        classes: &[
            ClassName::Healer,
            ClassName::Priest,
            ClassName::Monk,
            ClassName::Warlock,
        ],
    },
    CategoryClasses {
        category: ClassCategory::BardLine,
        classes: &[ClassName::Bard, ClassName::Musician, ClassName::Dancer],
    },
    CategoryClasses {
        category: ClassCategory::MageLine,
        classes: &[
            ClassName::Mage,
            ClassName::FireMage,
            ClassName::IceMage,
            ClassName::LightningMage,
        ],
    },
    CategoryClasses {
        category: ClassCategory::RogueLine,
        classes: &[ClassName::Rogue, ClassName::DualBlade, ClassName::Brawler],
    },
];
