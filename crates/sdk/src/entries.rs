//! Record layouts for the non-spell tables
//!
//! One `#[repr(C)]` struct per table kind, mirroring the fixed binary layout
//! the loader reads from disk. Helper computations that must stay consistent
//! wherever the record is consumed (reputation slot resolution, map
//! classification, pet diet checks) live here on the record types; the view
//! layer forwards to them and never reimplements them.

use crate::flags::{AreaFlags, PetFoodMask};
use crate::string::DbcString;

/// Localized string columns carry one slot per client locale.
pub const MAX_LOCALE_SLOTS: usize = 16;

/// Per-faction reputation slots (one per race/class bracket).
pub const MAX_FACTION_REPUTATION_SLOTS: usize = 4;

/// Skill lines attached to a creature family.
pub const CREATURE_FAMILY_SKILL_LINES: usize = 2;

/// Item slots an item set may fill.
pub const MAX_ITEM_SET_ITEMS: usize = 17;

/// Spell bonuses an item set may grant.
pub const MAX_ITEM_SET_SPELLS: usize = 8;

/// Mount creature slots on a taxi node (one per team).
pub const TAXI_MOUNT_SLOTS: usize = 2;

/// AreaTable row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct AreaTableEntry {
    pub id: u32,
    pub map_id: u32,
    pub zone: u32,
    pub explore_flag: u32,
    pub flags: AreaFlags,
    pub area_level: i32,
    pub area_name: [DbcString; MAX_LOCALE_SLOTS],
    pub team: u32,
    pub liquid_type_override: u32,
}

/// WMOAreaTable row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct WmoAreaTableEntry {
    pub id: u32,
    pub root_id: i32,
    pub adt_id: i32,
    pub group_id: i32,
    pub flags: u32,
    pub area_id: u32,
    pub name: [DbcString; MAX_LOCALE_SLOTS],
}

/// ChatChannels row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct ChatChannelsEntry {
    pub channel_id: u32,
    pub flags: u32,
    pub pattern: [DbcString; MAX_LOCALE_SLOTS],
}

/// ChrClasses row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct ChrClassesEntry {
    pub class_id: u32,
    pub power_type: u32,
    pub name: [DbcString; MAX_LOCALE_SLOTS],
    pub spell_family: u32,
}

/// ChrRaces row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct ChrRacesEntry {
    pub race_id: u32,
    pub faction_id: u32,
    pub model_m: u32,
    pub model_f: u32,
    pub team_id: u32,
    pub starting_taxi_mask: u32,
    pub cinematic_sequence: u32,
    pub name: [DbcString; MAX_LOCALE_SLOTS],
}

/// CreatureFamily row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct CreatureFamilyEntry {
    pub id: u32,
    pub min_scale: f32,
    pub min_scale_level: u32,
    pub max_scale: f32,
    pub max_scale_level: u32,
    pub skill_line: [u32; CREATURE_FAMILY_SKILL_LINES],
    pub pet_food_mask: PetFoodMask,
    pub name: [DbcString; MAX_LOCALE_SLOTS],
}

impl CreatureFamilyEntry {
    /// True if a pet of this family eats any food type in `mask`.
    pub fn pet_food_allowed(&self, mask: PetFoodMask) -> bool {
        self.pet_food_mask.intersects(mask)
    }
}

/// DungeonEncounter row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct DungeonEncounterEntry {
    pub id: u32,
    pub map_id: u32,
    pub difficulty: u32,
    pub encounter_data: u32,
    pub encounter_index: u32,
    pub encounter_name: [DbcString; MAX_LOCALE_SLOTS],
    pub name_lang_flags: u32,
    pub spell_icon_id: u32,
    pub complete_world_state_id: u32,
}

/// Faction row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct FactionEntry {
    pub id: u32,
    /// Index into the reputation list, or negative when the faction carries
    /// no reputation at all.
    pub reputation_list_id: i32,
    pub base_rep_race_mask: [u32; MAX_FACTION_REPUTATION_SLOTS],
    pub base_rep_class_mask: [u32; MAX_FACTION_REPUTATION_SLOTS],
    pub base_rep_value: [i32; MAX_FACTION_REPUTATION_SLOTS],
    pub reputation_flags: [u32; MAX_FACTION_REPUTATION_SLOTS],
    pub team: u32,
    pub name: [DbcString; MAX_LOCALE_SLOTS],
}

impl FactionEntry {
    /// Resolve which reputation slot applies to a race/class combination.
    ///
    /// A slot matches when its race mask overlaps `race_mask` (or is zero
    /// with flags set, meaning "any race") and its class mask overlaps
    /// `class_mask` (or is zero, meaning "any class").
    pub fn reputation_index_for(&self, race_mask: u32, class_mask: u32) -> Option<usize> {
        (0..MAX_FACTION_REPUTATION_SLOTS).find(|&i| {
            let race_fits = self.base_rep_race_mask[i] & race_mask != 0
                || (self.base_rep_race_mask[i] == 0 && self.reputation_flags[i] != 0);
            let class_fits =
                self.base_rep_class_mask[i] & class_mask != 0 || self.base_rep_class_mask[i] == 0;
            race_fits && class_fits
        })
    }

    /// True if this faction tracks reputation.
    pub fn has_reputation(&self) -> bool {
        self.reputation_list_id >= 0
    }
}

/// GMSurveyQuestions row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct GmSurveyQuestionsEntry {
    pub id: u32,
    pub question: [DbcString; MAX_LOCALE_SLOTS],
}

/// GMTicketCategory row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct GmTicketCategoryEntry {
    pub id: u32,
    pub name: [DbcString; MAX_LOCALE_SLOTS],
}

/// ItemClass row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct ItemClassEntry {
    pub id: u32,
    pub name: [DbcString; MAX_LOCALE_SLOTS],
}

/// ItemSet row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct ItemSetEntry {
    pub id: u32,
    pub name: [DbcString; MAX_LOCALE_SLOTS],
    /// Item ids making up the set, slot-aligned with the trigger spells.
    pub items_to_triggerspell: [u32; MAX_ITEM_SET_ITEMS],
    pub spells: [u32; MAX_ITEM_SET_SPELLS],
    pub required_skill_id: u32,
    pub required_skill_value: u32,
}

/// Map classification stored in the `map_type` column.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapType {
    Common = 0,
    Instance = 1,
    Raid = 2,
    Battleground = 3,
}

/// Map row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct MapEntry {
    pub map_id: u32,
    pub map_type: u32,
    pub name: [DbcString; MAX_LOCALE_SLOTS],
    pub linked_zone: u32,
    pub multimap_id: u32,
}

impl MapEntry {
    pub fn is_dungeon(&self) -> bool {
        self.map_type == MapType::Instance as u32 || self.map_type == MapType::Raid as u32
    }

    pub fn is_non_raid_dungeon(&self) -> bool {
        self.map_type == MapType::Instance as u32
    }

    pub fn is_raid(&self) -> bool {
        self.map_type == MapType::Raid as u32
    }

    pub fn is_battleground(&self) -> bool {
        self.map_type == MapType::Battleground as u32
    }

    pub fn instanceable(&self) -> bool {
        self.is_dungeon() || self.is_battleground()
    }

    /// The two world continents are the common maps 0 and 1.
    pub fn is_continent(&self) -> bool {
        self.map_type == MapType::Common as u32 && (self.map_id == 0 || self.map_id == 1)
    }
}

/// SkillLine row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct SkillLineEntry {
    pub id: u32,
    pub category_id: i32,
    pub name: [DbcString; MAX_LOCALE_SLOTS],
    pub spell_icon: u32,
}

/// TaxiNodes row.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct TaxiNodesEntry {
    pub id: u32,
    pub map_id: u32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub name: [DbcString; MAX_LOCALE_SLOTS],
    pub mount_creature_id: [u32; TAXI_MOUNT_SLOTS],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faction_reputation_index() {
        let faction = FactionEntry {
            reputation_list_id: 3,
            base_rep_race_mask: [0x1, 0x2, 0, 0],
            base_rep_class_mask: [0, 0x4, 0, 0],
            reputation_flags: [1, 1, 0, 0],
            ..Default::default()
        };

        // Race bit 0 matches slot 0 (any class).
        assert_eq!(faction.reputation_index_for(0x1, 0x8), Some(0));
        // Race bit 1 with class bit 2 matches slot 1.
        assert_eq!(faction.reputation_index_for(0x2, 0x4), Some(1));
        // Race bit 1 with a class outside slot 1's mask matches nothing.
        assert_eq!(faction.reputation_index_for(0x2, 0x8), None);
        assert!(faction.has_reputation());
    }

    #[test]
    fn test_faction_any_race_slot() {
        // A zero race mask with flags set means "any race".
        let faction = FactionEntry {
            base_rep_race_mask: [0, 0, 0, 0],
            base_rep_class_mask: [0, 0, 0, 0],
            reputation_flags: [0, 0, 1, 0],
            ..Default::default()
        };
        assert_eq!(faction.reputation_index_for(0x40, 0x10), Some(2));
    }

    #[test]
    fn test_faction_without_reputation() {
        let faction = FactionEntry {
            reputation_list_id: -1,
            ..Default::default()
        };
        assert!(!faction.has_reputation());
    }

    #[test]
    fn test_map_classification() {
        let raid = MapEntry {
            map_id: 249,
            map_type: MapType::Raid as u32,
            ..Default::default()
        };
        assert!(raid.is_dungeon());
        assert!(raid.is_raid());
        assert!(raid.instanceable());
        assert!(!raid.is_non_raid_dungeon());
        assert!(!raid.is_battleground());
        assert!(!raid.is_continent());

        let continent = MapEntry {
            map_id: 1,
            map_type: MapType::Common as u32,
            ..Default::default()
        };
        assert!(continent.is_continent());
        assert!(!continent.instanceable());

        let bg = MapEntry {
            map_id: 489,
            map_type: MapType::Battleground as u32,
            ..Default::default()
        };
        assert!(bg.is_battleground());
        assert!(bg.instanceable());
        assert!(!bg.is_dungeon());
    }

    #[test]
    fn test_pet_food_allowed() {
        let family = CreatureFamilyEntry {
            pet_food_mask: PetFoodMask::MEAT | PetFoodMask::RAW_FISH,
            ..Default::default()
        };
        assert!(family.pet_food_allowed(PetFoodMask::MEAT));
        assert!(family.pet_food_allowed(PetFoodMask::RAW_FISH | PetFoodMask::CHEESE));
        assert!(!family.pet_food_allowed(PetFoodMask::BREAD));
    }
}
