//! Spell record layout and helper types
//!
//! `SpellEntry` is by far the widest record the client data carries. The
//! helper computations on it (simple value calculation, family matching,
//! attribute tests, mechanic/school masks) are the single source of truth;
//! the spell view forwards to them.

use crate::flags::{
    SpellAttributes, SpellAttributesEx, SpellAttributesEx2, SpellAttributesEx3, SpellAttributesEx4,
};
use crate::string::DbcString;
use crate::MAX_LOCALE_SLOTS;

/// Effect slots per spell.
pub const MAX_EFFECT_INDEX: usize = 3;

/// Reagent slots per spell.
pub const MAX_SPELL_REAGENTS: usize = 8;

/// Totem slots per spell.
pub const MAX_SPELL_TOTEMS: usize = 2;

/// Rank string slots per spell.
pub const MAX_SPELL_RANKS: usize = 16;

/// One of the three effect slots of a spell.
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellEffectIndex {
    Index0 = 0,
    Index1 = 1,
    Index2 = 2,
}

impl SpellEffectIndex {
    #[inline]
    pub const fn as_usize(self) -> usize {
        self as usize
    }
}

/// The `SpellFamilyName` column.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellFamily {
    Generic = 0,
    Mage = 3,
    Warrior = 4,
    Warlock = 5,
    Priest = 6,
    Druid = 7,
    Rogue = 8,
    Hunter = 9,
    Paladin = 10,
    Shaman = 11,
    Potion = 13,
}

/// The `School` column.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellSchool {
    Normal = 0,
    Holy = 1,
    Fire = 2,
    Nature = 3,
    Frost = 4,
    Shadow = 5,
    Arcane = 6,
}

/// 64-bit family flag mask used to match spells within a class family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassFamilyMask {
    pub flags: u64,
}

impl ClassFamilyMask {
    #[inline]
    pub const fn new(flags: u64) -> Self {
        Self { flags }
    }

    /// True if any bit of `other` is set in this mask.
    #[inline]
    pub const fn matches(&self, other: ClassFamilyMask) -> bool {
        self.flags & other.flags != 0
    }
}

impl From<u64> for ClassFamilyMask {
    fn from(flags: u64) -> Self {
        Self::new(flags)
    }
}

/// One attribute word of [`SpellEntry`].
///
/// Each attribute flag type knows which word of the record it tests, so
/// `SpellEntry::has_attribute` stays a single generic entry point instead of
/// one overload per word.
pub trait SpellAttributeWord: Copy {
    fn is_set_in(self, entry: &SpellEntry) -> bool;
}

impl SpellAttributeWord for SpellAttributes {
    fn is_set_in(self, entry: &SpellEntry) -> bool {
        entry.attributes.intersects(self)
    }
}

impl SpellAttributeWord for SpellAttributesEx {
    fn is_set_in(self, entry: &SpellEntry) -> bool {
        entry.attributes_ex.intersects(self)
    }
}

impl SpellAttributeWord for SpellAttributesEx2 {
    fn is_set_in(self, entry: &SpellEntry) -> bool {
        entry.attributes_ex2.intersects(self)
    }
}

impl SpellAttributeWord for SpellAttributesEx3 {
    fn is_set_in(self, entry: &SpellEntry) -> bool {
        entry.attributes_ex3.intersects(self)
    }
}

impl SpellAttributeWord for SpellAttributesEx4 {
    fn is_set_in(self, entry: &SpellEntry) -> bool {
        entry.attributes_ex4.intersects(self)
    }
}

/// Spell row.
///
/// Column order follows the data file. The four `attributes_ex*` words were
/// appended one per format revision; older installations simply stop early,
/// which is why the view selects them per revision at compile time.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct SpellEntry {
    pub id: u32,
    pub school: u32,
    pub category: u32,
    pub cast_ui: u32,
    pub dispel: u32,
    pub mechanic: u32,
    pub attributes: SpellAttributes,
    pub attributes_ex: SpellAttributesEx,
    pub attributes_ex2: SpellAttributesEx2,
    pub attributes_ex3: SpellAttributesEx3,
    pub attributes_ex4: SpellAttributesEx4,
    pub stances: u32,
    pub stances_not: u32,
    pub targets: u32,
    pub target_creature_type: u32,
    pub requires_spell_focus: u32,
    pub caster_aura_state: u32,
    pub target_aura_state: u32,
    pub casting_time_index: u32,
    pub recovery_time: u32,
    pub category_recovery_time: u32,
    pub interrupt_flags: u32,
    pub aura_interrupt_flags: u32,
    pub channel_interrupt_flags: u32,
    pub proc_flags: u32,
    pub proc_chance: u32,
    pub proc_charges: u32,
    pub max_level: u32,
    pub base_level: u32,
    pub spell_level: u32,
    pub duration_index: u32,
    pub power_type: u32,
    pub mana_cost: u32,
    pub mana_cost_per_level: u32,
    pub mana_per_second: u32,
    pub mana_per_second_per_level: u32,
    pub range_index: u32,
    pub speed: f32,
    pub modal_next_spell: u32,
    pub stack_amount: u32,
    pub totem: [u32; MAX_SPELL_TOTEMS],
    pub reagent: [i32; MAX_SPELL_REAGENTS],
    pub reagent_count: [u32; MAX_SPELL_REAGENTS],
    pub equipped_item_class: i32,
    pub equipped_item_sub_class_mask: i32,
    pub equipped_item_inventory_type_mask: i32,
    pub effect: [u32; MAX_EFFECT_INDEX],
    pub effect_die_sides: [i32; MAX_EFFECT_INDEX],
    pub effect_base_dice: [u32; MAX_EFFECT_INDEX],
    pub effect_dice_per_level: [f32; MAX_EFFECT_INDEX],
    pub effect_real_points_per_level: [f32; MAX_EFFECT_INDEX],
    pub effect_base_points: [i32; MAX_EFFECT_INDEX],
    pub effect_mechanic: [u32; MAX_EFFECT_INDEX],
    pub effect_implicit_target_a: [u32; MAX_EFFECT_INDEX],
    pub effect_implicit_target_b: [u32; MAX_EFFECT_INDEX],
    pub effect_radius_index: [u32; MAX_EFFECT_INDEX],
    pub effect_apply_aura_name: [u32; MAX_EFFECT_INDEX],
    pub effect_amplitude: [u32; MAX_EFFECT_INDEX],
    pub effect_multiple_value: [f32; MAX_EFFECT_INDEX],
    pub effect_chain_target: [u32; MAX_EFFECT_INDEX],
    pub effect_item_type: [u32; MAX_EFFECT_INDEX],
    pub effect_misc_value: [i32; MAX_EFFECT_INDEX],
    pub effect_trigger_spell: [u32; MAX_EFFECT_INDEX],
    pub effect_points_per_combo_point: [f32; MAX_EFFECT_INDEX],
    pub spell_visual: u32,
    pub spell_icon_id: u32,
    pub active_icon_id: u32,
    pub spell_priority: u32,
    pub spell_name: [DbcString; MAX_LOCALE_SLOTS],
    pub rank: [DbcString; MAX_SPELL_RANKS],
    pub mana_cost_percentage: u32,
    pub start_recovery_category: u32,
    pub start_recovery_time: u32,
    pub max_target_level: u32,
    pub spell_family_name: u32,
    pub spell_family_flags: ClassFamilyMask,
    pub max_affected_targets: u32,
    pub dmg_class: u32,
    pub prevention_type: u32,
    pub stance_bar_order: i32,
    pub dmg_multiplier: [f32; MAX_EFFECT_INDEX],
    pub min_faction_id: u32,
    pub min_reputation: u32,
    pub required_aura_vision: u32,
    pub effect_bonus_coefficient: [f32; MAX_EFFECT_INDEX],
    pub effect_bonus_coefficient_from_ap: [f32; MAX_EFFECT_INDEX],
    pub is_server_side: u32,
    pub attributes_serverside: u32,
}

impl SpellEntry {
    /// Base points plus base dice for an effect slot, the unleveled value of
    /// the effect.
    pub fn calculate_simple_value(&self, idx: SpellEffectIndex) -> i32 {
        let i = idx.as_usize();
        self.effect_base_points[i] + self.effect_base_dice[i] as i32
    }

    /// True if any bit of `mask` is set in this spell's family flags.
    pub fn is_fit_to_family_mask(&self, mask: impl Into<ClassFamilyMask>) -> bool {
        self.spell_family_flags.matches(mask.into())
    }

    /// Family-name check plus [`Self::is_fit_to_family_mask`].
    pub fn is_fit_to_family(&self, family: SpellFamily, mask: impl Into<ClassFamilyMask>) -> bool {
        self.spell_family_name == family as u32 && self.is_fit_to_family_mask(mask)
    }

    /// Test an attribute of whichever word `attr` belongs to.
    pub fn has_attribute<A: SpellAttributeWord>(&self, attr: A) -> bool {
        attr.is_set_in(self)
    }

    /// Mask of every mechanic this spell applies: the base mechanic plus one
    /// per effect slot. Mechanic id `n` maps to bit `n - 1`.
    pub fn all_effects_mechanic_mask(&self) -> u32 {
        let mut mask = 0;
        if self.mechanic != 0 {
            mask |= 1 << (self.mechanic - 1);
        }
        for mechanic in self.effect_mechanic {
            if mechanic != 0 {
                mask |= 1 << (mechanic - 1);
            }
        }
        mask
    }

    /// School bit mask derived from the single-school column.
    pub fn school_mask(&self) -> u32 {
        1 << self.school
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_simple_value() {
        let spell = SpellEntry {
            effect_base_points: [10, -5, 0],
            effect_base_dice: [1, 2, 3],
            ..Default::default()
        };
        assert_eq!(spell.calculate_simple_value(SpellEffectIndex::Index0), 11);
        assert_eq!(spell.calculate_simple_value(SpellEffectIndex::Index1), -3);
        assert_eq!(spell.calculate_simple_value(SpellEffectIndex::Index2), 3);
    }

    #[test]
    fn test_family_mask_fit() {
        let spell = SpellEntry {
            spell_family_name: SpellFamily::Mage as u32,
            spell_family_flags: ClassFamilyMask::new(0x0000_0020),
            ..Default::default()
        };

        assert!(spell.is_fit_to_family_mask(0x20u64));
        assert!(spell.is_fit_to_family_mask(ClassFamilyMask::new(0x30)));
        assert!(!spell.is_fit_to_family_mask(0x40u64));

        assert!(spell.is_fit_to_family(SpellFamily::Mage, 0x20u64));
        assert!(!spell.is_fit_to_family(SpellFamily::Warrior, 0x20u64));
    }

    #[test]
    fn test_has_attribute_selects_the_right_word() {
        let spell = SpellEntry {
            attributes: SpellAttributes::PASSIVE,
            attributes_ex: SpellAttributesEx::IS_CHANNELED,
            ..Default::default()
        };

        assert!(spell.has_attribute(SpellAttributes::PASSIVE));
        assert!(spell.has_attribute(SpellAttributesEx::IS_CHANNELED));
        assert!(!spell.has_attribute(SpellAttributes::IS_ABILITY));
        // Same bit position, different word: must not leak across.
        assert!(!spell.has_attribute(SpellAttributesEx2::from_bits_retain(
            SpellAttributes::PASSIVE.bits()
        )));
    }

    #[test]
    fn test_all_effects_mechanic_mask() {
        let spell = SpellEntry {
            mechanic: 1,
            effect_mechanic: [0, 5, 12],
            ..Default::default()
        };
        assert_eq!(
            spell.all_effects_mechanic_mask(),
            (1 << 0) | (1 << 4) | (1 << 11)
        );

        let none = SpellEntry::default();
        assert_eq!(none.all_effects_mechanic_mask(), 0);
    }

    #[test]
    fn test_school_mask() {
        let spell = SpellEntry {
            school: SpellSchool::Frost as u32,
            ..Default::default()
        };
        assert_eq!(spell.school_mask(), 1 << 4);
    }
}
