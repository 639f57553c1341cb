//! Flag and mask column types
//!
//! Attribute and mask columns are plain 32-bit words in the data files.
//! They are typed with `bitflags` so callers test bits by name; every type
//! retains unknown bits (`const _ = !0`) because newer client builds keep
//! appending flags the layouts do not name yet.

use bitflags::bitflags;

bitflags! {
    /// Base spell attribute word (the `Attributes` column).
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SpellAttributes: u32 {
        const PROC_FAILURE_BURNS_CHARGE = 0x0000_0001;
        const USES_RANGED_SLOT          = 0x0000_0002;
        const ON_NEXT_SWING_NO_DAMAGE   = 0x0000_0004;
        const IS_ABILITY                = 0x0000_0010;
        const IS_TRADESKILL             = 0x0000_0020;
        const PASSIVE                   = 0x0000_0040;
        const DO_NOT_DISPLAY            = 0x0000_0080;
        const DO_NOT_LOG                = 0x0000_0100;
        const HELD_ITEM_ONLY            = 0x0000_0200;
        const ON_NEXT_SWING             = 0x0000_0400;
        const DAYTIME_ONLY              = 0x0000_1000;
        const NIGHT_ONLY                = 0x0000_2000;
        const ONLY_INDOORS              = 0x0000_4000;
        const ONLY_OUTDOORS             = 0x0000_8000;
        const NOT_SHAPESHIFTED          = 0x0001_0000;
        const ONLY_STEALTHED            = 0x0002_0000;
        const SCALES_WITH_CREATURE_LEVEL = 0x0008_0000;
        const CANCELS_AUTO_ATTACK_COMBAT = 0x0010_0000;
        const NO_ACTIVE_DEFENSE         = 0x0020_0000;
        const ALLOW_CAST_WHILE_DEAD     = 0x0080_0000;
        const ALLOW_WHILE_MOUNTED       = 0x0100_0000;
        const COOLDOWN_ON_EVENT         = 0x0200_0000;
        const AURA_IS_DEBUFF            = 0x0400_0000;
        const ALLOW_WHILE_SITTING       = 0x0800_0000;
        const NOT_IN_COMBAT             = 0x1000_0000;
        const NO_IMMUNITIES             = 0x2000_0000;
        const HEARTBEAT_RESIST          = 0x4000_0000;
        const NO_AURA_CANCEL            = 0x8000_0000;
        const _ = !0;
    }

    /// First extension word (`AttributesEx`), format revision 1.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SpellAttributesEx: u32 {
        const DISMISS_PET_FIRST       = 0x0000_0001;
        const USE_ALL_MANA            = 0x0000_0002;
        const IS_CHANNELED            = 0x0000_0004;
        const NO_REDIRECTION          = 0x0000_0008;
        const NO_SKILL_INCREASE       = 0x0000_0010;
        const ALLOW_WHILE_STEALTHED   = 0x0000_0020;
        const IS_SELF_CHANNELED       = 0x0000_0040;
        const NO_REFLECTION           = 0x0000_0080;
        const ONLY_PEACEFUL_TARGETS   = 0x0000_0100;
        const INITIATES_COMBAT        = 0x0000_0200;
        const NO_THREAT               = 0x0000_0400;
        const IS_PICKPOCKET           = 0x0000_1000;
        const FARSIGHT                = 0x0000_2000;
        const TRACK_TARGET_IN_CHANNEL = 0x0000_4000;
        const DISPEL_AURAS_ON_IMMUNITY = 0x0000_8000;
        const IMMUNITY_PURGES_EFFECT  = 0x0001_0000;
        const _ = !0;
    }

    /// Second extension word (`AttributesEx2`), format revision 2.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SpellAttributesEx2: u32 {
        const ALLOW_DEAD_TARGET        = 0x0000_0001;
        const NO_SHAPESHIFT_UI         = 0x0000_0004;
        const IGNORE_LINE_OF_SIGHT     = 0x0000_0008;
        const ALLOW_LOW_LEVEL_BUFF     = 0x0000_0020;
        const USE_SHAPESHIFT_BAR       = 0x0000_0080;
        const AUTO_REPEAT              = 0x0000_0200;
        const CANNOT_CAST_ON_TAPPED    = 0x0000_0400;
        const DO_NOT_REPORT_SPELL_FAILURE = 0x0000_0800;
        const NOT_AN_ACTION            = 0x0000_4000;
        const RETAIN_ITEM_CAST         = 0x0001_0000;
        const NO_ACTIVE_PETS           = 0x0008_0000;
        const DO_NOT_RESET_COMBAT_TIMERS = 0x0010_0000;
        const NO_SCHOOL_IMMUNITIES     = 0x0100_0000;
        const _ = !0;
    }

    /// Third extension word (`AttributesEx3`), format revision 3.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SpellAttributesEx3: u32 {
        const PVP_ENABLING               = 0x0000_0001;
        const NO_PROC_EQUIP_REQUIREMENT  = 0x0000_0002;
        const ALWAYS_HIT                 = 0x0000_0008;
        const ONLY_BATTLEGROUNDS         = 0x0000_0040;
        const SUPPRESS_CASTER_PROCS      = 0x0000_0100;
        const SUPPRESS_TARGET_PROCS      = 0x0000_0200;
        const INSTANT_TARGET_PROCS       = 0x0000_0800;
        const ALLOW_AURA_WHILE_DEAD      = 0x0000_1000;
        const ONLY_PROC_OUTDOORS         = 0x0000_2000;
        const DO_NOT_TRIGGER_TARGET_STAND = 0x0000_4000;
        const NO_DAMAGE_HISTORY          = 0x0000_8000;
        const REQUIRES_MAIN_HAND_WEAPON  = 0x0010_0000;
        const CAN_PROC_FROM_PROCS        = 0x0040_0000;
        const ONLY_PROC_ON_CASTER        = 0x0080_0000;
        const _ = !0;
    }

    /// Fourth extension word (`AttributesEx4`), format revision 4.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SpellAttributesEx4: u32 {
        const IGNORE_RESISTANCES         = 0x0000_0001;
        const PROC_ONLY_ON_CASTER        = 0x0000_0002;
        const AURA_EXPIRES_OFFLINE       = 0x0000_0004;
        const NO_HELPFUL_THREAT          = 0x0000_0008;
        const NO_HARMFUL_THREAT          = 0x0000_0010;
        const NOT_STEALABLE              = 0x0000_0080;
        const ALLOW_WHILE_CASTING        = 0x0000_0100;
        const FIXED_DAMAGE               = 0x0000_0200;
        const TRIGGER_ACTIVATE           = 0x0000_0400;
        const OWNER_POWER_SCALING        = 0x0000_2000;
        const NOT_IN_ARENAS              = 0x0001_0000;
        const IGNORE_DEFAULT_ARENA_RESTRICTIONS = 0x0002_0000;
        const _ = !0;
    }

    /// Area table `flags` column.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AreaFlags: u32 {
        const SNOW          = 0x0000_0001;
        const SLAVE_CAPITAL = 0x0000_0008;
        const CITY_AREA     = 0x0000_0020;
        const CAPITAL       = 0x0000_0100;
        const TOWN          = 0x0000_0800;
        const TAXI_NODE     = 0x0000_1000;
        const ARENA         = 0x0000_2000;
        const SANCTUARY     = 0x0000_8000;
        const _ = !0;
    }

    /// Creature family `petFoodMask` column: one bit per item food type a
    /// tamed pet of this family will eat.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PetFoodMask: u32 {
        const MEAT     = 0x0000_0001;
        const FISH     = 0x0000_0002;
        const CHEESE   = 0x0000_0004;
        const BREAD    = 0x0000_0008;
        const FUNGUS   = 0x0000_0010;
        const FRUIT    = 0x0000_0020;
        const RAW_MEAT = 0x0000_0040;
        const RAW_FISH = 0x0000_0080;
        const _ = !0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_bits_are_retained() {
        // Data files from newer builds carry bits the layouts do not name.
        let raw = 0xDEAD_BEEF_u32;
        assert_eq!(SpellAttributes::from_bits_retain(raw).bits(), raw);
        assert_eq!(SpellAttributesEx4::from_bits_retain(raw).bits(), raw);
    }

    #[test]
    fn test_pet_food_mask() {
        let diet = PetFoodMask::MEAT | PetFoodMask::FISH;
        assert!(diet.intersects(PetFoodMask::FISH));
        assert!(!diet.intersects(PetFoodMask::FRUIT));
    }
}
