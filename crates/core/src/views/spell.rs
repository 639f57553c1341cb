//! Spell table view
//!
//! The widest view in the layer: one getter per spell column, the
//! per-revision attribute-extension resolver, and pass-through delegation to
//! the helper computations on [`SpellEntry`].

use dbcrust_sdk::{
    ClassFamilyMask, DbcString, SpellAttributeWord, SpellAttributes, SpellAttributesEx,
    SpellAttributesEx2, SpellAttributesEx3, SpellAttributesEx4, SpellEffectIndex, SpellEntry,
    SpellFamily, MAX_EFFECT_INDEX, MAX_LOCALE_SLOTS, MAX_SPELL_RANKS, MAX_SPELL_REAGENTS,
    MAX_SPELL_TOTEMS,
};

use super::{entry_view, field_getters, fixed_slots, localized_names};

/// Marker for a client data-format revision.
///
/// The spell table is append-only across client builds: each revision added
/// one more attribute-extension word under a new column name. Selecting the
/// word per revision at compile time keeps every build's worth of layout
/// knowledge in one table of impls, with no version branch on the read path.
pub struct FormatRevision<const N: u8>;

/// The attribute-extension word a format revision introduced.
///
/// Implemented only for [`FormatRevision`] 1 through 4; there is no revision
/// 0 word (that is the base `attributes` column) and nothing beyond 4.
pub trait AttributesExtension {
    type Word: Copy;

    fn read(entry: &SpellEntry) -> Self::Word;
}

impl AttributesExtension for FormatRevision<1> {
    type Word = SpellAttributesEx;

    fn read(entry: &SpellEntry) -> Self::Word {
        entry.attributes_ex
    }
}

impl AttributesExtension for FormatRevision<2> {
    type Word = SpellAttributesEx2;

    fn read(entry: &SpellEntry) -> Self::Word {
        entry.attributes_ex2
    }
}

impl AttributesExtension for FormatRevision<3> {
    type Word = SpellAttributesEx3;

    fn read(entry: &SpellEntry) -> Self::Word {
        entry.attributes_ex3
    }
}

impl AttributesExtension for FormatRevision<4> {
    type Word = SpellAttributesEx4;

    fn read(entry: &SpellEntry) -> Self::Word {
        entry.attributes_ex4
    }
}

entry_view! {
    /// View over one [`SpellEntry`].
    SpellView => SpellEntry
}

impl SpellView {
    field_getters! {
        id: u32 = id;
        school: u32 = school;
        category: u32 = category;
        cast_ui: u32 = cast_ui;
        dispel: u32 = dispel;
        mechanic: u32 = mechanic;
        attributes: SpellAttributes = attributes;
        stances: u32 = stances;
        stances_not: u32 = stances_not;
        targets: u32 = targets;
        target_creature_type: u32 = target_creature_type;
        requires_spell_focus: u32 = requires_spell_focus;
        caster_aura_state: u32 = caster_aura_state;
        target_aura_state: u32 = target_aura_state;
        casting_time_index: u32 = casting_time_index;
        recovery_time: u32 = recovery_time;
        category_recovery_time: u32 = category_recovery_time;
        interrupt_flags: u32 = interrupt_flags;
        aura_interrupt_flags: u32 = aura_interrupt_flags;
        channel_interrupt_flags: u32 = channel_interrupt_flags;
        proc_flags: u32 = proc_flags;
        proc_chance: u32 = proc_chance;
        proc_charges: u32 = proc_charges;
        max_level: u32 = max_level;
        base_level: u32 = base_level;
        spell_level: u32 = spell_level;
        duration_index: u32 = duration_index;
        power_type: u32 = power_type;
        mana_cost: u32 = mana_cost;
        mana_cost_per_level: u32 = mana_cost_per_level;
        mana_per_second: u32 = mana_per_second;
        mana_per_second_per_level: u32 = mana_per_second_per_level;
        range_index: u32 = range_index;
        speed: f32 = speed;
        modal_next_spell: u32 = modal_next_spell;
        stack_amount: u32 = stack_amount;
        totems: [u32; MAX_SPELL_TOTEMS] = totem;
        reagents: [i32; MAX_SPELL_REAGENTS] = reagent;
        reagent_counts: [u32; MAX_SPELL_REAGENTS] = reagent_count;
        equipped_item_class: i32 = equipped_item_class;
        equipped_item_sub_class_mask: i32 = equipped_item_sub_class_mask;
        equipped_item_inventory_type_mask: i32 = equipped_item_inventory_type_mask;
        effects: [u32; MAX_EFFECT_INDEX] = effect;
        effects_die_sides: [i32; MAX_EFFECT_INDEX] = effect_die_sides;
        effects_base_dice: [u32; MAX_EFFECT_INDEX] = effect_base_dice;
        effects_dice_per_level: [f32; MAX_EFFECT_INDEX] = effect_dice_per_level;
        effects_real_points_per_level: [f32; MAX_EFFECT_INDEX] = effect_real_points_per_level;
        effects_base_points: [i32; MAX_EFFECT_INDEX] = effect_base_points;
        effects_mechanic: [u32; MAX_EFFECT_INDEX] = effect_mechanic;
        effects_implicit_target_a: [u32; MAX_EFFECT_INDEX] = effect_implicit_target_a;
        effects_implicit_target_b: [u32; MAX_EFFECT_INDEX] = effect_implicit_target_b;
        effects_radius_index: [u32; MAX_EFFECT_INDEX] = effect_radius_index;
        effects_apply_aura_name: [u32; MAX_EFFECT_INDEX] = effect_apply_aura_name;
        effects_amplitude: [u32; MAX_EFFECT_INDEX] = effect_amplitude;
        effects_multiple_value: [f32; MAX_EFFECT_INDEX] = effect_multiple_value;
        effects_chain_target: [u32; MAX_EFFECT_INDEX] = effect_chain_target;
        effects_item_type: [u32; MAX_EFFECT_INDEX] = effect_item_type;
        effects_misc_value: [i32; MAX_EFFECT_INDEX] = effect_misc_value;
        effects_trigger_spell: [u32; MAX_EFFECT_INDEX] = effect_trigger_spell;
        effects_points_per_combo_point: [f32; MAX_EFFECT_INDEX] = effect_points_per_combo_point;
        spell_visual: u32 = spell_visual;
        spell_icon_id: u32 = spell_icon_id;
        active_icon_id: u32 = active_icon_id;
        spell_priority: u32 = spell_priority;
        mana_cost_percentage: u32 = mana_cost_percentage;
        start_recovery_category: u32 = start_recovery_category;
        start_recovery_time: u32 = start_recovery_time;
        max_target_level: u32 = max_target_level;
        spell_family_name: u32 = spell_family_name;
        spell_family_flags: ClassFamilyMask = spell_family_flags;
        max_affected_targets: u32 = max_affected_targets;
        damage_class: u32 = dmg_class;
        prevention_type: u32 = prevention_type;
        stance_bar_order: i32 = stance_bar_order;
        damage_multipliers: [f32; MAX_EFFECT_INDEX] = dmg_multiplier;
        min_faction_id: u32 = min_faction_id;
        min_reputation: u32 = min_reputation;
        required_aura_vision: u32 = required_aura_vision;
        effects_bonus_coefficient: [f32; MAX_EFFECT_INDEX] = effect_bonus_coefficient;
        effects_bonus_coefficient_from_ap: [f32; MAX_EFFECT_INDEX] = effect_bonus_coefficient_from_ap;
        is_server_side: u32 = is_server_side;
        attributes_serverside: u32 = attributes_serverside;
    }

    /// The attribute-extension word introduced by format revision `N`.
    ///
    /// Requesting a word outside the four known revisions is rejected at
    /// compile time:
    ///
    /// ```compile_fail
    /// let view = dbcrust_core::SpellView::null();
    /// let _ = view.attributes_ex::<5>();
    /// ```
    #[inline]
    pub fn attributes_ex<const N: u8>(&self) -> <FormatRevision<N> as AttributesExtension>::Word
    where
        FormatRevision<N>: AttributesExtension,
    {
        <FormatRevision<N> as AttributesExtension>::read(self.raw())
    }

    localized_names!(spell_name[MAX_LOCALE_SLOTS] => name, default_name, NAME_SLOTS);

    fixed_slots! {
        /// Rank text for a rank slot.
        rank[MAX_SPELL_RANKS] => rank, RANK_SLOTS, DbcString
    }

    // Helper computations forward to the record; the view adds no algorithm
    // of its own.

    /// Forwards to [`SpellEntry::calculate_simple_value`].
    #[inline]
    pub fn calculate_simple_value(&self, idx: SpellEffectIndex) -> i32 {
        self.raw().calculate_simple_value(idx)
    }

    /// Forwards to [`SpellEntry::is_fit_to_family_mask`].
    #[inline]
    pub fn is_fit_to_family_mask(&self, mask: impl Into<ClassFamilyMask>) -> bool {
        self.raw().is_fit_to_family_mask(mask)
    }

    /// Forwards to [`SpellEntry::is_fit_to_family`].
    #[inline]
    pub fn is_fit_to_family(&self, family: SpellFamily, mask: impl Into<ClassFamilyMask>) -> bool {
        self.raw().is_fit_to_family(family, mask)
    }

    /// Forwards to [`SpellEntry::has_attribute`].
    #[inline]
    pub fn has_attribute<A: SpellAttributeWord>(&self, attr: A) -> bool {
        self.raw().has_attribute(attr)
    }

    /// Forwards to [`SpellEntry::all_effects_mechanic_mask`].
    #[inline]
    pub fn all_effects_mechanic_mask(&self) -> u32 {
        self.raw().all_effects_mechanic_mask()
    }

    /// Forwards to [`SpellEntry::school_mask`].
    #[inline]
    pub fn school_mask(&self) -> u32 {
        self.raw().school_mask()
    }
}
