//! Item class and item set table views

use dbcrust_sdk::{ItemClassEntry, ItemSetEntry, MAX_ITEM_SET_ITEMS, MAX_ITEM_SET_SPELLS, MAX_LOCALE_SLOTS};

use super::{entry_view, field_getters, fixed_slots, localized_names};

entry_view! {
    /// View over one [`ItemClassEntry`].
    ItemClassView => ItemClassEntry
}

impl ItemClassView {
    field_getters! {
        id: u32 = id;
    }

    localized_names!(name[MAX_LOCALE_SLOTS] => name, default_name, NAME_SLOTS);
}

entry_view! {
    /// View over one [`ItemSetEntry`].
    ItemSetView => ItemSetEntry
}

impl ItemSetView {
    field_getters! {
        id: u32 = id;
        required_skill_id: u32 = required_skill_id;
        required_skill_rank: u32 = required_skill_value;
    }

    localized_names!(name[MAX_LOCALE_SLOTS] => name, default_name, NAME_SLOTS);

    fixed_slots! {
        /// Set-bonus spell granted at the given slot.
        spells[MAX_ITEM_SET_SPELLS] => spell_id, SPELL_SLOTS, u32
    }

    fixed_slots! {
        /// Trigger mapping for the item filling the given set slot.
        items_to_triggerspell[MAX_ITEM_SET_ITEMS] => trigger_spell_for_item, ITEM_SLOTS, u32
    }
}

#[cfg(test)]
mod tests {
    use dbcrust_sdk::DbcString;

    use super::*;

    fn item_set() -> ItemSetEntry {
        let mut entry = ItemSetEntry {
            id: 181,
            items_to_triggerspell: std::array::from_fn(|i| 16_800 + i as u32),
            spells: [26_112, 26_113, 0, 0, 0, 0, 0, 0],
            required_skill_id: 0,
            required_skill_value: 0,
            ..Default::default()
        };
        entry.name[0] = DbcString::from_static(c"The Gladiator");
        entry
    }

    #[test]
    fn test_field_projection() {
        let entry = item_set();
        let view = unsafe { ItemSetView::from_ptr(&entry) };
        assert!(view.is_valid());
        assert_eq!(view.id(), 181);
        assert_eq!(view.required_skill_id(), 0);
        assert_eq!(view.required_skill_rank(), 0);
        assert_eq!(view.default_name().as_str(), Some("The Gladiator"));
    }

    #[test]
    fn test_slot_values_are_exact() {
        let entry = item_set();
        let view = unsafe { ItemSetView::from_ptr(&entry) };

        for idx in 0..ItemSetView::SPELL_SLOTS {
            assert_eq!(view.spell_id(idx), entry.spells[idx]);
        }
        // Each slot accessor reads its own column, not a neighbor.
        for idx in 0..ItemSetView::ITEM_SLOTS {
            assert_eq!(
                view.trigger_spell_for_item(idx),
                entry.items_to_triggerspell[idx]
            );
        }
    }

    #[test]
    #[should_panic(expected = "spell_id slot index out of range")]
    fn test_spell_slot_out_of_range_panics() {
        let entry = item_set();
        let view = unsafe { ItemSetView::from_ptr(&entry) };
        view.spell_id(MAX_ITEM_SET_SPELLS);
    }

    #[test]
    #[should_panic(expected = "trigger_spell_for_item slot index out of range")]
    fn test_item_slot_out_of_range_panics() {
        let entry = item_set();
        let view = unsafe { ItemSetView::from_ptr(&entry) };
        view.trigger_spell_for_item(MAX_ITEM_SET_ITEMS);
    }

    #[test]
    fn test_item_class_projection() {
        let mut entry = ItemClassEntry {
            id: 2,
            ..Default::default()
        };
        entry.name[0] = DbcString::from_static(c"Weapon");

        let view = unsafe { ItemClassView::from_ptr(&entry) };
        assert_eq!(view.id(), 2);
        assert_eq!(view.name(50).as_str(), Some("Weapon"));
    }
}
