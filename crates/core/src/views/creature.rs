//! Creature family table view

use dbcrust_sdk::{CreatureFamilyEntry, PetFoodMask, MAX_LOCALE_SLOTS};

use super::{entry_view, field_getters, localized_names};

entry_view! {
    /// View over one [`CreatureFamilyEntry`].
    CreatureFamilyView => CreatureFamilyEntry
}

impl CreatureFamilyView {
    field_getters! {
        id: u32 = id;
        min_scale: f32 = min_scale;
        min_scale_level: u32 = min_scale_level;
        max_scale: f32 = max_scale;
        max_scale_level: u32 = max_scale_level;
        pet_food_mask: PetFoodMask = pet_food_mask;
    }

    /// The family's two skill lines (primary, secondary).
    #[inline]
    pub fn skill_line(&self) -> (u32, u32) {
        let lines = &self.raw().skill_line;
        (lines[0], lines[1])
    }

    /// Forwards to [`CreatureFamilyEntry::pet_food_allowed`].
    #[inline]
    pub fn pet_food_allowed(&self, mask: PetFoodMask) -> bool {
        self.raw().pet_food_allowed(mask)
    }

    localized_names!(name[MAX_LOCALE_SLOTS] => name, default_name, NAME_SLOTS);
}

#[cfg(test)]
mod tests {
    use dbcrust_sdk::DbcString;

    use super::*;

    fn wolf() -> CreatureFamilyEntry {
        let mut entry = CreatureFamilyEntry {
            id: 1,
            min_scale: 0.5,
            min_scale_level: 1,
            max_scale: 1.0,
            max_scale_level: 60,
            skill_line: [208, 270],
            pet_food_mask: PetFoodMask::MEAT | PetFoodMask::RAW_MEAT,
            ..Default::default()
        };
        entry.name[0] = DbcString::from_static(c"Wolf");
        entry
    }

    #[test]
    fn test_field_projection() {
        let entry = wolf();
        let view = unsafe { CreatureFamilyView::from_ptr(&entry) };
        assert_eq!(view.id(), 1);
        assert_eq!(view.min_scale(), 0.5);
        assert_eq!(view.min_scale_level(), 1);
        assert_eq!(view.max_scale(), 1.0);
        assert_eq!(view.max_scale_level(), 60);
        assert_eq!(view.skill_line(), (208, 270));
        assert_eq!(view.pet_food_mask(), entry.pet_food_mask);
        assert_eq!(view.name(100).as_str(), Some("Wolf"));
    }

    #[test]
    fn test_pet_food_delegation_matches_record() {
        let entry = wolf();
        let view = unsafe { CreatureFamilyView::from_ptr(&entry) };
        for mask in [PetFoodMask::MEAT, PetFoodMask::BREAD, PetFoodMask::all()] {
            assert_eq!(view.pet_food_allowed(mask), entry.pet_food_allowed(mask));
        }
    }
}
