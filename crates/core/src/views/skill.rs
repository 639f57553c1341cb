//! Skill line table view

use dbcrust_sdk::{SkillLineEntry, MAX_LOCALE_SLOTS};

use super::{entry_view, field_getters, localized_names};

entry_view! {
    /// View over one [`SkillLineEntry`].
    SkillLineView => SkillLineEntry
}

impl SkillLineView {
    field_getters! {
        id: u32 = id;
        category_id: i32 = category_id;
        spell_icon: u32 = spell_icon;
    }

    localized_names!(name[MAX_LOCALE_SLOTS] => name, default_name, NAME_SLOTS);
}
