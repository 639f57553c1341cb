//! Dungeon encounter table view

use dbcrust_sdk::{DungeonEncounterEntry, MAX_LOCALE_SLOTS};

use super::{entry_view, field_getters, localized_names};

entry_view! {
    /// View over one [`DungeonEncounterEntry`].
    DungeonEncounterView => DungeonEncounterEntry
}

impl DungeonEncounterView {
    field_getters! {
        id: u32 = id;
        map_id: u32 = map_id;
        difficulty: u32 = difficulty;
        encounter_data: u32 = encounter_data;
        encounter_index: u32 = encounter_index;
        name_lang_flags: u32 = name_lang_flags;
        spell_icon_id: u32 = spell_icon_id;
        complete_world_state_id: u32 = complete_world_state_id;
    }

    localized_names!(encounter_name[MAX_LOCALE_SLOTS] => encounter_name, default_encounter_name, ENCOUNTER_NAME_SLOTS);
}
