//! Character class and race table views

use dbcrust_sdk::{ChrClassesEntry, ChrRacesEntry, MAX_LOCALE_SLOTS};

use super::{entry_view, field_getters, localized_names};

entry_view! {
    /// View over one [`ChrClassesEntry`].
    CharacterClassView => ChrClassesEntry
}

impl CharacterClassView {
    field_getters! {
        class_id: u32 = class_id;
        power_type: u32 = power_type;
        spell_family: u32 = spell_family;
    }

    localized_names!(name[MAX_LOCALE_SLOTS] => name, default_name, NAME_SLOTS);
}

entry_view! {
    /// View over one [`ChrRacesEntry`].
    CharacterRaceView => ChrRacesEntry
}

impl CharacterRaceView {
    field_getters! {
        race_id: u32 = race_id;
        faction_id: u32 = faction_id;
        male_model: u32 = model_m;
        female_model: u32 = model_f;
        team_id: u32 = team_id;
        starting_taxi_mask: u32 = starting_taxi_mask;
        cinematic_sequence: u32 = cinematic_sequence;
    }

    localized_names!(name[MAX_LOCALE_SLOTS] => name, default_name, NAME_SLOTS);
}
