//! Area and WMO area table views

use dbcrust_sdk::{AreaFlags, AreaTableEntry, WmoAreaTableEntry, MAX_LOCALE_SLOTS};

use super::{entry_view, field_getters, localized_names};

entry_view! {
    /// View over one [`AreaTableEntry`].
    AreaView => AreaTableEntry
}

impl AreaView {
    field_getters! {
        id: u32 = id;
        map_id: u32 = map_id;
        zone: u32 = zone;
        explore_flag: u32 = explore_flag;
        flags: AreaFlags = flags;
        area_level: i32 = area_level;
        team: u32 = team;
        liquid_type_override: u32 = liquid_type_override;
    }

    localized_names!(area_name[MAX_LOCALE_SLOTS] => name, default_name, NAME_SLOTS);
}

entry_view! {
    /// View over one [`WmoAreaTableEntry`].
    WmoAreaView => WmoAreaTableEntry
}

impl WmoAreaView {
    field_getters! {
        id: u32 = id;
        root_id: i32 = root_id;
        adt_id: i32 = adt_id;
        group_id: i32 = group_id;
        flags: u32 = flags;
        area_id: u32 = area_id;
    }

    localized_names!(name[MAX_LOCALE_SLOTS] => name, default_name, NAME_SLOTS);
}
