//! Map table view

use dbcrust_sdk::{MapEntry, MAX_LOCALE_SLOTS};

use super::{entry_view, field_getters, localized_names};

entry_view! {
    /// View over one [`MapEntry`].
    MapView => MapEntry
}

impl MapView {
    field_getters! {
        map_id: u32 = map_id;
        map_type: u32 = map_type;
        linked_zone_id: u32 = linked_zone;
        multimap_id: u32 = multimap_id;
    }

    localized_names!(name[MAX_LOCALE_SLOTS] => name, default_name, NAME_SLOTS);

    // Classification forwards to the record; the view adds no logic of its
    // own.

    /// Forwards to [`MapEntry::is_dungeon`].
    #[inline]
    pub fn is_dungeon(&self) -> bool {
        self.raw().is_dungeon()
    }

    /// Forwards to [`MapEntry::is_non_raid_dungeon`].
    #[inline]
    pub fn is_non_raid_dungeon(&self) -> bool {
        self.raw().is_non_raid_dungeon()
    }

    /// Forwards to [`MapEntry::instanceable`].
    #[inline]
    pub fn instanceable(&self) -> bool {
        self.raw().instanceable()
    }

    /// Forwards to [`MapEntry::is_raid`].
    #[inline]
    pub fn is_raid(&self) -> bool {
        self.raw().is_raid()
    }

    /// Forwards to [`MapEntry::is_battleground`].
    #[inline]
    pub fn is_battleground(&self) -> bool {
        self.raw().is_battleground()
    }

    /// Forwards to [`MapEntry::is_continent`].
    #[inline]
    pub fn is_continent(&self) -> bool {
        self.raw().is_continent()
    }
}
