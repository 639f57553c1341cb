//! Faction table view

use dbcrust_sdk::{FactionEntry, MAX_FACTION_REPUTATION_SLOTS, MAX_LOCALE_SLOTS};

use super::{entry_view, field_getters, localized_names};

entry_view! {
    /// View over one [`FactionEntry`].
    FactionView => FactionEntry
}

impl FactionView {
    field_getters! {
        id: u32 = id;
        reputation_index: i32 = reputation_list_id;
        reputation_race_mask: [u32; MAX_FACTION_REPUTATION_SLOTS] = base_rep_race_mask;
        reputation_class_mask: [u32; MAX_FACTION_REPUTATION_SLOTS] = base_rep_class_mask;
        reputation_base: [i32; MAX_FACTION_REPUTATION_SLOTS] = base_rep_value;
        reputation_flags: [u32; MAX_FACTION_REPUTATION_SLOTS] = reputation_flags;
        team: u32 = team;
    }

    localized_names!(name[MAX_LOCALE_SLOTS] => name, default_name, NAME_SLOTS);

    /// Forwards to [`FactionEntry::reputation_index_for`].
    #[inline]
    pub fn reputation_index_for(&self, race_mask: u32, class_mask: u32) -> Option<usize> {
        self.raw().reputation_index_for(race_mask, class_mask)
    }

    /// Forwards to [`FactionEntry::has_reputation`].
    #[inline]
    pub fn has_reputation(&self) -> bool {
        self.raw().has_reputation()
    }
}
