//! Taxi node table view

use dbcrust_sdk::{TaxiNodesEntry, MAX_LOCALE_SLOTS, TAXI_MOUNT_SLOTS};

use super::{entry_view, field_getters, localized_names};

entry_view! {
    /// View over one [`TaxiNodesEntry`].
    TaxiNodeView => TaxiNodesEntry
}

impl TaxiNodeView {
    field_getters! {
        id: u32 = id;
        map_id: u32 = map_id;
        mount_creature_id: [u32; TAXI_MOUNT_SLOTS] = mount_creature_id;
    }

    /// World position of the node.
    #[inline]
    pub fn coordinates(&self) -> (f32, f32, f32) {
        let entry = self.raw();
        (entry.x, entry.y, entry.z)
    }

    localized_names!(name[MAX_LOCALE_SLOTS] => name, default_name, NAME_SLOTS);
}

#[cfg(test)]
mod tests {
    use dbcrust_sdk::DbcString;

    use super::*;

    #[test]
    fn test_field_projection() {
        let mut entry = TaxiNodesEntry {
            id: 4,
            map_id: 0,
            x: -8835.1,
            y: 489.57,
            z: 109.61,
            mount_creature_id: [0, 1147],
            ..Default::default()
        };
        entry.name[0] = DbcString::from_static(c"Stormwind, Elwynn");

        let view = unsafe { TaxiNodeView::from_ptr(&entry) };
        assert!(view.is_valid());
        assert_eq!(view.id(), 4);
        assert_eq!(view.map_id(), 0);
        assert_eq!(view.coordinates(), (-8835.1, 489.57, 109.61));
        assert_eq!(view.mount_creature_id(), [0, 1147]);
        assert_eq!(view.name(33).as_str(), Some("Stormwind, Elwynn"));
    }

    #[test]
    fn test_null_view() {
        let view = TaxiNodeView::default();
        assert!(!view.is_valid());
    }
}
