//! Chat channel table view

use dbcrust_sdk::{ChatChannelsEntry, MAX_LOCALE_SLOTS};

use super::{entry_view, field_getters, localized_names};

entry_view! {
    /// View over one [`ChatChannelsEntry`].
    ChatChannelView => ChatChannelsEntry
}

impl ChatChannelView {
    field_getters! {
        channel_id: u32 = channel_id;
        flags: u32 = flags;
    }

    localized_names!(pattern[MAX_LOCALE_SLOTS] => pattern, default_pattern, PATTERN_SLOTS);
}
