//! Typed entry views
//!
//! Each view is a thin, copyable handle over one raw record pointer obtained
//! from the external table store. Views never own, copy, or mutate record
//! data; they project named, typed fields out of it.
//!
//! # Validity
//!
//! A view either wraps a live record or is the null view. Validity is tested
//! once with `is_valid()`; every accessor then assumes it. Calling an
//! accessor on an invalid view is a caller bug, caught by a debug assertion
//! and undefined in release builds - the hot read path carries no checks.
//!
//! # Lifetime contract
//!
//! The external store must keep records immutable and alive at least as long
//! as any view referencing them. The view layer assumes this and does not
//! verify it: no reference counting, no lifetime tracking. Under that
//! contract, concurrent reads from any number of threads are safe.
//!
//! # Array columns
//!
//! Localized columns (names, chat patterns, survey questions) degrade
//! gracefully: an index at or beyond the declared capacity returns slot 0,
//! the default locale. Fixed-slot columns (effect slots, reagents, ranks,
//! item-set slots) are driven by compile-time-known slot counts, so an
//! out-of-range index there panics instead of being papered over.
//!
//! # Example
//!
//! ```ignore
//! let view = unsafe { AreaView::from_ptr(store.lookup(area_id)) };
//! if view.is_valid() {
//!     tracing::debug!(zone = view.zone(), "entered area {}", view.name_for(locale).to_string_lossy());
//! }
//! ```

pub mod area;
pub mod character;
pub mod chat;
pub mod creature;
pub mod dungeon;
pub mod faction;
pub mod gm;
pub mod item;
pub mod map;
pub mod skill;
pub mod spell;
pub mod taxi;

pub use area::{AreaView, WmoAreaView};
pub use character::{CharacterClassView, CharacterRaceView};
pub use chat::ChatChannelView;
pub use creature::CreatureFamilyView;
pub use dungeon::DungeonEncounterView;
pub use faction::FactionView;
pub use gm::{GmSurveyQuestionsView, GmTicketCategoryView};
pub use item::{ItemClassView, ItemSetView};
pub use map::MapView;
pub use skill::SkillLineView;
pub use spell::SpellView;
pub use taxi::TaxiNodeView;

/// Common contract of every typed entry view.
///
/// One implementation per record shape; a view cannot be constructed over
/// the wrong shape. Views deliberately define no equality, ordering, or
/// hashing - they are not map keys.
pub trait EntryView: Copy + Default {
    /// The record shape this view projects.
    type Entry;

    /// The view over no record.
    fn null() -> Self;

    /// Wrap a raw record pointer; a null pointer yields the null view.
    ///
    /// # Safety
    /// A non-null `ptr` must point to a record the external store keeps
    /// alive and unmodified for as long as this view (or any copy of it)
    /// can reach it.
    unsafe fn from_ptr(ptr: *const Self::Entry) -> Self;

    /// Raw pointer to the wrapped record (null for the null view).
    fn as_ptr(&self) -> *const Self::Entry;

    /// True iff the view wraps a record.
    fn is_valid(&self) -> bool;
}

/// Defines one view type over one record shape: the pointer wrapper, its
/// construction and validity surface, the [`EntryView`] impl, and the
/// module-private `raw()` accessor every named getter reads through.
macro_rules! entry_view {
    ($(#[$meta:meta])* $view:ident => $entry:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        pub struct $view {
            ptr: *const $entry,
        }

        impl $view {
            /// The view over no record.
            pub const fn null() -> Self {
                Self {
                    ptr: std::ptr::null(),
                }
            }

            /// Wrap a raw record pointer; a null pointer yields the null
            /// view.
            ///
            /// # Safety
            /// A non-null `ptr` must point to a record the external store
            /// keeps alive and unmodified for as long as this view (or any
            /// copy of it) can reach it.
            pub const unsafe fn from_ptr(ptr: *const $entry) -> Self {
                Self { ptr }
            }

            /// True iff the view wraps a record. Checked once by the caller;
            /// accessors assume it.
            #[inline]
            pub fn is_valid(&self) -> bool {
                !self.ptr.is_null()
            }

            /// Raw pointer to the wrapped record (null for the null view).
            #[inline]
            pub fn as_ptr(&self) -> *const $entry {
                self.ptr
            }

            #[inline]
            fn raw(&self) -> &$entry {
                debug_assert!(self.is_valid(), "accessor called on an invalid view");
                unsafe { &*self.ptr }
            }
        }

        impl Default for $view {
            fn default() -> Self {
                Self::null()
            }
        }

        impl $crate::views::EntryView for $view {
            type Entry = $entry;

            fn null() -> Self {
                $view::null()
            }

            unsafe fn from_ptr(ptr: *const $entry) -> Self {
                unsafe { $view::from_ptr(ptr) }
            }

            fn as_ptr(&self) -> *const $entry {
                self.ptr
            }

            fn is_valid(&self) -> bool {
                $view::is_valid(self)
            }
        }

        impl std::fmt::Debug for $view {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                if self.is_valid() {
                    f.debug_tuple(stringify!($view))
                        .field(&format_args!("{:p}", self.ptr))
                        .finish()
                } else {
                    f.debug_tuple(stringify!($view))
                        .field(&format_args!("invalid"))
                        .finish()
                }
            }
        }

        // Pure readers: safe to share across threads while the record store
        // stays immutable and alive, the layer's standing contract.
        unsafe impl Send for $view {}
        unsafe impl Sync for $view {}
    };
}

/// Scalar field projections: one named, typed, `#[inline]` getter per
/// column, reading through `raw()`.
macro_rules! field_getters {
    ($($(#[$meta:meta])* $name:ident: $ty:ty = $field:ident;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(&self) -> $ty {
                self.raw().$field
            }
        )*
    };
}

/// Accessor triple over a localized string column: slot count, default-slot
/// getter, and an indexed getter that falls back to slot 0 past capacity
/// (the loaded table may carry fewer locales than the caller was compiled
/// against). Also generates a `*_for(Locale)` convenience getter.
macro_rules! localized_names {
    ($field:ident[$cap:expr] => $get:ident, $default:ident, $count:ident) => {
        /// Localized slots this table declares.
        pub const $count: usize = $cap;

        /// Slot 0, the default-locale text.
        #[inline]
        pub fn $default(&self) -> $crate::sdk::DbcString {
            self.raw().$field[0]
        }

        /// Localized text by slot index; indices at or beyond capacity fall
        /// back to the default slot.
        #[inline]
        pub fn $get(&self, idx: usize) -> $crate::sdk::DbcString {
            let slots = &self.raw().$field;
            if idx < Self::$count {
                slots[idx]
            } else {
                slots[0]
            }
        }

        paste::paste! {
            /// Localized text for a client locale.
            #[inline]
            pub fn [<$get _for>](&self, locale: $crate::locale::Locale) -> $crate::sdk::DbcString {
                self.$get(locale.index())
            }
        }
    };
}

/// Indexed accessor over a fixed-slot column. Slot indices come from
/// compile-time-known slot counts, so an out-of-range index is a caller bug.
///
/// The generated getter panics if `idx` is at or beyond the slot count.
macro_rules! fixed_slots {
    ($(#[$meta:meta])* $field:ident[$cap:expr] => $get:ident, $count:ident, $ty:ty) => {
        /// Slots this column carries.
        pub const $count: usize = $cap;

        $(#[$meta])*
        #[inline]
        pub fn $get(&self, idx: usize) -> $ty {
            assert!(
                idx < Self::$count,
                "{} slot index out of range: {idx}",
                stringify!($get),
            );
            self.raw().$field[idx]
        }
    };
}

pub(crate) use {entry_view, field_getters, fixed_slots, localized_names};

#[cfg(test)]
mod tests {
    use std::ffi::CStr;

    use crate::sdk::DbcString;

    use super::{entry_view, localized_names};

    const WORDS: [&CStr; 16] = [
        c"w0", c"w1", c"w2", c"w3", c"w4", c"w5", c"w6", c"w7", c"w8", c"w9", c"w10", c"w11",
        c"w12", c"w13", c"w14", c"w15",
    ];

    fn slots<const N: usize>() -> [DbcString; N] {
        std::array::from_fn(|i| DbcString::from_static(WORDS[i]))
    }

    // Synthetic record shapes covering the localized-slot capacities that
    // appear across real tables.
    pub struct Cap1Entry {
        label: [DbcString; 1],
    }
    pub struct Cap2Entry {
        label: [DbcString; 2],
    }
    pub struct Cap4Entry {
        label: [DbcString; 4],
    }
    pub struct Cap8Entry {
        label: [DbcString; 8],
    }
    pub struct Cap16Entry {
        label: [DbcString; 16],
    }

    entry_view!(Cap1View => Cap1Entry);
    entry_view!(Cap2View => Cap2Entry);
    entry_view!(Cap4View => Cap4Entry);
    entry_view!(Cap8View => Cap8Entry);
    entry_view!(Cap16View => Cap16Entry);

    impl Cap1View {
        localized_names!(label[1] => label, default_label, LABEL_SLOTS);
    }
    impl Cap2View {
        localized_names!(label[2] => label, default_label, LABEL_SLOTS);
    }
    impl Cap4View {
        localized_names!(label[4] => label, default_label, LABEL_SLOTS);
    }
    impl Cap8View {
        localized_names!(label[8] => label, default_label, LABEL_SLOTS);
    }
    impl Cap16View {
        localized_names!(label[16] => label, default_label, LABEL_SLOTS);
    }

    #[test]
    fn test_null_and_default_views_are_invalid() {
        assert!(!Cap4View::null().is_valid());
        assert!(!Cap4View::default().is_valid());
        assert!(Cap4View::null().as_ptr().is_null());
    }

    #[test]
    fn test_from_null_ptr_is_invalid() {
        let view = unsafe { Cap4View::from_ptr(std::ptr::null()) };
        assert!(!view.is_valid());
    }

    #[test]
    fn test_from_ptr_is_valid_and_copyable() {
        let entry = Cap2Entry { label: slots() };
        let view = unsafe { Cap2View::from_ptr(&entry) };
        assert!(view.is_valid());
        assert_eq!(view.as_ptr(), &entry as *const _);

        // Views are thin handles held by value.
        let copy = view;
        assert_eq!(copy.label(0), view.label(0));
    }

    #[test]
    fn test_debug_formats_pointer_or_invalid() {
        let entry = Cap1Entry { label: slots() };
        let view = unsafe { Cap1View::from_ptr(&entry) };
        assert!(format!("{view:?}").starts_with("Cap1View"));
        assert!(format!("{:?}", Cap1View::null()).contains("invalid"));
    }

    fn check_fallback<F: Fn(usize) -> DbcString>(cap: usize, get: F) {
        for idx in 0..cap {
            assert_eq!(get(idx), DbcString::from_static(WORDS[idx]), "idx {idx}");
        }
        for idx in [cap, cap + 1, 100] {
            assert_eq!(get(idx), DbcString::from_static(WORDS[0]), "idx {idx}");
        }
    }

    #[test]
    fn test_localized_fallback_capacity_1() {
        let entry = Cap1Entry { label: slots() };
        let view = unsafe { Cap1View::from_ptr(&entry) };
        assert_eq!(Cap1View::LABEL_SLOTS, 1);
        assert_eq!(view.default_label(), DbcString::from_static(WORDS[0]));
        check_fallback(1, |i| view.label(i));
    }

    #[test]
    fn test_localized_fallback_capacity_2() {
        let entry = Cap2Entry { label: slots() };
        let view = unsafe { Cap2View::from_ptr(&entry) };
        check_fallback(2, |i| view.label(i));
    }

    #[test]
    fn test_localized_fallback_capacity_4() {
        let entry = Cap4Entry { label: slots() };
        let view = unsafe { Cap4View::from_ptr(&entry) };
        check_fallback(4, |i| view.label(i));
    }

    #[test]
    fn test_localized_fallback_capacity_8() {
        let entry = Cap8Entry { label: slots() };
        let view = unsafe { Cap8View::from_ptr(&entry) };
        check_fallback(8, |i| view.label(i));
    }

    #[test]
    fn test_localized_fallback_capacity_16() {
        let entry = Cap16Entry { label: slots() };
        let view = unsafe { Cap16View::from_ptr(&entry) };
        check_fallback(16, |i| view.label(i));
    }

    #[test]
    fn test_locale_typed_getter() {
        use crate::locale::Locale;

        let entry = Cap8Entry { label: slots() };
        let view = unsafe { Cap8View::from_ptr(&entry) };
        assert_eq!(
            view.label_for(Locale::DeDe),
            DbcString::from_static(WORDS[Locale::DeDe.index()])
        );
    }

    #[test]
    fn test_accessors_are_pure_projections() {
        let entry = Cap4Entry { label: slots() };
        let view = unsafe { Cap4View::from_ptr(&entry) };
        assert_eq!(view.label(3), view.label(3));
    }
}
