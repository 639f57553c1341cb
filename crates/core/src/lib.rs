//! dbcrust core - Typed read-only views over client-data records
//!
//! The loader hands out raw pointers to fixed-layout DBC records; this crate
//! wraps them in thin, copyable, non-owning views with named accessors, so
//! game logic never re-derives a record's binary layout at a call site.
//!
//! # Re-exports
//!
//! This crate re-exports the SDK crate for convenience:
//! - [`sdk`] - record layouts and helper types

// Re-export the SDK crate
pub use dbcrust_sdk as sdk;

pub mod locale;
pub mod views;

pub use locale::{Locale, LocaleError};

// Re-export view types
pub use views::{
    AreaView, CharacterClassView, CharacterRaceView, ChatChannelView, CreatureFamilyView,
    DungeonEncounterView, EntryView, FactionView, GmSurveyQuestionsView, GmTicketCategoryView,
    ItemClassView, ItemSetView, MapView, SkillLineView, SpellView, TaxiNodeView, WmoAreaView,
};
pub use views::spell::{AttributesExtension, FormatRevision};
