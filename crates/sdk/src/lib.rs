//! dbcrust SDK - Client-data (DBC) record layouts
//!
//! This crate contains the `#[repr(C)]` layouts of the fixed-size records the
//! client-data loader produces, one struct per table kind, plus the small
//! helper computations that are defined alongside the data (reputation slot
//! resolution, map classification, spell family matching). Record memory is
//! owned by the external table store; nothing in this crate allocates or
//! copies records.
//!
//! # Modules
//!
//! - [`entries`] - Record layouts for the non-spell tables
//! - [`spell`] - `SpellEntry` (the largest record) and its helper types
//! - [`flags`] - `bitflags` types for attribute and mask columns
//! - [`string`] - `DbcString`, the non-owning string-block slot

pub mod entries;
pub mod flags;
pub mod spell;
pub mod string;

pub use entries::*;
pub use flags::*;
pub use spell::*;
pub use string::DbcString;
