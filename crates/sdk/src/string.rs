//! Non-owning string slots
//!
//! DBC records never embed their text. Each string column is a pointer into a
//! string block that the loader owns for the lifetime of the loaded data set.
//! [`DbcString`] carries one such pointer without taking ownership, the same
//! weak relationship the entry views have to their records.

use std::ffi::{c_char, CStr};
use std::fmt;

/// A non-owning pointer into the loader-owned string block.
///
/// The wrapped pointer is either null (empty slot) or a nul-terminated C
/// string kept alive by the loader. Copying a `DbcString` copies the pointer,
/// never the text.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct DbcString {
    ptr: *const c_char,
}

impl DbcString {
    /// An empty slot.
    #[inline]
    pub const fn null() -> Self {
        Self {
            ptr: std::ptr::null(),
        }
    }

    /// Wrap a raw string-block pointer.
    ///
    /// # Safety
    /// A non-null `ptr` must point to a nul-terminated string that stays
    /// alive and unmodified for as long as this value (or any copy of it)
    /// can be read.
    #[inline]
    pub const unsafe fn from_ptr(ptr: *const c_char) -> Self {
        Self { ptr }
    }

    /// Wrap a static C string. Static storage trivially satisfies the
    /// lifetime contract, so this constructor is safe.
    #[inline]
    pub const fn from_static(s: &'static CStr) -> Self {
        Self { ptr: s.as_ptr() }
    }

    /// Raw pointer to the text (null for an empty slot).
    #[inline]
    pub const fn as_ptr(&self) -> *const c_char {
        self.ptr
    }

    /// True if the slot is empty.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Borrow the text as UTF-8, `None` if the slot is empty or the bytes
    /// are not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        if self.ptr.is_null() {
            return None;
        }
        // Upheld by the from_ptr contract: nul-terminated and alive.
        unsafe { CStr::from_ptr(self.ptr) }.to_str().ok()
    }

    /// Copy the text out, replacing invalid UTF-8. Empty slots give an
    /// empty string.
    pub fn to_string_lossy(&self) -> String {
        if self.ptr.is_null() {
            return String::new();
        }
        unsafe { CStr::from_ptr(self.ptr) }
            .to_string_lossy()
            .into_owned()
    }
}

impl Default for DbcString {
    fn default() -> Self {
        Self::null()
    }
}

// Slot identity is pointer identity: two slots compare equal when they name
// the same place in the string block.
impl PartialEq for DbcString {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl Eq for DbcString {}

impl fmt::Debug for DbcString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ptr.is_null() {
            write!(f, "DbcString(null)")
        } else {
            write!(f, "DbcString({:p})", self.ptr)
        }
    }
}

// DbcString is a read-only pointer into a block the loader keeps immutable
// and alive while any record referencing it is reachable.
unsafe impl Send for DbcString {}
unsafe impl Sync for DbcString {}
