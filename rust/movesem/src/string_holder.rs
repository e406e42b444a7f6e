//! A value that delegates its move operations to a `String`.

use crate::trace::{self, Event};

/// Wraps a standard `String`. Moving a holder moves the string's heap
/// allocation; copying it duplicates the allocation.
pub struct StringHolder {
    value: String,
}

impl StringHolder {
    /// Creates a holder containing `"default"`.
    pub fn new() -> StringHolder {
        let holder = StringHolder::with_value("default");
        trace::emit(Event::HolderDefault);
        holder
    }

    /// Creates a holder containing `value`, without tracing.
    pub fn with_value(value: impl Into<String>) -> StringHolder {
        StringHolder {
            value: value.into(),
        }
    }

    /// Takes the string of `other`, leaving it with an empty string.
    pub fn move_assign(&mut self, other: &mut StringHolder) {
        self.value = std::mem::take(&mut other.value);
        trace::emit(Event::HolderMoveAssign);
    }

    /// Returns the held string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` if the string has been moved away or was empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Address of the string's heap allocation, used to tell a transfer
    /// from a copy.
    pub fn value_ptr(&self) -> *const u8 {
        self.value.as_ptr()
    }
}

impl Clone for StringHolder {
    fn clone(&self) -> StringHolder {
        StringHolder::with_value(self.value.clone())
    }

    fn clone_from(&mut self, source: &StringHolder) {
        self.value.clone_from(&source.value);
        trace::emit(Event::HolderCopyAssign);
    }
}

impl Drop for StringHolder {
    fn drop(&mut self) {
        trace::emit(Event::HolderDrop);
    }
}

impl Default for StringHolder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StringHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StringHolder").field(&self.value).finish()
    }
}
