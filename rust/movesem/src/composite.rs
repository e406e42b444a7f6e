//! A value that owns a [`StringHolder`] and must delegate its move to it.
//!
//! [`Composite::move_from`] hands the member's string over;
//! [`Composite::move_by_copy`] copies the member instead, which is what a move
//! degrades into when it is not delegated to the member.

use crate::{
    string_holder::StringHolder,
    trace::{self, Event},
};

/// Owns one [`StringHolder`].
pub struct Composite {
    inner: StringHolder,
}

impl Composite {
    /// Default-constructs the member, then the composite.
    pub fn new() -> Composite {
        let composite = Composite {
            inner: StringHolder::new(),
        };
        trace::emit(Event::CompositeDefault);
        composite
    }

    /// Moves the member of `other` into a new composite. `other` keeps an
    /// empty member.
    pub fn move_from(other: &mut Composite) -> Composite {
        let mut inner = StringHolder::new();
        inner.move_assign(&mut other.inner);
        let composite = Composite { inner };
        trace::emit(Event::CompositeMoveConstruct);
        composite
    }

    /// Builds a new composite by copy-assigning the member of `other`.
    /// `other` is left untouched and the member's string is duplicated.
    pub fn move_by_copy(other: &Composite) -> Composite {
        let mut inner = StringHolder::new();
        inner.clone_from(&other.inner);
        let composite = Composite { inner };
        trace::emit(Event::CompositeCopyMoveConstruct);
        composite
    }

    /// Returns the owned member.
    pub fn inner(&self) -> &StringHolder {
        &self.inner
    }

    /// Formats the member as `"<label> : <value>"`, or as
    /// `"<label> : No data available"` when it has been moved away.
    pub fn render(&self, label: &str) -> String {
        if self.inner.is_empty() {
            format!("{label} : No data available")
        } else {
            format!("{label} : {}", self.inner.value())
        }
    }

    /// Writes [`Composite::render`] to the trace sink.
    pub fn display(&self, label: &str) {
        trace::emit_line(self.render(label));
    }
}

impl Clone for Composite {
    fn clone(&self) -> Composite {
        let composite = Composite {
            inner: self.inner.clone(),
        };
        trace::emit(Event::CompositeCopyConstruct);
        composite
    }
}

// The member is dropped after this runs.
impl Drop for Composite {
    fn drop(&mut self) {
        trace::emit(Event::CompositeDrop);
    }
}

impl Default for Composite {
    fn default() -> Self {
        Self::new()
    }
}
