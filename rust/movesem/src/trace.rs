//! Diagnostic lines announcing which special operation ran.
//!
//! Lines go to standard output unless the current thread is inside
//! [`capture`], in which case they are collected instead.

use std::cell::RefCell;

/// A special operation of one of the demonstration types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    BufferDefault,
    BufferCopyConstruct,
    BufferMoveConstruct,
    BufferCopyAssign,
    BufferMoveAssign,
    BufferDrop,
    HolderDefault,
    HolderCopyAssign,
    HolderMoveAssign,
    HolderDrop,
    CompositeDefault,
    CompositeCopyConstruct,
    CompositeMoveConstruct,
    CompositeCopyMoveConstruct,
    CompositeDrop,
}

impl Event {
    /// The line written for this event.
    pub fn message(self) -> &'static str {
        match self {
            Event::BufferDefault => "Default constructor has been called",
            Event::BufferCopyConstruct => "COPY constructor has been called",
            Event::BufferMoveConstruct => "MOVE constructor has been called",
            Event::BufferCopyAssign => "COPY assignment has been called",
            Event::BufferMoveAssign => "MOVE assignment has been called",
            Event::BufferDrop => "DESTRUCTOR has been called",
            Event::HolderDefault => "Std_string - Default constructor called",
            Event::HolderCopyAssign => "Std_string - Copy assignation called",
            Event::HolderMoveAssign => "Std_string - move assignation called",
            Event::HolderDrop => "Std_string - Destructor called",
            Event::CompositeDefault => "My_custom-Default constructor called",
            Event::CompositeCopyConstruct => "My_custom-move failed!",
            Event::CompositeMoveConstruct => "My_custom - move constructor called",
            Event::CompositeCopyMoveConstruct => "My_custom - (copy) move constructor called",
            Event::CompositeDrop => "My_custom - Destructor called",
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

thread_local! {
    static CAPTURED: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

/// Writes the line for `event`.
pub fn emit(event: Event) {
    log::trace!("{event:?}");
    emit_line(event.message());
}

/// Writes a free-form line, such as buffer content or a scenario banner.
pub fn emit_line(line: impl Into<String>) {
    let line = line.into();
    let line = CAPTURED.with_borrow_mut(|captured| match captured {
        Some(lines) => {
            lines.push(line);
            None
        }
        None => Some(line),
    });
    if let Some(line) = line {
        println!("{line}");
    }
}

/// Runs `f`, collecting every line emitted on this thread while it runs.
///
/// Captures nest: an inner capture sees only its own lines, and the outer
/// one resumes afterwards, even if `f` panics.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    struct Restore(Option<Option<Vec<String>>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            if let Some(previous) = self.0.take() {
                CAPTURED.with_borrow_mut(|captured| *captured = previous);
            }
        }
    }

    let previous = CAPTURED.with_borrow_mut(|captured| captured.replace(Vec::new()));
    let mut restore = Restore(Some(previous));
    let result = f();
    let lines = CAPTURED
        .with_borrow_mut(|captured| {
            restore
                .0
                .take()
                .and_then(|previous| std::mem::replace(captured, previous))
        })
        .unwrap_or_default();
    (result, lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_collects_lines() {
        let (value, lines) = capture(|| {
            emit(Event::BufferDefault);
            emit_line("lhs : abc");
            42
        });
        assert_eq!(value, 42);
        assert_eq!(lines, vec!["Default constructor has been called", "lhs : abc"]);
    }

    #[test]
    fn test_capture_nests() {
        let ((_, inner), outer) = capture(|| {
            emit_line("outer 1");
            let inner = capture(|| emit_line("inner"));
            emit_line("outer 2");
            inner
        });
        assert_eq!(inner, vec!["inner"]);
        assert_eq!(outer, vec!["outer 1", "outer 2"]);
    }

    #[test]
    fn test_capture_restored_after_panic() {
        let (_, outer) = capture(|| {
            emit_line("before");
            let result = std::panic::catch_unwind(|| {
                let _: ((), Vec<String>) = capture(|| {
                    emit_line("lost");
                    panic!("boom");
                });
            });
            assert!(result.is_err());
            emit_line("after");
        });
        assert_eq!(outer, vec!["before", "after"]);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(Event::BufferDrop.to_string(), "DESTRUCTOR has been called");
        assert_eq!(
            Event::CompositeCopyMoveConstruct.to_string(),
            "My_custom - (copy) move constructor called"
        );
    }
}
