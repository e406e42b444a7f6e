//! Fixed demonstration sequences exercising the traced types.
//!
//! Every scenario writes a banner first and then the lines of the operations
//! it performs. Locals are dropped in reverse declaration order, so the
//! destructor lines close each scenario.

use std::str::FromStr;

use movesem_common::error::Error;

use crate::{composite::Composite, owning_buffer::OwningBuffer, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    Append,
    MoveCopyConstruct,
    CopyAssign,
    CopyMoveAssign,
    CompositeMove,
    CompositeCopyMove,
}

impl Scenario {
    /// Every scenario, in the order of the default demonstration sequence.
    pub const ALL: [Scenario; 6] = [
        Scenario::Append,
        Scenario::MoveCopyConstruct,
        Scenario::CopyAssign,
        Scenario::CopyMoveAssign,
        Scenario::CompositeMove,
        Scenario::CompositeCopyMove,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Append => "append",
            Scenario::MoveCopyConstruct => "move-copy-construct",
            Scenario::CopyAssign => "copy-assign",
            Scenario::CopyMoveAssign => "copy-move-assign",
            Scenario::CompositeMove => "composite-move",
            Scenario::CompositeCopyMove => "composite-copy-move",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scenario::Append => "append one owning buffer to another and display the result",
            Scenario::MoveCopyConstruct => {
                "move-construct a buffer, then copy-construct from the moved-to buffer"
            }
            Scenario::CopyAssign => "copy-assign a populated buffer into a default one",
            Scenario::CopyMoveAssign => {
                "copy-assign into an empty-string buffer, then move-assign it away"
            }
            Scenario::CompositeMove => "move a composite by delegating to its member",
            Scenario::CompositeCopyMove => "move a composite by copying its member",
        }
    }

    /// Runs the scenario, writing its lines to the trace sink.
    pub fn run(self) {
        log::debug!("running scenario {}", self.name());
        match self {
            Scenario::Append => append(),
            Scenario::MoveCopyConstruct => move_copy_construct(),
            Scenario::CopyAssign => copy_assign(),
            Scenario::CopyMoveAssign => copy_move_assign(),
            Scenario::CompositeMove => composite_move(),
            Scenario::CompositeCopyMove => composite_copy_move(),
        }
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| Error::invalid_arg("scenario", format!("unknown name '{s}'")))
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn append() {
    trace::emit_line("custom append (My_string)");
    let mut lhs = OwningBuffer::from("first Element ");
    let rhs = OwningBuffer::from("second addition ");
    lhs += &rhs;
    lhs.display("lhs");
}

fn move_copy_construct() {
    trace::emit_line("Case 1 :");
    let mut rhs = OwningBuffer::from("someRandomMessage");
    rhs.display("rhs");

    let lhs_move = OwningBuffer::move_from(&mut rhs);
    rhs.display("rhs");
    lhs_move.display("lhs_move");

    let lhs_copy = lhs_move.clone();
    lhs_copy.display("lhs_copy");
}

fn copy_assign() {
    trace::emit_line("Case 2 :");
    let mut lhs = OwningBuffer::new();
    let rhs = OwningBuffer::from("Not empty");
    lhs.clone_from(&rhs);
}

fn copy_move_assign() {
    trace::emit_line("Case 3 :");
    let rhs = OwningBuffer::from("thisIsAssignmentIsTooLong");
    let mut lhs = OwningBuffer::from("");
    lhs.clone_from(&rhs);
    lhs.display("lhs");

    let mut lhs_move = OwningBuffer::from("");
    lhs_move.move_assign(&mut lhs);
    lhs_move.display("lhs_move");
    lhs.display("lhs");
}

fn composite_move() {
    trace::emit_line("Trying to move (Case 4)");
    let mut rhs = Composite::new();
    let _lhs = Composite::move_from(&mut rhs);
}

fn composite_copy_move() {
    trace::emit_line("Trying to move by copy (Case 5)");
    let rhs = Composite::new();
    let lhs = Composite::move_by_copy(&rhs);
    rhs.display("rhs");
    lhs.display("lhs");
}

#[cfg(test)]
mod tests {
    use movesem_common::error::ErrorKind;

    use super::*;

    #[test]
    fn test_names_round_trip() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.name().parse::<Scenario>().unwrap(), scenario);
            assert_eq!(scenario.to_string(), scenario.name());
            assert!(!scenario.description().is_empty());
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "case-9".parse::<Scenario>().unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "scenario");
                assert_eq!(message, "unknown name 'case-9'");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }
}
