use movesem::{Scenario, trace::capture};

const DROP: &str = "DESTRUCTOR has been called";

fn run(scenario: Scenario) -> Vec<String> {
    let ((), lines) = capture(|| scenario.run());
    lines
}

#[test]
fn test_append_scenario() {
    assert_eq!(
        run(Scenario::Append),
        vec![
            "custom append (My_string)",
            "lhs : first Element second addition ",
            DROP,
            DROP,
        ]
    );
}

#[test]
fn test_move_copy_construct_scenario() {
    assert_eq!(
        run(Scenario::MoveCopyConstruct),
        vec![
            "Case 1 :",
            "rhs : someRandomMessage",
            "MOVE constructor has been called",
            "rhs : No data available",
            "lhs_move : someRandomMessage",
            "COPY constructor has been called",
            "lhs_copy : someRandomMessage",
            DROP,
            DROP,
            DROP,
        ]
    );
}

#[test]
fn test_copy_assign_scenario() {
    assert_eq!(
        run(Scenario::CopyAssign),
        vec![
            "Case 2 :",
            "Default constructor has been called",
            "COPY assignment has been called",
            DROP,
            DROP,
        ]
    );
}

#[test]
fn test_copy_move_assign_scenario() {
    assert_eq!(
        run(Scenario::CopyMoveAssign),
        vec![
            "Case 3 :",
            "COPY assignment has been called",
            "lhs : thisIsAssignmentIsTooLong",
            "MOVE assignment has been called",
            "lhs_move : thisIsAssignmentIsTooLong",
            "lhs : No data available",
            DROP,
            DROP,
            DROP,
        ]
    );
}

#[test]
fn test_composite_move_scenario() {
    assert_eq!(
        run(Scenario::CompositeMove),
        vec![
            "Trying to move (Case 4)",
            "Std_string - Default constructor called",
            "My_custom-Default constructor called",
            "Std_string - Default constructor called",
            "Std_string - move assignation called",
            "My_custom - move constructor called",
            "My_custom - Destructor called",
            "Std_string - Destructor called",
            "My_custom - Destructor called",
            "Std_string - Destructor called",
        ]
    );
}

#[test]
fn test_composite_copy_move_scenario() {
    assert_eq!(
        run(Scenario::CompositeCopyMove),
        vec![
            "Trying to move by copy (Case 5)",
            "Std_string - Default constructor called",
            "My_custom-Default constructor called",
            "Std_string - Default constructor called",
            "Std_string - Copy assignation called",
            "My_custom - (copy) move constructor called",
            "rhs : default",
            "lhs : default",
            "My_custom - Destructor called",
            "Std_string - Destructor called",
            "My_custom - Destructor called",
            "Std_string - Destructor called",
        ]
    );
}

/// Every scenario releases exactly what it acquired: one destructor line per
/// constructed value, regardless of how many moves happened in between.
#[test]
fn test_constructions_match_destructions() {
    for scenario in Scenario::ALL {
        let lines = run(scenario);
        let drops = lines.iter().filter(|line| line.as_str() == DROP).count();
        let buffers = match scenario {
            Scenario::Append | Scenario::CopyAssign => 2,
            Scenario::MoveCopyConstruct | Scenario::CopyMoveAssign => 3,
            Scenario::CompositeMove | Scenario::CompositeCopyMove => 0,
        };
        assert_eq!(drops, buffers, "{scenario}");

        let composites = lines
            .iter()
            .filter(|line| line.as_str() == "My_custom - Destructor called")
            .count();
        let holders = lines
            .iter()
            .filter(|line| line.as_str() == "Std_string - Destructor called")
            .count();
        assert_eq!(composites, holders, "{scenario}");
    }
}
