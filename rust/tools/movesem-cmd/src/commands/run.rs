use anyhow::Result;

use movesem::Scenario;

/// Parses a scenario name given on the command line.
pub fn parse_scenario(name: &str) -> movesem_common::Result<Scenario> {
    name.parse()
}

pub fn run(scenarios: &[Scenario]) -> Result<()> {
    for &scenario in scenarios {
        log::info!("scenario {scenario}: {}", scenario.description());
        scenario.run();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use movesem::trace::capture;

    use super::*;

    #[test]
    fn test_parse_scenario() {
        assert_eq!(parse_scenario("copy-assign").unwrap(), Scenario::CopyAssign);
        assert!(parse_scenario("copy").is_err());
    }

    #[test]
    fn test_default_sequence_runs_all_in_order() {
        let (result, lines) = capture(|| run(&Scenario::ALL));
        result.unwrap();
        let banners: Vec<&str> = lines
            .iter()
            .map(String::as_str)
            .filter(|line| {
                line.starts_with("custom append")
                    || line.starts_with("Case ")
                    || line.starts_with("Trying to move")
            })
            .collect();
        assert_eq!(
            banners,
            vec![
                "custom append (My_string)",
                "Case 1 :",
                "Case 2 :",
                "Case 3 :",
                "Trying to move (Case 4)",
                "Trying to move by copy (Case 5)",
            ]
        );
    }
}
