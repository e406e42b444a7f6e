use anyhow::Result;

use movesem::Scenario;

/// Formats one `name - description` line per scenario.
pub fn render() -> Vec<String> {
    Scenario::ALL
        .into_iter()
        .map(|scenario| format!("{} - {}", scenario.name(), scenario.description()))
        .collect()
}

pub fn run() -> Result<()> {
    for line in render() {
        println!("{line}");
    }
    Ok(())
}
