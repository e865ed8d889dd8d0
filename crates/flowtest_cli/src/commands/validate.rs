//! Validate a processor descriptor against its supported properties.

use anyhow::{bail, Result};
use console::style;
use flowtest_core::{processors, Processor, PropertyDefinition};

pub fn run(name: &str) -> Result<()> {
    let processor = processors::by_name(name, None)?;
    report(&processor, processors::property_definitions(name)?)
}

/// Prints the validation report for `processor`; errors if any property is invalid.
fn report(processor: &Processor, definitions: &[PropertyDefinition]) -> Result<()> {
    let name = processor.name();
    let report = processor.validate(definitions);

    for property in &report.dynamic_properties {
        println!(
            "  {} '{}' is not a supported property (treated as dynamic)",
            style("⚠").yellow(),
            property
        );
    }
    for violation in &report.violations {
        println!("  {} {}", style("×").red(), violation);
    }

    if !report.is_valid() {
        bail!(
            "{} has {} invalid propert{}",
            name,
            report.violations.len(),
            if report.violations.len() == 1 { "y" } else { "ies" }
        );
    }

    println!(
        "{} {}",
        style("✓").green(),
        style(format!("{} is valid", name)).green()
    );
    Ok(())
}
