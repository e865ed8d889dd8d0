//! Print a processor descriptor.

use anyhow::{bail, Result};
use console::style;
use flowtest_core::{processors, Processor, Schedule, SchedulingStrategy};

/// Print the descriptor registered under `name` in the requested format.
pub fn run(name: &str, strategy: Option<&str>, period: Option<String>, format: &str) -> Result<()> {
    let schedule = match strategy {
        Some(strategy) => Some(Schedule {
            strategy: strategy.parse::<SchedulingStrategy>()?,
            period,
        }),
        None if period.is_some() => bail!("--period requires --strategy"),
        None => None,
    };

    let processor = processors::by_name(name, schedule)?;

    match format {
        "json" => println!("{}", processor.to_json()?),
        "text" => print_text(&processor),
        other => bail!("Unknown format '{}'. Use 'json' or 'text'.", other),
    }

    Ok(())
}

fn print_text(processor: &Processor) {
    println!("{}", style(processor.name()).bold());
    println!();
    println!("Properties:");
    let width = processor
        .properties()
        .keys()
        .map(String::len)
        .max()
        .unwrap_or(0);
    for (key, value) in processor.properties() {
        println!("  {:width$}  {}", key, style(value).cyan(), width = width);
    }
    println!();
    println!(
        "Auto-terminated: {}",
        processor
            .auto_terminate()
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    );
    match processor.schedule() {
        Some(schedule) => match &schedule.period {
            Some(period) => println!("Schedule: {} ({})", schedule.strategy, period),
            None => println!("Schedule: {}", schedule.strategy),
        },
        None => println!("Schedule: {}", style("none").dim()),
    }
}
