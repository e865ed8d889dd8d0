//! List known processor descriptors.

use anyhow::Result;
use console::style;
use flowtest_core::processors::{self, KNOWN_PROCESSORS};

pub fn run() -> Result<()> {
    for name in KNOWN_PROCESSORS {
        let processor = processors::by_name(name, None)?;
        println!(
            "{} ({} properties, auto-terminates: {})",
            style(name).bold(),
            processor.properties().len(),
            processor
                .auto_terminate()
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(())
}
