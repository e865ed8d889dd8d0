//! CLI commands.

pub mod describe;
pub mod processors;
pub mod smoke;
pub mod validate;
