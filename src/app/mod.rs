// Application layer: wires config and storage into the core operations for the CLI.

#[cfg(feature = "cli")]
pub mod commands;
