/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the counting core calls out to the
/// console, the prompt and the report formatters through these traits.
pub mod outbound;
