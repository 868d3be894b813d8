/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the word counting services and talks to the
/// outside world only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
