/// Factories for creating infrastructure adapters
mod formatter_factory;

pub use formatter_factory::FormatterFactory;
