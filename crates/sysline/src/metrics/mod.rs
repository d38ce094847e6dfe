pub mod collector;
pub mod provider;

#[cfg(test)]
pub mod fake;

pub use collector::MetricsCollector;
pub use provider::MetricsProvider;
