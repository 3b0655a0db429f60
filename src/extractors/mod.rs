// src/extractors/mod.rs
pub mod columns;
pub mod fixed;
pub mod locate;
pub mod window;

// Re-export key extraction types for convenience
pub use columns::ColumnBinding;
pub use locate::STRATEGY_CASCADE;
pub use window::MeasurementRecord;
