#[cfg(feature = "cli")]
pub mod cli;
pub mod delta;

pub use delta::DeltaConfig;
