//! Registry implementations for fetching release lifecycles

pub mod endoflife;

pub use endoflife::EndOfLifeRegistry;
