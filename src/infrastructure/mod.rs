//! Infrastructure layer - store implementations, services and logging setup

pub mod address;
pub mod logging;
