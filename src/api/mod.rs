//! Client for the PointZerver status endpoint.

pub mod client;
pub mod types;

pub use client::{StatusClient, StatusError};
pub use types::PairingStatus;
