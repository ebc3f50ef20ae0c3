//! Typed decoders for the four web-API resource shapes.
//!
//! Field names mirror the vendor's camelCase JSON; optional fields keep
//! their keys (serialized as `null`) so a decode/re-encode round trip is
//! structurally lossless.

pub mod locations;
pub mod me;
pub mod relay_devices;
pub mod thresholds;

pub use locations::Locations;
pub use me::Me;
pub use relay_devices::RelayDevices;
pub use thresholds::Thresholds;
