//! Deterministic simulation harness for Skiff bootstrap testing.
//!
//! [`SimDriver`] implements the platform [`skiff_app::Driver`] trait with
//! every side effect recorded, so tests assert on the exact sequence of
//! platform interactions. A credential gate lets tests control the order in
//! which the two startup prerequisites resolve.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod sim_driver;

pub use sim_driver::{CredentialGate, DriverCall, SimDriver, SimDriverError, SimHandle};
