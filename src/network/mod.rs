//! A facade over the platform network bring-up library
//!
//! The platform library that owns the physical network stack is an
//! external, host-controlled collaborator. This module defines the trait
//! seam the module shim drives it through: initialize the facility, then
//! dispatch a connection attempt that never blocks and hands back a
//! handle for completion checks.
//!

#![allow(async_fn_in_trait)]
#![deny(unsafe_code)]

/// Common error types for bring-up operations
pub mod error;

use serde::{Deserialize, Serialize};

/// Re-exports of common traits
pub mod prelude {
    #[cfg(feature = "async")]
    pub use super::AsyncConnectivity;
    pub use super::{ConnectHandle, ConnectStatus, Connectivity};
}

/// Completion state of an asynchronous connection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectStatus {
    /// The attempt was dispatched and has not completed yet.
    Pending,
    /// The network is up.
    Connected,
    /// The attempt completed unsuccessfully.
    Failed,
}

/// A retained handle to an in-flight connection attempt.
pub trait ConnectHandle {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Query the attempt's completion state without blocking
    fn status(&mut self) -> Result<ConnectStatus, Self::Error>;
}

/// A synchronous network bring-up facility.
///
/// Implementations wrap the platform library: [`initialize`] prepares the
/// facility and [`connect_async`] dispatches one connection attempt,
/// returning immediately with a [`ConnectHandle`].
///
/// [`initialize`]: Connectivity::initialize
/// [`connect_async`]: Connectivity::connect_async
pub trait Connectivity {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Associated handle type for dispatched attempts
    type Handle: ConnectHandle;
    /// Initialize the bring-up facility
    fn initialize(&mut self) -> Result<(), Self::Error>;
    /// Dispatch a connection attempt without blocking
    fn connect_async(&mut self) -> Result<Self::Handle, Self::Error>;
}

/// An asynchronous network bring-up facility.
#[cfg(feature = "async")]
pub trait AsyncConnectivity {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Initialize the bring-up facility asynchronously
    async fn initialize(&mut self) -> Result<(), Self::Error>;
    /// Drive a connection attempt to completion
    async fn connect(&mut self) -> Result<(), Self::Error>;
}
