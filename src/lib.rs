//! # homebrew-mqtt - Loader Module Shim
//!
//! A loader-module shim for homebrew plugin systems on game consoles. The
//! crate registers module metadata with the host loader, validates the
//! loader's module-information contract at initialization, and forwards the
//! host's application-lifecycle notifications to the network bring-up
//! facility and the MQTT broker instance the module owns. It is designed for
//! homebrew toolchains and supports `no_std` environments.
//!
//! ## Features
//!
//! ### Module Shim
//! - **Descriptor**: serializable module metadata (name, author, version,
//!   license, description, declared dependencies)
//! - **Loader Contract**: module-information version validation with
//!   testable, `Result`-based failure paths
//! - **Lifecycle**: explicit state machine over the host-dictated event
//!   order (initialize, relocations-done, start, exit-request, end)
//!
//! ### Connectivity
//! - Trait seam over the platform network bring-up library
//! - Non-blocking connect dispatch with a retained completion handle
//!
//! ### Diagnostics
//! - Pluggable fatal-halt facility for unrecoverable contract violations
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! homebrew-mqtt = "0.1.0"
//! ```
//!
//! ### Driving the module from a host loader
//!
//! ```rust
//! use homebrew_mqtt::module::{InitArgs, Module, ModuleInfo, MODULE_DESCRIPTOR, MODULE_INFO_VERSION};
//! use homebrew_mqtt::network::{ConnectHandle, ConnectStatus, Connectivity};
//! # struct StubHandle;
//! # impl ConnectHandle for StubHandle {
//! #     type Error = ();
//! #     fn status(&mut self) -> Result<ConnectStatus, Self::Error> { Ok(ConnectStatus::Pending) }
//! # }
//! # struct StubStack;
//! # impl Connectivity for StubStack {
//! #     type Error = ();
//! #     type Handle = StubHandle;
//! #     fn initialize(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn connect_async(&mut self) -> Result<Self::Handle, Self::Error> { Ok(StubHandle) }
//! # }
//!
//! // Stand-in for the external MQTT client object the module owns.
//! struct BrokerSlot;
//!
//! let mut module = Module::new(MODULE_DESCRIPTOR, StubStack, BrokerSlot);
//!
//! let info = ModuleInfo { version: MODULE_INFO_VERSION };
//! module.initialize(&InitArgs { module_info: Some(&info) })?;
//! module.relocations_done()?;
//! module.application_starts()?;
//!
//! assert_eq!(module.connect_status(), Some(ConnectStatus::Pending));
//! # Ok::<(), homebrew_mqtt::module::Error>(())
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Homebrew console toolchains (the primary target)
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `async`: Enable async/await support for awaitable bring-up
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Loader-facing module shim: descriptor, loader contract, lifecycle and the
/// host entry surface.
pub mod module;

pub mod network;

/// System utilities: the diagnostic halt facility.
pub mod system;
