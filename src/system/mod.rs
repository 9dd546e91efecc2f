//! System utilities for homebrew modules.
//!
//! This module provides the system-level seams the module shim needs from
//! its platform. It focuses on lightweight, `no_std` compatible
//! interfaces that real targets bind to their platform primitives.
//!
//! # Available Utilities
//!
//! - **[`fatal`]**: the diagnostic halt facility used for unrecoverable
//!   loader-contract violations
//!
//! # Design Principles
//!
//! - **Embedded-First**: designed for resource-constrained environments
//! - **Pluggable**: platform primitives are reached through traits so the
//!   logic above them stays testable
//! - **Portable**: works across homebrew toolchains and embedded targets

/// Diagnostic halt facility.
///
/// Provides the [`fatal::FatalHandler`] seam over the platform's halt
/// primitive, plus a panic-based default for hosted targets.
pub mod fatal;
