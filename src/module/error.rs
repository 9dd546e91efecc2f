//! Common error type for module operations.

use super::lifecycle;

/// An error reported by a module lifecycle operation.
///
/// The first two variants are the unrecoverable loader-contract
/// violations; the host-facing entry surface turns them into a diagnostic
/// halt. Everything else is reported and otherwise ignored, since the
/// host never observes hook results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The loader did not provide a module-information block.
    MissingModuleInfo,
    /// The module-information structure version does not match the one
    /// this module was built against.
    IncompatibleInfoVersion {
        /// Version this module was built against.
        expected: u32,
        /// Version the loader declared.
        found: u32,
    },
    /// A host notification arrived outside the host-dictated order.
    Lifecycle(lifecycle::Error),
    /// The network bring-up facility failed to initialize.
    BringUpFailed,
    /// The asynchronous connection attempt could not be dispatched.
    ConnectFailed,
    /// A fixed-size buffer was too small for the rendered output.
    BufferOverflow,
}

impl From<lifecycle::Error> for Error {
    fn from(err: lifecycle::Error) -> Self {
        Error::Lifecycle(err)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::MissingModuleInfo => defmt::write!(f, "MissingModuleInfo"),
            Error::IncompatibleInfoVersion { expected, found } => {
                defmt::write!(
                    f,
                    "IncompatibleInfoVersion(expected={}, found={})",
                    expected,
                    found
                )
            }
            Error::Lifecycle(_) => defmt::write!(f, "Lifecycle"),
            Error::BringUpFailed => defmt::write!(f, "BringUpFailed"),
            Error::ConnectFailed => defmt::write!(f, "ConnectFailed"),
            Error::BufferOverflow => defmt::write!(f, "BufferOverflow"),
        }
    }
}
