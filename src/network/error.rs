//! Common error types for bring-up operations

/// A common error type for network bring-up operations.
///
/// This enum defines a set of common errors that bring-up implementations
/// can surface. It is designed to be simple and portable for `no_std`
/// environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A connect was requested before the facility was initialized.
    NotInitialized,
    /// The facility failed to initialize.
    InitError,
    /// A connection attempt could not be dispatched.
    ConnectError,
    /// An attempt is already in flight.
    Busy,
    /// No usable network is available.
    Unavailable,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotInitialized => defmt::write!(f, "NotInitialized"),
            Error::InitError => defmt::write!(f, "InitError"),
            Error::ConnectError => defmt::write!(f, "ConnectError"),
            Error::Busy => defmt::write!(f, "Busy"),
            Error::Unavailable => defmt::write!(f, "Unavailable"),
        }
    }
}
