//! Host-ordered lifecycle state machine.
//!
//! The loader drives the module through a fixed sequence of notifications;
//! the module has no authority over their timing or order. The state
//! machine makes the expected order explicit and reports any notification
//! that arrives outside it.
//!
//! The module can be in one of the following states:
//!
//! * `Loaded`: the image is in memory, the initialize hook has not fired.
//! * `Initialized`: the loader contract was validated.
//! * `RelocationsDone`: position-dependent references have been fixed up.
//! * `Running`: an application is running.
//! * `ExitRequested`: the running application asked to exit.
//! * `Ended`: the application ended; the module stays resident.
//!
//! Applications launch repeatedly while the module stays loaded, so
//! `Ended` re-admits `RelocationsDone` and `ApplicationStarts`. An
//! application may also die without requesting exit, so `ApplicationEnds`
//! is accepted straight from `Running`.

use serde::{Deserialize, Serialize};

/// Module lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    /// Image in memory, initialize hook not yet fired.
    Loaded,
    /// Loader contract validated.
    Initialized,
    /// Relocation fixups applied, application not yet started.
    RelocationsDone,
    /// An application is running.
    Running,
    /// The running application asked to exit.
    ExitRequested,
    /// The application ended; the module stays resident.
    Ended,
}

/// A host lifecycle notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// The module has been loaded.
    Initialize,
    /// The loader finished fixing up relocations.
    RelocationsDone,
    /// An application starts.
    ApplicationStarts,
    /// The application wants to exit.
    ApplicationRequestsExit,
    /// The application actually ended.
    ApplicationEnds,
}

/// A lifecycle ordering violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The host delivered a notification the current state does not admit.
    UnexpectedEvent {
        /// State the module was in.
        from: State,
        /// The notification that arrived.
        event: Event,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::UnexpectedEvent { .. } => defmt::write!(f, "UnexpectedEvent"),
        }
    }
}

/// Computes the state a notification moves the module to.
///
/// Returns [`Error::UnexpectedEvent`] when the current state does not
/// admit the notification; the state is left for the caller to keep.
pub fn transition(from: State, event: Event) -> Result<State, Error> {
    let next = match (from, event) {
        (State::Loaded, Event::Initialize) => State::Initialized,
        (State::Initialized | State::Ended, Event::RelocationsDone) => State::RelocationsDone,
        (
            State::Initialized | State::RelocationsDone | State::Ended,
            Event::ApplicationStarts,
        ) => State::Running,
        (State::Running, Event::ApplicationRequestsExit) => State::ExitRequested,
        (State::Running | State::ExitRequested, Event::ApplicationEnds) => State::Ended,
        (from, event) => return Err(Error::UnexpectedEvent { from, event }),
    };
    Ok(next)
}
