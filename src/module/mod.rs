//! Loader-facing module shim.
//!
//! This module bridges the host loader's lifecycle notifications to the
//! resources the module owns: the network bring-up facility and the MQTT
//! broker instance. The host dictates when each notification fires; the
//! shim only reacts, and it reports rather than recovers when the host
//! contract is violated.
//!
//! # Components
//!
//! - [`descriptor`]: module metadata the loader consumes at load time
//! - [`info`]: the loader's module-information contract and its validation
//! - [`lifecycle`]: the host-ordered lifecycle state machine
//! - [`entry`]: the host-facing hook surface that translates fatal
//!   validation failures into a diagnostic halt
//! - [`Module`]: the owner type tying all of the above together
//!
//! # Ownership Model
//!
//! The MQTT client object is owned by the [`Module`] value. It is
//! constructed together with the module, handed out by reference through
//! [`Module::client`]/[`Module::client_mut`], and dropped with the module.
//! No ambient static storage is involved.
//!
//! # Example
//!
//! ```rust
//! use homebrew_mqtt::module::{InitArgs, Module, ModuleInfo, MODULE_DESCRIPTOR, MODULE_INFO_VERSION};
//! use homebrew_mqtt::network::{ConnectHandle, ConnectStatus, Connectivity};
//! # struct StubHandle;
//! # impl ConnectHandle for StubHandle {
//! #     type Error = ();
//! #     fn status(&mut self) -> Result<ConnectStatus, Self::Error> { Ok(ConnectStatus::Connected) }
//! # }
//! # struct StubStack;
//! # impl Connectivity for StubStack {
//! #     type Error = ();
//! #     type Handle = StubHandle;
//! #     fn initialize(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn connect_async(&mut self) -> Result<Self::Handle, Self::Error> { Ok(StubHandle) }
//! # }
//!
//! let mut module = Module::new(MODULE_DESCRIPTOR, StubStack, ());
//!
//! let info = ModuleInfo { version: MODULE_INFO_VERSION };
//! module.initialize(&InitArgs { module_info: Some(&info) })?;
//! module.application_starts()?;
//! assert_eq!(module.connect_status(), Some(ConnectStatus::Connected));
//! # Ok::<(), homebrew_mqtt::module::Error>(())
//! ```

pub mod descriptor;
pub mod entry;
pub mod error;
pub mod info;
pub mod lifecycle;

pub use descriptor::{Descriptor, MODULE_DESCRIPTOR};
pub use entry::ModuleEntry;
pub use error::Error;
pub use info::{InitArgs, MODULE_INFO_VERSION, ModuleInfo};
pub use lifecycle::{Event, State};

use heapless::Vec;

use crate::network::{ConnectHandle, ConnectStatus, Connectivity};

/// Maximum number of lifecycle transitions retained in the journal.
pub const JOURNAL_CAPACITY: usize = 16;

/// A recorded lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State the module was in when the event arrived.
    pub from: State,
    /// The host notification that triggered the transition.
    pub event: Event,
    /// State the module moved to.
    pub to: State,
}

/// The loader module: descriptor, lifecycle state, the network bring-up
/// facility and the owned MQTT client instance.
///
/// # Type Parameters
///
/// * `N` - The platform network bring-up facility implementing
///   [`Connectivity`]
/// * `C` - The external MQTT client object. The module only owns it as
///   storage; none of its API is exercised here.
pub struct Module<N: Connectivity, C> {
    descriptor: Descriptor,
    state: State,
    journal: Vec<Transition, JOURNAL_CAPACITY>,
    net: N,
    client: C,
    connect: Option<N::Handle>,
}

impl<N: Connectivity, C> Module<N, C> {
    /// Creates a module in the [`State::Loaded`] state.
    ///
    /// The client instance is owned by the module from here on and is
    /// dropped with it.
    pub fn new(descriptor: Descriptor, net: N, client: C) -> Self {
        Self {
            descriptor,
            state: State::Loaded,
            journal: Vec::new(),
            net,
            client,
            connect: None,
        }
    }

    /// The module metadata the loader consumes.
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// The current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// The owned MQTT client instance.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Mutable access to the owned MQTT client instance.
    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    /// The network bring-up facility.
    pub fn connectivity(&self) -> &N {
        &self.net
    }

    /// The recorded lifecycle transitions, oldest first.
    ///
    /// Recording stops once [`JOURNAL_CAPACITY`] transitions have been
    /// captured; the state machine itself is unaffected.
    pub fn journal(&self) -> &[Transition] {
        self.journal.as_slice()
    }

    /// Handles the loader's module-initialize notification.
    ///
    /// Validates the module-information block before anything else: a
    /// missing block fails with [`Error::MissingModuleInfo`] without the
    /// version field ever being read, and a version other than
    /// [`MODULE_INFO_VERSION`] fails with
    /// [`Error::IncompatibleInfoVersion`]. On success no state is captured
    /// from the metadata; the module merely becomes
    /// [`State::Initialized`].
    ///
    /// Both validation failures are unrecoverable by contract. The
    /// host-facing surface in [`entry`] translates them into a diagnostic
    /// halt.
    pub fn initialize(&mut self, args: &InitArgs<'_>) -> Result<(), Error> {
        info::validate(args.module_info)?;
        self.apply(Event::Initialize)
    }

    /// Handles the loader's relocations-done notification.
    ///
    /// Fires after the loader has fixed up position-dependent references
    /// but before the application starts. The module takes no action
    /// beyond recording the transition.
    pub fn relocations_done(&mut self) -> Result<(), Error> {
        self.apply(Event::RelocationsDone)
    }

    /// Handles the application-start notification.
    ///
    /// Initializes the network bring-up facility and dispatches exactly one
    /// asynchronous connection attempt, in that order, without blocking.
    /// The returned handle is retained; its progress is observable through
    /// [`Module::connect_status`].
    pub fn application_starts(&mut self) -> Result<(), Error> {
        self.apply(Event::ApplicationStarts)?;
        self.net.initialize().map_err(|_| Error::BringUpFailed)?;
        let handle = self
            .net
            .connect_async()
            .map_err(|_| Error::ConnectFailed)?;
        self.connect = Some(handle);
        Ok(())
    }

    /// Handles the application exit-request notification.
    ///
    /// No effect beyond the lifecycle transition.
    pub fn application_requests_exit(&mut self) -> Result<(), Error> {
        self.apply(Event::ApplicationRequestsExit)
    }

    /// Handles the application-end notification.
    ///
    /// Drops the retained connect handle; the module stays resident and a
    /// new application may start afterwards.
    pub fn application_ends(&mut self) -> Result<(), Error> {
        self.apply(Event::ApplicationEnds)?;
        self.connect = None;
        Ok(())
    }

    /// Completion check on the connection attempt dispatched at
    /// application start.
    ///
    /// Returns `None` when no attempt is in flight. A handle that fails to
    /// report is treated as [`ConnectStatus::Failed`].
    pub fn connect_status(&mut self) -> Option<ConnectStatus> {
        let handle = self.connect.as_mut()?;
        match handle.status() {
            Ok(status) => Some(status),
            Err(_) => Some(ConnectStatus::Failed),
        }
    }

    fn apply(&mut self, event: Event) -> Result<(), Error> {
        let next = lifecycle::transition(self.state, event)?;
        // Journal is best-effort; the transition itself always happens.
        let _ = self.journal.push(Transition {
            from: self.state,
            event,
            to: next,
        });
        self.state = next;
        Ok(())
    }
}
