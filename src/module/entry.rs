//! Host-facing hook surface.
//!
//! The loader's hook ABI returns nothing: a hook either completes or the
//! module halts the system. [`ModuleEntry`] wraps a [`Module`] together
//! with a [`FatalHandler`] and performs that translation, so the
//! validation logic underneath stays `Result`-based and testable without
//! triggering a real halt.
//!
//! Only the two loader-contract violations halt. All other hook errors
//! are recorded and observable through [`ModuleEntry::last_error`]; the
//! host ignores hook results, and a misbehaving host must not take the
//! rest of the system down with it.

use super::Module;
use super::error::Error;
use super::info::InitArgs;
use crate::network::Connectivity;
use crate::system::fatal::FatalHandler;

/// Diagnostic shown when the loader provides no module-information block.
pub const MISSING_INFO_DIAGNOSTIC: &str = "Failed to get the module information block.";

/// Diagnostic shown when the module-information structure version does not
/// match.
pub const INFO_VERSION_DIAGNOSTIC: &str =
    "The module information structure version does not match.";

/// The five host lifecycle hooks, with fatal-halt failure semantics.
pub struct ModuleEntry<N: Connectivity, C, F: FatalHandler> {
    module: Module<N, C>,
    fatal: F,
    last_error: Option<Error>,
}

impl<N: Connectivity, C, F: FatalHandler> ModuleEntry<N, C, F> {
    /// Wraps a module and the platform halt facility.
    pub fn new(module: Module<N, C>, fatal: F) -> Self {
        Self {
            module,
            fatal,
            last_error: None,
        }
    }

    /// Module-initialize hook.
    ///
    /// A missing module-information block or a structure-version mismatch
    /// halts through the [`FatalHandler`] with a fixed diagnostic; there
    /// is no continuation and no partial initialization.
    pub fn initialize(&mut self, args: &InitArgs<'_>) {
        match self.module.initialize(args) {
            Ok(()) => {}
            Err(Error::MissingModuleInfo) => self.fatal.fatal(MISSING_INFO_DIAGNOSTIC),
            Err(Error::IncompatibleInfoVersion { .. }) => {
                self.fatal.fatal(INFO_VERSION_DIAGNOSTIC)
            }
            Err(err) => self.last_error = Some(err),
        }
    }

    /// Relocations-done hook.
    pub fn relocations_done(&mut self) {
        let result = self.module.relocations_done();
        self.record(result);
    }

    /// Application-start hook.
    ///
    /// Bring-up errors are recorded, not surfaced; the connection attempt
    /// is fire-and-forget from the host's point of view.
    pub fn application_starts(&mut self) {
        let result = self.module.application_starts();
        self.record(result);
    }

    /// Application exit-request hook.
    pub fn application_requests_exit(&mut self) {
        let result = self.module.application_requests_exit();
        self.record(result);
    }

    /// Application-end hook.
    pub fn application_ends(&mut self) {
        let result = self.module.application_ends();
        self.record(result);
    }

    /// The most recent non-fatal hook error, if any.
    pub fn last_error(&self) -> Option<Error> {
        self.last_error
    }

    /// The wrapped module.
    pub fn module(&self) -> &Module<N, C> {
        &self.module
    }

    /// Mutable access to the wrapped module.
    pub fn module_mut(&mut self) -> &mut Module<N, C> {
        &mut self.module
    }

    /// The wrapped halt facility.
    pub fn fatal_handler(&self) -> &F {
        &self.fatal
    }

    fn record(&mut self, result: Result<(), Error>) {
        if let Err(err) = result {
            self.last_error = Some(err);
        }
    }
}
