//! The loader's module-information contract.
//!
//! At initialization the loader hands the module a metadata block
//! describing the loader/module compatibility surface. The block may be
//! absent (a defective loader) or carry a structure version this module
//! was not built against; both cases are unrecoverable and must stop the
//! module from running under an incompatible host.

use super::error::Error;

/// Module-information structure version this module was built against.
///
/// The loader stamps its own version into [`ModuleInfo::version`]; a
/// mismatch means the structure layouts disagree and nothing read from the
/// block can be trusted.
pub const MODULE_INFO_VERSION: u32 = 1;

/// Host-provided metadata block describing loader/module compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleInfo {
    /// Declared version of the module-information structure.
    pub version: u32,
}

/// Arguments the loader passes to the module-initialize hook.
///
/// The module-information block is optional here because a defective
/// loader may fail to provide one; that case is rejected by
/// [`validate`] before the block is examined in any other way.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitArgs<'a> {
    /// The loader's module-information block, if it provided one.
    pub module_info: Option<&'a ModuleInfo>,
}

/// Validates the loader's module-information block.
///
/// A missing block fails with [`Error::MissingModuleInfo`] before the
/// version field is ever read. A present block whose version differs from
/// [`MODULE_INFO_VERSION`] fails with [`Error::IncompatibleInfoVersion`].
///
/// # Examples
///
/// ```rust
/// use homebrew_mqtt::module::info::{validate, ModuleInfo, MODULE_INFO_VERSION};
/// use homebrew_mqtt::module::Error;
///
/// assert_eq!(validate(None), Err(Error::MissingModuleInfo));
///
/// let info = ModuleInfo { version: MODULE_INFO_VERSION };
/// assert_eq!(validate(Some(&info)), Ok(()));
/// ```
pub fn validate(module_info: Option<&ModuleInfo>) -> Result<(), Error> {
    let info = module_info.ok_or(Error::MissingModuleInfo)?;
    if info.version != MODULE_INFO_VERSION {
        return Err(Error::IncompatibleInfoVersion {
            expected: MODULE_INFO_VERSION,
            found: info.version,
        });
    }
    Ok(())
}
