//! Module metadata consumed by the host loader.
//!
//! The loader reads the descriptor before or at load time: the export name
//! it registers the module under, authorship and version strings, and the
//! names of other modules this one depends on. A declared dependency makes
//! the loader initialize that module first and refuse to load this one if
//! it is absent.

use heapless::String;
use serde::Serialize;

use super::error::Error;

/// Maximum length of a rendered descriptor manifest.
pub const MANIFEST_MAX_LEN: usize = 256;

/// Static module metadata.
///
/// All fields are `'static` string data baked into the module image, the
/// same way the loader expects to find them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    /// Export name the loader registers the module under.
    pub name: &'static str,
    /// Module author(s).
    pub author: &'static str,
    /// Module version string.
    pub version: &'static str,
    /// Module license string.
    pub license: &'static str,
    /// One-line module description.
    pub description: &'static str,
    /// Export names of modules that must be loaded and initialized before
    /// this one.
    pub dependencies: &'static [&'static str],
}

/// Descriptor of the MQTT broker module itself.
pub const MODULE_DESCRIPTOR: Descriptor = Descriptor {
    name: "homebrew_mqtt",
    author: "ItzSwirlz + Wii U Smart Home Project Team",
    version: "0.1",
    license: "TBD",
    description: "MQTT broker",
    dependencies: &[],
};

impl Descriptor {
    /// Renders the descriptor as a JSON manifest for host tooling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferOverflow`] if the rendered manifest does not
    /// fit in [`MANIFEST_MAX_LEN`] bytes.
    pub fn to_json(&self) -> Result<String<MANIFEST_MAX_LEN>, Error> {
        let mut buf = [0u8; MANIFEST_MAX_LEN];
        let len = serde_json_core::to_slice(self, &mut buf).map_err(|_| Error::BufferOverflow)?;
        let text = core::str::from_utf8(&buf[..len]).map_err(|_| Error::BufferOverflow)?;
        String::try_from(text).map_err(|_| Error::BufferOverflow)
    }
}
