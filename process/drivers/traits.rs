use std::path::Path;

use miette::Result;

use super::{
    opts::{BuildOpts, LoginOpts, PushOpts},
    types::CiContext,
};

/// Allows agnostic login, building, pushing,
/// and credential cleanup.
///
/// Every operation is attempted exactly once. The first
/// failure is expected to abort the run, so implementations
/// should surface the external command's own diagnostic text
/// instead of wrapping it.
pub trait BuildDriver {
    /// Runs the registry login logic for the driver.
    ///
    /// # Errors
    /// Will error if login fails.
    fn login(&self, opts: &LoginOpts) -> Result<()>;

    /// Runs the build logic for the driver.
    ///
    /// # Errors
    /// Will error if the build fails.
    fn build(&self, opts: &BuildOpts) -> Result<()>;

    /// Runs the push logic for the driver.
    ///
    /// # Errors
    /// Will error if the push fails.
    fn push(&self, opts: &PushOpts) -> Result<()>;

    /// Removes the persisted login credential file.
    ///
    /// Fire-and-forget: the outcome is intentionally discarded
    /// and must never fail the run. The operation still goes
    /// through this trait so tests can assert it was attempted.
    fn remove_config(&self, path: &Path);
}

/// Allows agnostic retrieval of CI-based information
/// and reporting of run outputs.
pub trait CiDriver {
    /// Captures the ambient context supplied by the CI environment.
    ///
    /// # Errors
    /// Will error if the environment variables aren't set.
    fn ci_context() -> Result<CiContext>;

    /// Makes a named output value available to downstream
    /// consumers of the run.
    ///
    /// # Errors
    /// Will error if the output can't be written.
    fn set_output(name: &str, value: &str) -> Result<()>;
}
