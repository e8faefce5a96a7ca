pub mod constants;
pub mod logging;
pub mod secret;

#[cfg(feature = "test")]
pub mod test_utils;

mod macros;

use std::{env, ffi::OsStr, io::Write, path::PathBuf};

use log::trace;
use miette::{IntoDiagnostic, Result, miette};

/// Retrieves an environment variable.
///
/// # Errors
/// Will error if the env variable doesn't exist.
pub fn get_env_var<S>(key: S) -> Result<String>
where
    S: AsRef<str>,
{
    fn inner(key: &str) -> Result<String> {
        env::var(key)
            .inspect(|value| trace!("{key}={value}"))
            .map_err(|e| miette!("Failed to retrieve env var '{key}': {e}"))
    }
    inner(key.as_ref())
}

/// Appends a line to a file, creating the file if needed.
///
/// # Errors
/// Will error if it fails to append to the file.
pub fn append_to_file<T: Into<PathBuf> + AsRef<OsStr>>(file_path: &T, content: &str) -> Result<()> {
    let file_path: PathBuf = file_path.into();
    trace!("append_to_file({}, {content})", file_path.display());

    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(file_path)
        .into_diagnostic()?;

    writeln!(file, "{content}").into_diagnostic()?;
    Ok(())
}
