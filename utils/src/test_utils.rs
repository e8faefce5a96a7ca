use std::{
    collections::HashMap,
    sync::{LazyLock, Mutex},
    thread::{self, ThreadId},
};

use miette::{Result, miette};

static ENV_VARS: LazyLock<Mutex<HashMap<ThreadId, HashMap<String, String>>>> =
    LazyLock::new(Mutex::default);

/// Test stand-in for [`crate::get_env_var`] backed by a
/// per-thread map so parallel tests don't trample each other.
///
/// # Errors
/// Will error if the variable was never set on this thread.
///
/// # Panics
/// Will panic if the map lock is poisoned.
pub fn get_env_var<S>(key: S) -> Result<String>
where
    S: AsRef<str>,
{
    let key = key.as_ref();

    ENV_VARS
        .lock()
        .unwrap()
        .get(&thread::current().id())
        .and_then(|vars| vars.get(key).cloned())
        .ok_or_else(|| miette!("Failed to retrieve env var '{key}'"))
}

/// Sets a variable visible only to [`get_env_var`] calls
/// made from the current thread.
///
/// # Panics
/// Will panic if the map lock is poisoned.
pub fn set_env_var<S, T>(key: S, value: T)
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    ENV_VARS
        .lock()
        .unwrap()
        .entry(thread::current().id())
        .or_default()
        .insert(key.as_ref().to_owned(), value.as_ref().to_owned());
}
