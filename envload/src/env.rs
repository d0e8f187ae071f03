//! Environment lookup

use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};

/// Read-only key/value source the loader takes its text from.
///
/// [`ProcessEnv`] reads the real process environment. Maps implement the
/// trait too, so tests can supply a fake environment without touching
/// process state:
///
/// ```
/// use std::collections::HashMap;
/// use std::env::VarError;
/// use envload::Environment;
///
/// let env = HashMap::from([("PORT".to_string(), "9999".to_string())]);
/// assert_eq!(Environment::get(&env, "PORT").as_deref(), Ok("9999"));
/// assert_eq!(Environment::get(&env, "HOST"), Err(VarError::NotPresent));
/// ```
pub trait Environment {
    /// Value of `key`, with the same error cases as [`std::env::var`].
    fn get(&self, key: &str) -> Result<String, VarError>;
}

/// The process environment.
///
/// Values that are not valid unicode are reported as
/// [`VarError::NotUnicode`], never converted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Result<String, VarError> {
        env::var(key)
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn get(&self, key: &str) -> Result<String, VarError> {
        (**self).get(key)
    }
}

impl<S: std::hash::BuildHasher> Environment for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Result<String, VarError> {
        HashMap::get(self, key).cloned().ok_or(VarError::NotPresent)
    }
}

impl Environment for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Result<String, VarError> {
        BTreeMap::get(self, key).cloned().ok_or(VarError::NotPresent)
    }
}
