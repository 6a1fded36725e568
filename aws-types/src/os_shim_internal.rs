/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstraction over the process environment so that configuration loading can be tested
//! without mutating global state.

use std::collections::HashMap;
use std::env::VarError;
use std::fmt;
use std::sync::Arc;

/// Environment variable abstraction
///
/// Environment variables are global to a process and therefore hard to test with a
/// multi-threaded test runner. `Env` reads either from the real process environment
/// ([`std::env::var`](std::env::var)) or from a map supplied by the test.
///
/// Cloning is cheap: fake environments live behind an `Arc`.
#[derive(Clone)]
pub struct Env(Arc<Inner>);

enum Inner {
    Real,
    Fake(HashMap<String, String>),
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_ref() {
            Inner::Real => f.write_str("Env::Real"),
            Inner::Fake(vars) => f
                .debug_tuple("Env::Fake")
                .field(&vars.keys().collect::<Vec<_>>())
                .finish(),
        }
    }
}

impl Env {
    pub fn get(&self, k: &str) -> Result<String, VarError> {
        match self.0.as_ref() {
            Inner::Real => std::env::var(k),
            Inner::Fake(map) => map.get(k).cloned().ok_or(VarError::NotPresent),
        }
    }

    /// Like [`Env::get`] but treats a value made only of whitespace as absent.
    pub fn get_non_blank(&self, k: &str) -> Option<String> {
        self.get(k).ok().filter(|value| !value.trim().is_empty())
    }

    /// Create a fake process environment from a slice of tuples.
    ///
    /// # Example
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let mock_env = Env::from_slice(&[("AWS_REGION", "eu-west-1")]);
    /// assert_eq!(mock_env.get("AWS_REGION").unwrap(), "eu-west-1");
    /// ```
    pub fn from_slice<'a>(vars: &[(&'a str, &'a str)]) -> Self {
        Self(Arc::new(Inner::Fake(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )))
    }

    /// Create a process environment that delegates to [`std::env::var`](std::env::var).
    pub fn real() -> Self {
        Self(Arc::new(Inner::Real))
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(hash_map: HashMap<String, String>) -> Self {
        Self(Arc::new(Inner::Fake(hash_map)))
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use std::env::VarError;

    #[test]
    fn env_works() {
        let env = Env::from_slice(&[("FOO", "BAR"), ("BLANK", "  ")]);
        assert_eq!(env.get("FOO").unwrap(), "BAR");
        assert_eq!(
            env.get("OTHER").expect_err("not present"),
            VarError::NotPresent
        );
        assert_eq!(env.get_non_blank("BLANK"), None);
        assert_eq!(env.get_non_blank("FOO").as_deref(), Some("BAR"));
    }
}
