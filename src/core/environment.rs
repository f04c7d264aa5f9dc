//! Child-process environments.
//!
//! An [`Environment`] is an owned snapshot; building one never touches the
//! environment of this process.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

use crate::identity::BuildIdentity;

pub const CFG_IS_STABLE: &str = "CFG_IS_STABLE";
pub const CFG_VERSION_STR: &str = "CFG_VERSION_STR";
pub const CARGO_TARGET_DIR: &str = "CARGO_TARGET_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<OsString, OsString>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current process environment, including non-UTF-8 entries.
    pub fn from_process() -> Self {
        std::env::vars_os().collect()
    }

    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    /// Value as UTF-8, `None` when unset or not valid unicode.
    pub fn get_str(&self, key: impl AsRef<OsStr>) -> Option<&str> {
        self.get(key).and_then(OsStr::to_str)
    }

    pub fn contains_key(&self, key: impl AsRef<OsStr>) -> bool {
        self.vars.contains_key(key.as_ref())
    }

    /// Return a copy with `key` set to `value`.
    pub fn with(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, OsString, OsString> {
        self.vars.iter()
    }
}

impl<K: Into<OsString>, V: Into<OsString>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = (&'a OsString, &'a OsString);
    type IntoIter = btree_map::Iter<'a, OsString, OsString>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}

/// Overlay the build identity onto a copy of `base`.
///
/// Every key of `base` survives; only `CFG_IS_STABLE` and `CFG_VERSION_STR`
/// are added or overwritten, so applying this twice yields the same map.
pub fn build_environment(identity: &BuildIdentity, base: &Environment) -> Environment {
    base.clone()
        .with(CFG_IS_STABLE, identity.channel.is_stable().to_string())
        .with(CFG_VERSION_STR, identity.version_string())
}
