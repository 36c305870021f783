//! Host-keyed sheet registry.
//!
//! Associates a stable host identity (a component id, a shadow-root handle,
//! whatever the embedder uses) with the stylesheet most recently built for
//! it. The registry guarantees at most one sheet per host. There is no
//! liveness tracking: the embedder calls [`SheetRegistry::detach`] when a
//! host is destroyed.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::error::Result;
use crate::selector::Selector;
use crate::sheet::StyleSheet;

/// Map from host identities to their stylesheets.
#[derive(Debug, Clone)]
pub struct SheetRegistry<K> {
    sheets: HashMap<K, StyleSheet>,
}

impl<K: Eq + Hash> SheetRegistry<K> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        SheetRegistry {
            sheets: HashMap::new(),
        }
    }

    /// Builds or rebuilds the sheet for `host` and returns it.
    ///
    /// For an unknown host a fresh sheet is built from `root_fragment`. For a
    /// known host the closure is re-run against the existing root
    /// ([`StyleSheet::rebuild`] semantics: prior rules and children
    /// accumulate, and `root_fragment` is ignored since the root path is
    /// immutable). If the closure fails for a known host, the previously
    /// stored sheet is left as it was at the point of failure.
    pub fn attach<F>(
        &mut self,
        host: K,
        root_fragment: impl Into<String>,
        f: F,
    ) -> Result<&StyleSheet>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        match self.sheets.entry(host) {
            Entry::Occupied(entry) => {
                let sheet = entry.into_mut();
                sheet.rebuild(f)?;
                Ok(sheet)
            }
            Entry::Vacant(entry) => Ok(entry.insert(StyleSheet::build(root_fragment, f)?)),
        }
    }

    /// Removes and returns the sheet for `host`. Call when the host is
    /// destroyed so the sheet does not outlive it.
    pub fn detach(&mut self, host: &K) -> Option<StyleSheet> {
        self.sheets.remove(host)
    }

    /// The sheet currently stored for `host`, if any.
    pub fn get(&self, host: &K) -> Option<&StyleSheet> {
        self.sheets.get(host)
    }

    /// Whether a sheet is stored for `host`.
    pub fn contains(&self, host: &K) -> bool {
        self.sheets.contains_key(host)
    }

    /// Number of hosts with a stored sheet.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl<K: Eq + Hash> Default for SheetRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_sheet_per_host() {
        let mut registry: SheetRegistry<u32> = SheetRegistry::new();
        registry
            .attach(7, "button", |b| b.write("color: red;\n"))
            .unwrap();
        registry
            .attach(7, "ignored", |b| b.write("color: red;\n"))
            .unwrap();
        assert_eq!(registry.len(), 1);
        // Second attach rebuilt the existing root, accumulating.
        assert_eq!(
            registry.get(&7).unwrap().to_css(),
            "button {\ncolor: red;\ncolor: red;\n}\n",
        );
        assert_eq!(registry.get(&7).unwrap().root_path(), "button");
    }

    #[test]
    fn detach_removes() {
        let mut registry: SheetRegistry<&str> = SheetRegistry::new();
        registry
            .attach("toast", ".toast", |t| t.write("position: fixed;\n"))
            .unwrap();
        let sheet = registry.detach(&"toast").unwrap();
        assert_eq!(sheet.to_css(), ".toast {\nposition: fixed;\n}\n");
        assert!(!registry.contains(&"toast"));
        assert!(registry.is_empty());
    }

    #[test]
    fn failed_build_stores_nothing() {
        let mut registry: SheetRegistry<u8> = SheetRegistry::new();
        let result = registry.attach(1, "p", |p| {
            p.var("never-defined")?;
            Ok(())
        });
        assert!(result.is_err());
        assert!(!registry.contains(&1));
    }
}
