//! Module grouping: attach methods and helpers to their owning module.

use crate::entry::Entry;
use serde::Serialize;

/// A module-root entry together with the entries it owns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleEntry {
    #[serde(flatten)]
    pub entry: Entry,
    /// Non-global entries whose parent is this module
    pub methods: Vec<Entry>,
    /// Global entries whose global owner is this module
    pub helpers: Vec<Entry>,
    pub has_globals: bool,
}

impl ModuleEntry {
    pub fn name(&self) -> &str {
        &self.entry.name
    }
}

/// Group entries under every module root, preserving input order.
///
/// Entries that match no module are left out of the grouped view. A module
/// whose own parent equals its name lists itself among its methods.
pub fn group_into_modules(entries: &[Entry]) -> Vec<ModuleEntry> {
    entries
        .iter()
        .filter(|e| e.module)
        .map(|module| {
            let methods: Vec<Entry> = entries
                .iter()
                .filter(|e| e.parent == module.name && !e.is_global)
                .cloned()
                .collect();
            let helpers: Vec<Entry> = entries
                .iter()
                .filter(|e| e.is_global && e.global == module.name)
                .cloned()
                .collect();
            ModuleEntry {
                entry: module.clone(),
                methods,
                has_globals: !helpers.is_empty(),
                helpers,
            }
        })
        .collect()
}
