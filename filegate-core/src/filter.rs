//! Extension filter sets

use serde::{Deserialize, Serialize};

/// Case-insensitive set of file-extension tokens, built once from a
/// `;`-delimited list and immutable afterwards.
///
/// An empty set means "no filter active": the enumerator skips the filter
/// step entirely instead of consulting [`FilterSet::matches`]. This keeps an
/// explicitly-empty filter distinct from a filter that is present but matches
/// nothing, so `matches` on an empty set returns `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    extensions: Vec<String>,
}

impl FilterSet {
    /// Build a filter set from a `;`-delimited extension list (tokens carry
    /// no leading dot). Empty tokens are dropped; duplicates are harmless
    /// because membership short-circuits on first match.
    pub fn parse(filter_list: &str) -> Self {
        let extensions = filter_list
            .split(';')
            .filter(|token| !token.is_empty())
            .map(str::to_ascii_lowercase)
            .collect();
        Self { extensions }
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn matches(&self, extension: &str) -> bool {
        let extension = extension.to_ascii_lowercase();
        self.extensions.iter().any(|ext| *ext == extension)
    }
}
