//! Forward chain parsing.

/// A comma-separated list of subscriber URLs.
///
/// The raw string is kept as configured and split on every call to
/// [`ForwardChain::targets`].
#[derive(Debug, Clone, Default)]
pub struct ForwardChain {
    raw: Option<String>,
}

impl ForwardChain {
    pub fn new(raw: Option<String>) -> Self {
        Self { raw }
    }

    /// True when nothing is configured or the configured string is blank.
    pub fn is_empty(&self) -> bool {
        self.raw.as_deref().map_or(true, |s| s.trim().is_empty())
    }

    /// Non-empty targets in chain order. Duplicates are kept.
    pub fn targets(&self) -> Vec<String> {
        match self.raw.as_deref() {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }
}
