//! Where a listing page's state lives in the URL.

/// The two URL parameters a listing page owns: the JSON inquiry and the
/// human-readable mode. Blank values are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListingLocation {
    pub input: Option<String>,
    pub mode: Option<String>,
}

impl ListingLocation {
    pub fn new(input: Option<String>, mode: Option<String>) -> Self {
        Self {
            input: input.filter(|v| !v.trim().is_empty()),
            mode: mode.filter(|v| !v.trim().is_empty()),
        }
    }

    /// The page's bare URL, keeping only the mode parameter.
    pub fn canonical(mode: Option<String>) -> Self {
        Self::new(None, mode)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// New back-button entry.
    Push,
    /// Overwrite the current entry.
    Replace,
}

/// Non-reloading navigation.
pub trait Navigator {
    fn navigate(&self, location: &ListingLocation, history: HistoryMode);
}
