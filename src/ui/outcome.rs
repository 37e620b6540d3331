use crate::listing::SpeedClass;

/// Captures the outcome of a browsing session.
#[derive(Debug, Clone)]
pub struct BrowseOutcome {
    pub accepted: bool,
    pub selection: Option<AgencySelection>,
    pub query: String,
}

/// The agency highlighted when the session ended.
#[derive(Debug, Clone)]
pub struct AgencySelection {
    pub agency: String,
    pub website: String,
    pub locality: String,
    pub region: String,
    pub class: SpeedClass,
}

impl BrowseOutcome {
    /// Return the selected agency, if the user confirmed one.
    #[must_use]
    pub fn selected_agency(&self) -> Option<&AgencySelection> {
        self.selection.as_ref().filter(|_| self.accepted)
    }
}
