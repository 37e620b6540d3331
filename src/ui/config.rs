//! Tabs and the text shown around the UI chrome.

use std::fmt;

/// The three top-level views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Browse,
    Compare,
    Feedback,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Browse, Tab::Compare, Tab::Feedback];

    /// Stable identifier used by configuration and the CLI.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Tab::Browse => "browse",
            Tab::Compare => "compare",
            Tab::Feedback => "feedback",
        }
    }

    /// Resolve an identifier, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "browse" => Some(Tab::Browse),
            "compare" => Some(Tab::Compare),
            "feedback" => Some(Tab::Feedback),
            _ => None,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Tab::Browse => Tab::Compare,
            Tab::Compare => Tab::Feedback,
            Tab::Feedback => Tab::Browse,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Tab::Browse => Tab::Feedback,
            Tab::Compare => Tab::Browse,
            Tab::Feedback => Tab::Compare,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Label and hint for one tab.
#[derive(Debug, Clone)]
pub struct TabLabels {
    pub tab: Tab,
    pub label: String,
    pub hint: String,
}

impl TabLabels {
    #[must_use]
    pub fn new(tab: Tab, label: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            tab,
            label: label.into(),
            hint: hint.into(),
        }
    }
}

/// Text used by the UI when rendering pane content and tab labels.
#[derive(Debug, Clone)]
pub struct UiLabels {
    pub location_panel_title: String,
    pub detail_panel_title: String,
    pub table_title: String,
    pub count_label: String,
    pub empty_message: String,
    tabs: Vec<TabLabels>,
}

impl Default for UiLabels {
    fn default() -> Self {
        Self {
            location_panel_title: "Location".to_string(),
            detail_panel_title: "Agency detail".to_string(),
            table_title: "Agencies".to_string(),
            count_label: "matches".to_string(),
            empty_message: "No agencies match".to_string(),
            tabs: vec![
                TabLabels::new(
                    Tab::Browse,
                    "Browse",
                    "Type to search. Ctrl+R region, Ctrl+L city, Ctrl+F industry, Ctrl+N notes.",
                ),
                TabLabels::new(
                    Tab::Compare,
                    "Compare",
                    "Side-by-side look at agency speed versus job boards.",
                ),
                TabLabels::new(
                    Tab::Feedback,
                    "Feedback",
                    "Prompts for validating the sample data. Nothing is saved.",
                ),
            ],
        }
    }
}

impl UiLabels {
    /// Return all tabs in display order.
    #[must_use]
    pub fn tabs(&self) -> &[TabLabels] {
        &self.tabs
    }

    /// Label displayed on the tab itself.
    #[must_use]
    pub fn tab_label(&self, tab: Tab) -> &str {
        self.entry(tab).map(|entry| entry.label.as_str()).unwrap_or("")
    }

    /// Hint line displayed under the active pane.
    #[must_use]
    pub fn tab_hint(&self, tab: Tab) -> &str {
        self.entry(tab).map(|entry| entry.hint.as_str()).unwrap_or("")
    }

    fn entry(&self, tab: Tab) -> Option<&TabLabels> {
        self.tabs.iter().find(|entry| entry.tab == tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::from_id(" BROWSE "), Some(Tab::Browse));
        assert_eq!(Tab::from_id("settings"), None);
    }

    #[test]
    fn next_and_previous_cycle() {
        for tab in Tab::ALL {
            assert_eq!(tab.next().previous(), tab);
        }
        assert_eq!(Tab::Feedback.next(), Tab::Browse);
    }

    #[test]
    fn default_labels_cover_every_tab() {
        let labels = UiLabels::default();
        for tab in Tab::ALL {
            assert!(!labels.tab_label(tab).is_empty());
            assert!(!labels.tab_hint(tab).is_empty());
        }
    }
}
