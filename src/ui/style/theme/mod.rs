mod builtins;
mod types;

pub use types::{Theme, ThemeDefinition};

/// Color scheme applied when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
    builtins::DEFAULT.theme
}

/// Canonical names of the bundled themes, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = builtins::BUILT_IN_DEFINITIONS
        .iter()
        .map(|definition| definition.name)
        .collect();
    names.sort_unstable();
    names
}

/// Look up a bundled theme by name or alias, ignoring case and surrounding
/// whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    let needle = normalize(name);
    builtins::BUILT_IN_DEFINITIONS
        .iter()
        .find(|definition| {
            normalize(definition.name) == needle
                || definition
                    .aliases
                    .iter()
                    .any(|alias| normalize(alias) == needle)
        })
        .map(|definition| definition.theme)
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_sorted() {
        assert_eq!(names(), vec!["light", "slate", "solarized"]);
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert!(by_name("Slate").is_some());
        assert!(by_name("  SOLARIZED ").is_some());
        assert!(by_name("nonexistent").is_none());
    }

    #[test]
    fn default_alias_resolves_to_slate() {
        let theme = by_name("default").expect("alias should resolve");
        assert_eq!(theme.header_bg(), default_theme().header_bg());
    }
}
