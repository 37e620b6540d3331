use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
    println!("Effective configuration:");
    match &config.dataset_path {
        Some(path) => println!("  Dataset: {}", path.display()),
        None => println!("  Dataset: bundled sample"),
    }
    println!(
        "  State: {}",
        config.region.as_deref().unwrap_or("(first in dataset)")
    );
    println!(
        "  City: {}",
        config.locality.as_deref().unwrap_or("(first in state)")
    );
    println!("  Industry filter: {}", config.industry);
    println!("  Risk notes: {}", bool_to_word(config.show_risk_notes));
    println!(
        "  UI theme: {}",
        config.theme.as_deref().unwrap_or("(use the library default)")
    );
    println!(
        "  Start tab: {}",
        config
            .start_tab
            .map(|tab| tab.id().to_string())
            .unwrap_or_else(|| "browse".to_string())
    );
    if let Some(title) = &config.input_title {
        println!("  Prompt title: {title}");
    }
    if !config.initial_query.is_empty() {
        println!("  Initial query: {}", config.initial_query);
    }
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempdex::{IndustryFilter, Tab};

    use super::*;

    #[test]
    fn bool_to_word_matches_expectations() {
        assert_eq!(bool_to_word(true), "on");
        assert_eq!(bool_to_word(false), "off");
    }

    #[test]
    fn summary_prints_without_panic() {
        let config = ResolvedConfig {
            dataset_path: Some(PathBuf::from("/tmp/agencies.json")),
            region: Some("NV".into()),
            locality: Some("Las Vegas".into()),
            input_title: Some("Search".into()),
            initial_query: "warehouse".into(),
            theme: Some("slate".into()),
            start_tab: Some(Tab::Compare),
            industry: IndustryFilter::parse("IT Support"),
            show_risk_notes: true,
        };

        print_summary(&config);
    }
}
