use anyhow::Result;
use serde_json::json;
use tempdex::BrowseOutcome;

/// Print a plain-text representation of the browse outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
    if !outcome.accepted {
        println!("Browse cancelled (query: '{}')", outcome.query);
        return;
    }

    match outcome.selected_agency() {
        Some(selection) => println!(
            "{} ({}, {}) [{}] {}",
            selection.agency,
            selection.locality,
            selection.region,
            selection.class.label(),
            selection.website,
        ),
        None => println!("No selection"),
    }
}

/// Format the browse outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
    let selection = match outcome.selected_agency() {
        Some(selection) => json!({
            "agency": selection.agency,
            "website": selection.website,
            "locality": selection.locality,
            "region": selection.region,
            "speed": selection.class.label(),
        }),
        None => serde_json::Value::Null,
    };

    let payload = json!({
        "accepted": outcome.accepted,
        "query": outcome.query,
        "selection": selection,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the browse outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}
