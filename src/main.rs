mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::BrowseWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in tempdex::theme_names() {
            println!("{name}");
        }
        return Ok(());
    }

    tempdex::logging::init();

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    run_browser(cli.output, resolved)
}

/// Execute the browse workflow and print output in the chosen format.
fn run_browser(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
    let workflow = BrowseWorkflow::from_config(settings)?;
    let outcome = workflow.run()?;

    match format {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(())
}
