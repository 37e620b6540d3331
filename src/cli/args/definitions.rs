use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, TabArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `tempdex` binary.
#[derive(Parser, Debug)]
#[command(
    name = "tempdex",
    version,
    long_version = long_version(),
    about = "Terminal browser for temp staffing-agency listings",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "TEMPDEX_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'd',
        long = "data",
        value_name = "FILE",
        help = "Load the agency dataset from a JSON file (default: bundled sample)"
    )]
    pub(crate) data: Option<PathBuf>,
    #[arg(
        short = 'r',
        long,
        value_name = "CODE",
        help = "Select the initial state by code (default: first in the dataset)"
    )]
    pub(crate) region: Option<String>,
    #[arg(
        long,
        value_name = "NAME",
        help = "Select the initial city by name (default: first in the state)"
    )]
    pub(crate) city: Option<String>,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        short = 'i',
        long,
        value_name = "LABEL",
        help = "Filter agencies by industry label; pass 'all' to clear (default: all)"
    )]
    pub(crate) industry: Option<String>,
    #[arg(
        long = "tab",
        value_enum,
        help = "Choose the tab shown on startup (default: browse)"
    )]
    pub(crate) tab: Option<TabArg>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: library theme)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long = "risk-notes",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        help = "Show risk notes in the sidebar and detail panes (default: disabled)"
    )]
    pub(crate) risk_notes: Option<bool>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the input prompt title (default: Search)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}
