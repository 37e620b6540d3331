use clap::ValueEnum;

/// Tabs selectable from the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub(crate) enum TabArg {
    Browse,
    Compare,
    Feedback,
}

impl TabArg {
    /// Return the string representation consumed by configuration loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TabArg::Browse => "browse",
            TabArg::Compare => "compare",
            TabArg::Feedback => "feedback",
        }
    }
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
