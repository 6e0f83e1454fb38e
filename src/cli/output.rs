use clap::ValueEnum;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for terminals
    #[default]
    Human,
    /// Machine-readable JSON on stdout
    Json,
}
