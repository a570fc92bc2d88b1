//! CLI argument definitions.
//!
//! The diagnostic takes no positional arguments; the flags below only
//! change how the report is shown.

use clap::Parser;

use crate::ui::OutputMode;

/// Check that the Tavily MCP integration is set up correctly.
#[derive(Debug, Parser)]
#[command(name = "tavily-doctor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show warnings and errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging (to stderr)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_is_normal_mode() {
        let cli = Cli::try_parse_from(["tavily-doctor"]).unwrap();
        assert!(!cli.quiet);
        assert!(!cli.debug);
        assert!(!cli.no_color);
        assert_eq!(cli.output_mode(), OutputMode::Normal);
    }

    #[test]
    fn quiet_flag_selects_quiet_mode() {
        let cli = Cli::try_parse_from(["tavily-doctor", "-q"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn debug_and_no_color_flags() {
        let cli = Cli::try_parse_from(["tavily-doctor", "--debug", "--no-color"]).unwrap();
        assert!(cli.debug);
        assert!(cli.no_color);
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["tavily-doctor", "extra"]).is_err());
    }
}
