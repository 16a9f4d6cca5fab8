use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "which")]
#[command(bin_name = "which")]
#[command(about = "Locate the executable a command name resolves to on PATH")]
#[command(version)]
pub struct Cli {
    /// Command name to look up, or a path to check directly.
    #[arg(allow_hyphen_values = true)]
    pub command: String,

    /// Print every match on PATH instead of only the first.
    #[arg(short, long)]
    pub all: bool,

    /// Report each candidate path as it is probed.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, CommandFactory};

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn exactly_one_command_is_required() {
        let err = Cli::try_parse_from(["which"]).expect_err("missing command");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["which", "ls", "cat"]).expect_err("extra command");
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["which", "-a", "--verbose", "ls"]).expect("valid args");
        assert_eq!(cli.command, "ls");
        assert!(cli.all);
        assert!(cli.verbose);
    }

    #[test]
    fn unknown_hyphenated_word_is_the_command() {
        let cli = Cli::try_parse_from(["which", "-x"]).expect("valid args");
        assert_eq!(cli.command, "-x");
        assert!(!cli.all);

        let cli = Cli::try_parse_from(["which", "-a", "-x"]).expect("valid args");
        assert_eq!(cli.command, "-x");
        assert!(cli.all);
    }
}
