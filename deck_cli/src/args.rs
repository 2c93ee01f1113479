use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use crate::commands::{DEFAULT_DECK_PATH, DEFAULT_HAND_SIZE};

#[derive(Parser, Debug)]
#[command(name = "deck", about = "Create, shuffle and deal a deck of cards stored in a text file")]
#[command(arg_required_else_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Print the session log to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Seed for shuffling (defaults to the current time)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Use an unbiased Fisher-Yates shuffle
    #[arg(long, global = true)]
    pub uniform: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Write a new ordered deck")]
    New {
        #[arg(long, default_value = DEFAULT_DECK_PATH)]
        out: PathBuf,
    },
    #[command(about = "Shuffle a deck file")]
    Shuffle {
        #[arg(long = "in", value_name = "PATH")]
        input: PathBuf,
        /// Defaults to --in
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    #[command(about = "Deal a hand off the top of a deck file")]
    Deal {
        #[arg(long = "in", value_name = "PATH")]
        input: PathBuf,
        #[arg(long, default_value_t = DEFAULT_HAND_SIZE, allow_negative_numbers = true)]
        hand: i64,
    },
}

/// Help and version requests succeed; everything else is a usage error.
pub fn exit_code_for(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_to_assets_path() {
        let args = Args::try_parse_from(["deck", "new"]).unwrap();
        match args.command {
            Commands::New { out } => assert_eq!(out, PathBuf::from("assets/my_cards.txt")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn deal_defaults_to_five() {
        let args = Args::try_parse_from(["deck", "deal", "--in", "d.txt"]).unwrap();
        match args.command {
            Commands::Deal { input, hand } => {
                assert_eq!(input, PathBuf::from("d.txt"));
                assert_eq!(hand, 5);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn deal_accepts_negative_hand() {
        let args = Args::try_parse_from(["deck", "deal", "--in", "d.txt", "--hand", "-1"]).unwrap();
        assert!(matches!(args.command, Commands::Deal { hand: -1, .. }));
    }

    #[test]
    fn shuffle_takes_global_flags() {
        let args = Args::try_parse_from(["deck", "shuffle", "--in", "d.txt", "--seed", "9", "--uniform"])
            .unwrap();
        assert_eq!(args.seed, Some(9));
        assert!(args.uniform);
        assert!(matches!(args.command, Commands::Shuffle { out: None, .. }));
    }

    #[test]
    fn missing_in_is_an_error() {
        let err = Args::try_parse_from(["deck", "shuffle"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn unknown_subcommand_is_an_error() {
        let err = Args::try_parse_from(["deck", "juggle"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn positional_args_are_rejected() {
        let err = Args::try_parse_from(["deck", "new", "extra"]).unwrap_err();
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn help_exits_zero_and_no_args_exits_one() {
        for argv in [vec!["deck", "--help"], vec!["deck", "-h"], vec!["deck", "help"]] {
            let err = Args::try_parse_from(argv).unwrap_err();
            assert_eq!(exit_code_for(&err), 0);
        }
        let err = Args::try_parse_from(["deck"]).unwrap_err();
        assert_eq!(exit_code_for(&err), 1);
    }
}
