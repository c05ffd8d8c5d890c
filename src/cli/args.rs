//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

const TREE_HELP: &str = "Tree: `fixture:K`, comma-separated values (e.g. 5,3,8), or `-` for empty";

/// Concurrent binary tree equivalence: walk trees on channels and compare in lockstep
#[derive(Parser, Debug)]
#[command(name = "treesame")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Seed for fixture shapes (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Config file (layered over the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a tree's in-order sequence
    Walk {
        #[arg(help = TREE_HELP, allow_hyphen_values = true)]
        tree: String,
    },

    /// Check whether two trees hold the same sequence (exit 1 if not)
    Same {
        #[arg(help = TREE_HELP, allow_hyphen_values = true)]
        left: String,
        #[arg(help = TREE_HELP, allow_hyphen_values = true)]
        right: String,
        /// Explain where the sequences differ
        #[arg(short, long)]
        explain: bool,
    },

    /// Draw a tree's shape
    Show {
        #[arg(help = TREE_HELP, allow_hyphen_values = true)]
        tree: String,
    },

    /// Walk fixture:1, then compare fixture:1 with fixture:1 and fixture:2
    Demo,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Print a commented config template
    Template,
    /// Print the global config file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_negative_values_when_parsing_walk_then_accepts_them() {
        let cli = Cli::try_parse_from(["treesame", "walk", "-3,1,2"]).unwrap();
        match cli.command {
            Some(Commands::Walk { tree }) => assert_eq!(tree, "-3,1,2"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn given_same_with_flags_when_parsing_then_reads_sources_and_globals() {
        let cli = Cli::try_parse_from([
            "treesame", "same", "fixture:1", "-", "--explain", "-dd", "--seed", "7",
        ])
        .unwrap();

        assert_eq!(cli.debug, 2);
        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Some(Commands::Same {
                left,
                right,
                explain,
            }) => {
                assert_eq!(left, "fixture:1");
                assert_eq!(right, "-");
                assert!(explain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
