//! Command-line argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// A simple text editor, driven from the command line
#[derive(Parser, Debug)]
#[command(name = "notepad", version, about = "Find and replace text in a document")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every occurrence of QUERY in FILE
    Find {
        /// Document to search
        file: PathBuf,

        /// Literal, case-sensitive text to find
        query: String,

        #[command(flatten)]
        match_mode: MatchMode,
    },

    /// Replace every occurrence of QUERY in FILE with REPLACEMENT
    Replace {
        /// Document to edit
        file: PathBuf,

        /// Literal, case-sensitive text to find
        query: String,

        /// Text to insert in place of each match
        replacement: String,

        #[command(flatten)]
        match_mode: MatchMode,

        /// Write the result here instead of overwriting FILE
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Whole-word switches. When neither is given the config default applies;
/// when both are, the last one wins.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchMode {
    /// Only match whole words (delimited by whitespace)
    #[arg(short = 'w', long, overrides_with = "no_whole_word")]
    whole_word: bool,

    /// Match substrings, even when the config enables whole words
    #[arg(long, overrides_with = "whole_word")]
    no_whole_word: bool,
}

impl MatchMode {
    /// Whole-word setting, falling back to `default` when unset.
    pub fn resolve(self, default: bool) -> bool {
        if self.whole_word {
            true
        } else if self.no_whole_word {
            false
        } else {
            default
        }
    }
}

#[cfg(test)]
impl MatchMode {
    pub fn whole_word() -> Self {
        Self {
            whole_word: true,
            no_whole_word: false,
        }
    }

    pub fn substring() -> Self {
        Self {
            whole_word: false,
            no_whole_word: true,
        }
    }
}
