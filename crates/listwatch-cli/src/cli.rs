//! Command-line interface definition.
//!
//! Every recognized environment variable is also a flag, so the tool works
//! identically from a `.env` file, a cron environment, or the shell.

use clap::{Parser, ValueEnum};
use listwatch_core::{Config, IdPolicy, DEFAULT_DB_PATH};
use std::path::PathBuf;

/// Watch a listing page and report links never seen before.
#[derive(Parser, Debug, Clone)]
#[command(name = "listwatch", version, about)]
pub struct Cli {
    /// Page to fetch. Without it the run exits cleanly with a notice.
    #[arg(long, env = "SEARCH_URL")]
    pub search_url: Option<String>,

    /// Base URL that relative links are resolved against
    #[arg(long, env = "START_URL", default_value = "")]
    pub start_url: String,

    /// First inclusion substring; links containing it always pass
    #[arg(long = "term1", env = "SEARCH_TERM_1", default_value = "")]
    pub term1: String,

    /// Second inclusion substring; suppressed by the exclude term
    #[arg(long = "term2", env = "SEARCH_TERM_2", default_value = "")]
    pub term2: String,

    /// Exclusion substring
    #[arg(long = "exclude", env = "EXCLUDE_TERM_1", default_value = "")]
    pub exclude: String,

    /// Apply the exclude term to both inclusion terms
    #[arg(long, env = "LISTWATCH_STRICT_EXCLUDE", default_value_t = false)]
    pub strict_exclude: bool,

    /// Identifier derivation policy
    #[arg(long, env = "LISTWATCH_ID_POLICY", value_enum, default_value_t = IdPolicyArg::Numeric)]
    pub id_policy: IdPolicyArg,

    /// Seen-set store location
    #[arg(long = "db", env = "LISTWATCH_DB", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// CLI-facing spelling of [`IdPolicy`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum IdPolicyArg {
    /// First all-digit path segment, falling back to the full URL
    Numeric,
    /// The resolved URL verbatim
    Raw,
}

impl From<IdPolicyArg> for IdPolicy {
    fn from(arg: IdPolicyArg) -> Self {
        match arg {
            IdPolicyArg::Numeric => Self::Numeric,
            IdPolicyArg::Raw => Self::Raw,
        }
    }
}

impl Cli {
    /// Converts parsed arguments into the run configuration.
    pub fn into_config(self) -> Config {
        Config {
            start_url: self.start_url,
            search_url: self.search_url,
            term1: self.term1,
            term2: self.term2,
            exclude: self.exclude,
            strict_exclude: self.strict_exclude,
            id_policy: self.id_policy.into(),
            db_path: self.db_path,
        }
    }
}
