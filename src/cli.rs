// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
//   gh-activity <USERNAME>... [--by-repo] [--api-url URL] [-v...]
//
// All positional words are joined with spaces into the username, so a
// missing username is caught by clap itself (usage on stderr, exit 2).
// =============================================================================

use clap::{ArgAction, Parser};

use crate::activity::Grouping;
use crate::github::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(
    name = "gh-activity",
    version,
    about = "Summarize a GitHub user's recent public activity",
    long_about = "gh-activity fetches the public event feed of a GitHub user and prints \
                  one line per kind of activity: commits pushed, pull requests, issues, \
                  stars, forks, branches and tags, releases and wiki edits."
)]
pub struct Cli {
    /// GitHub username (multiple words are joined with spaces)
    #[arg(required = true, value_name = "USERNAME")]
    pub username: Vec<String>,

    /// Print one block of lines per repository instead of one overall block
    #[arg(short = 'r', long)]
    pub by_repo: bool,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GH_ACTIVITY_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The username as the API should see it
    pub fn username(&self) -> String {
        self.username.join(" ").trim().to_string()
    }

    pub fn grouping(&self) -> Grouping {
        if self.by_repo {
            Grouping::ByRepository
        } else {
            Grouping::Overall
        }
    }
}
