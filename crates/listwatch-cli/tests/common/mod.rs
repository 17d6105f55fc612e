#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Environment variables the binary recognizes; scrubbed so values leaking
/// from the test runner's environment cannot influence a test.
const RECOGNIZED_VARS: &[&str] = &[
    "SEARCH_URL",
    "START_URL",
    "SEARCH_TERM_1",
    "SEARCH_TERM_2",
    "EXCLUDE_TERM_1",
    "LISTWATCH_DB",
    "LISTWATCH_ID_POLICY",
    "LISTWATCH_STRICT_EXCLUDE",
];

/// Create a `listwatch` command with a scrubbed environment, rooted in
/// `work_dir` so neither a stray `.env` nor a default `scrape.db` can land in
/// the repository.
#[allow(dead_code)]
pub fn listwatch_cmd(work_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("listwatch"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.current_dir(work_dir);
    for var in RECOGNIZED_VARS {
        cmd.env_remove(var);
    }
    cmd
}
