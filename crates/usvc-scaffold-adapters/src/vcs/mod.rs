//! Version-control adapters.

mod git;

pub use git::{GitCli, INITIAL_COMMIT_MESSAGE};
