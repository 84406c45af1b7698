//! Command handlers. Each one turns parsed arguments into core calls and
//! renders the result.

pub mod completions;
pub mod create;
