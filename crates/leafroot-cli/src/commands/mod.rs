//! Subcommand implementations.

pub mod canonicalize;
pub mod commit;
pub mod disclose;
pub mod keywords;
pub mod locate;
pub mod prove;
pub mod verify;
