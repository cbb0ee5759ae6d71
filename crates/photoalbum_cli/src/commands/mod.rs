//! Command handlers, one module per subcommand group.

pub mod album;
pub mod photo;
pub mod search;
pub mod tag;
