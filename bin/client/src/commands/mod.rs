//! Contains subcommands for the client.

mod result;
pub use result::ResultCommand;

mod call;
pub use call::CallCommand;

mod logs;
pub use logs::LogsCommand;

mod info;
pub use info::InfoCommand;
