pub mod cli;
pub mod host;

pub use cli::{run, Cli};
pub use host::{GithubActionsHost, Host};
