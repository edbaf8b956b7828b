pub mod error;
pub mod process;

pub use error::{LauncherError, Result};
pub use process::{ProcessExecutor, ShellCommand};
