use crate::core::error::Result;
use crate::core::{ProcessExecutor, ShellCommand};
use crate::env;

/// The command handed to the host shell. Never built from input.
pub const STREAMLIT_COMMAND: &str = "streamlit run src/streamlit_app/main.py";

#[derive(Debug, Default)]
pub struct Launcher;

impl Launcher {
    pub fn new() -> Self {
        Self
    }

    pub fn shell_command(&self) -> ShellCommand {
        ShellCommand::new(STREAMLIT_COMMAND)
    }

    /// Load `.env`, then run the app and wait for it.
    ///
    /// The child's exit status is not turned into an error; only a failure
    /// to start the shell is.
    pub async fn run(&self) -> Result<()> {
        env::load_dotenv()?;

        let command = self.shell_command();
        let status = ProcessExecutor::run_shell(&command).await?;

        match status.code() {
            Some(code) => tracing::debug!(code, "streamlit exited"),
            None => tracing::debug!("streamlit terminated by signal"),
        }

        Ok(())
    }
}
