use crate::core::error::Result;
use crate::launcher::Launcher;
use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(
    name = "streamlit-launcher",
    about = "Load .env into the environment and run the Streamlit app",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,
}

pub async fn run(cli: Cli) -> Result<()> {
    if !cli.ignored.is_empty() {
        tracing::debug!(count = cli.ignored.len(), "ignoring command-line arguments");
    }

    Launcher::new().run().await
}
