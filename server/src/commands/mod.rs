use clap::Subcommand;

use crate::Result;

pub(crate) mod validate;

#[derive(Subcommand, Default)]
pub(crate) enum Command {
    /// Run the HTTP server
    #[default]
    Serve,
    /// Check the embedded blog posts and their images
    Validate,
}

impl Command {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self {
            Command::Serve => crate::http_server::cmd::serve().await,
            Command::Validate => validate::validate(),
        }
    }
}
