use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::Target;
use crate::document::Document;
use crate::environment::Environment;
use crate::error;
use crate::servers::reorder;

#[derive(Debug, Clone, Args)]
pub struct Update {
    #[command(flatten)]
    pub target: Target,

    /// Write the result here instead of overwriting the input file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Update {
    pub fn run(self) -> Result<()> {
        let env = self.execute()?;
        println!("{}", status_line(env));
        Ok(())
    }

    /// Reads, reorders and writes back. Nothing is written if reading or parsing fails.
    pub fn execute(&self) -> error::Result<Environment> {
        let env = self.target.environment();
        let path = self.target.path();
        let mut doc = Document::load(&path)?;

        let servers = reorder(doc.servers(), env, &self.target.rules(), self.target.unmatched());
        let before = doc.servers().len();
        let after = servers.len();
        doc.set_servers(servers);

        let output = self.output.clone().unwrap_or_else(|| doc.path().to_path_buf());
        doc.save(&output)?;
        info!(path = %output.display(), %env, before, after, "Reordered servers");
        Ok(env)
    }
}

/// The one line printed on success.
pub fn status_line(env: Environment) -> String {
    format!("Updated OpenAPI servers for {} environment", env)
}
