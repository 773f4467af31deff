use anyhow::{bail, Result};
use clap::Args;
use tracing::debug;

use super::Target;
use crate::document::Document;
use crate::environment::Environment;
use crate::error;
use crate::servers::reorder;

/// Exit non-zero unless the document is already ordered for the environment. Never writes.
#[derive(Debug, Clone, Args)]
pub struct Check {
    #[command(flatten)]
    pub target: Target,
}

impl Check {
    pub fn run(self) -> Result<()> {
        let (env, ordered) = self.execute()?;
        if !ordered {
            bail!(
                "{}: OpenAPI servers are not ordered for {} environment",
                self.target.path().display(),
                env
            );
        }
        println!("OpenAPI servers already ordered for {} environment", env);
        Ok(())
    }

    pub fn execute(&self) -> error::Result<(Environment, bool)> {
        let env = self.target.environment();
        let doc = Document::load(self.target.path())?;
        let expected = reorder(doc.servers(), env, &self.target.rules(), self.target.unmatched());
        let ordered = expected.as_slice() == doc.servers();
        debug!(%env, ordered, current = doc.servers().len(), expected = expected.len(), "Checked servers");
        Ok((env, ordered))
    }
}
