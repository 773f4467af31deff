mod check;
mod update;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Args;

use crate::environment::Environment;
use crate::servers::{ServerRules, Unmatched, DEV_MATCH, PROD_MATCH};
pub use check::*;
pub use update::*;

/// `api-reference/openapi.json`, next to this crate's manifest.
pub fn default_document_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("api-reference")
        .join("openapi.json")
}

/// Which document to look at, and how to pick and order its servers.
#[derive(Debug, Clone, Args)]
pub struct Target {
    /// OpenAPI document (JSON, or YAML by extension). Defaults to api-reference/openapi.json
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Runtime environment. Only `development` puts the local server first
    #[arg(long = "env", env = "NODE_ENV", value_name = "NAME", value_parser = clap::value_parser!(OsString))]
    pub node_env: Option<OsString>,

    /// The development server is the first one whose url contains this
    #[arg(long, value_name = "TEXT", default_value = DEV_MATCH)]
    pub dev_match: String,

    /// The production server is the first one whose url contains this
    #[arg(long, value_name = "TEXT", default_value = PROD_MATCH)]
    pub prod_match: String,

    /// Keep servers matching neither rule, after the reordered pair
    #[arg(long)]
    pub keep_unmatched: bool,
}

impl Target {
    pub fn path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(default_document_path)
    }

    pub fn environment(&self) -> Environment {
        Environment::from_indicator(self.node_env.as_deref())
    }

    pub fn rules(&self) -> ServerRules {
        ServerRules {
            dev: self.dev_match.clone(),
            prod: self.prod_match.clone(),
        }
    }

    pub fn unmatched(&self) -> Unmatched {
        if self.keep_unmatched {
            Unmatched::Append
        } else {
            Unmatched::Drop
        }
    }
}

#[cfg(test)]
pub(crate) fn target(file: impl Into<PathBuf>, node_env: Option<&str>) -> Target {
    Target {
        file: Some(file.into()),
        node_env: node_env.map(OsString::from),
        dev_match: DEV_MATCH.to_string(),
        prod_match: PROD_MATCH.to_string(),
        keep_unmatched: false,
    }
}
