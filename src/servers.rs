use serde_json::Value;
use tracing::{debug, info, warn};

use crate::environment::Environment;

/// Substring identifying the local development server.
pub const DEV_MATCH: &str = "localhost";
/// Substring identifying the hosted production server.
pub const PROD_MATCH: &str = "thrads.ai";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRules {
    pub dev: String,
    pub prod: String,
}

impl Default for ServerRules {
    fn default() -> Self {
        Self {
            dev: DEV_MATCH.to_string(),
            prod: PROD_MATCH.to_string(),
        }
    }
}

/// What happens to servers that match neither rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unmatched {
    #[default]
    Drop,
    /// Keep them after the reordered pair, in their original order.
    Append,
}

pub fn server_url(server: &Value) -> Option<&str> {
    server.get("url")?.as_str()
}

/// First server whose `url` contains `needle`.
pub fn find_server<'a>(servers: &'a [Value], needle: &str) -> Option<&'a Value> {
    servers
        .iter()
        .find(|s| server_url(s).is_some_and(|url| url.contains(needle)))
}

/// Builds the new `servers` list: the dev and prod entries in the order `env` asks for,
/// skipping whichever one is missing. Entries are cloned as-is.
pub fn reorder(servers: &[Value], env: Environment, rules: &ServerRules, unmatched: Unmatched) -> Vec<Value> {
    for (i, server) in servers.iter().enumerate() {
        if server_url(server).is_none() {
            warn!(index = i, "Server has no string `url`, it matches no rule");
        }
    }

    let dev = find_server(servers, &rules.dev);
    let prod = find_server(servers, &rules.prod);
    debug!(
        dev = dev.and_then(server_url),
        prod = prod.and_then(server_url),
        %env,
        "Located servers"
    );

    let pair = if env.is_development() {
        [dev, prod]
    } else {
        [prod, dev]
    };
    let is_selected = |s: &Value| pair.iter().flatten().any(|p| std::ptr::eq(*p, s));
    let mut ordered: Vec<Value> = pair.into_iter().flatten().cloned().collect();

    let rest = servers.iter().filter(|s| !is_selected(*s));
    match unmatched {
        Unmatched::Drop => {
            let dropped = rest.count();
            if dropped > 0 {
                info!(dropped, "Dropped servers matching neither rule");
            }
        }
        Unmatched::Append => ordered.extend(rest.cloned()),
    }
    ordered
}
