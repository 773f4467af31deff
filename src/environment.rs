use std::ffi::OsStr;
use std::fmt;

/// The value of the indicator that selects dev-first ordering. Compared exactly.
pub const DEVELOPMENT: &str = "development";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Anything other than exactly `development`, including no indicator at all, is production.
    /// The indicator need not be UTF-8; such values are simply not `development`.
    pub fn from_indicator(indicator: Option<&OsStr>) -> Self {
        match indicator {
            Some(value) if value == DEVELOPMENT => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
