use std::str::FromStr;
use tracing::Level;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

pub const BORROW_LIMIT_VAR: &str = "LIBRARY_BORROW_LIMIT";
pub const LOG_LEVEL_VAR: &str = "LIBRARY_LOG_LEVEL";

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub borrow_limit: usize,
    pub log_level: Level,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            borrow_limit: 3,
            log_level: Level::WARN,
        }
    }

    pub fn with_borrow_limit(mut self, borrow_limit: usize) -> Self {
        self.borrow_limit = borrow_limit;
        self
    }

    pub fn from_env(branch_id: &str) -> (Self, Vec<RejectedSetting>) {
        Self::from_lookup(branch_id, |name| std::env::var(name).ok())
    }

    // Unparsable values keep their defaults and are handed back so they can be logged
    // once the subscriber built from this configuration is installed.
    pub fn from_lookup<F>(branch_id: &str, lookup: F) -> (Self, Vec<RejectedSetting>)
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(branch_id);
        let mut rejected = vec![];
        if let Some(val) = lookup(BORROW_LIMIT_VAR) {
            match val.trim().parse::<usize>() {
                Ok(limit) => config.borrow_limit = limit,
                Err(err) => rejected.push(RejectedSetting::new(BORROW_LIMIT_VAR, val.as_str(), err.to_string().as_str())),
            }
        }
        if let Some(val) = lookup(LOG_LEVEL_VAR) {
            match Level::from_str(val.trim()) {
                Ok(level) => config.log_level = level,
                Err(err) => rejected.push(RejectedSetting::new(LOG_LEVEL_VAR, val.as_str(), err.to_string().as_str())),
            }
        }
        (config, rejected)
    }
}

// RejectedSetting is an environment value that could not be parsed and was ignored
#[derive(Debug, PartialEq, Clone)]
pub struct RejectedSetting {
    pub name: String,
    pub value: String,
    pub reason: String,
}

impl RejectedSetting {
    pub fn new(name: &str, value: &str, reason: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn log(&self) {
        tracing::warn!(value = self.value.as_str(), "ignoring {}: {}", self.name, self.reason);
    }
}
