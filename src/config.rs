//! Service configuration, read from the environment.
//!
//! Every knob the service relies on is stated here rather than left to a
//! library default — including the store client's pooling and retry policy,
//! which feeds `ClientOptions` in the Mongo adapter.

use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Runtime configuration with env-var overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the gRPC server binds to (`NOTESVC_ADDR`).
    pub listen_addr: String,
    /// MongoDB connection string (`NOTESVC_MONGO_URI`).
    pub mongo_uri: String,
    /// Database name (`NOTESVC_DATABASE`).
    pub database: String,
    /// Collection name (`NOTESVC_COLLECTION`).
    pub collection: String,
    /// Upper bound on pooled connections (`NOTESVC_MAX_POOL_SIZE`).
    pub max_pool_size: u32,
    /// Connect and server-selection window (`NOTESVC_CONNECT_TIMEOUT_SECS`).
    pub connect_timeout: Duration,
    /// Driver-level write retry. Off by default: every store call is a
    /// single attempt and failures surface to the caller as-is.
    pub retry_writes: bool,
    /// Driver-level read retry. Off by default for the same reason.
    pub retry_reads: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:50051".to_string(),
            mongo_uri: "mongodb://localhost:27017".to_string(),
            database: "mynotesdb".to_string(),
            collection: "notes".to_string(),
            max_pool_size: 10,
            connect_timeout: Duration::from_secs(20),
            retry_writes: false,
            retry_reads: false,
        }
    }
}

impl Config {
    /// Load the configuration, applying any `NOTESVC_*` overrides over the
    /// defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(addr) = env::var("NOTESVC_ADDR") {
            config.listen_addr = addr;
        }
        if let Ok(uri) = env::var("NOTESVC_MONGO_URI") {
            config.mongo_uri = uri;
        }
        if let Ok(database) = env::var("NOTESVC_DATABASE") {
            config.database = database;
        }
        if let Ok(collection) = env::var("NOTESVC_COLLECTION") {
            config.collection = collection;
        }
        if let Ok(raw) = env::var("NOTESVC_MAX_POOL_SIZE") {
            config.max_pool_size = parse(&raw, "NOTESVC_MAX_POOL_SIZE")?;
        }
        if let Ok(raw) = env::var("NOTESVC_CONNECT_TIMEOUT_SECS") {
            let secs: u64 = parse(&raw, "NOTESVC_CONNECT_TIMEOUT_SECS")?;
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Ok(raw) = env::var("NOTESVC_RETRY_WRITES") {
            config.retry_writes = parse(&raw, "NOTESVC_RETRY_WRITES")?;
        }
        if let Ok(raw) = env::var("NOTESVC_RETRY_READS") {
            config.retry_reads = parse(&raw, "NOTESVC_RETRY_READS")?;
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(raw: &str, key: &'static str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError {
        key,
        value: raw.to_string(),
    })
}

/// An environment variable held a value that does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value {:?} for {}", self.value, self.key)
    }
}

impl Error for ConfigError {}
