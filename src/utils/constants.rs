//! Shared constants

/// Token issuer used when neither the command line nor the config file names one
pub const DEFAULT_SERVICE_URL: &str = "http://provider.cluster.local";
pub const DEFAULT_LOG_LEVEL: &str = "info";
