//! Central constants for the getcommits application

/// Default values for the relay service
pub mod relay {
    /// Default bind address
    pub const DEFAULT_BIND: &str = "127.0.0.1";

    /// Default listen port
    pub const DEFAULT_PORT: u16 = 3000;

    /// Lifetime of a server-side session credential
    pub const SESSION_TTL_SECS: u64 = 300;

    /// How often the session store is swept for expired entries
    pub const SWEEP_INTERVAL_SECS: u64 = 60;
}

/// Default values for browsing and rendering
pub mod browse {
    /// Commits fetched per page when not configured otherwise
    pub const DEFAULT_PER_PAGE: u32 = 30;

    /// First page of results
    pub const DEFAULT_PAGE: u32 = 1;

    /// Abbreviated commit sha length shown in listings
    pub const SHORT_SHA_LEN: usize = 7;
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "getcommits.yaml";
}
