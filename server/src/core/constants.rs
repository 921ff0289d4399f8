// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display)
pub const APP_NAME: &str = "Numlens";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "numlens.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "NUMLENS_CONFIG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "NUMLENS_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "NUMLENS_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "NUMLENS_LOG";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5170;

// =============================================================================
// Request Body Limits
// =============================================================================

/// Body limit for API requests (the API is GET-only, so keep it small)
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

// =============================================================================
// Facts Provider
// =============================================================================

/// Environment variable for the facts provider base URL
pub const ENV_FACTS_BASE_URL: &str = "NUMLENS_FACTS_BASE_URL";

/// Environment variable for the facts lookup timeout in seconds
pub const ENV_FACTS_TIMEOUT_SECS: &str = "NUMLENS_FACTS_TIMEOUT_SECS";

/// Environment variable to disable outbound fact lookups
pub const ENV_NO_FACTS: &str = "NUMLENS_NO_FACTS";

/// Default base URL of the number facts provider
pub const FACTS_DEFAULT_BASE_URL: &str = "http://numbersapi.com";

/// Default fact lookup timeout in seconds
pub const FACTS_DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Fallback fact text when the provider answers with a non-200 status
pub const FACT_FALLBACK_NONE: &str = "No fact available.";

/// Fallback fact text when the provider cannot be reached at all
pub const FACT_FALLBACK_UNAVAILABLE: &str = "Fact API unavailable.";
