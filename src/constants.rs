//! Grammar tokens and range limits.

/// The data URI scheme, without the trailing `:`.
pub const DATA_SCHEME: &str = "data";

/// The parameter-less token that flags a data URI payload as base64.
pub const BASE64_TOKEN: &str = "base64";

/// Media type assumed by RFC 2397 when a data URI omits one.
pub const DEFAULT_MEDIA_TYPE: &str = "text/plain";

/// Smallest valid port number.
pub const MIN_PORT_NUMBER: u16 = 0;

/// Largest valid port number.
pub const MAX_PORT_NUMBER: u16 = 65535;

/// Ports below this value are the IANA well-known (system) ports.
pub const WELL_KNOWN_PORT_LIMIT: u16 = 1024;

/// Smallest valid page number.
pub const MIN_PAGE_NUMBER: u64 = 1;
