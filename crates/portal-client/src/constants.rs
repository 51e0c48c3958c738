/// The default base URL of the portal
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/";

/// Endpoint paths served under the `/api` prefix
pub const USER_INFO_PATH: &str = "/api/userinfo";
pub const USER_OPTIONS_PATH: &str = "/api/useroptions";
pub const USER_PHONES_PATH: &str = "/api/userphones";
pub const USER_QUEUES_PATH: &str = "/api/userqueues";

/// Older deployments serve some endpoints without the `/api` prefix.
/// There was never a prefix-less phones route.
pub const LEGACY_USER_INFO_PATH: &str = "/userinfo";
pub const LEGACY_USER_OPTIONS_PATH: &str = "/useroptions";
pub const LEGACY_USER_QUEUES_PATH: &str = "/userqueues";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("portal-client/", env!("CARGO_PKG_VERSION"));

/// Name of the cookie carrying the portal session
pub const SESSION_COOKIE_NAME: &str = "session";

/// Status text shown while a table widget is waiting for the server
pub const PHONES_LOADING_TEXT: &str = "...getting phone information";
pub const QUEUES_LOADING_TEXT: &str = "...getting queue information";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_absolute() {
        for path in [
            USER_INFO_PATH,
            USER_OPTIONS_PATH,
            USER_PHONES_PATH,
            USER_QUEUES_PATH,
            LEGACY_USER_INFO_PATH,
            LEGACY_USER_OPTIONS_PATH,
            LEGACY_USER_QUEUES_PATH,
        ] {
            assert!(path.starts_with('/'), "{path} is not absolute");
        }
    }
}
