use std::fmt;

use crate::constants::SESSION_COOKIE_NAME;

/// The portal's login session, carried as a cookie on every request.
#[derive(Clone)]
pub struct Session {
    cookie: String,
}

impl Session {
    /// From a raw session cookie value, as copied out of a logged-in browser.
    pub fn from_raw(cookie: &str) -> Self {
        Self {
            cookie: cookie.trim().to_owned(),
        }
    }

    pub fn get(&self) -> &str {
        &self.cookie
    }

    /// Value for the `Cookie` request header.
    pub fn header_value(&self) -> String {
        format!("{}={}", SESSION_COOKIE_NAME, self.cookie)
    }
}

// keep the cookie out of logs
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("cookie", &"<redacted>")
            .finish()
    }
}
