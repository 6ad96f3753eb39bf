pub mod flash;

use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Request marker: the client sent no valid session cookie, so its id was
/// minted for this request and may never come back.
#[derive(Debug, Clone, Copy)]
pub struct NewSession;

/// Opaque id carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        SessionId(Uuid::new_v4())
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(SessionId)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_cookie_value() {
        let id = SessionId::generate();
        assert_eq!(id.to_string().parse::<SessionId>().unwrap(), id);
    }

    #[test]
    fn rejects_tampered_cookie_value() {
        assert!("not-a-session".parse::<SessionId>().is_err());
    }
}
