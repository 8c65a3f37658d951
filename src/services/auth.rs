//! # Credential Registry
//!
//! Fixed in-memory authentication for the terminal. There are no server-side
//! accounts: the registry is compiled in and checked locally, and a session
//! exists only for the lifetime of the process.
//!
//! Rejection is deliberately uniform. Whatever failed (unknown user, wrong
//! password, blank fields), callers get [`AppError::InvalidCredentials`] and
//! the UI shows one fixed line without hinting at the field.

use crate::app::state::SessionUser;
use crate::core::error::{AppError, Result};

/// One registry entry. Matching is exact and case-sensitive on both fields.
struct Credential {
    username: &'static str,
    password: &'static str,
    role: &'static str,
}

/// Accounts known to the terminal.
const VALID_USERS: [Credential; 2] = [
    Credential {
        username: "must3y",
        password: "kral123",
        role: "Elite Member",
    },
    Credential {
        username: "admin",
        password: "admin34",
        role: "System Administrator",
    },
];

/// Check a username/password pair against the registry.
///
/// No trimming or case folding is applied. Returns the matched user's
/// identity on success, [`AppError::InvalidCredentials`] otherwise.
pub fn authenticate(username: &str, password: &str) -> Result<SessionUser> {
    match VALID_USERS
        .iter()
        .find(|c| c.username == username && c.password == password)
    {
        Some(c) => {
            tracing::info!(username = %c.username, role = %c.role, "login accepted");
            Ok(SessionUser {
                username: c.username.to_string(),
                role: c.role.to_string(),
            })
        }
        None => {
            tracing::warn!(username = %username, "login rejected");
            Err(AppError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_registry_users() {
        let elite = authenticate("must3y", "kral123").unwrap();
        assert_eq!(elite.username, "must3y");
        assert_eq!(elite.role, "Elite Member");

        let admin = authenticate("admin", "admin34").unwrap();
        assert_eq!(admin.username, "admin");
        assert_eq!(admin.role, "System Administrator");
    }

    #[test]
    fn rejects_unknown_pair() {
        assert_eq!(
            authenticate("must3y", "wrong"),
            Err(AppError::InvalidCredentials)
        );
        assert_eq!(
            authenticate("nobody", "kral123"),
            Err(AppError::InvalidCredentials)
        );
    }

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(authenticate("", ""), Err(AppError::InvalidCredentials));
        assert_eq!(
            authenticate("must3y", ""),
            Err(AppError::InvalidCredentials)
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            authenticate("MUST3Y", "kral123"),
            Err(AppError::InvalidCredentials)
        );
        assert_eq!(
            authenticate("must3y", "KRAL123"),
            Err(AppError::InvalidCredentials)
        );
    }

    #[test]
    fn no_trimming_is_applied() {
        assert_eq!(
            authenticate(" must3y", "kral123"),
            Err(AppError::InvalidCredentials)
        );
        assert_eq!(
            authenticate("must3y", "kral123 "),
            Err(AppError::InvalidCredentials)
        );
    }
}
