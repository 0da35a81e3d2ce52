use crate::{
    api::UserSession,
    storage::{Storage, StorageError},
};

pub const KEY_SESSION: &str = "userSession";

/// Persists the mocked-auth session record.
pub fn save_session<S: Storage>(storage: &S, session: &UserSession) -> Result<(), StorageError> {
    storage.set(KEY_SESSION, session)
}

pub fn load_session<S: Storage>(storage: &S) -> Option<UserSession> {
    match storage.get(KEY_SESSION) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "could not read stored session");
            None
        }
    }
}

pub fn clear_session<S: Storage>(storage: &S) {
    storage.delete(KEY_SESSION);
}

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Signup password rule: at least 8 characters with an uppercase letter, a
/// digit and a special character. Mock-flow gatekeeping only.
pub fn password_strength_ok(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIAL_CHARS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;
    use chrono::Utc;

    #[test]
    fn session_round_trip_and_clear() {
        let storage = MemoryStorage::new();
        assert_eq!(load_session(&storage), None);

        let session = UserSession {
            email: String::from("a@b.com"),
            first_name: Some(String::from("Al")),
            last_name: None,
            login_time: Utc::now(),
            remember: true,
        };
        save_session(&storage, &session).unwrap();
        assert_eq!(load_session(&storage), Some(session));

        clear_session(&storage);
        assert_eq!(load_session(&storage), None);
    }

    #[test]
    fn password_rules() {
        assert!(password_strength_ok("Str0ng!pass"));
        assert!(!password_strength_ok("Sh0rt!"));
        assert!(!password_strength_ok("no-upper-1!"));
        assert!(!password_strength_ok("NoDigits!!"));
        assert!(!password_strength_ok("NoSpecial123"));
    }
}
