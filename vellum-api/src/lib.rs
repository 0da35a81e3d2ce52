use chrono::Utc;
use rand::Rng;

mod error;
pub use error::Error;

pub type Time = chrono::DateTime<Utc>;

/// Slug identifying the page that hosts a comment thread.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PostId(pub String);

impl PostId {
    /// Derives the slug from a document path: last path component, extension
    /// stripped. An empty path resolves to `index`.
    pub fn from_path(path: &str) -> PostId {
        let filename = path.rsplit('/').next().unwrap_or("");
        let slug = match filename.rfind('.') {
            Some(dot) => &filename[..dot],
            None => filename,
        };
        match slug.is_empty() {
            true => PostId(String::from("index")),
            false => PostId(slug.to_string()),
        }
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque client-generated comment identity: creation millis in base36 plus a
/// random base36 suffix. Collisions are treated as negligible, this is not a
/// cryptographic guarantee.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentId(pub String);

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 10;

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return String::from("0");
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).expect("base36 digits are ascii")
}

impl CommentId {
    pub fn generate() -> CommentId {
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        let mut rng = rand::thread_rng();
        let mut id = to_base36(millis);
        for _ in 0..SUFFIX_LEN {
            id.push(BASE36[rng.gen_range(0..36)] as char);
        }
        CommentId(id)
    }
}

/// A persisted comment record. Never mutated after creation except for
/// `likes`; field names match the persisted JSON layout.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: Time,
    pub likes: u32,
    pub post_id: PostId,
}

impl Comment {
    /// Builds the record for a draft that already passed validation.
    pub fn build(post_id: PostId, draft: Draft) -> Comment {
        Comment {
            id: CommentId::generate(),
            name: draft.name,
            email: draft.email,
            message: draft.message,
            timestamp: Utc::now(),
            likes: 0,
            post_id,
        }
    }
}

/// An unvalidated, unpersisted candidate comment built from form input.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Draft {
    /// Checks field constraints, reporting only the first violated rule, in
    /// name, email, message order.
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().chars().count() < 2 {
            return Err(Error::NameTooShort);
        }
        if !email_shape_ok(&self.email) {
            return Err(Error::InvalidEmail);
        }
        let len = self.message.trim().chars().count();
        if len < 10 {
            return Err(Error::CommentTooShort);
        }
        if len > 1000 {
            return Err(Error::CommentTooLong);
        }
        Ok(())
    }
}

/// Syntactic `local@domain.tld` check. No DNS or MX verification.
fn email_shape_ok(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            let part_ok = |p: &str| !p.is_empty() && !p.contains(char::is_whitespace);
            part_ok(local)
                && part_ok(domain)
                && domain
                    .rfind('.')
                    .map_or(false, |dot| dot > 0 && dot + 1 < domain.len())
        }
        _ => false,
    }
}

/// A contact-form submission.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub newsletter: bool,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().chars().count() < 2 {
            return Err(Error::NameTooShort);
        }
        if !email_shape_ok(&self.email) {
            return Err(Error::InvalidEmail);
        }
        if self.subject.is_empty() {
            return Err(Error::SubjectMissing);
        }
        if self.message.trim().chars().count() < 10 {
            return Err(Error::MessageTooShort);
        }
        Ok(())
    }
}

/// Session record from the mocked authentication flow. Persisted under the
/// `userSession` key; no real authentication happens anywhere.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub login_time: Time,
    #[serde(default)]
    pub remember: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> Draft {
        Draft {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn draft_validation_rules() {
        assert_eq!(draft("Al", "a@b.com", "Hello there friend").validate(), Ok(()));

        // Name: trimmed length >= 2
        assert_eq!(
            draft("A", "a@b.com", "Hello there friend").validate(),
            Err(Error::NameTooShort)
        );
        assert_eq!(
            draft(" A ", "a@b.com", "Hello there friend").validate(),
            Err(Error::NameTooShort)
        );

        // Email shape
        assert_eq!(
            draft("Al", "not-an-email", "Hello there friend").validate(),
            Err(Error::InvalidEmail)
        );
        assert_eq!(
            draft("Al", "a@b", "Hello there friend").validate(),
            Err(Error::InvalidEmail)
        );
        assert_eq!(
            draft("Al", "a @b.com", "Hello there friend").validate(),
            Err(Error::InvalidEmail)
        );
        assert_eq!(
            draft("Al", "a@b@c.com", "Hello there friend").validate(),
            Err(Error::InvalidEmail)
        );

        // Message: trimmed length in 10..=1000
        assert_eq!(
            draft("Al", "a@b.com", "too short").validate(),
            Err(Error::CommentTooShort)
        );
        assert_eq!(
            draft("Al", "a@b.com", "   exactly10   ").validate(),
            Ok(())
        );
        assert_eq!(
            draft("Al", "a@b.com", &"x".repeat(1000)).validate(),
            Ok(())
        );
        assert_eq!(
            draft("Al", "a@b.com", &"x".repeat(1001)).validate(),
            Err(Error::CommentTooLong)
        );
    }

    #[test]
    fn draft_validation_short_circuits_in_order() {
        // Everything invalid: name rule wins
        assert_eq!(
            draft("", "nope", "short").validate(),
            Err(Error::NameTooShort)
        );
        // Name ok, email and message invalid: email rule wins
        assert_eq!(
            draft("Al", "nope", "short").validate(),
            Err(Error::InvalidEmail)
        );
    }

    #[test]
    fn validation_messages_are_user_readable() {
        assert_eq!(
            Error::NameTooShort.to_string(),
            "Name must be at least 2 characters long"
        );
        assert_eq!(
            Error::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn contact_validation() {
        let mut m = ContactMessage {
            name: String::from("Al"),
            email: String::from("a@b.com"),
            subject: String::from("General"),
            message: String::from("Hello there friend"),
            newsletter: false,
        };
        assert_eq!(m.validate(), Ok(()));
        m.subject = String::new();
        assert_eq!(m.validate(), Err(Error::SubjectMissing));
    }

    #[test]
    fn post_id_from_path() {
        assert_eq!(PostId::from_path("/blog/foo.html"), PostId("foo".into()));
        assert_eq!(PostId::from_path("foo.html"), PostId("foo".into()));
        assert_eq!(PostId::from_path("foo.bar.html"), PostId("foo.bar".into()));
        assert_eq!(PostId::from_path("/"), PostId("index".into()));
        assert_eq!(PostId::from_path(""), PostId("index".into()));
    }

    #[test]
    fn comment_build_initial_state() {
        let c = Comment::build(
            PostId::from_path("foo.html"),
            draft("Al", "a@b.com", "Hello there friend"),
        );
        assert_eq!(c.likes, 0);
        assert_eq!(c.post_id, PostId("foo".into()));
        assert!(!c.id.0.is_empty());
    }

    #[test]
    fn comment_ids_are_distinct() {
        let a = CommentId::generate();
        let b = CommentId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn comment_persisted_layout_uses_camel_case() {
        let c = Comment::build(
            PostId("foo".into()),
            draft("Al", "a@b.com", "Hello there friend"),
        );
        let json = serde_json::to_value(&c).expect("serializing comment");
        assert!(json.get("postId").is_some());
        assert!(json.get("timestamp").is_some());
        // Round-trip through the persisted representation
        let back: Comment = serde_json::from_value(json).expect("parsing comment");
        assert_eq!(back, c);
    }
}
