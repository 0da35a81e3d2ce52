/// User-correctable validation failures. Each maps to the single message
/// surfaced to the user when its rule is the first one violated.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please select a subject")]
    SubjectMissing,

    #[error("Comment must be at least 10 characters long")]
    CommentTooShort,

    #[error("Comment must be less than 1000 characters")]
    CommentTooLong,

    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}
