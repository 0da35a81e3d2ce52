use futures::executor::block_on;
use vellum_client::{
    api::{ContactMessage, Draft, PostId},
    submit_comment, CommentStore, Dispatcher, EmailConfig, MemoryStorage, NoLatency, Storage,
    StorageError, SubmitError,
};
use vellum_mock_emailer::MockEmailer;

fn draft(name: &str, email: &str, message: &str) -> Draft {
    Draft {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn valid_submission_persists_exactly_one_record() {
    let store = CommentStore::new(MemoryStorage::new());
    let post = PostId::from_path("foo.html");

    let comment = block_on(submit_comment(
        &store,
        &NoLatency,
        &post,
        draft("Al", "a@b.com", "Hello there friend"),
    ))
    .expect("submitting a valid draft");

    let persisted = store.comments_for_post(&post);
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0], comment);
    assert_eq!(persisted[0].name, "Al");
    assert_eq!(persisted[0].email, "a@b.com");
    assert_eq!(persisted[0].message, "Hello there friend");
    assert_eq!(persisted[0].likes, 0);
    assert_eq!(persisted[0].post_id, PostId(String::from("foo")));
}

#[test]
fn short_name_persists_nothing_and_reports_the_name_rule() {
    let store = CommentStore::new(MemoryStorage::new());
    let post = PostId::from_path("foo.html");

    let err = block_on(submit_comment(
        &store,
        &NoLatency,
        &post,
        draft("A", "a@b.com", "Hello there friend"),
    ))
    .expect_err("single-letter name must not validate");

    assert_eq!(err.to_string(), "Name must be at least 2 characters long");
    assert!(store.all_comments().is_empty());
}

#[test]
fn notification_failure_does_not_affect_the_submission() {
    let store = CommentStore::new(MemoryStorage::new());
    let post = PostId::from_path("foo.html");
    let comment = block_on(submit_comment(
        &store,
        &NoLatency,
        &post,
        draft("Al", "a@b.com", "Hello there friend"),
    ))
    .expect("submitting a valid draft");

    let emailer = MockEmailer::new();
    emailer.fail_with("widget not loaded");
    let dispatcher = Dispatcher::new(&emailer, EmailConfig::default());
    let outcome = block_on(dispatcher.notify_comment(&comment, "Foo", "https://example.org/foo.html"));

    assert!(!outcome.success);
    assert_eq!(outcome.error.as_deref(), Some("widget not loaded"));
    // The persisted comment is untouched by the failed dispatch
    assert_eq!(store.comments_for_post(&post).len(), 1);
}

#[test]
fn comment_notification_carries_the_fixed_parameter_record() {
    let store = CommentStore::new(MemoryStorage::new());
    let post = PostId::from_path("foo.html");
    let comment = block_on(submit_comment(
        &store,
        &NoLatency,
        &post,
        draft("Al", "a@b.com", "Hello there friend"),
    ))
    .expect("submitting a valid draft");

    let emailer = MockEmailer::new();
    let dispatcher = Dispatcher::new(&emailer, EmailConfig::default());
    let outcome = block_on(dispatcher.notify_comment(&comment, "Foo Post", "https://example.org/foo.html"));
    assert!(outcome.success);

    let sent = emailer.test_sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].service_id, "service_vellum_blog");
    assert_eq!(sent[0].template_id, "template_comment");
    assert_eq!(sent[0].params.get("commenter_name"), Some("Al"));
    assert_eq!(sent[0].params.get("comment_message"), Some("Hello there friend"));
    assert_eq!(sent[0].params.get("post_title"), Some("Foo Post"));
    assert_eq!(sent[0].params.get("subject"), Some("New Comment on: Foo Post"));
    assert_eq!(sent[0].params.get("notification_type"), Some("New Comment"));
}

#[test]
fn contact_notification_carries_the_fixed_parameter_record() {
    let emailer = MockEmailer::new();
    let dispatcher = Dispatcher::new(&emailer, EmailConfig::default());
    let contact = ContactMessage {
        name: String::from("Al"),
        email: String::from("a@b.com"),
        subject: String::from("General"),
        message: String::from("Hello there friend"),
        newsletter: true,
    };
    let outcome = block_on(dispatcher.notify_contact(&contact));
    assert!(outcome.success);

    let sent = emailer.test_sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].template_id, "template_contact");
    assert_eq!(sent[0].params.get("sender_email"), Some("a@b.com"));
    assert_eq!(sent[0].params.get("newsletter_subscribe"), Some("Yes"));
    assert_eq!(
        sent[0].params.get("subject"),
        Some("New Contact Message: General")
    );
}

/// Storage that accepts reads but refuses all writes, modeling a full or
/// unavailable medium.
struct ReadOnlyStorage;

impl Storage for ReadOnlyStorage {
    fn raw_get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn raw_set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn delete(&self, _key: &str) {}
}

#[test]
fn persistence_failure_surfaces_a_generic_indication() {
    let store = CommentStore::new(ReadOnlyStorage);
    let post = PostId::from_path("foo.html");

    let err = block_on(submit_comment(
        &store,
        &NoLatency,
        &post,
        draft("Al", "a@b.com", "Hello there friend"),
    ))
    .expect_err("writes must fail on a read-only medium");

    assert!(matches!(err, SubmitError::Store(StorageError::Unavailable)));
    assert_eq!(err.to_string(), "Comment could not be saved");
}
