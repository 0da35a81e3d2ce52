mod notify;
pub use notify::{DispatchOutcome, Dispatcher, EmailConfig, EmailParams, Emailer};

mod render;
pub use render::{initials, message_lines, time_ago};

mod search;
pub use search::{highlight, search, PostMeta, Segment};

mod session;
pub use session::{clear_session, load_session, password_strength_ok, save_session};

mod storage;
pub use storage::{MemoryStorage, Storage, StorageError};

mod store;
pub use store::CommentStore;

mod submit;
pub use submit::{reply_prefill, submit_comment, toggle_like, Latency, LikeToggle, NoLatency, SubmitError};

pub mod api {
    pub use vellum_api::*;
}
