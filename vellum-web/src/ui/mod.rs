mod app;
pub use app::App;

mod comment_form;
pub use comment_form::CommentForm;

mod comment_item;
pub use comment_item::CommentItem;

mod comment_section;
pub use comment_section::CommentSection;

mod contact_form;
pub use contact_form::ContactForm;

mod login;
pub use login::Login;

mod search_bar;
pub use search_bar::SearchBar;

mod toast;
pub use toast::Toast;
