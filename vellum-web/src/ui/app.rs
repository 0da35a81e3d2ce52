use vellum_client::api::PostId;
use yew::prelude::*;

use crate::ui;

/// What the current page is, derived from the location path. Every page
/// carries the search bar; posts additionally get the comment section.
enum Page {
    Login,
    Contact,
    Post {
        post_id: PostId,
        title: String,
        url: String,
    },
}

fn current_page() -> Page {
    let window = web_sys::window().expect("no window");
    let location = window.location();
    let path = location.pathname().unwrap_or_else(|_| String::from("/"));
    let post_id = PostId::from_path(&path);
    match &post_id.0 as &str {
        "login" => Page::Login,
        "contact" => Page::Contact,
        _ => Page::Post {
            post_id,
            title: window
                .document()
                .map(|d| d.title())
                .unwrap_or_default(),
            url: location.href().unwrap_or_default(),
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let page = current_page();
    html! {
        <div class="page">
            <header class="page-header">
                <ui::SearchBar />
            </header>
            <main>
                { match &page {
                    Page::Login => html! { <ui::Login /> },
                    Page::Contact => html! { <ui::ContactForm /> },
                    Page::Post { post_id, title, url } => html! {
                        <ui::CommentSection
                            post_id={post_id.clone()}
                            post_title={title.clone()}
                            post_url={url.clone()}
                        />
                    },
                } }
            </main>
        </div>
    }
}
