use vellum_client::{highlight, search, PostMeta, Segment};
use yew::prelude::*;

use crate::posts;

#[derive(Clone, PartialEq, Properties)]
pub struct SearchBarProps {}

#[function_component(SearchBar)]
pub fn search_bar(_p: &SearchBarProps) -> Html {
    let query = use_state(String::new);
    let oninput = {
        let query = query.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };
    let results = search(&posts::CATALOG, &query);
    let show_dropdown = !query.trim().is_empty();
    html! {
        <div class="search-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Search posts..."
                value={(*query).clone()}
                {oninput}
            />
            if show_dropdown {
                <div class="search-results">
                    if results.is_empty() {
                        <p class="search-empty">
                            { format!("No posts found for \"{}\"", query.trim()) }
                        </p>
                    } else {
                        { for results.iter().map(|p| result_item(p, &query)) }
                    }
                </div>
            }
        </div>
    }
}

fn result_item(post: &PostMeta, query: &str) -> Html {
    let mut excerpt: String = post.excerpt.chars().take(120).collect();
    if excerpt.len() < post.excerpt.len() {
        excerpt.push_str("...");
    }
    html! {
        <a class="search-result" href={post.url.clone()}>
            <span class="search-result-category">{ &post.category }</span>
            <h4>{ emphasized(&post.title, query) }</h4>
            <p>{ emphasized(&excerpt, query) }</p>
            <span class="search-result-meta">
                { format!("{} · {}", post.date, post.read_time) }
            </span>
        </a>
    }
}

fn emphasized(text: &str, query: &str) -> Html {
    html! {
        { for highlight(text, query).into_iter().map(|segment| match segment {
            Segment::Plain(s) => html! { s },
            Segment::Match(s) => html! { <mark>{ s }</mark> },
        }) }
    }
}
