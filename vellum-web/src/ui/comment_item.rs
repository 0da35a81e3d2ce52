use chrono::Utc;
use vellum_client::{
    api::{Comment, CommentId},
    initials, message_lines, time_ago,
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub comment: Comment,
    pub liked: bool,
    pub on_like: Callback<CommentId>,
    pub on_reply: Callback<CommentId>,
}

#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let c = &p.comment;
    let heart = match p.liked {
        true => classes!("fas", "fa-heart", "liked"),
        false => classes!("far", "fa-heart"),
    };
    let on_like = {
        let id = c.id.clone();
        p.on_like.reform(move |_| id.clone())
    };
    let on_reply = {
        let id = c.id.clone();
        p.on_reply.reform(move |_| id.clone())
    };
    html! {
        <div class="comment-item">
            <div class="comment-avatar">{ initials(&c.name) }</div>
            <div class="comment-body">
                <div class="comment-header">
                    <span class="comment-author">{ &c.name }</span>
                    <span class="comment-date">{ time_ago(c.timestamp, Utc::now()) }</span>
                </div>
                <p class="comment-text">
                    { for message_lines(&c.message).iter().enumerate().map(|(i, line)| html! {<>
                        if i > 0 {
                            <br/>
                        }
                        { line.to_string() }
                    </>}) }
                </p>
                <div class="comment-actions">
                    <button type="button" class="comment-like-btn" onclick={on_like}>
                        <i class={heart}></i>
                        <span class="like-count">{ c.likes }</span>
                    </button>
                    <button type="button" class="comment-reply-btn" onclick={on_reply}>
                        { "Reply" }
                    </button>
                </div>
            </div>
        </div>
    }
}
