use std::collections::HashSet;

use vellum_client::{
    api::{Comment, CommentId, Draft, PostId},
    reply_prefill, submit_comment, toggle_like, CommentStore, Dispatcher, EmailConfig,
    SubmitError,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    emailjs::EmailJs,
    latency::{self, NetworkLatency},
    storage::BrowserStorage,
    ui,
};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentSectionProps {
    pub post_id: PostId,
    pub post_title: String,
    pub post_url: String,
}

pub enum CommentSectionMsg {
    Submit(Draft),
    SubmissionDone(Result<Comment, SubmitError>),
    ToggleLike(CommentId),
    Reply(CommentId),
    ToastTimeout,
}

pub struct CommentSection {
    store: CommentStore<BrowserStorage>,
    comments: Vec<Comment>,
    liked: HashSet<CommentId>,
    busy: bool,
    toast: Option<(String, bool)>,
    prefill: Option<String>,
    // bumped after each successful submission so the form clears itself
    form_generation: usize,
}

impl CommentSection {
    fn show_toast(&mut self, ctx: &Context<Self>, message: impl Into<String>, error: bool) {
        self.toast = Some((message.into(), error));
        ctx.link().send_future(async {
            latency::sleep_ms(latency::TOAST_MS).await;
            CommentSectionMsg::ToastTimeout
        });
    }
}

impl Component for CommentSection {
    type Message = CommentSectionMsg;
    type Properties = CommentSectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let store = CommentStore::new(BrowserStorage);
        let comments = store.comments_for_post(&ctx.props().post_id);
        let liked = store.liked_comments();
        Self {
            store,
            comments,
            liked,
            busy: false,
            toast: None,
            prefill: None,
            form_generation: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentSectionMsg::Submit(draft) => {
                if self.busy {
                    return false;
                }
                self.busy = true;
                let post_id = ctx.props().post_id.clone();
                ctx.link().send_future(async move {
                    let store = CommentStore::new(BrowserStorage);
                    let res = submit_comment(&store, &NetworkLatency, &post_id, draft).await;
                    CommentSectionMsg::SubmissionDone(res)
                });
            }
            CommentSectionMsg::SubmissionDone(Ok(comment)) => {
                self.busy = false;
                self.form_generation += 1;
                self.comments.insert(0, comment.clone());
                self.prefill = None;
                self.show_toast(ctx, "Comment posted successfully!", false);
                let title = ctx.props().post_title.clone();
                let url = ctx.props().post_url.clone();
                // Best-effort notification, detached from the submission
                spawn_local(async move {
                    let dispatcher = Dispatcher::new(EmailJs, EmailConfig::default());
                    dispatcher.notify_comment(&comment, &title, &url).await;
                });
            }
            CommentSectionMsg::SubmissionDone(Err(e)) => {
                self.busy = false;
                self.show_toast(ctx, e.to_string(), true);
            }
            CommentSectionMsg::ToggleLike(id) => match toggle_like(&self.store, &id) {
                Ok(Some(toggle)) => {
                    if let Some(c) = self.comments.iter_mut().find(|c| c.id == id) {
                        c.likes = toggle.likes;
                    }
                    match toggle.liked {
                        true => self.liked.insert(id),
                        false => self.liked.remove(&id),
                    };
                }
                Ok(None) => return false,
                Err(e) => {
                    tracing::warn!(error = %e, "could not persist like toggle");
                    self.show_toast(ctx, "Like could not be saved", true);
                }
            },
            CommentSectionMsg::Reply(id) => match self.comments.iter().find(|c| c.id == id) {
                None => return false,
                Some(c) => self.prefill = Some(reply_prefill(&c.name)),
            },
            CommentSectionMsg::ToastTimeout => self.toast = None,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_submit = ctx.link().callback(CommentSectionMsg::Submit);
        let on_like = ctx.link().callback(CommentSectionMsg::ToggleLike);
        let on_reply = ctx.link().callback(CommentSectionMsg::Reply);
        html! {
            <section class="comments-section">
                <h3>{ format!("Comments ({})", self.comments.len()) }</h3>
                <ui::CommentForm
                    busy={self.busy}
                    prefill={self.prefill.clone()}
                    generation={self.form_generation}
                    {on_submit}
                />
                <div class="comments-list">
                    if self.comments.is_empty() {
                        <p class="no-comments">
                            { "No comments yet. Be the first to share your thoughts!" }
                        </p>
                    } else {
                        { for self.comments.iter().map(|c| html! {
                            <ui::CommentItem
                                key={c.id.0.clone()}
                                comment={c.clone()}
                                liked={self.liked.contains(&c.id)}
                                on_like={on_like.clone()}
                                on_reply={on_reply.clone()}
                            />
                        }) }
                    }
                </div>
                if let Some((message, error)) = &self.toast {
                    <ui::Toast message={message.clone()} error={*error} />
                }
            </section>
        }
    }
}
