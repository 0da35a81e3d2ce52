use vellum_client::{api::Draft, initials};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    pub busy: bool,
    /// Text to seed the message field with, for reply flows.
    pub prefill: Option<String>,
    /// Bumped by the parent after a successful submission to clear the form.
    pub generation: usize,
    pub on_submit: Callback<Draft>,
}

pub struct CommentForm {
    name: String,
    email: String,
    message: String,
    message_ref: NodeRef,
}

pub enum CommentFormMsg {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    SubmitClicked,
}

impl Component for CommentForm {
    type Message = CommentFormMsg;
    type Properties = CommentFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            message_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.generation != old_props.generation {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
        if props.prefill != old_props.prefill {
            if let Some(prefill) = &props.prefill {
                self.message = prefill.clone();
                // Replying far down a thread: bring the form into view and
                // put the cursor after the mention prefix
                if let Some(area) = self.message_ref.cast::<web_sys::HtmlTextAreaElement>() {
                    area.scroll_into_view();
                    let _ = area.focus();
                    area.set_value(prefill);
                    let end = prefill.len() as u32;
                    let _ = area.set_selection_range(end, end);
                }
            }
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentFormMsg::NameChanged(n) => self.name = n,
            CommentFormMsg::EmailChanged(e) => self.email = e,
            CommentFormMsg::MessageChanged(m) => self.message = m,
            CommentFormMsg::SubmitClicked => {
                ctx.props().on_submit.emit(Draft {
                    name: self.name.clone(),
                    email: self.email.clone(),
                    message: self.message.clone(),
                });
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        macro_rules! callback_for {
            ($msg:ident) => {
                ctx.link().callback(|e: web_sys::Event| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    CommentFormMsg::$msg(input.value())
                })
            };
        }
        let on_message = ctx.link().callback(|e: web_sys::Event| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            CommentFormMsg::MessageChanged(area.value())
        });
        let button_label = match ctx.props().busy {
            true => "Posting...",
            false => "Post Comment",
        };
        html! {
            <form class="comment-form">
                <div class="comment-form-header">
                    <div class="comment-avatar">{ initials(&self.name) }</div>
                    <h4>{ "Leave a Comment" }</h4>
                </div>
                <div class="form-row">
                    <input
                        type="text"
                        placeholder="Your name"
                        value={self.name.clone()}
                        onchange={callback_for!(NameChanged)}
                    />
                    <input
                        type="email"
                        placeholder="Your email (not published)"
                        value={self.email.clone()}
                        onchange={callback_for!(EmailChanged)}
                    />
                </div>
                <textarea
                    ref={self.message_ref.clone()}
                    placeholder="Share your thoughts..."
                    value={self.message.clone()}
                    onchange={on_message}
                >
                </textarea>
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled={ctx.props().busy}
                    onclick={ctx.link().callback(|_| CommentFormMsg::SubmitClicked)}
                >
                    { button_label }
                </button>
            </form>
        }
    }
}
