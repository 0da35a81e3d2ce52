use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ToastProps {
    pub message: String,
    pub error: bool,
}

#[function_component(Toast)]
pub fn toast(p: &ToastProps) -> Html {
    let kind = match p.error {
        true => "toast-error",
        false => "toast-success",
    };
    html! {
        <div class={classes!("toast-notification", kind)} role="status">
            { &p.message }
        </div>
    }
}
