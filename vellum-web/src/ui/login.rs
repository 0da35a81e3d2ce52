use chrono::Utc;
use vellum_client::{api::UserSession, password_strength_ok, save_session};
use yew::prelude::*;

use crate::{latency, storage::BrowserStorage, ui};

const LOGIN_MS: u64 = 2000;
const SIGNUP_MS: u64 = 2500;
const FORGOT_MS: u64 = 2000;

#[derive(Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Login,
    Signup,
    Forgot,
}

#[derive(Clone, PartialEq, Properties)]
pub struct LoginProps {}

pub struct Login {
    mode: Mode,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    confirm_password: String,
    remember: bool,
    terms: bool,
    busy: bool,
    toast: Option<String>,
    success: Option<String>,
}

pub enum LoginMsg {
    SwitchMode(Mode),
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    RememberToggled,
    TermsToggled,
    SubmitClicked,
    Finished(String),
    ToastTimeout,
}

impl Login {
    fn show_toast(&mut self, ctx: &Context<Self>, message: impl Into<String>) {
        self.toast = Some(message.into());
        ctx.link().send_future(async {
            latency::sleep_ms(latency::TOAST_MS).await;
            LoginMsg::ToastTimeout
        });
    }

    fn submit(&mut self, ctx: &Context<Self>) {
        match self.mode {
            Mode::Login => {
                let session = UserSession {
                    email: self.email.clone(),
                    first_name: None,
                    last_name: None,
                    login_time: Utc::now(),
                    remember: self.remember,
                };
                let text = format!(
                    "Welcome back! You have successfully signed in as {}.",
                    self.email
                );
                self.busy = true;
                ctx.link().send_future(async move {
                    latency::sleep_ms(LOGIN_MS).await;
                    if let Err(e) = save_session(&BrowserStorage, &session) {
                        tracing::warn!(error = %e, "could not persist session");
                    }
                    LoginMsg::Finished(text)
                });
            }
            Mode::Signup => {
                if self.password != self.confirm_password {
                    return self.show_toast(ctx, "Passwords do not match");
                }
                if !password_strength_ok(&self.password) {
                    return self.show_toast(ctx, "Password does not meet requirements");
                }
                if !self.terms {
                    return self.show_toast(ctx, "You must accept the Terms of Service");
                }
                let session = UserSession {
                    email: self.email.clone(),
                    first_name: Some(self.first_name.clone()),
                    last_name: Some(self.last_name.clone()),
                    login_time: Utc::now(),
                    remember: false,
                };
                let text = format!(
                    "Welcome, {}! Your account has been created successfully.",
                    self.first_name
                );
                self.busy = true;
                ctx.link().send_future(async move {
                    latency::sleep_ms(SIGNUP_MS).await;
                    if let Err(e) = save_session(&BrowserStorage, &session) {
                        tracing::warn!(error = %e, "could not persist session");
                    }
                    LoginMsg::Finished(text)
                });
            }
            Mode::Forgot => {
                let text = format!(
                    "Password reset link has been sent to {}. Please check your \
                     inbox and follow the instructions.",
                    self.email
                );
                self.busy = true;
                ctx.link().send_future(async move {
                    latency::sleep_ms(FORGOT_MS).await;
                    LoginMsg::Finished(text)
                });
            }
        }
    }
}

impl Component for Login {
    type Message = LoginMsg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            mode: Mode::Login,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            remember: false,
            terms: false,
            busy: false,
            toast: None,
            success: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginMsg::SwitchMode(mode) => {
                self.mode = mode;
                self.success = None;
                self.password.clear();
                self.confirm_password.clear();
            }
            LoginMsg::FirstNameChanged(v) => self.first_name = v,
            LoginMsg::LastNameChanged(v) => self.last_name = v,
            LoginMsg::EmailChanged(v) => self.email = v,
            LoginMsg::PasswordChanged(v) => self.password = v,
            LoginMsg::ConfirmPasswordChanged(v) => self.confirm_password = v,
            LoginMsg::RememberToggled => self.remember = !self.remember,
            LoginMsg::TermsToggled => self.terms = !self.terms,
            LoginMsg::SubmitClicked => {
                if self.busy {
                    return false;
                }
                self.submit(ctx);
            }
            LoginMsg::Finished(text) => {
                self.busy = false;
                self.success = Some(text);
            }
            LoginMsg::ToastTimeout => self.toast = None,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if let Some(text) = &self.success {
            return html! {
                <div class="auth-success">
                    <i class="fas fa-check-circle"></i>
                    <p>{ text }</p>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        onclick={ctx.link().callback(|_| LoginMsg::SwitchMode(Mode::Login))}
                    >
                        { "Back to login" }
                    </button>
                </div>
            };
        }
        macro_rules! callback_for {
            ($msg:ident) => {
                ctx.link().callback(|e: web_sys::Event| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    LoginMsg::$msg(input.value())
                })
            };
        }
        let heading = match self.mode {
            Mode::Login => "Sign In",
            Mode::Signup => "Create Account",
            Mode::Forgot => "Reset Password",
        };
        let button_label = match (self.busy, self.mode) {
            (true, _) => "Please wait...",
            (false, Mode::Login) => "Sign In",
            (false, Mode::Signup) => "Sign Up",
            (false, Mode::Forgot) => "Send Reset Link",
        };
        html! {
            <form class="auth-form">
                <h2>{ heading }</h2>
                if self.mode == Mode::Signup {
                    <div class="form-row">
                        <input
                            type="text"
                            placeholder="First name"
                            value={self.first_name.clone()}
                            onchange={callback_for!(FirstNameChanged)}
                        />
                        <input
                            type="text"
                            placeholder="Last name"
                            value={self.last_name.clone()}
                            onchange={callback_for!(LastNameChanged)}
                        />
                    </div>
                }
                <input
                    type="email"
                    placeholder="Email address"
                    value={self.email.clone()}
                    onchange={callback_for!(EmailChanged)}
                />
                if self.mode != Mode::Forgot {
                    <input
                        type="password"
                        placeholder="Password"
                        value={self.password.clone()}
                        onchange={callback_for!(PasswordChanged)}
                    />
                }
                if self.mode == Mode::Signup {
                    <input
                        type="password"
                        placeholder="Confirm password"
                        value={self.confirm_password.clone()}
                        onchange={callback_for!(ConfirmPasswordChanged)}
                    />
                    <label class="terms-opt-in">
                        <input
                            type="checkbox"
                            checked={self.terms}
                            onchange={ctx.link().callback(|_| LoginMsg::TermsToggled)}
                        />
                        { "I accept the Terms of Service" }
                    </label>
                }
                if self.mode == Mode::Login {
                    <label class="remember-me">
                        <input
                            type="checkbox"
                            checked={self.remember}
                            onchange={ctx.link().callback(|_| LoginMsg::RememberToggled)}
                        />
                        { "Remember me" }
                    </label>
                }
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled={self.busy}
                    onclick={ctx.link().callback(|_| LoginMsg::SubmitClicked)}
                >
                    { button_label }
                </button>
                <div class="auth-links">
                    if self.mode != Mode::Login {
                        <a href="#" onclick={ctx.link().callback(|e: MouseEvent| {
                            e.prevent_default();
                            LoginMsg::SwitchMode(Mode::Login)
                        })}>{ "Sign in instead" }</a>
                    }
                    if self.mode != Mode::Signup {
                        <a href="#" onclick={ctx.link().callback(|e: MouseEvent| {
                            e.prevent_default();
                            LoginMsg::SwitchMode(Mode::Signup)
                        })}>{ "Create an account" }</a>
                    }
                    if self.mode == Mode::Login {
                        <a href="#" onclick={ctx.link().callback(|e: MouseEvent| {
                            e.prevent_default();
                            LoginMsg::SwitchMode(Mode::Forgot)
                        })}>{ "Forgot password?" }</a>
                    }
                </div>
                if let Some(toast) = &self.toast {
                    <ui::Toast message={toast.clone()} error=true />
                }
            </form>
        }
    }
}
