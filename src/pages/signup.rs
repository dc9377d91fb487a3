use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::use_app;
use crate::components::layout::error_banner;
use crate::components::marketing::{PublicNav, RouteLink};
use crate::route::Route;
use crate::session::PendingSignup;

fn field(label: &'static str, kind: &'static str, placeholder: &'static str, value: &str, oninput: Callback<InputEvent>) -> Html {
    html! {
        <div>
            <label class="block text-sm font-medium mb-2 text-[#c4c4c4]">{ label }</label>
            <input type={kind} required=true value={value.to_string()} {placeholder} {oninput}
                class="w-full px-4 py-3 rounded-lg bg-[#1a1a1a] border border-gray-700 text-white focus:outline-none focus:border-[#6246e9]" />
        </div>
    }
}

fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| state.set(e.target_unchecked_into::<HtmlInputElement>().value()))
}

/// First of three sign-up steps. Nothing reaches the backend until the CSV
/// upload completes the account.
#[function_component(SignUpPage)]
pub fn sign_up_page() -> Html {
    let app = use_app();
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let full_name = full_name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if full_name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
                error.set(Some("Please fill in all fields".to_string()));
                return;
            }
            error.set(None);
            app.session().set_pending_signup(PendingSignup {
                full_name: full_name.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
            });
            app.navigate.emit(Route::Onboarding);
        })
    };

    html! {
        <div class="min-h-screen bg-[#120b25] text-white">
            <PublicNav />
            <div class="flex items-center justify-center px-4 py-16">
                <div class="w-full max-w-md bg-white/5 border border-white/10 rounded-2xl p-8">
                    <h2 class="text-3xl font-medium mb-2">{"Create your account"}</h2>
                    <p class="text-sm text-gray-400 mb-8">{"Step 1 of 3: your details"}</p>
                    <form onsubmit={on_submit} class="space-y-5">
                        { error_banner(&error) }
                        { field("Full Name", "text", "John Doe", &full_name, bind(&full_name)) }
                        { field("Email", "email", "your.email@example.com", &email, bind(&email)) }
                        { field("Password", "password", "••••••••", &password, bind(&password)) }
                        <button type="submit" class="w-full py-3 rounded-lg bg-[#c2f52f] text-[#120b25] font-medium">
                            {"Continue"}
                        </button>
                    </form>
                    <p class="text-sm text-gray-400 text-center mt-6">
                        {"Already have an account? "}
                        <RouteLink to={Route::SignIn} class={classes!("text-[#8b7cf6]", "hover:underline")}>{"Sign in"}</RouteLink>
                    </p>
                </div>
            </div>
        </div>
    }
}
