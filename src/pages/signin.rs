use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::ApiError;
use crate::app::use_app;
use crate::components::layout::error_banner;
use crate::components::marketing::{PublicNav, RouteLink};
use crate::route::Route;

pub const WRONG_CREDENTIALS: &str = "Wrong ID or Password. Please check your credentials and try again.";

const CREDENTIAL_HINTS: [&str; 7] = [
    "invalid",
    "incorrect",
    "wrong",
    "password",
    "email",
    "credentials",
    "unauthorized",
];

/// What the sign-in form shows for a failed request. Anything that smells
/// like bad credentials collapses to one message.
pub fn sign_in_error(err: &ApiError) -> String {
    let lowered = err.message.to_lowercase();
    if err.status == 401 || err.status == 403 || CREDENTIAL_HINTS.iter().any(|hint| lowered.contains(hint)) {
        WRONG_CREDENTIALS.to_string()
    } else if err.message.is_empty() {
        "An error occurred. Please try again.".to_string()
    } else {
        err.message.clone()
    }
}

#[function_component(SignInPage)]
pub fn sign_in_page() -> Html {
    let app = use_app();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            loading.set(true);

            let app = app.clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                match app.api.sign_in(&email, &password).await {
                    Ok(resp) if resp.success => match (resp.access_token, resp.user_id) {
                        (Some(token), Some(user_id)) => {
                            error.set(None);
                            app.session().sign_in(&token, &user_id);
                            log::info!("signed in as {user_id}");
                            let next = if resp.onboarding_complete { Route::Dashboard } else { Route::Onboarding };
                            app.navigate.emit(next);
                        }
                        _ => error.set(Some(WRONG_CREDENTIALS.to_string())),
                    },
                    Ok(_) => error.set(Some(WRONG_CREDENTIALS.to_string())),
                    Err(err) => error.set(Some(sign_in_error(&err))),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen bg-[#120b25] text-white">
            <PublicNav />
            <div class="flex items-center justify-center px-4 py-16">
                <div class="w-full max-w-md bg-white/5 border border-white/10 rounded-2xl p-8">
                    <h2 class="text-3xl font-medium mb-2">{"Welcome back"}</h2>
                    <p class="text-sm text-gray-400 mb-8">{"Sign in to continue to FamFinity"}</p>
                    <form onsubmit={on_submit} class="space-y-5">
                        { error_banner(&error) }
                        <div>
                            <label class="block text-sm mb-2">{"Email"}</label>
                            <input type="email" required=true value={(*email).clone()} oninput={on_email}
                                class="w-full px-4 py-3 rounded-lg bg-[#1a1a1a] border border-gray-700 focus:outline-none focus:border-[#6246e9]" />
                        </div>
                        <div>
                            <label class="block text-sm mb-2">{"Password"}</label>
                            <input type="password" required=true value={(*password).clone()} oninput={on_password}
                                class="w-full px-4 py-3 rounded-lg bg-[#1a1a1a] border border-gray-700 focus:outline-none focus:border-[#6246e9]" />
                        </div>
                        <button type="submit" disabled={*loading}
                            class="w-full py-3 rounded-lg bg-[#6246e9] hover:bg-[#5236d9] font-medium disabled:opacity-50">
                            { if *loading { "Signing in..." } else { "Sign In" } }
                        </button>
                    </form>
                    <p class="text-sm text-gray-400 text-center mt-6">
                        {"Don't have an account? "}
                        <RouteLink to={Route::SignUp} class={classes!("text-[#8b7cf6]", "hover:underline")}>{"Sign up"}</RouteLink>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_status_reads_as_wrong_credentials() {
        assert_eq!(sign_in_error(&ApiError::new("Not allowed", 401)), WRONG_CREDENTIALS);
        assert_eq!(sign_in_error(&ApiError::new("Forbidden", 403)), WRONG_CREDENTIALS);
    }

    #[test]
    fn test_credential_words_read_as_wrong_credentials() {
        assert_eq!(sign_in_error(&ApiError::new("Invalid email or password", 400)), WRONG_CREDENTIALS);
    }

    #[test]
    fn test_other_failures_keep_their_message() {
        assert_eq!(sign_in_error(&ApiError::new("Server exploded", 500)), "Server exploded");
        assert_eq!(sign_in_error(&ApiError::new("", 500)), "An error occurred. Please try again.");
    }
}
