use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::types::User;
use crate::app::use_app;
use crate::components::layout::{success_banner, AppLayout};
use crate::locale;
use crate::onboarding::QUESTIONS;
use crate::route::Route;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Renders a backend timestamp as a date, or "N/A" when there is none.
pub fn account_created(created_at: Option<&str>) -> String {
    created_at
        .and_then(|stamp| stamp.get(..10))
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .map(locale::long_date)
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn survey_status(answered: usize) -> String {
    let total = QUESTIONS.len();
    if answered >= total {
        format!("All {total} questions answered")
    } else {
        format!("{answered} of {total} questions answered")
    }
}

fn setting_row(title: &'static str, detail: String, action: Html) -> Html {
    html! {
        <div class="flex items-center justify-between py-3 border-b border-gray-700 last:border-b-0 flex-wrap gap-2">
            <div class="min-w-0 flex-1">
                <p class="font-medium text-white">{ title }</p>
                <p class="text-sm text-gray-400">{ detail }</p>
            </div>
            { action }
        </div>
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let app = use_app();
    let user = use_context::<User>().unwrap_or_default();
    let answered = use_state(|| None::<usize>);
    let editing = use_state(|| false);
    let name = use_state(|| user.name.clone());
    let notice = use_state(|| None::<String>);

    {
        let api = app.api.clone();
        let answered = answered.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.stored_answers().await {
                        Ok(stored) => answered.set(Some(stored.questions.len())),
                        Err(err) => log::warn!("stored answers unavailable: {err}"),
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| name.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    // No profile update endpoint exists yet.
    let on_save = {
        let editing = editing.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            notice.set(Some("Profile update feature coming soon!".to_string()));
            editing.set(false);
        })
    };

    let set_editing = |open: bool| {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(open))
    };

    let on_logout = {
        let app = app.clone();
        Callback::from(move |_| {
            app.session().clear();
            log::info!("signed out");
            app.navigate.emit(Route::SignIn);
        })
    };

    let on_onboarding = {
        let navigate = app.navigate.clone();
        Callback::from(move |_| navigate.emit(Route::Onboarding))
    };
    let on_upload = {
        let navigate = app.navigate.clone();
        Callback::from(move |_| navigate.emit(Route::UploadCsv))
    };

    let display_name = if user.name.is_empty() { "User" } else { user.name.as_str() };
    let initial = display_name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    let survey = match *answered {
        Some(count) => survey_status(count),
        None => "Complete your financial profile".to_string(),
    };
    let link_class = "px-4 py-2 text-sm text-purple-400 hover:text-purple-300 whitespace-nowrap";
    let card_class = "bg-[#252525] rounded-xl p-4 sm:p-6 border border-gray-800";

    html! {
        <AppLayout>
            <div class="max-w-3xl mx-auto space-y-6">
                <div class={card_class}>
                    <div class="flex items-center gap-4 mb-6">
                        <div class="w-16 h-16 sm:w-20 sm:h-20 rounded-full bg-gradient-to-br from-purple-600 to-blue-600 flex items-center justify-center text-white text-2xl sm:text-3xl font-bold">
                            { initial }
                        </div>
                        <div class="min-w-0 flex-1">
                            <h2 class="text-xl sm:text-2xl font-bold text-white break-words">{ display_name }</h2>
                            <p class="text-sm sm:text-base text-gray-400 break-words">{ &user.email }</p>
                        </div>
                    </div>

                    { success_banner(&notice) }

                    if *editing {
                        <form onsubmit={on_save} class="space-y-4 mt-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-300 mb-2">{"Name"}</label>
                                <input type="text" value={(*name).clone()} oninput={on_name}
                                    class="w-full px-4 py-2 border border-gray-700 bg-[#2a2a2a] text-white rounded-lg text-sm" />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-300 mb-2">{"Email"}</label>
                                <input type="email" value={user.email.clone()} disabled=true
                                    class="w-full px-4 py-2 border border-gray-700 bg-[#2a2a2a] text-gray-400 rounded-lg text-sm" />
                                <p class="text-xs text-gray-400 mt-1">{"Email cannot be changed"}</p>
                            </div>
                            <div class="flex gap-3">
                                <button type="button" onclick={set_editing(false)}
                                    class="px-4 py-2 border border-gray-700 rounded-lg text-gray-300 hover:bg-gray-800">{"Cancel"}</button>
                                <button type="submit" class="px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700">{"Save Changes"}</button>
                            </div>
                        </form>
                    } else {
                        <button onclick={set_editing(true)} class="mt-4 px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700">
                            {"Edit Profile"}
                        </button>
                    }
                </div>

                <div class={card_class}>
                    <h3 class="text-lg font-semibold text-white mb-4">{"Account Settings"}</h3>
                    { setting_row("Onboarding Status", survey,
                        html! { <button onclick={on_onboarding} class={link_class}>{"View Questions →"}</button> }) }
                    { setting_row("Transactions", "Import more transactions from a CSV file".to_string(),
                        html! { <button onclick={on_upload} class={link_class}>{"Upload →"}</button> }) }
                </div>

                <div class={card_class}>
                    <h3 class="text-lg font-semibold text-white mb-4">{"App Information"}</h3>
                    <div class="space-y-2 text-sm text-gray-400">
                        <div class="flex justify-between"><span>{"Version:"}</span><span class="font-medium">{ APP_VERSION }</span></div>
                        <div class="flex justify-between"><span>{"Last Login:"}</span><span class="font-medium">{ locale::long_date(locale::today()) }</span></div>
                        <div class="flex justify-between">
                            <span>{"Account Created:"}</span>
                            <span class="font-medium">{ account_created(user.created_at.as_deref()) }</span>
                        </div>
                    </div>
                </div>

                <div class="bg-[#252525] rounded-xl p-4 sm:p-6 border border-red-800/50">
                    <button onclick={on_logout} class="w-full px-4 py-3 bg-red-600 text-white rounded-lg hover:bg-red-700 font-medium">
                        {"Logout"}
                    </button>
                </div>

                <p class="text-center text-sm text-gray-500">{"© 2024 FamFinity. Made in India 🇮🇳"}</p>
            </div>
        </AppLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_date_is_long_form() {
        assert_eq!(account_created(Some("2025-03-07T10:15:00Z")), "7 March 2025");
    }

    #[test]
    fn test_missing_or_bad_created_date() {
        assert_eq!(account_created(None), "N/A");
        assert_eq!(account_created(Some("yesterday")), "N/A");
    }

    #[test]
    fn test_survey_progress() {
        assert_eq!(survey_status(4), "4 of 15 questions answered");
        assert_eq!(survey_status(15), "All 15 questions answered");
    }
}
