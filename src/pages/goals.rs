use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::types::{Goal, GoalCreated, NewGoal};
use crate::app::use_app;
use crate::components::layout::{error_banner, AppLayout};
use crate::locale::{self, format_currency};

fn deadline_date(deadline: &str) -> Option<NaiveDate> {
    deadline
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

/// "12 days left", or "Deadline passed" once the day has come.
pub fn countdown(deadline: &str, today: NaiveDate) -> Option<String> {
    let days = (deadline_date(deadline)? - today).num_days();
    Some(if days > 0 {
        format!("{days} days left")
    } else {
        "Deadline passed".to_string()
    })
}

fn goal_card(goal: &Goal, on_delete: Callback<String>) -> Html {
    let id = goal.id.clone();
    let deadline = goal.deadline.as_deref().filter(|d| !d.is_empty());
    html! {
        <div class="bg-[#252525] rounded-xl p-6 border border-gray-800">
            <div class="flex justify-between items-start mb-4">
                <div class="flex items-center gap-3">
                    <span class="text-3xl">{"🎯"}</span>
                    <h3 class="text-lg font-semibold text-white">{ &goal.title }</h3>
                </div>
                <button type="button" class="text-gray-500 hover:text-red-400"
                    onclick={Callback::from(move |_| on_delete.emit(id.clone()))}>
                    {"✕"}
                </button>
            </div>
            <p class="text-sm text-gray-400">{"Target"}</p>
            <p class="text-2xl font-bold text-purple-400 mb-4">{ format_currency(goal.price) }</p>
            if let Some(deadline) = deadline {
                <div class="border-t border-gray-800 pt-3 text-sm">
                    <p class="text-gray-400">
                        { deadline_date(deadline).map(locale::long_date).unwrap_or_else(|| deadline.to_string()) }
                    </p>
                    if let Some(label) = countdown(deadline, locale::today()) {
                        <p class="text-xs text-gray-500 mt-1">{ label }</p>
                    }
                </div>
            }
        </div>
    }
}

fn suggestions_panel(created: &GoalCreated) -> Html {
    html! {
        <div class="mt-6 p-4 bg-purple-900/30 rounded-lg border border-purple-700/50">
            <h4 class="font-semibold text-purple-300 mb-3">{"AI Suggestions to Achieve Your Goal"}</h4>
            if let Some(months) = created.predicted_time_months {
                <p class="text-sm text-gray-300 mb-3">{ format!("Estimated time to reach this goal: {months} months") }</p>
            }
            <ul class="space-y-2">
                { for created.suggestions.iter().map(|s| html! {
                    <li class="flex gap-2 text-sm text-gray-200"><span>{"💡"}</span><span>{ s.clone() }</span></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(GoalsPage)]
pub fn goals_page() -> Html {
    let app = use_app();
    let goals = use_state(Vec::<Goal>::new);
    let revision = use_state(|| 0u32);
    let show_form = use_state(|| false);
    let created = use_state(|| None::<GoalCreated>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let title = use_state(String::new);
    let price = use_state(String::new);
    let deadline = use_state(String::new);

    {
        let api = app.api.clone();
        let goals = goals.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.goals().await {
                        Ok(list) => goals.set(list.goals),
                        Err(err) => log::warn!("goals unavailable: {err}"),
                    }
                });
                || ()
            },
            *revision,
        );
    }

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| state.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_submit = {
        let api = app.api.clone();
        let title = title.clone();
        let price = price.clone();
        let deadline = deadline.clone();
        let created = created.clone();
        let loading = loading.clone();
        let error = error.clone();
        let revision = revision.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(amount) = price.trim().parse::<f64>().ok().filter(|p| *p > 0.0) else {
                error.set(Some("Please enter a valid target amount".to_string()));
                return;
            };
            let goal = NewGoal {
                title: title.trim().to_string(),
                price: amount,
                deadline: Some(deadline.trim().to_string()).filter(|d| !d.is_empty()),
            };
            let api = api.clone();
            let (title, price, deadline) = (title.clone(), price.clone(), deadline.clone());
            let (created, loading, error, revision) = (created.clone(), loading.clone(), error.clone(), revision.clone());
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match api.create_goal(&goal).await {
                    Ok(resp) => {
                        created.set(Some(resp));
                        title.set(String::new());
                        price.set(String::new());
                        deadline.set(String::new());
                        revision.set(*revision + 1);
                    }
                    Err(err) => error.set(Some(err.message)),
                }
                loading.set(false);
            });
        })
    };

    let on_delete = {
        let api = app.api.clone();
        let error = error.clone();
        let revision = revision.clone();
        Callback::from(move |id: String| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this goal?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let api = api.clone();
            let error = error.clone();
            let revision = revision.clone();
            spawn_local(async move {
                match api.delete_goal(&id).await {
                    Ok(_) => revision.set(*revision + 1),
                    Err(err) => {
                        log::warn!("delete goal {id} failed: {err}");
                        error.set(Some("Failed to delete goal".to_string()));
                    }
                }
            });
        })
    };

    let set_form = |open: bool| {
        let show_form = show_form.clone();
        let created = created.clone();
        Callback::from(move |_: MouseEvent| {
            show_form.set(open);
            created.set(None);
        })
    };

    let input_class = "w-full px-4 py-2 bg-[#1a1a1a] border border-gray-700 rounded-lg text-white";

    html! {
        <AppLayout>
            <div class="space-y-6">
                <div class="flex justify-between items-center flex-wrap gap-3">
                    <div>
                        <h2 class="text-2xl font-bold text-white">{"Financial Goals"}</h2>
                        <p class="text-gray-400">{"Set goals and get AI-powered suggestions to achieve them"}</p>
                    </div>
                    <button onclick={set_form(true)} class="px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700">
                        {"+ Add Goal"}
                    </button>
                </div>

                { error_banner(&error) }

                if *show_form {
                    <div class="bg-[#252525] rounded-xl p-6 border border-gray-800">
                        <h3 class="text-lg font-semibold text-white mb-4">{"Create New Goal"}</h3>
                        <form onsubmit={on_submit} class="space-y-4">
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                <div>
                                    <label class="block text-sm text-gray-300 mb-2">{"Goal Title"}</label>
                                    <input type="text" required=true value={(*title).clone()} oninput={bind(&title)}
                                        placeholder="e.g., New Car, Vacation, Emergency Fund" class={input_class} />
                                </div>
                                <div>
                                    <label class="block text-sm text-gray-300 mb-2">{"Target Amount (₹)"}</label>
                                    <input type="number" required=true value={(*price).clone()} oninput={bind(&price)}
                                        placeholder="100000" class={input_class} />
                                </div>
                                <div>
                                    <label class="block text-sm text-gray-300 mb-2">{"Deadline (optional)"}</label>
                                    <input type="date" value={(*deadline).clone()} oninput={bind(&deadline)} class={input_class} />
                                </div>
                            </div>
                            <div class="flex justify-end gap-3">
                                <button type="button" onclick={set_form(false)} class="px-4 py-2 text-sm text-gray-300">{"Cancel"}</button>
                                <button type="submit" disabled={*loading}
                                    class="px-4 py-2 text-sm bg-purple-600 text-white rounded-lg disabled:opacity-50">
                                    { if *loading { "Creating..." } else { "Get AI Suggestions" } }
                                </button>
                            </div>
                        </form>
                        if let Some(created) = &*created {
                            { suggestions_panel(created) }
                        }
                    </div>
                }

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for goals.iter().map(|goal| goal_card(goal, on_delete.clone())) }
                </div>

                if goals.is_empty() && !*show_form {
                    <div class="text-center py-12 text-gray-400">
                        <p class="mb-4">{"No goals yet"}</p>
                        <button onclick={set_form(true)} class="text-purple-400 hover:text-purple-300 font-medium">
                            {"Create your first goal"}
                        </button>
                    </div>
                }
            </div>
        </AppLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_future_deadline_counts_days() {
        assert_eq!(countdown("2025-03-17", day(2025, 3, 7)).as_deref(), Some("10 days left"));
    }

    #[test]
    fn test_today_or_earlier_has_passed() {
        assert_eq!(countdown("2025-03-07", day(2025, 3, 7)).as_deref(), Some("Deadline passed"));
        assert_eq!(countdown("2024-12-31T00:00:00", day(2025, 3, 7)).as_deref(), Some("Deadline passed"));
    }

    #[test]
    fn test_unparseable_deadline_has_no_countdown() {
        assert_eq!(countdown("someday", day(2025, 3, 7)), None);
    }
}
