use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::types::{Budget, BudgetField};
use crate::app::{sleep, use_app};
use crate::components::charts::BudgetDonut;
use crate::components::layout::{error_banner, success_banner, AppLayout};
use crate::locale::{self, format_currency, CURRENCY_SYMBOL};
use crate::route::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Income,
    Savings,
    Expenses,
}

impl Step {
    const ALL: [Step; 3] = [Step::Income, Step::Savings, Step::Expenses];

    fn number(self) -> usize {
        match self {
            Step::Income => 1,
            Step::Savings => 2,
            Step::Expenses => 3,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Step::Income => "Income",
            Step::Savings => "Savings",
            Step::Expenses => "Expenses",
        }
    }
}

/// Reads a number input; blank or malformed input counts as zero.
fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn amount_input(value: f64, class: &'static str, on_change: Callback<f64>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        on_change.emit(parse_amount(&e.target_unchecked_into::<HtmlInputElement>().value()));
    });
    html! {
        <div class="relative">
            <span class="absolute left-3 top-2.5 text-gray-500">{ CURRENCY_SYMBOL }</span>
            <input type="number" min="0" placeholder="0" value={value.to_string()} {oninput}
                class={classes!("pl-8", "pr-3", "py-2", "bg-[#1a1a1a]", "border", "border-gray-700", "rounded-lg", "text-white", class)} />
        </div>
    }
}

#[function_component(BudgetsPage)]
pub fn budgets_page() -> Html {
    let app = use_app();
    let month = use_state(|| locale::month_key(locale::today()));
    let budget = use_state(|| Budget::starter(&locale::month_key(locale::today())));
    let step = use_state(|| Step::Income);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    {
        let api = app.api.clone();
        let budget = budget.clone();
        use_effect_with_deps(
            move |month: &String| {
                let month = month.clone();
                spawn_local(async move {
                    let loaded = match api.current_budget(Some(&month)).await {
                        Ok(resp) => resp.budget,
                        Err(err) => {
                            log::warn!("no budget for {month}: {err}");
                            None
                        }
                    };
                    let mut next = loaded.unwrap_or_else(|| Budget::starter(&month));
                    next.month = month;
                    budget.set(next);
                });
                || ()
            },
            (*month).clone(),
        );
    }

    let update = {
        let budget = budget.clone();
        move |apply: fn(&mut Budget, f64)| {
            let budget = budget.clone();
            Callback::from(move |value: f64| {
                let mut next = (*budget).clone();
                apply(&mut next, value);
                budget.set(next);
            })
        }
    };
    let on_field = |field: BudgetField| {
        let budget = budget.clone();
        Callback::from(move |value: f64| {
            let mut next = (*budget).clone();
            next.set(field, value);
            budget.set(next);
        })
    };

    let on_month = {
        let month = month.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            if !value.is_empty() {
                month.set(value);
            }
        })
    };

    let on_save = {
        let app = app.clone();
        let budget = budget.clone();
        let loading = loading.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |_| {
            let app = app.clone();
            let budget = (*budget).clone();
            let loading = loading.clone();
            let error = error.clone();
            let success = success.clone();
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match app.api.save_budget(&budget).await {
                    Ok(_) => {
                        loading.set(false);
                        success.set(Some("Budget saved successfully!".to_string()));
                        sleep(1500).await;
                        app.navigate.emit(Route::Dashboard);
                    }
                    Err(err) => {
                        loading.set(false);
                        error.set(Some(err.message));
                    }
                }
            });
        })
    };

    let on_cancel = {
        let navigate = app.navigate.clone();
        Callback::from(move |_| navigate.emit(Route::Dashboard))
    };

    let planned = budget.planned_expenses();
    let left = budget.left_to_budget();

    let content = match *step {
        Step::Income => html! {
            <div class="max-w-md">
                <h2 class="text-xl font-semibold text-white mb-6">{"Step 1. Enter your monthly income"}</h2>
                <label class="block text-sm font-medium text-gray-300 mb-2">{"Monthly Income"}</label>
                { amount_input(budget.income, "w-full", update(|b, v| b.income = v)) }
                <p class="mt-2 text-sm text-gray-500">{"Enter your total monthly income including salary, investments, etc."}</p>
            </div>
        },
        Step::Savings => {
            let presets = [0.2, 0.3, 0.4].map(|share| {
                let budget = budget.clone();
                let onclick = Callback::from(move |_| {
                    let mut next = (*budget).clone();
                    next.savings_goal = next.income * share;
                    budget.set(next);
                });
                html! {
                    <button type="button" {onclick} class="px-3 py-1 text-sm bg-gray-800 hover:bg-gray-700 text-gray-200 rounded-md">
                        { format!("{:.0}%", share * 100.0) }
                    </button>
                }
            });
            html! {
                <div class="max-w-md">
                    <h2 class="text-xl font-semibold text-white mb-6">{"Step 2. Set your savings goal"}</h2>
                    <label class="block text-sm font-medium text-gray-300 mb-2">{"Monthly Savings Goal"}</label>
                    { amount_input(budget.savings_goal, "w-full", update(|b, v| b.savings_goal = v)) }
                    <p class="mt-2 text-sm text-gray-500">
                        { format!("Recommended: 20-30% of income ({} - {})",
                            format_currency(budget.income * 0.2), format_currency(budget.income * 0.3)) }
                    </p>
                    <div class="mt-4 flex gap-2">{ for presets }</div>
                </div>
            }
        }
        Step::Expenses => html! {
            <div>
                <h2 class="text-xl font-semibold text-white mb-6">{"Step 3. Enter your monthly expenses"}</h2>
                <div class="space-y-4">
                    { for BudgetField::ALL.iter().map(|field| html! {
                        <div class="flex items-center justify-between border-b border-gray-800 pb-4">
                            <div class="flex items-center gap-3">
                                <span class="text-2xl">{ field.icon() }</span>
                                <div>
                                    <h3 class="font-medium text-white">{ field.label() }</h3>
                                    if !field.subcategories().is_empty() {
                                        <p class="text-xs text-gray-500">
                                            { field.subcategories().iter().take(3).copied().collect::<Vec<_>>().join(", ") }
                                        </p>
                                    }
                                </div>
                            </div>
                            { amount_input(budget.get(*field), "w-32", on_field(*field)) }
                        </div>
                    }) }
                </div>
            </div>
        },
    };

    let position = step.number();
    let nav_step = |target: Step| {
        let step = step.clone();
        Callback::from(move |_| step.set(target))
    };

    html! {
        <AppLayout>
            <div class="max-w-5xl mx-auto space-y-6">
                <div class="bg-[#252525] rounded-xl p-4 sm:p-6 border border-gray-800">
                    <div class="flex items-center justify-between mb-6 flex-wrap gap-3">
                        <h1 class="text-2xl font-bold text-white">{"Create a Budget"}</h1>
                        <button onclick={on_cancel} class="px-4 py-2 text-sm text-gray-400 hover:text-white">{"Cancel"}</button>
                    </div>
                    <div class="flex items-center justify-center gap-4 sm:gap-8 mb-6 flex-wrap">
                        { for Step::ALL.iter().map(|s| {
                            let active = s.number() == position;
                            let completed = s.number() < position;
                            html! {
                                <button type="button" onclick={nav_step(*s)} class="flex flex-col items-center gap-1">
                                    <span class={classes!("w-10", "h-10", "rounded-full", "flex", "items-center", "justify-center", "font-semibold",
                                        if active { "bg-purple-600 text-white" } else if completed { "bg-purple-900 text-purple-200" } else { "bg-gray-700 text-gray-300" })}>
                                        { if completed { "✓".to_string() } else { s.number().to_string() } }
                                    </span>
                                    <span class="text-xs text-gray-400">{ s.label() }</span>
                                </button>
                            }
                        }) }
                    </div>
                    <label class="block text-sm font-medium text-gray-300 mb-2">{"Budget Month"}</label>
                    <input type="month" value={(*month).clone()} onchange={on_month}
                        class="px-4 py-2 bg-[#1a1a1a] border border-gray-700 rounded-lg text-white" />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2 bg-[#252525] rounded-xl p-4 sm:p-6 border border-gray-800">
                        { content }
                        <div class="flex justify-between mt-8">
                            <button type="button" disabled={position == 1}
                                onclick={nav_step(Step::ALL[position.saturating_sub(2)])}
                                class="px-4 py-2 rounded-lg text-sm bg-gray-800 text-gray-300 disabled:opacity-50">
                                {"Back"}
                            </button>
                            if position < Step::ALL.len() {
                                <button type="button" onclick={nav_step(Step::ALL[position])}
                                    class="px-4 py-2 rounded-lg text-sm bg-purple-600 text-white">
                                    {"Next"}
                                </button>
                            } else {
                                <button type="button" onclick={on_save} disabled={*loading}
                                    class="px-4 py-2 rounded-lg text-sm bg-purple-600 text-white disabled:opacity-50">
                                    { if *loading { "Saving..." } else { "Save Budget" } }
                                </button>
                            }
                        </div>
                    </div>

                    <div class="bg-[#252525] rounded-xl p-4 sm:p-6 border border-gray-800 space-y-4">
                        <h3 class="font-semibold text-purple-300">{"Budget Summary"}</h3>
                        <BudgetDonut income={budget.income} savings={budget.savings_goal} expenses={planned} />
                        <div class="space-y-2 text-sm">
                            <div class="flex justify-between text-gray-300"><span>{"Income"}</span><span>{ format_currency(budget.income) }</span></div>
                            <div class="flex justify-between text-gray-300"><span>{"Savings"}</span><span>{ format_currency(budget.savings_goal) }</span></div>
                            <div class="flex justify-between text-gray-300"><span>{"Expenses"}</span><span>{ format_currency(planned) }</span></div>
                            <div class={classes!("flex", "justify-between", "font-semibold", "border-t", "border-gray-700", "pt-2",
                                if left < 0.0 { "text-red-400" } else { "text-green-400" })}>
                                <span>{"Left to budget"}</span><span>{ format_currency(left) }</span>
                            </div>
                        </div>
                        { error_banner(&error) }
                        { success_banner(&success) }
                    </div>
                </div>
            </div>
        </AppLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_amount;

    #[test]
    fn test_blank_and_garbage_amounts_are_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount(" 1250.5 "), 1250.5);
    }
}
