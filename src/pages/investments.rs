use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::types::{AllPlans, InvestmentPlan, PlanOption, Recommendation};
use crate::app::use_app;
use crate::components::layout::{error_banner, AppLayout};
use crate::locale::{format_currency, CURRENCY_SYMBOL};

const MAX_RISK_LEVEL: u8 = 5;

/// Badge colours per risk level; unknown levels look like the middle one.
pub fn risk_color(level: u8) -> &'static str {
    match level {
        1 => "bg-green-900/30 text-green-300 border-green-700",
        2 => "bg-blue-900/30 text-blue-300 border-blue-700",
        4 => "bg-orange-900/30 text-orange-300 border-orange-700",
        5 => "bg-red-900/30 text-red-300 border-red-700",
        _ => "bg-yellow-900/30 text-yellow-300 border-yellow-700",
    }
}

pub fn risk_summary(level: u8) -> &'static str {
    match level {
        1 => "Safest option with guaranteed returns, ideal for conservative investors",
        2 => "Low risk with stable returns, good for cautious investors",
        3 => "Balanced risk-return ratio, suitable for most investors",
        4 => "Higher risk for potentially higher returns, for growth-focused investors",
        5 => "Highest risk and highest potential returns, for aggressive investors",
        _ => "",
    }
}

fn horizon(icon: &'static str, title: &'static str, options: &[PlanOption]) -> Html {
    html! {
        <div class="border border-gray-700 rounded-lg p-4">
            <h4 class="font-semibold text-white mb-3 flex items-center gap-2"><span>{ icon }</span>{ title }</h4>
            <div class="space-y-3">
                { for options.iter().map(|plan| html! {
                    <div class="bg-[#2a2a2a] p-3 rounded-lg">
                        <p class="font-medium text-sm text-white">{ &plan.name }</p>
                        <p class="text-xs text-green-400 font-semibold mt-1">{ &plan.returns }</p>
                        <p class="text-xs text-gray-400 mt-1">{ &plan.description }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn horizons(plan: &InvestmentPlan) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            { horizon("⚡", "Short Term (0-1 year)", &plan.short_term) }
            { horizon("📅", "Medium Term (1-3 years)", &plan.medium_term) }
            { horizon("🎯", "Long Term (3+ years)", &plan.long_term) }
        </div>
    }
}

fn risk_level_card(plan: &InvestmentPlan) -> Html {
    html! {
        <div class={classes!("border-2", "rounded-lg", "p-4", risk_color(plan.level))}>
            <div class="flex items-center justify-between mb-2">
                <h4 class="font-semibold">{ format!("Level {}: {}", plan.level, plan.label) }</h4>
                <div class="flex">
                    { for (0..MAX_RISK_LEVEL).map(|i| html! {
                        <span class={classes!("text-lg", if i < plan.level { "opacity-100" } else { "opacity-30" })}>{"⚡"}</span>
                    }) }
                </div>
            </div>
            <p class="text-sm opacity-90">{ risk_summary(plan.level) }</p>
        </div>
    }
}

#[function_component(InvestmentsPage)]
pub fn investments_page() -> Html {
    let app = use_app();
    let amount = use_state(|| "100000".to_string());
    let recommendation = use_state(|| None::<Recommendation>);
    let plans = use_state(AllPlans::default);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let api = app.api.clone();
        let plans = plans.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.investment_plans().await {
                        Ok(all) => plans.set(all),
                        Err(err) => log::warn!("investment plans unavailable: {err}"),
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_amount = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| amount.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_recommend = {
        let api = app.api.clone();
        let amount = amount.clone();
        let recommendation = recommendation.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_| {
            let Some(value) = amount.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0) else {
                error.set(Some("Please enter a valid amount".to_string()));
                return;
            };
            let api = api.clone();
            let recommendation = recommendation.clone();
            let loading = loading.clone();
            let error = error.clone();
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match api.recommend_investments(value).await {
                    Ok(resp) => recommendation.set(Some(resp)),
                    Err(err) => error.set(Some(err.message)),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <AppLayout>
            <div class="space-y-6">
                <div class="bg-[#252525] rounded-xl p-6 border border-gray-800">
                    <h2 class="text-2xl font-bold text-white mb-2">{"Investment Plans"}</h2>
                    <p class="text-gray-400 mb-6">{"Get personalised recommendations based on your risk profile"}</p>
                    <div class="relative">
                        <span class="absolute left-4 top-3 text-gray-400 text-lg">{ CURRENCY_SYMBOL }</span>
                        <input type="number" min="0" step="1000" placeholder="100000" value={(*amount).clone()} oninput={on_amount}
                            class="w-full pl-10 pr-4 py-3 border border-gray-700 bg-[#2a2a2a] text-white rounded-lg text-lg font-semibold focus:outline-none focus:ring-2 focus:ring-purple-600" />
                    </div>
                    <p class="mt-2 text-sm text-gray-400">{"Enter the amount you want to invest"}</p>
                    <button onclick={on_recommend} disabled={*loading || amount.trim().is_empty()}
                        class="mt-4 w-full px-6 py-3 bg-purple-600 text-white rounded-lg hover:bg-purple-700 disabled:opacity-50 font-medium">
                        { if *loading { "Loading..." } else { "Get Recommendations" } }
                    </button>
                    <div class="mt-4">{ error_banner(&error) }</div>
                </div>

                if let Some(rec) = &*recommendation {
                    <div class="bg-[#252525] rounded-xl p-6 border border-gray-800">
                        <div class="mb-6">
                            <h3 class="text-xl font-semibold text-white mb-3">{"Your Recommended Risk Profile"}</h3>
                            <div class={classes!("inline-block", "px-4", "py-2", "rounded-lg", "border-2", risk_color(rec.risk_level))}>
                                <p class="font-semibold">{ format!("Level {}: {}", rec.risk_level, rec.risk_label) }</p>
                            </div>
                            <p class="mt-3 text-sm text-gray-400">
                                { format!("Based on your 15 onboarding questions and investment amount of {}, here are your personalized recommendations:",
                                    format_currency(rec.amount)) }
                            </p>
                        </div>
                        { horizons(&rec.recommendations) }
                    </div>
                }

                <div class="bg-[#252525] rounded-xl p-6 border border-gray-800">
                    <h3 class="text-xl font-semibold text-white mb-4">{"Understanding Risk Levels"}</h3>
                    <div class="space-y-4">
                        { for plans.by_level().into_iter().map(risk_level_card) }
                    </div>
                </div>

                <div class="bg-yellow-900/20 border border-yellow-800 rounded-xl p-6">
                    <h3 class="font-semibold text-yellow-300 mb-2">{"⚠️ Investment Disclaimer"}</h3>
                    <p class="text-sm text-yellow-200/80">
                        {"These are AI-generated recommendations based on general financial principles and your stated risk profile. \
                          Past performance does not guarantee future results. Please consult with a certified financial advisor \
                          before making any investment decisions. Investments are subject to market risks."}
                    </p>
                </div>
            </div>
        </AppLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_levels_fall_back_to_moderate() {
        assert_eq!(risk_color(0), risk_color(3));
        assert_eq!(risk_color(9), risk_color(3));
        assert_ne!(risk_color(1), risk_color(5));
    }

    #[test]
    fn test_every_level_has_a_summary() {
        for level in 1..=MAX_RISK_LEVEL {
            assert!(!risk_summary(level).is_empty());
        }
        assert_eq!(risk_summary(6), "");
    }
}
