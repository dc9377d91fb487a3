use futures::join;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::types::{Budget, FinanceSummary, MonthTotal};
use crate::app::use_app;
use crate::chart::{overview_bars, OverviewPeriod, OverviewTotals};
use crate::components::charts::{OverviewChart, SpendingPie};
use crate::components::layout::AppLayout;
use crate::components::marketing::RouteLink;
use crate::config::{EXPENSE_PAGE_SIZE, RECENT_TRANSACTIONS, TRANSACTION_PAGE_SIZE};
use crate::ledger::{category_breakdown, merge_activity, LedgerEntry};
use crate::locale::{self, category_icon, format_currency};
use crate::route::Route;

/// Headline numbers for the selected month. Income falls back to the
/// budgeted income when the month has no imported income.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Figures {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub savings_goal: f64,
    pub left_to_budget: f64,
}

impl Figures {
    pub fn new(summary: Option<&FinanceSummary>, budget: Option<&Budget>) -> Self {
        let non_zero = |v: f64| Some(v).filter(|v| *v != 0.0);
        let income = summary
            .and_then(|s| non_zero(s.total_income))
            .or_else(|| budget.and_then(|b| non_zero(b.income)))
            .unwrap_or(0.0);
        let expenses = summary.map(|s| s.total_expenses).unwrap_or(0.0);
        let savings_goal = budget.map(|b| b.savings_goal).unwrap_or(0.0);
        let savings = summary
            .and_then(|s| non_zero(s.month_saving))
            .unwrap_or(income - expenses);
        Figures {
            income,
            expenses,
            savings,
            savings_goal,
            left_to_budget: (income - savings_goal - expenses).max(0.0),
        }
    }

    fn overview_totals(&self) -> OverviewTotals {
        OverviewTotals {
            income: self.income,
            expenses: self.expenses,
            scheduled: self.savings_goal,
        }
    }
}

#[derive(Clone, Default, PartialEq)]
struct MonthData {
    summary: Option<FinanceSummary>,
    budget: Option<Budget>,
    activity: Vec<LedgerEntry>,
}

fn metric(label: &'static str, value: f64, caption: String, color: &'static str) -> Html {
    html! {
        <div class="bg-[#2a2a2a] rounded-lg p-3 sm:p-4 min-w-0">
            <p class="text-xs text-gray-400 mb-1 whitespace-nowrap">{ label }</p>
            <h3 class={classes!("text-lg", "sm:text-2xl", "font-bold", "truncate", color)}>{ format_currency(value) }</h3>
            <p class="text-xs text-gray-400 mt-1 whitespace-nowrap">{ caption }</p>
        </div>
    }
}

fn breakdown_row(dot: &'static str, label: &'static str, value: f64) -> Html {
    html! {
        <div class="flex items-center justify-between">
            <div class="flex items-center gap-2">
                <div class={classes!("w-3", "h-3", "rounded-full", dot)}></div>
                <span class="text-sm text-gray-300">{ label }</span>
            </div>
            <span class="text-sm font-semibold text-white">{ format_currency(value) }</span>
        </div>
    }
}

fn activity_row(entry: &LedgerEntry) -> Html {
    let inflow = entry.amount >= 0.0;
    let tone = if inflow { "text-green-400" } else { "text-red-400" };
    let description = if entry.description.is_empty() { &entry.category } else { &entry.description };
    html! {
        <div class="p-4 hover:bg-[#2a2a2a] transition-colors">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class={classes!("w-10", "h-10", "rounded-full", "flex", "items-center", "justify-center",
                        if inflow { "bg-green-500/20" } else { "bg-red-500/20" })}>
                        <span class={classes!("text-lg", tone)}>{ category_icon(&entry.category) }</span>
                    </div>
                    <div>
                        <div class="text-sm font-medium text-white">{ description.clone() }</div>
                        <div class="text-xs text-gray-400">{ locale::short_date(&entry.date) }</div>
                    </div>
                </div>
                <div class={classes!("text-sm", "font-semibold", "whitespace-nowrap", tone)}>
                    { format!("{}{}", if inflow { "+" } else { "" }, format_currency(entry.amount.abs())) }
                </div>
            </div>
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let app = use_app();
    let month = use_state(|| locale::month_key(locale::today()));
    let period = use_state(|| OverviewPeriod::SixMonths);
    let data = use_state(MonthData::default);
    let trend = use_state(Vec::<MonthTotal>::new);

    {
        let api = app.api.clone();
        let data = data.clone();
        use_effect_with_deps(
            move |month: &String| {
                let month = month.clone();
                spawn_local(async move {
                    let (activity, summary, budget) = join!(
                        async {
                            let (transactions, expenses) = join!(
                                api.transactions(TRANSACTION_PAGE_SIZE, 0),
                                api.expenses(&month, EXPENSE_PAGE_SIZE, 0)
                            );
                            let transactions = transactions.map(|p| p.transactions).unwrap_or_else(|err| {
                                log::warn!("transactions unavailable: {err}");
                                Vec::new()
                            });
                            let expenses = expenses.map(|l| l.expenses).unwrap_or_else(|err| {
                                log::warn!("expenses unavailable: {err}");
                                Vec::new()
                            });
                            merge_activity(&transactions, &expenses)
                        },
                        api.finance_summary(Some(&month)),
                        api.current_budget(Some(&month))
                    );
                    data.set(MonthData {
                        summary: summary.map_err(|err| log::warn!("summary unavailable: {err}")).ok(),
                        budget: budget
                            .map_err(|err| log::warn!("budget unavailable: {err}"))
                            .ok()
                            .and_then(|b| b.budget),
                        activity,
                    });
                });
                || ()
            },
            (*month).clone(),
        );
    }

    {
        let api = app.api.clone();
        let trend = trend.clone();
        use_effect_with_deps(
            move |period: &OverviewPeriod| {
                let months = period.months_to_fetch(locale::today());
                spawn_local(async move {
                    match api.finance_trend(months).await {
                        Ok(resp) => trend.set(resp.series),
                        Err(err) => {
                            log::warn!("trend unavailable: {err}");
                            trend.set(Vec::new());
                        }
                    }
                });
                || ()
            },
            *period,
        );
    }

    let on_month = {
        let month = month.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            if !value.is_empty() {
                month.set(value);
            }
        })
    };

    let figures = Figures::new(data.summary.as_ref(), data.budget.as_ref());
    let totals = figures.overview_totals();
    let bars = overview_bars(&trend, *period, locale::today(), &totals);
    let categories = data.summary.as_ref().map(|s| s.categories.clone()).unwrap_or_default();
    let breakdown = category_breakdown(&categories);

    html! {
        <AppLayout>
            <div class="grid grid-cols-1 lg:grid-cols-12 gap-4 sm:gap-6 mb-6">
                <div class="lg:col-span-5 bg-[#252525] rounded-xl p-4 sm:p-6 border border-gray-800">
                    <div class="flex justify-between items-center mb-6 flex-wrap gap-3">
                        <h3 class="text-lg font-semibold text-white">{"Financial Overview"}</h3>
                        <input type="month" value={(*month).clone()} onchange={on_month}
                            class="text-sm border border-gray-700 bg-[#2a2a2a] text-white rounded px-3 py-1" />
                    </div>
                    <div class="grid grid-cols-2 gap-3 sm:gap-4 mb-6">
                        { metric("Monthly Savings", figures.savings, locale::month_label(&month), "text-green-400") }
                        { metric("Monthly Budget", figures.income, "Total Income".to_string(), "text-blue-400") }
                        { metric("Total Expenses", figures.expenses, "This Month".to_string(), "text-red-400") }
                        { metric("Savings Goal", figures.savings_goal, "Target".to_string(), "text-purple-400") }
                    </div>
                    <div class="border-t border-gray-800 pt-6">
                        <p class="text-sm text-gray-400 mb-4">{"Budget Breakdown"}</p>
                        <div class="space-y-3">
                            { breakdown_row("bg-purple-600", "Savings", figures.savings_goal) }
                            { breakdown_row("bg-blue-600", "Expenses", figures.expenses) }
                            { breakdown_row("bg-gray-500", "Left to budget", figures.left_to_budget) }
                        </div>
                        <RouteLink to={Route::Budgets} class={classes!("mt-4", "block", "text-center", "text-sm", "text-blue-500", "hover:text-blue-400", "font-medium")}>
                            {"Manage budget →"}
                        </RouteLink>
                    </div>
                </div>

                <div class="lg:col-span-7 bg-[#252525] rounded-xl p-4 sm:p-6 border border-gray-800">
                    <div class="flex justify-between items-center mb-6 flex-wrap gap-3">
                        <h3 class="text-lg font-semibold text-white">{"Budget Overview"}</h3>
                        <div class="flex gap-2 flex-wrap">
                            { for OverviewPeriod::ALL.iter().map(|p| {
                                let selected = *p == *period;
                                let period = period.clone();
                                let p = *p;
                                html! {
                                    <button onclick={Callback::from(move |_| period.set(p))}
                                        class={classes!("px-3", "py-1.5", "text-xs", "rounded-lg", "transition-colors",
                                            if selected { "bg-blue-600 text-white" } else { "bg-[#2a2a2a] border border-gray-700 text-gray-300 hover:bg-[#333333]" })}>
                                        { p.label() }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                    <div class="grid grid-cols-3 gap-2 sm:gap-4 mb-6">
                        { for [("Income", figures.income), ("Expenses", figures.expenses), ("Scheduled", figures.savings_goal)].iter().map(|(label, value)| html! {
                            <div class="bg-[#2a2a2a] rounded-lg p-3 sm:p-5 min-w-0">
                                <span class="text-xs sm:text-sm font-medium text-gray-300 block mb-2">{ *label }</span>
                                <div class="text-base sm:text-xl font-bold text-white truncate">{ format_currency(*value) }</div>
                            </div>
                        }) }
                    </div>
                    <OverviewChart {bars} {totals} />
                </div>

                <div class="lg:col-span-6 bg-[#252525] rounded-xl p-4 sm:p-6 border border-gray-800">
                    <h3 class="text-lg font-semibold text-white mb-6">{"Spending Summary"}</h3>
                    <div class="flex flex-col items-center justify-center">
                        <SpendingPie categories={categories.clone()} total={figures.expenses} />
                        <div class="mt-6 text-center">
                            <p class="text-sm uppercase text-gray-400 font-medium mb-2 tracking-wide">{"Total Spent"}</p>
                            <p class="text-2xl font-bold text-white">{ format_currency(figures.expenses) }</p>
                        </div>
                        <div class="grid grid-cols-3 gap-3 mt-6 w-full">
                            { for breakdown.iter().map(|item| html! {
                                <div class="bg-[#2a2a2a] rounded-lg p-3 text-center">
                                    <div class="text-xl">{ item.icon }</div>
                                    <div class="text-xs text-gray-400 truncate">{ &item.category }</div>
                                    <div class="text-sm font-semibold text-white">{ format_currency(item.total) }</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="lg:col-span-6 bg-[#252525] rounded-xl border border-gray-800 overflow-hidden">
                    <div class="p-4 sm:p-6 border-b border-gray-800 flex justify-between items-center">
                        <h3 class="text-lg font-semibold text-white">{"Recent Transactions"}</h3>
                        <RouteLink to={Route::Expenses} class={classes!("px-3", "py-1.5", "text-xs", "bg-blue-600", "text-white", "rounded-lg", "hover:bg-blue-700")}>
                            {"+ Add"}
                        </RouteLink>
                    </div>
                    <div class="overflow-y-auto max-h-96">
                        if data.activity.is_empty() {
                            <div class="p-12 text-center text-gray-400">
                                <p class="mb-4">{"No transactions found"}</p>
                                <RouteLink to={Route::UploadCsv} class={classes!("text-blue-500", "hover:text-blue-400", "font-medium")}>
                                    {"Upload your first CSV"}
                                </RouteLink>
                            </div>
                        } else {
                            <div class="divide-y divide-gray-800">
                                { for data.activity.iter().take(RECENT_TRANSACTIONS).map(activity_row) }
                                <RouteLink to={Route::Expenses} class={classes!("block", "p-4", "text-center", "text-blue-500", "hover:text-blue-400", "text-sm", "font-medium")}>
                                    {"See All Transactions →"}
                                </RouteLink>
                            </div>
                        }
                    </div>
                </div>
            </div>
        </AppLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(income: f64, expenses: f64, saving: f64) -> FinanceSummary {
        FinanceSummary {
            total_income: income,
            total_expenses: expenses,
            month_saving: saving,
            ..Default::default()
        }
    }

    #[test]
    fn test_income_prefers_summary_then_budget() {
        let budget = Budget::starter("2025-03");
        let figures = Figures::new(Some(&summary(8000.0, 3000.0, 0.0)), Some(&budget));
        assert_eq!(figures.income, 8000.0);

        let figures = Figures::new(Some(&summary(0.0, 3000.0, 0.0)), Some(&budget));
        assert_eq!(figures.income, budget.income);
    }

    #[test]
    fn test_savings_fall_back_to_income_minus_expenses() {
        let figures = Figures::new(Some(&summary(8000.0, 3000.0, 0.0)), None);
        assert_eq!(figures.savings, 5000.0);
        let figures = Figures::new(Some(&summary(8000.0, 3000.0, 4200.0)), None);
        assert_eq!(figures.savings, 4200.0);
    }

    #[test]
    fn test_left_to_budget_never_negative() {
        let mut budget = Budget::starter("2025-03");
        budget.savings_goal = 9000.0;
        let figures = Figures::new(Some(&summary(5000.0, 3000.0, 0.0)), Some(&budget));
        assert_eq!(figures.left_to_budget, 0.0);
    }

    #[test]
    fn test_nothing_loaded_is_all_zero() {
        assert_eq!(Figures::new(None, None), Figures::default());
    }
}
