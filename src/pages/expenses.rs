use futures::join;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::upload_csv::upload_existing;
use crate::api::types::{ExpenseCategoryTotal, ExpenseSummary, ExpenseType, NewExpense};
use crate::app::{sleep, use_app};
use crate::components::icons::{icon_plus, icon_trash, icon_upload};
use crate::components::layout::{error_banner, success_banner, AppLayout};
use crate::config::TRANSACTION_PAGE_SIZE;
use crate::ledger::{manual_total, month_expenses, LedgerEntry, Source};
use crate::locale::{self, category_icon, default_expense_category, format_currency, EXPENSE_CATEGORIES};

#[derive(Clone, Debug, PartialEq)]
struct ExpenseForm {
    date: String,
    amount: String,
    category: String,
    description: String,
    expense_type: ExpenseType,
}

impl ExpenseForm {
    fn blank() -> Self {
        ExpenseForm {
            date: locale::date_key(locale::today()),
            amount: String::new(),
            category: default_expense_category().to_string(),
            description: String::new(),
            expense_type: ExpenseType::OneTime,
        }
    }

    /// Checks the form and builds the request body.
    fn validate(&self) -> Result<NewExpense, &'static str> {
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)
            .ok_or("Please enter a valid amount greater than 0")?;
        if self.date.trim().is_empty() {
            return Err("Please select a date");
        }
        let description = self.description.trim();
        Ok(NewExpense {
            date: self.date.clone(),
            amount,
            category: self.category.clone(),
            description: (!description.is_empty()).then(|| description.to_string()),
            expense_type: self.expense_type,
        })
    }
}

/// Category with the largest manual spend this month.
fn top_category(summary: &ExpenseSummary) -> Option<&ExpenseCategoryTotal> {
    summary
        .categories
        .iter()
        .filter(|c| c.amount > 0.0)
        .max_by(|a, b| a.amount.total_cmp(&b.amount))
}

fn entry_row(entry: &LedgerEntry, on_delete: Callback<String>) -> Html {
    let delete = match (&entry.source, &entry.id) {
        (Source::Manual, Some(id)) => {
            let id = id.clone();
            html! {
                <button type="button" title="Delete" class="p-2 text-gray-500 hover:text-red-400"
                    onclick={Callback::from(move |_| on_delete.emit(id.clone()))}>
                    { icon_trash() }
                </button>
            }
        }
        _ => html! { <span class="text-xs text-gray-600 px-2">{"CSV"}</span> },
    };
    html! {
        <div class="flex items-center justify-between p-4 hover:bg-[#2a2a2a]">
            <div class="flex items-center gap-3 min-w-0">
                <span class="text-2xl">{ category_icon(&entry.category) }</span>
                <div class="min-w-0">
                    <p class="text-sm font-medium text-white truncate">{ &entry.description }</p>
                    <p class="text-xs text-gray-400">
                        { format!("{} · {} · {}", entry.category, locale::short_date(&entry.date), entry.expense_type.label()) }
                    </p>
                </div>
            </div>
            <div class="flex items-center gap-3">
                <span class="text-sm font-semibold text-red-400 whitespace-nowrap">{ format_currency(entry.amount) }</span>
                { delete }
            </div>
        </div>
    }
}

#[function_component(ExpensesPage)]
pub fn expenses_page() -> Html {
    let app = use_app();
    let month = use_state(|| locale::month_key(locale::today()));
    let revision = use_state(|| 0u32);
    let entries = use_state(Vec::<LedgerEntry>::new);
    let summary = use_state(ExpenseSummary::default);
    let loading = use_state(|| false);
    let form = use_state(ExpenseForm::blank);
    let show_form = use_state(|| false);
    let show_upload = use_state(|| false);
    let csv_file = use_state(|| None::<File>);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    {
        let api = app.api.clone();
        let entries = entries.clone();
        let summary = summary.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |(month, _): &(String, u32)| {
                let month = month.clone();
                loading.set(true);
                spawn_local(async move {
                    let (expenses, transactions, by_category) = join!(
                        api.expenses(&month, TRANSACTION_PAGE_SIZE, 0),
                        api.transactions(TRANSACTION_PAGE_SIZE, 0),
                        api.expense_summary(&month)
                    );
                    let expenses = expenses.map(|l| l.expenses).unwrap_or_else(|err| {
                        log::warn!("expenses unavailable: {err}");
                        Vec::new()
                    });
                    let transactions = transactions.map(|p| p.transactions).unwrap_or_else(|err| {
                        log::warn!("transactions unavailable: {err}");
                        Vec::new()
                    });
                    summary.set(by_category.unwrap_or_else(|err| {
                        log::warn!("expense summary unavailable: {err}");
                        ExpenseSummary::default()
                    }));
                    entries.set(month_expenses(&month, &expenses, &transactions));
                    loading.set(false);
                });
                || ()
            },
            ((*month).clone(), *revision),
        );
    }

    let reload = {
        let revision = revision.clone();
        move || revision.set(*revision + 1)
    };

    let edit = |apply: fn(&mut ExpenseForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, e.target_unchecked_into::<HtmlInputElement>().value());
            form.set(next);
        })
    };
    let select = |apply: fn(&mut ExpenseForm, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            apply(&mut next, e.target_unchecked_into::<HtmlSelectElement>().value());
            form.set(next);
        })
    };

    let on_add = {
        let api = app.api.clone();
        let form = form.clone();
        let show_form = show_form.clone();
        let error = error.clone();
        let success = success.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let expense = match form.validate() {
                Ok(expense) => expense,
                Err(message) => {
                    error.set(Some(message.to_string()));
                    return;
                }
            };
            let api = api.clone();
            let form = form.clone();
            let show_form = show_form.clone();
            let error = error.clone();
            let success = success.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api.add_expense(&expense).await {
                    Ok(_) => {
                        form.set(ExpenseForm::blank());
                        show_form.set(false);
                        error.set(None);
                        success.set(Some("Expense added successfully!".to_string()));
                        reload();
                    }
                    Err(err) => error.set(Some(format!("Failed to add expense: {}", err.message))),
                }
            });
        })
    };

    let on_delete = {
        let api = app.api.clone();
        let error = error.clone();
        let reload = reload.clone();
        Callback::from(move |id: String| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this expense?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let api = api.clone();
            let error = error.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api.delete_expense(&id).await {
                    Ok(_) => reload(),
                    Err(err) => {
                        log::warn!("delete {id} failed: {err}");
                        error.set(Some("Failed to delete expense".to_string()));
                    }
                }
            });
        })
    };

    let on_csv_file = {
        let csv_file = csv_file.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            csv_file.set(input.files().and_then(|files| files.get(0)));
            error.set(None);
            success.set(None);
        })
    };

    let on_upload = {
        let api = app.api.clone();
        let csv_file = csv_file.clone();
        let show_upload = show_upload.clone();
        let loading = loading.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(file) = (*csv_file).clone() else {
                error.set(Some("Please select a CSV file".to_string()));
                return;
            };
            let api = api.clone();
            let csv_file = csv_file.clone();
            let show_upload = show_upload.clone();
            let loading = loading.clone();
            let error = error.clone();
            let success = success.clone();
            let reload = reload.clone();
            loading.set(true);
            spawn_local(async move {
                let result = upload_existing(&api, &file).await;
                loading.set(false);
                match result {
                    Ok(message) => {
                        success.set(Some(message));
                        csv_file.set(None);
                        sleep(1500).await;
                        reload();
                        show_upload.set(false);
                    }
                    Err(err) => error.set(Some(err.message)),
                }
            });
        })
    };

    let toggle = |flag: &UseStateHandle<bool>, value: bool| {
        let flag = flag.clone();
        Callback::from(move |_: MouseEvent| flag.set(value))
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

    let total: f64 = entries.iter().map(|e| e.amount).sum();
    let manual = manual_total(&entries);
    let input_class = "w-full px-3 py-2 bg-[#1a1a1a] border border-gray-700 rounded-lg text-white";

    html! {
        <AppLayout>
            <div class="space-y-6">
                <div>
                    <h2 class="text-2xl font-bold text-white mb-2">{"Expenses"}</h2>
                    <p class="text-gray-400 mb-4">{"Track your daily, monthly, and one-time expenses"}</p>
                    <div class="flex gap-3 flex-wrap">
                        <button onclick={toggle(&show_upload, true)}
                            class="flex items-center gap-2 px-4 py-2 bg-gray-800 hover:bg-gray-700 text-white rounded-lg text-sm">
                            { icon_upload() }<span>{"Upload CSV"}</span>
                        </button>
                        <button onclick={toggle(&show_form, true)}
                            class="flex items-center gap-2 px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg text-sm">
                            { icon_plus() }<span>{"Add Expense"}</span>
                        </button>
                    </div>
                </div>

                { error_banner(&error) }
                { success_banner(&success) }

                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <div class="bg-[#252525] rounded-xl p-4 border border-gray-800">
                        <label class="block text-xs text-gray-400 mb-2">{"Month"}</label>
                        <input type="month" value={(*month).clone()} onchange={on_month} class={input_class} />
                    </div>
                    <div class="bg-[#252525] rounded-xl p-4 border border-gray-800">
                        <p class="text-xs text-gray-400">{"Total Expenses"}</p>
                        <p class="text-2xl font-bold text-white">{ format_currency(total) }</p>
                        <p class="text-xs text-gray-500">{ format!("{} entries", entries.len()) }</p>
                    </div>
                    <div class="bg-[#252525] rounded-xl p-4 border border-gray-800">
                        <p class="text-xs text-gray-400">{"Manual Expenses"}</p>
                        <p class="text-2xl font-bold text-white">{ format_currency(manual) }</p>
                        <p class="text-xs text-gray-500">
                            { match top_category(&summary) {
                                Some(top) => format!("Most on {} ({})", top.category, format_currency(top.amount)),
                                None => "Added by you".to_string(),
                            } }
                        </p>
                    </div>
                </div>

                if *show_upload {
                    <form onsubmit={on_upload} class="bg-[#252525] rounded-xl p-6 border border-gray-800 space-y-4">
                        <h3 class="text-lg font-semibold text-white">{"Upload CSV"}</h3>
                        <ul class="text-sm text-gray-400 list-disc list-inside">
                            <li><strong>{"date"}</strong>{" - Transaction date (YYYY-MM-DD format)"}</li>
                            <li><strong>{"amount"}</strong>{" - Transaction amount (positive or negative)"}</li>
                            <li><strong>{"category"}</strong>{" - Transaction category"}</li>
                        </ul>
                        <input type="file" accept=".csv" required=true onchange={on_csv_file} class="block w-full text-sm text-gray-300" />
                        if let Some(f) = &*csv_file {
                            <p class="text-xs text-gray-400">{ format!("Selected: {} ({:.1} KB)", f.name(), f.size() / 1024.0) }</p>
                        }
                        <div class="flex justify-end gap-3">
                            <button type="button" onclick={toggle(&show_upload, false)} class="px-4 py-2 text-sm text-gray-300">{"Cancel"}</button>
                            <button type="submit" disabled={*loading || csv_file.is_none()}
                                class="px-4 py-2 text-sm bg-blue-600 text-white rounded-lg disabled:opacity-50">
                                { if *loading { "Uploading..." } else { "Upload CSV" } }
                            </button>
                        </div>
                    </form>
                }

                if *show_form {
                    <form onsubmit={on_add} class="bg-[#252525] rounded-xl p-6 border border-gray-800 grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-xs text-gray-400 mb-1">{"Date"}</label>
                            <input type="date" value={form.date.clone()} oninput={edit(|f, v| f.date = v)} class={input_class} />
                        </div>
                        <div>
                            <label class="block text-xs text-gray-400 mb-1">{"Amount"}</label>
                            <input type="number" step="0.01" min="0" placeholder="0.00" value={form.amount.clone()}
                                oninput={edit(|f, v| f.amount = v)} class={input_class} />
                        </div>
                        <div>
                            <label class="block text-xs text-gray-400 mb-1">{"Category"}</label>
                            <select onchange={select(|f, v| f.category = v)} class={input_class}>
                                { for EXPENSE_CATEGORIES.iter().map(|c| html! {
                                    <option value={c.name} selected={c.name == form.category}>{ format!("{} {}", c.icon, c.name) }</option>
                                }) }
                            </select>
                        </div>
                        <div>
                            <label class="block text-xs text-gray-400 mb-1">{"Type"}</label>
                            <select onchange={select(|f, v| f.expense_type = ExpenseType::from_value(&v))} class={input_class}>
                                { for ExpenseType::ALL.iter().map(|t| html! {
                                    <option value={t.as_str()} selected={*t == form.expense_type}>{ t.label() }</option>
                                }) }
                            </select>
                        </div>
                        <div class="sm:col-span-2">
                            <label class="block text-xs text-gray-400 mb-1">{"Description"}</label>
                            <input type="text" placeholder="Optional" value={form.description.clone()}
                                oninput={edit(|f, v| f.description = v)} class={input_class} />
                        </div>
                        <div class="sm:col-span-2 flex justify-end gap-3">
                            <button type="button" onclick={toggle(&show_form, false)} class="px-4 py-2 text-sm text-gray-300">{"Cancel"}</button>
                            <button type="submit" class="px-4 py-2 text-sm bg-blue-600 text-white rounded-lg">{"Add Expense"}</button>
                        </div>
                    </form>
                }

                <div class="bg-[#252525] rounded-xl border border-gray-800 divide-y divide-gray-800">
                    if *loading && entries.is_empty() {
                        <p class="p-8 text-center text-gray-400">{"Loading..."}</p>
                    } else if entries.is_empty() {
                        <p class="p-8 text-center text-gray-400">{"No expenses for this month"}</p>
                    } else {
                        { for entries.iter().map(|entry| entry_row(entry, on_delete.clone())) }
                    }
                </div>
            </div>
        </AppLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(amount: &str, date: &str) -> ExpenseForm {
        ExpenseForm {
            date: date.to_string(),
            amount: amount.to_string(),
            category: "Transportation".to_string(),
            description: "  ".to_string(),
            expense_type: ExpenseType::Daily,
        }
    }

    #[test]
    fn test_valid_form_builds_request() {
        let expense = form("120.5", "2025-03-07").validate().unwrap();
        assert_eq!(expense.amount, 120.5);
        assert_eq!(expense.category, "Transportation");
        assert_eq!(expense.description, None);
        assert_eq!(expense.expense_type, ExpenseType::Daily);
    }

    #[test]
    fn test_amount_must_be_positive() {
        for amount in ["", "0", "-5", "abc"] {
            assert_eq!(
                form(amount, "2025-03-07").validate(),
                Err("Please enter a valid amount greater than 0")
            );
        }
    }

    #[test]
    fn test_date_is_required() {
        assert_eq!(form("10", "").validate(), Err("Please select a date"));
    }

    #[test]
    fn test_top_category_ignores_empty_totals() {
        let summary = ExpenseSummary {
            total: 900.0,
            categories: vec![
                ExpenseCategoryTotal { category: "Food".to_string(), amount: 300.0 },
                ExpenseCategoryTotal { category: "Rent".to_string(), amount: 600.0 },
                ExpenseCategoryTotal { category: "Other".to_string(), amount: 0.0 },
            ],
            month: Some("2025-03".to_string()),
        };
        assert_eq!(top_category(&summary).map(|c| c.category.as_str()), Some("Rent"));
        assert_eq!(top_category(&ExpenseSummary::default()), None);
    }
}
