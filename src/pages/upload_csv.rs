use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::app::{sleep, use_app, AppContext};
use crate::components::layout::{error_banner, success_banner};
use crate::csv_import::{parse_transactions, TransactionRecord, REQUIRED_COLUMNS};
use crate::route::Route;
use crate::session::Session;

const SAMPLE_CSV: &str = "date,amount,category,description
2024-01-15,-25.50,Food,Grocery shopping
2024-01-16,-12.00,Transportation,Uber ride
2024-01-17,1500.00,Income,Salary";

/// Parses a file for account creation. Unlike a plain upload, a single bad
/// row blocks the whole sign-up.
pub fn transactions_for_signup(text: &str) -> Result<Vec<TransactionRecord>, String> {
    let import = parse_transactions(text).map_err(|e| e.to_string())?;
    if import.errors.is_empty() {
        Ok(import.transactions)
    } else {
        Err(format!("CSV parsing errors: {}", import.error_messages().join(", ")))
    }
}

async fn read_text(file: &File) -> Result<String, String> {
    JsFuture::from(file.text())
        .await
        .ok()
        .and_then(|value| value.as_string())
        .ok_or_else(|| "Could not read the selected file".to_string())
}

/// Which account an upload feeds. A half-finished sign-up without answers
/// does not count as a new account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTarget {
    NewAccount,
    ExistingAccount,
    NoAccount,
}

pub fn upload_target(session: &Session) -> UploadTarget {
    if session.pending().is_some() {
        UploadTarget::NewAccount
    } else if session.user_id().is_some() {
        UploadTarget::ExistingAccount
    } else {
        UploadTarget::NoAccount
    }
}

enum Outcome {
    Imported(String),
    Failed(String),
    NeedsSignUp,
}

async fn create_account(app: &AppContext, file: &File) -> Outcome {
    let Some((signup, questions)) = app.session().pending() else {
        return Outcome::NeedsSignUp;
    };
    let text = match read_text(file).await {
        Ok(text) => text,
        Err(message) => return Outcome::Failed(message),
    };
    let transactions = match transactions_for_signup(&text) {
        Ok(transactions) => transactions,
        Err(message) => return Outcome::Failed(message),
    };

    let result = app
        .api
        .complete_signup(&signup.full_name, &signup.email, &signup.password, &questions, &transactions)
        .await;
    match result {
        Ok(resp) if resp.success => match (resp.access_token, resp.user_id) {
            (Some(token), Some(user_id)) => {
                app.session().clear_pending();
                app.session().sign_in(&token, &user_id);
                log::info!("account {user_id} created with {} transactions", transactions.len());
                Outcome::Imported(format!(
                    "Account created successfully! Imported {} transactions.",
                    transactions.len()
                ))
            }
            _ => Outcome::Failed("Sign-up did not return credentials".to_string()),
        },
        Ok(resp) => Outcome::Failed(resp.message),
        Err(err) => Outcome::Failed(err.message),
    }
}

pub(crate) async fn upload_existing(api: &ApiClient, file: &File) -> Result<String, ApiError> {
    let resp = api.upload_csv(file).await?;
    if resp.success {
        Ok(format!("Successfully imported {} transactions!", resp.transactions_imported))
    } else {
        Err(ApiError::new(resp.message, 200))
    }
}

/// Last step of sign-up; also used by signed-in accounts to add more data.
#[function_component(UploadCsvPage)]
pub fn upload_csv_page() -> Html {
    let app = use_app();
    let file = use_state(|| None::<File>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let on_file = {
        let file = file.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            file.set(input.files().and_then(|files| files.get(0)));
            error.set(None);
            success.set(None);
        })
    };

    let on_submit = {
        let app = app.clone();
        let file = file.clone();
        let loading = loading.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(selected) = (*file).clone() else {
                error.set(Some("Please select a CSV file".to_string()));
                return;
            };
            loading.set(true);
            error.set(None);
            success.set(None);

            let app = app.clone();
            let loading = loading.clone();
            let error = error.clone();
            let success = success.clone();
            spawn_local(async move {
                let outcome = match upload_target(app.session()) {
                    UploadTarget::NewAccount => create_account(&app, &selected).await,
                    UploadTarget::ExistingAccount => match upload_existing(&app.api, &selected).await {
                        Ok(message) => Outcome::Imported(message),
                        Err(err) => Outcome::Failed(err.message),
                    },
                    UploadTarget::NoAccount => Outcome::NeedsSignUp,
                };
                loading.set(false);

                match outcome {
                    Outcome::Imported(message) => {
                        success.set(Some(message));
                        sleep(3000).await;
                        app.navigate.emit(Route::Dashboard);
                    }
                    Outcome::Failed(message) => error.set(Some(message)),
                    Outcome::NeedsSignUp => {
                        error.set(Some("Please sign up and answer questions first".to_string()));
                        sleep(2000).await;
                        app.navigate.emit(Route::SignUp);
                    }
                }
            });
        })
    };

    let on_cancel = {
        let navigate = app.navigate.clone();
        Callback::from(move |_| navigate.emit(Route::Dashboard))
    };

    html! {
        <div class="min-h-screen py-12 px-4 bg-[#120b25]">
            <div class="max-w-2xl mx-auto rounded-lg bg-[#221e2f] px-4 py-5 sm:p-6">
                <h2 class="text-2xl font-semibold text-white mb-2">{"Upload your transactions"}</h2>
                <div class="mb-6 text-sm text-[#c4c4c4]">
                    <p>{"Your CSV file must contain the following columns:"}</p>
                    <ul class="list-disc list-inside my-2">
                        { for REQUIRED_COLUMNS.iter().map(|col| html! { <li><code>{ *col }</code></li> }) }
                    </ul>
                    <p>{"Additional columns will be stored as metadata."}</p>
                </div>

                <form onsubmit={on_submit} class="space-y-6">
                    <div>
                        <label class="block text-sm font-medium mb-2 text-[#c4c4c4]">{"Select CSV File"}</label>
                        <input type="file" accept=".csv" onchange={on_file} class="block w-full text-sm text-[#c4c4c4]" />
                        if let Some(f) = &*file {
                            <p class="mt-2 text-xs text-gray-400">
                                { format!("Selected: {} ({:.1} KB)", f.name(), f.size() / 1024.0) }
                            </p>
                        }
                    </div>

                    <div>
                        <p class="text-sm text-[#c4c4c4] mb-2">{"Sample format:"}</p>
                        <pre class="text-xs p-4 rounded-md bg-[#120b25] text-[#c4c4c4] overflow-x-auto">{ SAMPLE_CSV }</pre>
                    </div>

                    { error_banner(&error) }
                    if success.is_some() {
                        <div class="space-y-1">
                            { success_banner(&success) }
                            <p class="text-xs text-green-400">{"Redirecting to dashboard in 3 seconds..."}</p>
                        </div>
                    }

                    <div class="flex justify-between">
                        <button type="button" onclick={on_cancel}
                            class="px-4 py-2 border border-[#221e2f] rounded-md text-sm font-medium text-[#c4c4c4] bg-[#120b25]">
                            {"Cancel"}
                        </button>
                        <button type="submit" disabled={file.is_none() || *loading}
                            class="px-4 py-2 rounded-md text-sm font-medium text-white bg-[#6246e9] disabled:opacity-50 disabled:cursor-not-allowed">
                            { if *loading { "Uploading..." } else { "Upload CSV" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::api::types::QuestionAnswer;
    use crate::session::{MemoryStore, PendingSignup};

    #[test]
    fn test_clean_file_yields_every_row() {
        let text = "date,amount,category\n2024-01-15,-25.50,Food\n2024-01-17,1500,Income\n";
        let transactions = transactions_for_signup(text).unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[1].category, "Income");
    }

    #[test]
    fn test_one_bad_row_blocks_signup() {
        let text = "date,amount,category\n2024-01-15,-25.50,Food\n2024-01-16,0,Transport\n";
        let err = transactions_for_signup(text).unwrap_err();
        assert_eq!(err, "CSV parsing errors: Row 3: Amount cannot be zero");
    }

    fn pending_signup() -> PendingSignup {
        PendingSignup {
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            password: "hunter22".to_string(),
        }
    }

    #[test]
    fn test_abandoned_signup_still_uploads_to_signed_in_account() {
        let session = Session::init(Rc::new(MemoryStore::default()));
        session.sign_in("token-1", "user-1");
        session.set_pending_signup(pending_signup());
        assert_eq!(upload_target(&session), UploadTarget::ExistingAccount);

        session.set_pending_answers(vec![QuestionAnswer {
            q_id: 1,
            answer: "Salaried".to_string(),
        }]);
        assert_eq!(upload_target(&session), UploadTarget::NewAccount);
    }

    #[test]
    fn test_upload_without_any_account() {
        let session = Session::init(Rc::new(MemoryStore::default()));
        assert_eq!(upload_target(&session), UploadTarget::NoAccount);
        session.set_pending_signup(pending_signup());
        assert_eq!(upload_target(&session), UploadTarget::NoAccount);
    }

    #[test]
    fn test_format_errors_pass_through() {
        let err = transactions_for_signup("date,amount\n2024-01-01,10\n").unwrap_err();
        assert!(err.contains("category"));
    }
}
