//! Typed wrappers around the FamFinity backend.
//!
//! Every call attaches the session's bearer token, decodes the JSON body into
//! the matching record from [`types`] and turns anything else into an
//! [`ApiError`]. A 401 outside the auth pages signs the user out.

pub mod error;
pub mod types;

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use error::ApiError;
use types::*;

use crate::config::API_BASE_URL;
use crate::csv_import::TransactionRecord;
use crate::route;
use crate::session::Session;

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        ApiClient::with_base_url(API_BASE_URL, session)
    }

    pub fn with_base_url(base_url: &str, session: Session) -> Self {
        ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        log::debug!("GET {}", path);
        self.authorize(Request::get(&self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        log::debug!("POST {}", path);
        self.authorize(Request::post(&self.url(path)))
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        log::debug!("DELETE {}", path);
        self.authorize(Request::delete(&self.url(path)))
    }

    /// Clears the credentials when a 401 should end the session. Returns
    /// whether the caller must leave for the sign-in page.
    pub fn apply_unauthorized_policy(&self, status: u16, current_path: &str) -> bool {
        if route::should_force_sign_out(status, current_path) {
            log::info!("token rejected on {current_path}, signing out");
            self.session.clear();
            true
        } else {
            false
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_body(status, &body);
            log::warn!("{} failed with {}: {}", response.url(), status, err);
            if self.apply_unauthorized_policy(status, &route::current_path()) {
                route::hard_redirect_to_sign_in();
            }
            return Err(err);
        }
        Ok(response.json::<T>().await?)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = builder.json(body)?;
        self.send(request).await
    }

    async fn send_empty<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        self.send(builder.build()?).await
    }

    // ==================== Auth ====================

    pub async fn sign_up(&self, full_name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = SignUpRequest {
            email,
            password,
            full_name,
        };
        self.send_json(self.post("/auth/signup"), &body).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.send_json(self.post("/auth/signin"), &SignInRequest { email, password })
            .await
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.send_empty(self.get("/auth/me")).await
    }

    pub async fn complete_signup(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        questions: &[QuestionAnswer],
        transactions: &[TransactionRecord],
    ) -> Result<AuthResponse, ApiError> {
        let body = CompleteSignupRequest {
            email,
            password,
            full_name,
            questions,
            transactions,
        };
        self.send_json(self.post("/auth/complete-signup"), &body).await
    }

    // ==================== Onboarding ====================

    pub async fn submit_answers(&self, answers: &[QuestionAnswer]) -> Result<SubmitAnswersResponse, ApiError> {
        self.send_json(self.post("/questions/submit"), &SubmitAnswersRequest { answers })
            .await
    }

    pub async fn stored_answers(&self) -> Result<StoredAnswers, ApiError> {
        self.send_empty(self.get("/questions/")).await
    }

    // ==================== Import ====================

    /// Multipart upload of the raw file; the backend does its own parsing.
    pub async fn upload_csv(&self, file: &web_sys::File) -> Result<UploadResponse, ApiError> {
        let unreadable = |_| ApiError::new("Could not read the selected file", 0);
        let form = web_sys::FormData::new().map_err(unreadable)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(unreadable)?;
        let request = self.post("/upload/upload-csv").body(form)?;
        self.send(request).await
    }

    pub async fn transactions(&self, limit: u32, offset: u32) -> Result<TransactionPage, ApiError> {
        let builder = self
            .get("/upload/transactions")
            .query([("limit", limit.to_string()), ("offset", offset.to_string())]);
        self.send_empty(builder).await
    }

    // ==================== Aggregates ====================

    pub async fn finance_summary(&self, month: Option<&str>) -> Result<FinanceSummary, ApiError> {
        let builder = self.get("/finance/summary").query(month.map(|m| ("month", m)));
        self.send_empty(builder).await
    }

    pub async fn finance_trend(&self, months: u32) -> Result<Trend, ApiError> {
        let builder = self
            .get("/finance/trend")
            .query([("months", months.to_string())]);
        self.send_empty(builder).await
    }

    // ==================== Budgets ====================

    pub async fn save_budget(&self, budget: &Budget) -> Result<SaveResponse, ApiError> {
        self.send_json(self.post("/budgets/create"), budget).await
    }

    pub async fn current_budget(&self, month: Option<&str>) -> Result<CurrentBudget, ApiError> {
        let builder = self.get("/budgets/current").query(month.map(|m| ("month", m)));
        self.send_empty(builder).await
    }

    // ==================== Expenses ====================

    pub async fn add_expense(&self, expense: &NewExpense) -> Result<ExpenseAdded, ApiError> {
        self.send_json(self.post("/expenses/add"), expense).await
    }

    pub async fn expenses(&self, month: &str, limit: u32, offset: u32) -> Result<ExpenseList, ApiError> {
        let builder = self.get("/expenses/list").query([
            ("month", month.to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ]);
        self.send_empty(builder).await
    }

    pub async fn expense_summary(&self, month: &str) -> Result<ExpenseSummary, ApiError> {
        let builder = self.get("/expenses/summary").query([("month", month)]);
        self.send_empty(builder).await
    }

    pub async fn delete_expense(&self, id: &str) -> Result<SaveResponse, ApiError> {
        self.send_empty(self.delete(&format!("/expenses/{}", id))).await
    }

    // ==================== Goals ====================

    pub async fn create_goal(&self, goal: &NewGoal) -> Result<GoalCreated, ApiError> {
        self.send_json(self.post("/goals/create"), goal).await
    }

    pub async fn goals(&self) -> Result<GoalList, ApiError> {
        self.send_empty(self.get("/goals/list")).await
    }

    pub async fn delete_goal(&self, id: &str) -> Result<SaveResponse, ApiError> {
        self.send_empty(self.delete(&format!("/goals/{}", id))).await
    }

    // ==================== Investments ====================

    pub async fn recommend_investments(&self, amount: f64) -> Result<Recommendation, ApiError> {
        self.send_json(self.post("/investments/recommend"), &RecommendRequest { amount })
            .await
    }

    pub async fn investment_plans(&self) -> Result<AllPlans, ApiError> {
        self.send_empty(self.get("/investments/all-plans")).await
    }

    // ==================== Advisor / chat ====================

    pub async fn advise(&self, user_id: &str, query: &str) -> Result<AdvisorReply, ApiError> {
        self.send_json(self.post("/advisor"), &AdvisorRequest { user_id, query })
            .await
    }

    pub async fn chat(&self, user_id: &str, query: &str) -> Result<ChatReply, ApiError> {
        let body = ChatRequest {
            user_id,
            query,
            include_context: false,
        };
        self.send_json(self.post("/chat"), &body).await
    }

    pub async fn health(&self) -> Result<Health, ApiError> {
        self.send_empty(self.get("/health")).await
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::config::{TOKEN_KEY, USER_ID_KEY};
    use crate::session::{KeyValueStore, MemoryStore};

    fn signed_in() -> (Rc<MemoryStore>, ApiClient) {
        let store = Rc::new(MemoryStore::default());
        store.set(TOKEN_KEY, "tok");
        store.set(USER_ID_KEY, "u-1");
        let client = ApiClient::with_base_url("http://api.test/", Session::init(store.clone()));
        (store, client)
    }

    #[test]
    fn test_unauthorized_on_protected_page_signs_out() {
        let (store, client) = signed_in();
        assert!(client.apply_unauthorized_policy(401, "/dashboard"));
        assert!(!client.session().is_signed_in());
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_ID_KEY), None);
    }

    #[test]
    fn test_unauthorized_on_sign_in_page_keeps_session() {
        let (store, client) = signed_in();
        assert!(!client.apply_unauthorized_policy(401, "/signin"));
        assert!(client.session().is_signed_in());
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok"));
    }

    #[test]
    fn test_other_statuses_keep_session() {
        let (_, client) = signed_in();
        assert!(!client.apply_unauthorized_policy(403, "/dashboard"));
        assert!(client.session().is_signed_in());
    }

    #[test]
    fn test_base_url_joins_paths() {
        let (_, client) = signed_in();
        assert_eq!(client.url("/auth/me"), "http://api.test/auth/me");
    }

    #[test]
    fn test_complete_signup_body() {
        let questions = vec![QuestionAnswer {
            q_id: 1,
            answer: "Build wealth".to_string(),
        }];
        let transactions = vec![TransactionRecord {
            date: "2024-01-15".to_string(),
            amount: -25.5,
            category: "Food".to_string(),
            metadata: Default::default(),
        }];
        let body = serde_json::to_value(CompleteSignupRequest {
            email: "a@b.c",
            password: "pw",
            full_name: "A",
            questions: &questions,
            transactions: &transactions,
        })
        .expect("serializes");
        assert_eq!(body["questions"][0]["q_id"], 1);
        assert_eq!(body["transactions"][0]["amount"], -25.5);
        assert_eq!(body["transactions"][0]["metadata"], serde_json::json!({}));
    }
}
