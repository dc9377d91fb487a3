use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use crate::advice::{AdvisorReply, SuggestedAction};
pub use crate::chart::{CategoryTotal, MonthTotal};
use crate::csv_import::TransactionRecord;

// ==================== Auth ====================

#[derive(Serialize)]
pub struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub full_name: &'a str,
}

#[derive(Serialize)]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct CompleteSignupRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub full_name: &'a str,
    pub questions: &'a [QuestionAnswer],
    pub transactions: &'a [TransactionRecord],
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub user_id: Option<String>,
    pub access_token: Option<String>,
    #[serde(default)]
    pub onboarding_complete: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub created_at: Option<String>,
    #[serde(default)]
    pub onboarding_complete: bool,
}

// ==================== Onboarding ====================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub q_id: u32,
    pub answer: String,
}

#[derive(Serialize)]
pub struct SubmitAnswersRequest<'a> {
    pub answers: &'a [QuestionAnswer],
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SubmitAnswersResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub questions_saved: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StoredAnswer {
    pub q_id: u32,
    #[serde(default)]
    pub answer: String,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StoredAnswers {
    #[serde(default)]
    pub questions: Vec<StoredAnswer>,
}

// ==================== Import ====================

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub transactions_imported: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A transaction as the backend stored it after an import.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StoredTransaction {
    pub id: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
    pub created_at: Option<String>,
}

impl StoredTransaction {
    pub fn description(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .get("description")?
            .as_str()
            .filter(|d| !d.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TransactionPage {
    #[serde(default)]
    pub transactions: Vec<StoredTransaction>,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

// ==================== Aggregates ====================

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FinanceSummary {
    pub month: Option<String>,
    #[serde(default)]
    pub total_expenses: f64,
    #[serde(default)]
    pub total_income: f64,
    #[serde(default)]
    pub month_saving: f64,
    #[serde(default)]
    pub categories: Vec<CategoryTotal>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Trend {
    #[serde(default)]
    pub months: u32,
    #[serde(default)]
    pub series: Vec<MonthTotal>,
}

// ==================== Budgets ====================

/// A monthly budget. The same shape is sent to `/budgets/create` and read
/// back from `/budgets/current`, which adds the two computed fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub month: String,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub savings_goal: f64,
    #[serde(default)]
    pub bills_utilities: f64,
    #[serde(default)]
    pub housing: f64,
    #[serde(default)]
    pub food: f64,
    #[serde(default)]
    pub transportation: f64,
    #[serde(default)]
    pub healthcare: f64,
    #[serde(default)]
    pub entertainment: f64,
    #[serde(default)]
    pub shopping: f64,
    #[serde(default)]
    pub education: f64,
    #[serde(default)]
    pub other: f64,
    #[serde(default, skip_serializing)]
    pub total_expenses: Option<f64>,
    #[serde(default, skip_serializing)]
    pub left_to_budget: Option<f64>,
}

/// Budget line items in the order the budget form lists them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetField {
    BillsUtilities,
    Housing,
    Food,
    Transportation,
    Healthcare,
    Entertainment,
    Shopping,
    Education,
    Other,
}

impl BudgetField {
    pub const ALL: [BudgetField; 9] = [
        BudgetField::BillsUtilities,
        BudgetField::Housing,
        BudgetField::Food,
        BudgetField::Transportation,
        BudgetField::Healthcare,
        BudgetField::Entertainment,
        BudgetField::Shopping,
        BudgetField::Education,
        BudgetField::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BudgetField::BillsUtilities => "Bills & Utilities",
            BudgetField::Housing => "Housing",
            BudgetField::Food => "Food",
            BudgetField::Transportation => "Transportation",
            BudgetField::Healthcare => "Healthcare",
            BudgetField::Entertainment => "Entertainment",
            BudgetField::Shopping => "Shopping",
            BudgetField::Education => "Education",
            BudgetField::Other => "Other",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            BudgetField::BillsUtilities => "⚡",
            BudgetField::Housing => "🏠",
            BudgetField::Food => "🍽️",
            BudgetField::Transportation => "🚗",
            BudgetField::Healthcare => "🏥",
            BudgetField::Entertainment => "🎬",
            BudgetField::Shopping => "🛍️",
            BudgetField::Education => "📚",
            BudgetField::Other => "📝",
        }
    }

    pub fn subcategories(self) -> &'static [&'static str] {
        match self {
            BudgetField::BillsUtilities => &["Garbage", "Water", "Electricity", "Internet & Cable", "Phone"],
            BudgetField::Housing => &["Mortgage", "Rent", "Home Improvement"],
            BudgetField::Food => &["Groceries", "Dining Out"],
            BudgetField::Transportation => &["Fuel", "Public Transport", "Vehicle Maintenance"],
            BudgetField::Healthcare => &["Medical", "Insurance"],
            BudgetField::Entertainment => &["Movies", "OTT", "Events"],
            BudgetField::Shopping => &["Clothing", "Electronics", "Gifts"],
            BudgetField::Education => &["Tuition", "Books", "Courses"],
            BudgetField::Other => &[],
        }
    }
}

impl Budget {
    /// Defaults shown when no budget exists for `month` yet.
    pub fn starter(month: &str) -> Self {
        Budget {
            month: month.to_string(),
            income: 5000.0,
            savings_goal: 1000.0,
            bills_utilities: 0.0,
            housing: 0.0,
            food: 0.0,
            transportation: 0.0,
            healthcare: 0.0,
            entertainment: 0.0,
            shopping: 0.0,
            education: 0.0,
            other: 0.0,
            total_expenses: None,
            left_to_budget: None,
        }
    }

    pub fn get(&self, field: BudgetField) -> f64 {
        match field {
            BudgetField::BillsUtilities => self.bills_utilities,
            BudgetField::Housing => self.housing,
            BudgetField::Food => self.food,
            BudgetField::Transportation => self.transportation,
            BudgetField::Healthcare => self.healthcare,
            BudgetField::Entertainment => self.entertainment,
            BudgetField::Shopping => self.shopping,
            BudgetField::Education => self.education,
            BudgetField::Other => self.other,
        }
    }

    pub fn set(&mut self, field: BudgetField, value: f64) {
        let slot = match field {
            BudgetField::BillsUtilities => &mut self.bills_utilities,
            BudgetField::Housing => &mut self.housing,
            BudgetField::Food => &mut self.food,
            BudgetField::Transportation => &mut self.transportation,
            BudgetField::Healthcare => &mut self.healthcare,
            BudgetField::Entertainment => &mut self.entertainment,
            BudgetField::Shopping => &mut self.shopping,
            BudgetField::Education => &mut self.education,
            BudgetField::Other => &mut self.other,
        };
        *slot = value;
    }

    pub fn planned_expenses(&self) -> f64 {
        BudgetField::ALL.iter().map(|f| self.get(*f)).sum()
    }

    pub fn left_to_budget(&self) -> f64 {
        self.income - self.savings_goal - self.planned_expenses()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CurrentBudget {
    pub budget: Option<Budget>,
    pub month: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

// ==================== Expenses ====================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseType {
    #[default]
    #[serde(rename = "one-time")]
    OneTime,
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "monthly")]
    Monthly,
}

impl ExpenseType {
    pub const ALL: [ExpenseType; 3] = [ExpenseType::OneTime, ExpenseType::Daily, ExpenseType::Monthly];

    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseType::OneTime => "one-time",
            ExpenseType::Daily => "daily",
            ExpenseType::Monthly => "monthly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExpenseType::OneTime => "One-time",
            ExpenseType::Daily => "Daily",
            ExpenseType::Monthly => "Monthly",
        }
    }

    pub fn from_value(value: &str) -> Self {
        ExpenseType::ALL
            .into_iter()
            .find(|t| t.as_str() == value)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub date: String,
    pub amount: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub expense_type: ExpenseType,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Expense {
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    pub description: Option<String>,
    #[serde(default)]
    pub expense_type: ExpenseType,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ExpenseAdded {
    #[serde(default)]
    pub success: bool,
    pub expense_id: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ExpenseList {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub total: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExpenseCategoryTotal {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ExpenseSummary {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub categories: Vec<ExpenseCategoryTotal>,
    pub month: Option<String>,
}

// ==================== Goals ====================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewGoal {
    pub title: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Goal {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    pub deadline: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GoalCreated {
    #[serde(default)]
    pub success: bool,
    pub goal_id: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    pub predicted_time_months: Option<u32>,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GoalList {
    #[serde(default)]
    pub goals: Vec<Goal>,
}

// ==================== Investments ====================

#[derive(Serialize)]
pub struct RecommendRequest {
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlanOption {
    pub name: String,
    #[serde(default)]
    pub returns: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InvestmentPlan {
    pub level: u8,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub short_term: Vec<PlanOption>,
    #[serde(default)]
    pub medium_term: Vec<PlanOption>,
    #[serde(default)]
    pub long_term: Vec<PlanOption>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Recommendation {
    pub risk_level: u8,
    #[serde(default)]
    pub risk_label: String,
    #[serde(default)]
    pub amount: f64,
    pub recommendations: InvestmentPlan,
}

/// `/investments/all-plans` keys plans by their risk level as a string.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AllPlans {
    #[serde(default)]
    pub plans: BTreeMap<String, InvestmentPlan>,
}

impl AllPlans {
    pub fn by_level(&self) -> Vec<&InvestmentPlan> {
        let mut plans: Vec<&InvestmentPlan> = self.plans.values().collect();
        plans.sort_by_key(|p| p.level);
        plans
    }
}

// ==================== Advisor / chat ====================

#[derive(Serialize)]
pub struct AdvisorRequest<'a> {
    pub user_id: &'a str,
    pub query: &'a str,
}

#[derive(Serialize)]
pub struct ChatRequest<'a> {
    pub user_id: &'a str,
    pub query: &'a str,
    pub include_context: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Health {
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_left_to_budget() {
        let mut budget = Budget::starter("2025-01");
        budget.set(BudgetField::Food, 1200.0);
        budget.set(BudgetField::Housing, 2000.0);
        assert_eq!(budget.planned_expenses(), 3200.0);
        assert_eq!(budget.left_to_budget(), 800.0);
    }

    #[test]
    fn test_budget_body_skips_computed_fields() {
        let mut budget = Budget::starter("2025-01");
        budget.total_expenses = Some(10.0);
        let body = serde_json::to_value(&budget).expect("serializes");
        assert!(body.get("total_expenses").is_none());
        assert_eq!(body["savings_goal"], 1000.0);
    }

    #[test]
    fn test_expense_type_wire_names() {
        let body = serde_json::to_value(NewExpense {
            date: "2025-01-02".to_string(),
            amount: 250.0,
            category: "Rent/EMI".to_string(),
            description: None,
            expense_type: ExpenseType::OneTime,
        })
        .expect("serializes");
        assert_eq!(body["expense_type"], "one-time");
        assert!(body.get("description").is_none());
        assert_eq!(ExpenseType::from_value("monthly"), ExpenseType::Monthly);
        assert_eq!(ExpenseType::from_value("weekly"), ExpenseType::OneTime);
    }

    #[test]
    fn test_transaction_description_from_metadata() {
        let tx: StoredTransaction = serde_json::from_str(
            r#"{"id":"1","date":"2025-01-02","amount":-20,"category":"Food","metadata":{"description":"Lunch"}}"#,
        )
        .expect("decodes");
        assert_eq!(tx.description(), Some("Lunch"));

        let tx: StoredTransaction =
            serde_json::from_str(r#"{"date":"2025-01-02","amount":5,"category":"Food","metadata":null}"#)
                .expect("decodes");
        assert_eq!(tx.description(), None);
    }

    #[test]
    fn test_all_plans_sorted_by_level() {
        let plans: AllPlans = serde_json::from_str(
            r#"{"plans":{"2":{"level":2,"label":"Low"},"1":{"level":1,"label":"None"}}}"#,
        )
        .expect("decodes");
        let levels: Vec<u8> = plans.by_level().iter().map(|p| p.level).collect();
        assert_eq!(levels, vec![1, 2]);
    }
}
