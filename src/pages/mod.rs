mod about;
mod advisor;
mod budgets;
mod chatbot;
mod contact;
mod dashboard;
mod expenses;
mod features;
mod goals;
mod home;
mod investments;
mod onboarding;
mod profile;
mod signin;
mod signup;
mod upload_csv;

pub use about::AboutPage;
pub use advisor::AdvisorPage;
pub use budgets::BudgetsPage;
pub use chatbot::ChatbotPage;
pub use contact::ContactPage;
pub use dashboard::DashboardPage;
pub use expenses::ExpensesPage;
pub use features::FeaturesPage;
pub use goals::GoalsPage;
pub use home::HomePage;
pub use investments::InvestmentsPage;
pub use onboarding::OnboardingPage;
pub use profile::ProfilePage;
pub use signin::{sign_in_error, SignInPage, WRONG_CREDENTIALS};
pub use signup::SignUpPage;
pub use upload_csv::{transactions_for_signup, UploadCsvPage};
