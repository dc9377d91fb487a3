use std::rc::Rc;

use famfinity_frontend::api::ApiError;
use famfinity_frontend::config::{TOKEN_KEY, USER_ID_KEY};
use famfinity_frontend::csv_import::{parse_transactions, FormatError};
use famfinity_frontend::onboarding::{Answers, QuestionKind, QUESTIONS};
use famfinity_frontend::pages::{sign_in_error, transactions_for_signup, WRONG_CREDENTIALS};
use famfinity_frontend::session::{KeyValueStore, MemoryStore, PendingSignup, Session};

fn answer_everything() -> Answers {
    let mut answers = Answers::default();
    for question in QUESTIONS.iter() {
        answers.ensure_default(question);
        if let QuestionKind::Select(options) = question.kind {
            answers.set(question.id, options[0]);
        }
    }
    answers
}

fn pending_signup() -> PendingSignup {
    PendingSignup {
        full_name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        password: "hunter22".to_string(),
    }
}

#[test]
fn test_signup_collects_everything_before_account_creation() {
    let store = Rc::new(MemoryStore::default());
    let session = Session::init(store.clone());

    session.set_pending_signup(pending_signup());
    assert!(session.has_pending_signup());
    assert!(session.pending().is_none(), "answers are still missing");

    let answers = answer_everything();
    assert!(answers.is_complete());
    session.set_pending_answers(answers.to_payload());

    let (signup, payload) = session.pending().expect("sign-up and answers are collected");
    assert_eq!(signup.email, "asha@example.com");
    assert_eq!(payload.len(), 15);
    assert!(payload.iter().all(|a| !a.answer.is_empty()));

    let csv = "date,amount,category,description\n\
               2024-01-15,-25.50,Food,Grocery shopping\n\
               2024-01-17,1500.00,Income,Salary\n";
    let transactions = transactions_for_signup(csv).expect("clean file");
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].metadata.get("description").map(String::as_str), Some("Grocery shopping"));

    session.clear_pending();
    session.sign_in("token-1", "user-1");
    assert!(!session.has_pending_signup());
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("token-1"));
    assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("user-1"));
}

#[test]
fn test_restarting_signup_drops_earlier_answers() {
    let session = Session::init(Rc::new(MemoryStore::default()));
    session.set_pending_signup(pending_signup());
    session.set_pending_answers(answer_everything().to_payload());
    session.set_pending_signup(pending_signup());
    assert!(session.pending().is_none());
}

#[test]
fn test_credentials_survive_a_reload_but_pending_signup_does_not() {
    let store = Rc::new(MemoryStore::default());
    let first = Session::init(store.clone());
    first.sign_in("token-2", "user-2");
    first.set_pending_signup(pending_signup());

    let reloaded = Session::init(store);
    assert!(reloaded.is_signed_in());
    assert_eq!(reloaded.user_id().as_deref(), Some("user-2"));
    assert!(!reloaded.has_pending_signup());
}

#[test]
fn test_zero_amount_row_is_reported_and_blocks_signup() {
    let csv = "date,amount,category\n2024-01-15,-25.50,Food\n2024-01-16,0,Transport\n";
    let import = parse_transactions(csv).expect("one row is usable");
    assert_eq!(import.transactions.len(), 1);
    assert_eq!(import.error_messages(), vec!["Row 3: Amount cannot be zero".to_string()]);

    let err = transactions_for_signup(csv).unwrap_err();
    assert!(err.starts_with("CSV parsing errors: "));
}

#[test]
fn test_missing_category_column_is_a_format_error() {
    let err = parse_transactions("date,amount\n2024-01-01,10\n").unwrap_err();
    assert!(matches!(err, FormatError::MissingColumns(_)));
}

#[test]
fn test_rejected_login_reads_as_wrong_credentials() {
    assert_eq!(sign_in_error(&ApiError::new("Unauthorized", 401)), WRONG_CREDENTIALS);
    assert_eq!(sign_in_error(&ApiError::new("Invalid email or password", 400)), WRONG_CREDENTIALS);
    assert_eq!(sign_in_error(&ApiError::new("Server exploded", 500)), "Server exploded");
}
