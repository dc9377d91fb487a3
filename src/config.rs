//! Build-time configuration for the web client.

/// Backend base URL. Set `API_URL` when building to point at another backend.
pub const API_BASE_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

pub const TOKEN_KEY: &str = "access_token";
pub const USER_ID_KEY: &str = "userId";

/// Paths on which a 401 is reported to the page instead of forcing a sign-out.
/// Failed sign-in attempts must keep their error message on screen.
pub const PUBLIC_AUTH_PATHS: [&str; 4] = ["/signin", "/signup", "/onboarding", "/upload-csv"];

pub const TRANSACTION_PAGE_SIZE: u32 = 1000;
pub const EXPENSE_PAGE_SIZE: u32 = 100;
pub const RECENT_TRANSACTIONS: usize = 10;

pub fn is_public_auth_path(path: &str) -> bool {
    PUBLIC_AUTH_PATHS.contains(&path)
}
