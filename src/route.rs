use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Features,
    About,
    Contact,
    SignIn,
    SignUp,
    Onboarding,
    UploadCsv,
    Dashboard,
    Budgets,
    Expenses,
    Goals,
    Advisor,
    Chatbot,
    Investments,
    Profile,
}

impl Route {
    pub const ALL: [Route; 16] = [
        Route::Home,
        Route::Features,
        Route::About,
        Route::Contact,
        Route::SignIn,
        Route::SignUp,
        Route::Onboarding,
        Route::UploadCsv,
        Route::Dashboard,
        Route::Budgets,
        Route::Expenses,
        Route::Goals,
        Route::Advisor,
        Route::Chatbot,
        Route::Investments,
        Route::Profile,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Features => "/features",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
            Route::Onboarding => "/onboarding",
            Route::UploadCsv => "/upload-csv",
            Route::Dashboard => "/dashboard",
            Route::Budgets => "/budgets",
            Route::Expenses => "/expenses",
            Route::Goals => "/goals",
            Route::Advisor => "/advisor",
            Route::Chatbot => "/chatbot",
            Route::Investments => "/investments",
            Route::Profile => "/profile",
        }
    }

    /// Unknown paths land on the home page. A trailing slash is ignored.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL
            .into_iter()
            .find(|r| r.path() == path)
            .unwrap_or(Route::Home)
    }

    /// Routes behind the sign-in gate.
    pub fn is_protected(self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::Budgets
                | Route::Expenses
                | Route::Goals
                | Route::Advisor
                | Route::Chatbot
                | Route::Investments
                | Route::Profile
        )
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Features => "Features",
            Route::About => "About",
            Route::Contact => "Contact",
            Route::SignIn => "Sign In",
            Route::SignUp => "Sign Up",
            Route::Onboarding => "Onboarding",
            Route::UploadCsv => "Upload CSV",
            Route::Dashboard => "Dashboard",
            Route::Budgets => "Budgets",
            Route::Expenses => "Expenses",
            Route::Goals => "Goals",
            Route::Advisor => "AI Finance Advisor",
            Route::Chatbot => "AI Chatbot",
            Route::Investments => "Investment Plans",
            Route::Profile => "Profile",
        }
    }
}

/// Path of the page currently shown, `/` outside a browser.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn push_history(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().pathname().ok().as_deref() == Some(route.path()) {
        return;
    }
    if let Ok(history) = window.history() {
        if history
            .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()))
            .is_err()
        {
            log::warn!("could not push {} onto history", route.path());
        }
    }
}

/// Full page load of the sign-in page, used when the backend rejects the token.
pub fn hard_redirect_to_sign_in() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(Route::SignIn.path());
    }
}

/// A 401 signs the user out unless they are already on an auth page, where
/// the error belongs to the form that caused it.
pub fn should_force_sign_out(status: u16, path: &str) -> bool {
    status == 401 && !config::is_public_auth_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_and_trailing_paths() {
        assert_eq!(Route::from_path("/nope"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/goals/"), Route::Goals);
    }

    #[test]
    fn test_protected_routes() {
        let protected: Vec<Route> = Route::ALL.into_iter().filter(|r| r.is_protected()).collect();
        assert_eq!(protected.len(), 8);
        assert!(!Route::UploadCsv.is_protected());
        assert!(Route::Profile.is_protected());
    }

    #[test]
    fn test_unauthorized_policy() {
        assert!(should_force_sign_out(401, "/dashboard"));
        assert!(!should_force_sign_out(401, "/signin"));
        assert!(!should_force_sign_out(401, "/upload-csv"));
        assert!(!should_force_sign_out(500, "/dashboard"));
    }
}
