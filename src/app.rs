use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::js_sys;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::protected::ProtectedRoute;
use crate::pages::*;
use crate::route::{self, Route};
use crate::session::Session;

/// Shared with every page through a context provider.
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub api: ApiClient,
    pub route: Route,
    pub navigate: Callback<Route>,
}

impl AppContext {
    pub fn session(&self) -> &Session {
        self.api.session()
    }
}

/// The app context, or a standalone one when rendered outside [`App`].
#[hook]
pub fn use_app() -> AppContext {
    let fallback = use_state(|| ApiClient::new(Session::browser()));
    use_context::<AppContext>().unwrap_or_else(|| AppContext {
        api: (*fallback).clone(),
        route: Route::from_path(&route::current_path()),
        navigate: Callback::from(|next: Route| {
            route::push_history(next);
        }),
    })
}

/// Resolves after `ms` milliseconds, so a message can stay on screen before a
/// redirect.
pub async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

fn render(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Features => html! { <FeaturesPage /> },
        Route::About => html! { <AboutPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::SignIn => html! { <SignInPage /> },
        Route::SignUp => html! { <SignUpPage /> },
        Route::Onboarding => html! { <OnboardingPage /> },
        Route::UploadCsv => html! { <UploadCsvPage /> },
        Route::Dashboard => html! { <ProtectedRoute><DashboardPage /></ProtectedRoute> },
        Route::Budgets => html! { <ProtectedRoute><BudgetsPage /></ProtectedRoute> },
        Route::Expenses => html! { <ProtectedRoute><ExpensesPage /></ProtectedRoute> },
        Route::Goals => html! { <ProtectedRoute><GoalsPage /></ProtectedRoute> },
        Route::Advisor => html! { <ProtectedRoute><AdvisorPage /></ProtectedRoute> },
        Route::Chatbot => html! { <ProtectedRoute><ChatbotPage /></ProtectedRoute> },
        Route::Investments => html! { <ProtectedRoute><InvestmentsPage /></ProtectedRoute> },
        Route::Profile => html! { <ProtectedRoute><ProfilePage /></ProtectedRoute> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let api = use_state(|| ApiClient::new(Session::browser()));
    let active_route = use_state(|| Route::from_path(&route::current_path()));

    // back/forward buttons
    {
        let active_route = active_route.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::<dyn Fn()>::new(move || {
                    active_route.set(Route::from_path(&route::current_path()));
                });
                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "popstate",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let navigate = {
        let active_route = active_route.clone();
        Callback::from(move |next: Route| {
            route::push_history(next);
            active_route.set(next);
        })
    };

    let context = AppContext {
        api: (*api).clone(),
        route: *active_route,
        navigate,
    };

    html! {
        <ContextProvider<AppContext> context={context}>
            { render(*active_route) }
        </ContextProvider<AppContext>>
    }
}
