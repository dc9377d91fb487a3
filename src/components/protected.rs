use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::layout::loading_screen;
use crate::api::types::User;
use crate::app::use_app;
use crate::route::Route;

#[derive(Clone, PartialEq)]
enum Gate {
    Checking,
    Allowed(User),
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

/// Shows its children only to a signed-in user who finished onboarding, and
/// hands them the current [`User`] as context.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let app = use_app();
    let gate = use_state(|| Gate::Checking);

    {
        let gate = gate.clone();
        let app = app.clone();
        use_effect_with_deps(
            move |_| {
                if !app.session().is_signed_in() {
                    app.navigate.emit(Route::SignIn);
                } else {
                    spawn_local(async move {
                        match app.api.current_user().await {
                            Ok(user) if user.onboarding_complete => gate.set(Gate::Allowed(user)),
                            Ok(_) => app.navigate.emit(Route::Onboarding),
                            Err(err) => {
                                log::warn!("session check failed: {err}");
                                app.session().clear();
                                app.navigate.emit(Route::SignIn);
                            }
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    match &*gate {
        Gate::Checking => loading_screen(),
        Gate::Allowed(user) => html! {
            <ContextProvider<User> context={user.clone()}>
                { for props.children.iter() }
            </ContextProvider<User>>
        },
    }
}
