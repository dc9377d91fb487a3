use yew::prelude::*;

use super::icons::*;
use crate::api::types::User;
use crate::app::use_app;
use crate::locale;
use crate::route::Route;

struct NavItem {
    route: Route,
    icon: fn() -> Html,
}

const NAV_ITEMS: [NavItem; 8] = [
    NavItem { route: Route::Dashboard, icon: icon_layout_grid },
    NavItem { route: Route::Budgets, icon: icon_wallet },
    NavItem { route: Route::Expenses, icon: icon_credit_card },
    NavItem { route: Route::Goals, icon: icon_target },
    NavItem { route: Route::Advisor, icon: icon_sparkles },
    NavItem { route: Route::Chatbot, icon: icon_message },
    NavItem { route: Route::Investments, icon: icon_trending_up },
    NavItem { route: Route::Profile, icon: icon_user },
];

#[derive(Properties, PartialEq)]
pub struct AppLayoutProps {
    pub children: Children,
}

/// Sidebar and header around every signed-in page.
#[function_component(AppLayout)]
pub fn app_layout(props: &AppLayoutProps) -> Html {
    let collapsed = use_state(|| false);
    let on_toggle = {
        let collapsed = collapsed.clone();
        Callback::from(move |_| collapsed.set(!*collapsed))
    };

    html! {
        <div class="flex h-screen bg-[#1a1a1a] overflow-hidden w-full">
            <Sidebar collapsed={*collapsed} on_toggle={on_toggle} />
            <div class="flex-1 flex flex-col overflow-hidden">
                <Header />
                <main class="flex-1 overflow-y-auto">
                    <div class="p-4 sm:p-6">
                        { for props.children.iter() }
                    </div>
                </main>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    collapsed: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let app = use_app();
    let user = use_context::<User>().unwrap_or_default();

    let on_logout = {
        let app = app.clone();
        Callback::from(move |_| {
            app.session().clear();
            app.navigate.emit(Route::SignIn);
        })
    };

    let width = if props.collapsed { "w-16 sm:w-20" } else { "w-56 sm:w-64" };
    let initial = user
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "U".to_string());

    html! {
        <div class={classes!(width, "bg-[#1f1f1f]", "text-white", "flex", "flex-col", "transition-all", "border-r", "border-gray-800", "flex-shrink-0")}>
            <div class="flex items-center justify-between p-6 border-b border-gray-800">
                if !props.collapsed {
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">{"💎"}</span>
                        <span class="text-xl font-bold">{"FamFinity"}</span>
                    </div>
                }
                <button onclick={props.on_toggle.clone()} class="p-2 rounded-lg hover:bg-gray-800 text-gray-400 hover:text-white">
                    { if props.collapsed { "→" } else { "←" } }
                </button>
            </div>

            <nav class="flex-1 overflow-y-auto py-4 px-3 space-y-1">
                { for NAV_ITEMS.iter().map(|item| {
                    let class_name = if item.route == app.route {
                        "flex items-center gap-3 px-4 py-3 rounded-lg w-full bg-blue-600 text-white"
                    } else {
                        "flex items-center gap-3 px-4 py-3 rounded-lg w-full text-gray-300 hover:bg-gray-800"
                    };
                    let navigate = app.navigate.clone();
                    let route = item.route;
                    html! {
                        <button type="button" class={class_name} title={route.title()} onclick={Callback::from(move |_| navigate.emit(route))}>
                            <span class="shrink-0">{ (item.icon)() }</span>
                            if !props.collapsed {
                                <span class="font-medium text-sm truncate">{ route.title() }</span>
                            }
                        </button>
                    }
                }) }
            </nav>

            <div class="p-4 border-t border-gray-800">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-full bg-gray-700 flex items-center justify-center font-bold">{ initial }</div>
                    if !props.collapsed {
                        <div class="flex-1 min-w-0">
                            <p class="text-sm font-medium truncate">{ if user.name.is_empty() { "User" } else { user.name.as_str() } }</p>
                            <p class="text-xs text-gray-400 truncate">{ &user.email }</p>
                        </div>
                    }
                </div>
                if !props.collapsed {
                    <button onclick={on_logout} class="mt-3 w-full flex items-center justify-center gap-2 px-3 py-2 text-sm bg-gray-800 hover:bg-gray-700 rounded-lg">
                        { icon_log_out() }
                        <span>{"Logout"}</span>
                    </button>
                }
            </div>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    let app = use_app();
    let user = use_context::<User>().unwrap_or_default();
    let name = if user.name.is_empty() { "User".to_string() } else { user.name.clone() };

    html! {
        <header class="border-b border-gray-800 px-4 sm:px-6 py-4">
            <div class="flex items-center justify-between flex-wrap gap-4">
                <div class="min-w-0 flex-1">
                    <h1 class="text-xl sm:text-2xl font-bold text-white truncate">{ app.route.title() }</h1>
                    <p class="text-sm text-gray-400 mt-1">{ format!("Welcome back, {}", name) }</p>
                </div>
                <div class="text-xs sm:text-sm text-gray-400 whitespace-nowrap">
                    { locale::long_date(locale::today()) }
                </div>
            </div>
        </header>
    }
}

pub fn loading_screen() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-[#120b25]">
            <div class="text-center">
                <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-indigo-600 mx-auto"></div>
                <p class="mt-4 text-gray-400">{"Loading..."}</p>
            </div>
        </div>
    }
}

pub fn error_banner(message: &Option<String>) -> Html {
    match message {
        Some(msg) => html! {
            <div class="rounded-lg p-4 bg-red-900/30 border border-red-800 text-sm text-red-300">{ msg.clone() }</div>
        },
        None => html! {},
    }
}

pub fn success_banner(message: &Option<String>) -> Html {
    match message {
        Some(msg) => html! {
            <div class="rounded-lg p-4 bg-green-900/30 border border-green-800 text-sm text-green-300">{ msg.clone() }</div>
        },
        None => html! {},
    }
}
