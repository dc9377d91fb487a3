use yew::prelude::*;

use super::icons::icon_menu;
use crate::app::use_app;
use crate::route::Route;

const NAV_LINKS: [(Route, &str); 5] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Features, "Features"),
    (Route::Contact, "Contact"),
    (Route::SignIn, "Login"),
];

#[derive(Properties, PartialEq)]
pub struct RouteLinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// In-app link that goes through the router instead of reloading the page.
#[function_component(RouteLink)]
pub fn route_link(props: &RouteLinkProps) -> Html {
    let app = use_app();
    let to = props.to;
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        app.navigate.emit(to);
    });

    html! {
        <a href={to.path()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[function_component(PublicNav)]
pub fn public_nav() -> Html {
    let menu_open = use_state(|| false);
    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let links = |class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|(route, label)| html! {
                <RouteLink to={*route} class={classes!(class)}>{ *label }</RouteLink>
            })
            .collect()
    };

    html! {
        <nav class="w-full bg-[#120b25]/90 backdrop-blur border-b border-white/10 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 py-4 flex items-center justify-between">
                <RouteLink to={Route::Home} class={classes!("flex", "items-center", "gap-2")}>
                    <span class="text-2xl">{"💎"}</span>
                    <span class="text-xl font-medium text-white">{"FamFinity"}</span>
                </RouteLink>
                <div class="hidden md:flex items-center gap-8">
                    { links("text-white hover:text-white/80 font-medium transition-colors text-sm") }
                    <RouteLink to={Route::SignUp} class={classes!("px-5", "py-2", "rounded-full", "bg-[#6246e9]", "text-white", "text-sm", "font-medium")}>
                        {"Get Started"}
                    </RouteLink>
                </div>
                <button type="button" class="md:hidden text-white p-2" onclick={on_toggle}>{ icon_menu() }</button>
            </div>
            if *menu_open {
                <div class="md:hidden flex flex-col gap-4 px-6 pb-6">
                    { links("text-white text-base") }
                </div>
            }
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-[#0d0819] border-t border-white/10 mt-24">
            <div class="max-w-7xl mx-auto px-6 py-12 grid grid-cols-1 md:grid-cols-3 gap-10">
                <div>
                    <div class="flex items-center gap-2 mb-4">
                        <span class="text-2xl">{"💎"}</span>
                        <span class="text-2xl font-medium text-white">{"FamFinity"}</span>
                    </div>
                    <p class="text-sm text-[#c4c4c4]">{"Smarter money for every family."}</p>
                </div>
                <div>
                    <h4 class="font-semibold mb-4 text-white">{"Product"}</h4>
                    <ul class="space-y-2 text-sm text-[#c4c4c4]">
                        <li><RouteLink to={Route::Features}>{"Features"}</RouteLink></li>
                        <li><RouteLink to={Route::Contact}>{"Bank connection"}</RouteLink></li>
                    </ul>
                </div>
                <div>
                    <h4 class="font-semibold mb-4 text-white">{"Company"}</h4>
                    <ul class="space-y-2 text-sm text-[#c4c4c4]">
                        <li><RouteLink to={Route::About}>{"About us"}</RouteLink></li>
                        <li><RouteLink to={Route::Contact}>{"Contact Us"}</RouteLink></li>
                    </ul>
                </div>
            </div>
            <div class="border-t border-white/10 py-6 text-center text-xs text-[#c4c4c4]">
                {"© FamFinity. All rights reserved."}
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct MarketingPageProps {
    pub children: Children,
}

/// Public nav bar and footer around a marketing page.
#[function_component(MarketingPage)]
pub fn marketing_page(props: &MarketingPageProps) -> Html {
    html! {
        <div class="min-h-screen bg-[#120b25] text-white">
            <PublicNav />
            { for props.children.iter() }
            <Footer />
        </div>
    }
}
