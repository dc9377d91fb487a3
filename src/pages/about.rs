use yew::prelude::*;

use crate::components::marketing::{MarketingPage, RouteLink};
use crate::route::Route;

const PROJECT: [(&str, &str); 4] = [
    (
        "AI-Powered Analytics",
        "Models analyze transaction patterns, predict expenses, and generate personalized recommendations.",
    ),
    (
        "Bank-Level Security",
        "Industry-standard encryption and secure authentication keep your data private.",
    ),
    (
        "CSV Import System",
        "Transactions are validated, categorized, and organized for comprehensive tracking without manual entry.",
    ),
    (
        "Dual AI System",
        "A Finance Advisor that analyzes your real transaction data, and a chatbot that explains financial concepts \
         in natural language.",
    ),
];

const VALUES: [(&str, &str, &str); 3] = [
    (
        "🔐",
        "Privacy First",
        "Your financial data is yours. We protect your information and never share your data with third parties.",
    ),
    (
        "✨",
        "Simplicity",
        "Complex financial concepts made simple and actionable for everyone. No financial degree required.",
    ),
    (
        "👨‍👩‍👧",
        "Family Focused",
        "Built for families who want to secure their financial future together and make informed decisions as a unit.",
    ),
];

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <MarketingPage>
            <section class="max-w-5xl mx-auto px-6 pt-20 pb-12 text-center">
                <h1 class="text-4xl sm:text-5xl font-semibold mb-6">{"About FamFinity"}</h1>
                <p class="text-lg text-[#c4c4c4]">
                    {"We're on a mission to help families take control of their financial future through intelligent \
                      insights and personalized guidance."}
                </p>
            </section>

            <section class="max-w-5xl mx-auto px-6 py-12">
                <h2 class="text-3xl font-semibold mb-4">{"Our Mission"}</h2>
                <p class="text-[#c4c4c4]">
                    {"Financial planning shouldn't be complicated or intimidating. FamFinity makes it easy for families to \
                      understand their spending, set realistic goals, and make informed decisions about their financial future."}
                </p>
            </section>

            <section class="max-w-7xl mx-auto px-6 py-12">
                <h2 class="text-3xl font-semibold mb-8">{"About The Project"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    { for PROJECT.iter().map(|(title, text)| html! {
                        <div class="rounded-2xl bg-[#221e2f] p-6">
                            <h3 class="text-lg font-medium mb-2">{ *title }</h3>
                            <p class="text-sm text-[#c4c4c4]">{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-6 py-12">
                <h2 class="text-3xl font-semibold mb-8">{"Our Values"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    { for VALUES.iter().map(|(icon, title, text)| html! {
                        <div class="rounded-2xl bg-[#221e2f] p-6">
                            <div class="text-3xl mb-3">{ *icon }</div>
                            <h3 class="text-lg font-medium mb-2">{ *title }</h3>
                            <p class="text-sm text-[#c4c4c4]">{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="max-w-4xl mx-auto px-6 py-16 text-center">
                <h2 class="text-3xl font-semibold mb-4">{"Ready to Get Started?"}</h2>
                <RouteLink to={Route::SignUp} class={classes!("inline-block", "px-8", "py-4", "rounded-full", "bg-[#6246e9]", "font-semibold")}>
                    {"Start Your Journey"}
                </RouteLink>
            </section>
        </MarketingPage>
    }
}
