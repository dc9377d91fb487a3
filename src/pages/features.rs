use yew::prelude::*;

use crate::components::marketing::{MarketingPage, RouteLink};
use crate::route::Route;

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "📊",
        "Smart Analytics",
        "Get detailed insights into your spending patterns and financial health with analytics that identify \
         trends, spot opportunities to save, and recommend what to do next.",
    ),
    (
        "🎯",
        "Goal Setting",
        "Set and track financial goals for your family's future, from a down payment to an emergency fund, \
         with personalized suggestions to reach them.",
    ),
    (
        "📁",
        "Easy Import",
        "Import your bank statements with a simple CSV upload. Transactions are validated and organized so you \
         see the complete picture without manual entry.",
    ),
    (
        "📝",
        "Smart Onboarding",
        "A short questionnaire learns about your financial situation, goals, and preferences to tailor advice \
         and investment recommendations to your family.",
    ),
    (
        "💬",
        "AI Chat Assistant",
        "Ask anything about budgeting, saving, investing, or financial planning and receive guidance instantly.",
    ),
    (
        "🔒",
        "Bank-Level Security",
        "Your financial data is protected with industry-standard encryption and secure authentication.",
    ),
];

#[function_component(FeaturesPage)]
pub fn features_page() -> Html {
    html! {
        <MarketingPage>
            <section class="max-w-7xl mx-auto px-6 pt-20 pb-12 text-center">
                <h1 class="text-4xl sm:text-5xl font-semibold mb-6">{"Powerful Features for Your Family"}</h1>
                <p class="text-lg text-[#c4c4c4] max-w-3xl mx-auto mb-8">
                    {"Discover what makes FamFinity the perfect financial companion for your family. Everything you need \
                      to get your money into shape, from expense tracking and smart budgeting to goal setting and \
                      investment insights."}
                </p>
                <div class="flex justify-center gap-4 flex-wrap">
                    <RouteLink to={Route::SignUp} class={classes!("px-6", "py-3", "rounded-full", "bg-[#c2f52f]", "text-[#120b25]", "font-semibold")}>
                        {"Get Started"}
                    </RouteLink>
                    <RouteLink to={Route::About} class={classes!("px-6", "py-3", "rounded-full", "border", "border-white/30")}>
                        {"Learn More"}
                    </RouteLink>
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-6 py-12 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for FEATURES.iter().map(|(icon, title, text)| html! {
                    <div class="rounded-2xl bg-[#221e2f] p-6">
                        <div class="text-3xl mb-4">{ *icon }</div>
                        <h3 class="text-xl font-medium mb-3">{ *title }</h3>
                        <p class="text-sm text-[#c4c4c4]">{ *text }</p>
                    </div>
                }) }
            </section>

            <section class="max-w-5xl mx-auto px-6 py-16">
                <h2 class="text-3xl font-semibold mb-6">{"Dual-Intelligence, Smarter Finance"}</h2>
                <p class="text-[#c4c4c4] mb-4">
                    {"The Finance Advisor analyzes your real transaction data to provide actionable insights, while the \
                      Gemini Chatbot explains financial concepts and answers any questions you have."}
                </p>
                <p class="text-[#c4c4c4]">
                    {"Consolidate budgets across accounts and cards, and set different budgets for specific categories \
                      that matter most to you."}
                </p>
            </section>

            <section class="max-w-4xl mx-auto px-6 py-16 text-center">
                <h2 class="text-3xl font-semibold mb-4">{"Ready to get your money into shape?"}</h2>
                <p class="text-[#c4c4c4] mb-8">
                    {"Join thousands of families who have transformed their financial management with FamFinity."}
                </p>
                <RouteLink to={Route::SignUp} class={classes!("inline-block", "px-8", "py-4", "rounded-full", "bg-[#6246e9]", "font-semibold")}>
                    {"Get Started Free"}
                </RouteLink>
            </section>
        </MarketingPage>
    }
}
