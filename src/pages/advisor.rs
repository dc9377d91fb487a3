use yew::prelude::*;

use crate::components::chat::{ChatMode, ChatPanel};
use crate::components::layout::AppLayout;

const HOW_IT_WORKS: [&str; 4] = [
    "The AI analyzes your transaction history, spending patterns, and financial goals",
    "Responses are personalized based on YOUR specific financial data",
    "All your financial data stays secure and private on our servers",
    "Get actionable insights to improve your financial health",
];

#[function_component(AdvisorPage)]
pub fn advisor_page() -> Html {
    html! {
        <AppLayout>
            <div class="max-w-4xl mx-auto space-y-6">
                <div class="flex items-center gap-3">
                    <div class="w-12 h-12 bg-purple-600 rounded-full flex items-center justify-center text-2xl">{"🤖"}</div>
                    <div>
                        <h2 class="text-2xl font-bold text-white">{"AI Finance Advisor"}</h2>
                        <p class="text-gray-400">{"Personalized financial advice based on your data"}</p>
                    </div>
                </div>
                <ChatPanel mode={ChatMode::Advisor} />
                <div class="bg-purple-900/20 border border-purple-800 rounded-xl p-6">
                    <h3 class="font-semibold text-purple-300 mb-2">{"How it works"}</h3>
                    <ul class="text-sm text-purple-200/80 space-y-2">
                        { for HOW_IT_WORKS.iter().map(|line| html! { <li>{ format!("• {line}") }</li> }) }
                    </ul>
                </div>
            </div>
        </AppLayout>
    }
}
