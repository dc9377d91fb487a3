use yew::prelude::*;

use crate::components::chat::{ChatMode, ChatPanel};
use crate::components::layout::AppLayout;

const ABOUT: [&str; 4] = [
    "Powered by Google Gemini AI for general knowledge",
    "Ask questions about finance concepts, investment strategies, and more",
    "Get real-time information from the web",
    "This chatbot doesn't access your personal financial data (use AI Finance Advisor for personalized advice)",
];

#[function_component(ChatbotPage)]
pub fn chatbot_page() -> Html {
    html! {
        <AppLayout>
            <div class="max-w-4xl mx-auto space-y-6">
                <div class="flex items-center gap-3">
                    <div class="w-12 h-12 bg-blue-600 rounded-full flex items-center justify-center text-2xl">{"💬"}</div>
                    <div>
                        <h2 class="text-2xl font-bold text-white">{"AI Chatbot"}</h2>
                        <p class="text-gray-400">{"Ask anything about finance and the world"}</p>
                    </div>
                </div>
                <ChatPanel mode={ChatMode::Chatbot} />
                <div class="bg-blue-900/20 border border-blue-800 rounded-xl p-6">
                    <h3 class="font-semibold text-blue-300 mb-2">{"ℹ️ About this Chatbot"}</h3>
                    <ul class="text-sm text-blue-200/80 space-y-2">
                        { for ABOUT.iter().map(|line| html! { <li>{ format!("• {line}") }</li> }) }
                    </ul>
                </div>
            </div>
        </AppLayout>
    }
}
