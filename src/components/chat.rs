use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::advice::{
    AdviceLine, ChatMessage, Role, ADVISOR_FALLBACK, ADVISOR_GREETING, ADVISOR_QUICK_QUESTIONS, CHATBOT_FALLBACK,
    CHATBOT_GREETING, CHATBOT_QUICK_QUESTIONS,
};
use crate::api::types::User;
use crate::app::use_app;

/// Which backend a chat panel talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatMode {
    /// Personalised advice grounded in the user's own data.
    Advisor,
    /// General finance questions.
    Chatbot,
}

impl ChatMode {
    fn greeting(self) -> &'static str {
        match self {
            ChatMode::Advisor => ADVISOR_GREETING,
            ChatMode::Chatbot => CHATBOT_GREETING,
        }
    }

    fn quick_questions(self) -> &'static [&'static str] {
        match self {
            ChatMode::Advisor => &ADVISOR_QUICK_QUESTIONS,
            ChatMode::Chatbot => &CHATBOT_QUICK_QUESTIONS,
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            ChatMode::Advisor => "Ask me anything about your finances...",
            ChatMode::Chatbot => "Ask me anything about finance...",
        }
    }

    fn failure(self, message: &str) -> String {
        match self {
            ChatMode::Advisor => format!("Error: {message}"),
            ChatMode::Chatbot => format!("Error: {message}. Please try again later."),
        }
    }

    fn opening(self) -> Vec<ChatMessage> {
        vec![ChatMessage::assistant(self.greeting())]
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub mode: ChatMode,
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let app = use_app();
    let user = use_context::<User>().unwrap_or_default();
    let mode = props.mode;

    let messages = use_state(|| mode.opening());
    let input = use_state(String::new);
    let loading = use_state(|| false);

    let ask = {
        let messages = messages.clone();
        let input = input.clone();
        let loading = loading.clone();
        let app = app.clone();
        let user_id = app.session().user_id().unwrap_or(user.id);
        Callback::from(move |question: String| {
            let question = question.trim().to_string();
            if question.is_empty() || *loading {
                return;
            }

            let mut transcript = (*messages).clone();
            transcript.push(ChatMessage::user(&question));
            messages.set(transcript.clone());
            input.set(String::new());
            loading.set(true);

            let messages = messages.clone();
            let loading = loading.clone();
            let api = app.api.clone();
            let user_id = user_id.clone();
            spawn_local(async move {
                let reply = match mode {
                    ChatMode::Advisor => api.advise(&user_id, &question).await.map(|reply| {
                        if reply.explanations.is_empty() && reply.suggested_actions.is_empty() {
                            ChatMessage::assistant(ADVISOR_FALLBACK)
                        } else {
                            ChatMessage::advice(&reply)
                        }
                    }),
                    ChatMode::Chatbot => api.chat(&user_id, &question).await.map(|reply| {
                        if reply.reply.trim().is_empty() {
                            ChatMessage::assistant(CHATBOT_FALLBACK)
                        } else {
                            ChatMessage::assistant(&reply.reply)
                        }
                    }),
                };
                let reply = reply.unwrap_or_else(|err| {
                    log::warn!("{mode:?} request failed: {err}");
                    ChatMessage::assistant(&mode.failure(&err.message))
                });
                transcript.push(reply);
                messages.set(transcript);
                loading.set(false);
            });
        })
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            input.set(value);
        })
    };

    let on_submit = {
        let ask = ask.clone();
        let input = input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            ask.emit((*input).clone());
        })
    };

    let on_clear = {
        let messages = messages.clone();
        Callback::from(move |_| messages.set(mode.opening()))
    };

    html! {
        <div class="flex flex-col h-[calc(100vh-10rem)] bg-[#242424] rounded-xl border border-gray-800">
            <div class="flex items-center justify-between px-6 py-4 border-b border-gray-800">
                <div class="flex flex-wrap gap-2">
                    { for mode.quick_questions().iter().map(|q| {
                        let ask = ask.clone();
                        let question = q.to_string();
                        html! {
                            <button type="button" disabled={*loading}
                                class="px-3 py-1 text-xs rounded-full bg-gray-800 text-gray-300 hover:bg-gray-700 disabled:opacity-50"
                                onclick={Callback::from(move |_| ask.emit(question.clone()))}>
                                { *q }
                            </button>
                        }
                    }) }
                </div>
                <button type="button" onclick={on_clear} class="text-sm text-gray-400 hover:text-white whitespace-nowrap ml-4">
                    {"Clear Chat"}
                </button>
            </div>

            <div class="flex-1 overflow-y-auto p-6 space-y-4">
                { for messages.iter().map(message_bubble) }
                if *loading {
                    <div class="flex justify-start">
                        <div class="bg-gray-800 rounded-2xl px-4 py-3 flex gap-1">
                            <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce"></span>
                            <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce"></span>
                            <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce"></span>
                        </div>
                    </div>
                }
            </div>

            <form onsubmit={on_submit} class="flex gap-3 p-4 border-t border-gray-800">
                <input type="text" value={(*input).clone()} oninput={on_input} disabled={*loading}
                    placeholder={mode.placeholder()}
                    class="flex-1 px-4 py-3 bg-[#1a1a1a] border border-gray-700 rounded-lg text-white focus:outline-none focus:border-blue-500" />
                <button type="submit" disabled={*loading || input.trim().is_empty()}
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium disabled:opacity-50">
                    { if *loading { "..." } else { "Send" } }
                </button>
            </form>
        </div>
    }
}

fn message_bubble(message: &ChatMessage) -> Html {
    let (row, bubble) = match message.role {
        Role::User => ("flex justify-end", "max-w-[80%] bg-blue-600 text-white rounded-2xl px-4 py-3"),
        Role::Assistant => ("flex justify-start", "max-w-[80%] bg-gray-800 text-gray-100 rounded-2xl px-4 py-3"),
    };
    html! {
        <div class={row}>
            <div class={bubble}>
                { for message.lines.iter().map(advice_line) }
            </div>
        </div>
    }
}

fn advice_line(line: &AdviceLine) -> Html {
    match line {
        AdviceLine::Heading(text) => html! { <h3 class="font-bold text-base mt-2 mb-1">{ text.clone() }</h3> },
        AdviceLine::Action { index, title } => html! {
            <p class="font-semibold mt-2">{ format!("{index}. {title}") }</p>
        },
        AdviceLine::Detail { label, text } => html! {
            <p class="ml-4 text-sm"><span class="font-semibold">{ format!("{label}: ") }</span>{ text.clone() }</p>
        },
        AdviceLine::Bullet(text) => html! { <p class="ml-2 text-sm">{ format!("• {text}") }</p> },
        AdviceLine::Blank => html! { <div class="h-2"></div> },
        AdviceLine::Plain(text) => html! { <p class="text-sm whitespace-pre-wrap">{ text.clone() }</p> },
    }
}
