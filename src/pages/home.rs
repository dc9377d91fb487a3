use yew::prelude::*;

use crate::components::marketing::{MarketingPage, RouteLink};
use crate::route::Route;

struct Faq {
    question: &'static str,
    answer: &'static str,
}

const FAQS: [Faq; 6] = [
    Faq {
        question: "How to get your money into shape?",
        answer: "Follow these simple steps to take complete control of your family finances. Track your cash flow, \
                 understand your financial habits, and make your spending stress-free.",
    },
    Faq {
        question: "Why people use FamFinity?",
        answer: "Join thousands of families who have transformed their financial management with FamFinity. \
                 Our app helps you manage money on the go with smart insights and beautiful analytics.",
    },
    Faq {
        question: "What features does FamFinity offer?",
        answer: "FamFinity offers shared wallets, smart analytics, customization options, multiple currencies, \
                 alerts and reminders, and seamless sync across devices.",
    },
    Faq {
        question: "How do I get started with FamFinity?",
        answer: "Simply sign up for a free account, connect your bank accounts or import CSV files, and start \
                 tracking your expenses. Get personalized advice to reach your financial goals.",
    },
    Faq {
        question: "Is my financial data secure?",
        answer: "Yes! Your data is encrypted and protected with the highest security measures. You can trust that \
                 your money information is in safe hands with our state-of-the-art technology.",
    },
    Faq {
        question: "Can I use FamFinity with my family?",
        answer: "Yes! FamFinity is designed for families. Shared wallets are popular among couples, families and \
                 roommates who handle their finances together.",
    },
];

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    (
        "📊",
        "Track your cash flow",
        "Connect your bank accounts and import CSV files from any financial institution for a complete overview \
         of your cash flow.",
    ),
    (
        "🧠",
        "Understand your financial habits",
        "Analyze your finances with simple, easy-to-understand charts. See exactly where your money goes and \
         where it comes from every month.",
    ),
    (
        "🛡️",
        "Make your spending stress-free",
        "Set smart budgets to help you not overspend in chosen categories and save systematically for your \
         family goals.",
    ),
];

const FEATURES: [(&str, &str); 3] = [
    ("Smart Analytics", "Smart recommendations tailored to your financial goals, built on your real spending patterns."),
    ("Sync and backup", "Your data stays synchronized and protected across all your devices."),
    ("Alerts and reminders", "Know when bills are due or when you're approaching budget limits."),
];

/// Opening an already open question closes it.
pub fn toggle_faq(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let open_faq = use_state(|| None::<usize>);

    html! {
        <MarketingPage>
            <section class="max-w-7xl mx-auto px-6 pt-20 pb-16 text-center">
                <h1 class="text-4xl sm:text-6xl font-semibold mb-6">{"Have perfect control over all your finances"}</h1>
                <p class="text-lg text-[#c4c4c4] max-w-3xl mx-auto mb-10">
                    {"Trusted by 50,000+ families worldwide to manage their finances and achieve their financial goals. \
                      Join a community of smart families who have taken control of their financial future."}
                </p>
                <RouteLink to={Route::SignUp} class={classes!("inline-block", "px-8", "py-4", "rounded-full", "bg-[#c2f52f]", "text-[#120b25]", "font-semibold")}>
                    {"Get Started"}
                </RouteLink>
            </section>

            <section class="max-w-7xl mx-auto px-6 py-16">
                <p class="text-sm text-[#c2f52f] uppercase tracking-wide mb-2">{"FAMFinity Finance"}</p>
                <h2 class="text-3xl font-semibold mb-10">{"How to get your money into shape?"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    { for HIGHLIGHTS.iter().map(|(icon, title, text)| html! {
                        <div class="rounded-2xl bg-[#221e2f] p-6">
                            <div class="text-3xl mb-4">{ *icon }</div>
                            <h3 class="text-xl font-medium mb-3">{ *title }</h3>
                            <p class="text-sm text-[#c4c4c4]">{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-6 py-16 grid grid-cols-1 lg:grid-cols-2 gap-10 items-center">
                <div>
                    <h2 class="text-3xl font-semibold mb-6">{"Dual-Intelligence, Smarter Finance"}</h2>
                    <p class="text-[#c4c4c4] mb-6">
                        {"Our Finance Assistant analyzes your real transaction data to provide actionable insights based on your \
                          actual spending. The Gemini Chatbot explains financial concepts and answers any questions you have. \
                          You always get the right kind of help, whether you need data-driven analysis or conceptual explanations."}
                    </p>
                    <RouteLink to={Route::Features} class={classes!("inline-block", "px-6", "py-3", "rounded-full", "border", "border-white/30", "font-medium")}>
                        {"Explore Features"}
                    </RouteLink>
                </div>
                <div class="space-y-4">
                    { for FEATURES.iter().map(|(title, text)| html! {
                        <div class="rounded-2xl bg-[#221e2f] p-5">
                            <h3 class="font-medium mb-1">{ *title }</h3>
                            <p class="text-sm text-[#c4c4c4]">{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="max-w-4xl mx-auto px-6 py-16">
                <h2 class="text-3xl font-semibold text-center mb-3">{"Quick Answers to Your Financial Queries"}</h2>
                <p class="text-center text-[#c4c4c4] mb-10">
                    {"Our team of experienced financial advisors is here to provide personalized guidance and support."}
                </p>
                <div class="space-y-3">
                    { for FAQS.iter().enumerate().map(|(index, faq)| {
                        let expanded = *open_faq == Some(index);
                        let onclick = {
                            let open_faq = open_faq.clone();
                            Callback::from(move |_| open_faq.set(toggle_faq(*open_faq, index)))
                        };
                        html! {
                            <div class="rounded-xl bg-[#221e2f]">
                                <button type="button" {onclick} class="w-full flex justify-between items-center px-6 py-4 text-left">
                                    <span class="font-medium">{ faq.question }</span>
                                    <span class="text-[#c2f52f]">{ if expanded { "−" } else { "+" } }</span>
                                </button>
                                if expanded {
                                    <p class="px-6 pb-4 text-sm text-[#c4c4c4]">{ faq.answer }</p>
                                }
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section class="max-w-4xl mx-auto px-6 py-16 text-center">
                <h2 class="text-3xl font-semibold mb-4">{"Start Your Journey with FamFinity"}</h2>
                <p class="text-[#c4c4c4] mb-8">
                    {"Provide personalized guidance and support to help you make informed decisions about your finances."}
                </p>
                <RouteLink to={Route::SignUp} class={classes!("inline-block", "px-8", "py-4", "rounded-full", "bg-[#6246e9]", "font-semibold")}>
                    {"Get Started"}
                </RouteLink>
            </section>
        </MarketingPage>
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_faq;

    #[test]
    fn test_faq_accordion_keeps_one_open() {
        assert_eq!(toggle_faq(None, 2), Some(2));
        assert_eq!(toggle_faq(Some(2), 4), Some(4));
        assert_eq!(toggle_faq(Some(4), 4), None);
    }
}
