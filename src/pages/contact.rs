use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::use_app;
use crate::components::marketing::MarketingPage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceStatus {
    Checking,
    Online,
    Offline,
}

impl ServiceStatus {
    /// Interprets the `status` field of the backend health check.
    pub fn from_health(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "ok" | "healthy" | "up" => ServiceStatus::Online,
            _ => ServiceStatus::Offline,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ServiceStatus::Checking => "Checking service status...",
            ServiceStatus::Online => "All systems operational",
            ServiceStatus::Offline => "Service is currently unavailable",
        }
    }

    fn dot(self) -> &'static str {
        match self {
            ServiceStatus::Checking => "bg-gray-400",
            ServiceStatus::Online => "bg-green-400",
            ServiceStatus::Offline => "bg-red-400",
        }
    }
}

const CHANNELS: [(&str, &str, &str); 3] = [
    (
        "✉️",
        "Email",
        "support@famfinity.com. Drop us an email anytime and our team will get back to you promptly.",
    ),
    (
        "⏱️",
        "Response Time",
        "We typically respond within 24 hours during business days. For urgent matters, please mention \"URGENT\" \
         in your subject line.",
    ),
    (
        "💬",
        "Live Chat",
        "Available Monday-Friday, 9AM-6PM EST during business hours.",
    ),
];

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let app = use_app();
    let status = use_state(|| ServiceStatus::Checking);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let submitted = use_state(|| false);

    {
        let api = app.api.clone();
        let status = status.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.health().await {
                        Ok(health) => status.set(ServiceStatus::from_health(&health.status)),
                        Err(err) => {
                            log::warn!("health check failed: {err}");
                            status.set(ServiceStatus::Offline);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| state.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    // Messages are not sent anywhere yet.
    let on_submit = {
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submitted.set(true);
        })
    };

    let input_class = "w-full px-4 py-3 rounded-lg bg-[#120b25] border border-[#221e2f] text-white focus:border-[#6246e9] focus:outline-none";

    html! {
        <MarketingPage>
            <section class="max-w-5xl mx-auto px-6 pt-20 pb-12 text-center">
                <h1 class="text-4xl sm:text-5xl font-semibold mb-6">{"Contact Us"}</h1>
                <p class="text-lg text-[#c4c4c4]">
                    {"Have questions about FamFinity? Need help with your account? Want to share feedback? We'd love to \
                      hear from you."}
                </p>
                <div class="mt-6 inline-flex items-center gap-2 text-sm text-[#c4c4c4]">
                    <span class={classes!("w-2", "h-2", "rounded-full", status.dot())}></span>
                    { status.label() }
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-6 py-12 grid grid-cols-1 lg:grid-cols-2 gap-10">
                <div>
                    <h2 class="text-3xl font-semibold mb-8">{"Get in Touch"}</h2>
                    <div class="space-y-6">
                        { for CHANNELS.iter().map(|(icon, title, text)| html! {
                            <div class="flex gap-4">
                                <span class="text-2xl">{ *icon }</span>
                                <div>
                                    <h3 class="font-medium mb-1">{ *title }</h3>
                                    <p class="text-sm text-[#c4c4c4]">{ *text }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="rounded-2xl bg-[#221e2f] p-8">
                    <h2 class="text-2xl font-semibold mb-6">{"Send us a Message"}</h2>
                    if *submitted {
                        <div class="text-center py-8">
                            <div class="text-4xl mb-4">{"✅"}</div>
                            <p class="text-[#c4c4c4]">
                                {"Thank you for your message. We've received it and our team will review and respond within 24 hours."}
                            </p>
                        </div>
                    } else {
                        <form onsubmit={on_submit} class="space-y-5">
                            <div>
                                <label class="block text-sm mb-2">{"Name"}</label>
                                <input type="text" required=true placeholder="Your name" value={(*name).clone()} oninput={bind(&name)} class={input_class} />
                            </div>
                            <div>
                                <label class="block text-sm mb-2">{"Email"}</label>
                                <input type="email" required=true placeholder="your.email@example.com" value={(*email).clone()} oninput={bind(&email)} class={input_class} />
                            </div>
                            <div>
                                <label class="block text-sm mb-2">{"Message"}</label>
                                <textarea rows="6" required=true placeholder="Your message here..." value={(*message).clone()} oninput={bind(&message)} class={input_class} />
                            </div>
                            <button type="submit" class="w-full px-6 py-3 rounded-full bg-[#6246e9] font-semibold">{"Send Message"}</button>
                        </form>
                    }
                </div>
            </section>
        </MarketingPage>
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceStatus;

    #[test]
    fn test_health_status_words() {
        assert_eq!(ServiceStatus::from_health("healthy"), ServiceStatus::Online);
        assert_eq!(ServiceStatus::from_health(" OK "), ServiceStatus::Online);
        assert_eq!(ServiceStatus::from_health("degraded"), ServiceStatus::Offline);
        assert_eq!(ServiceStatus::from_health(""), ServiceStatus::Offline);
    }
}
