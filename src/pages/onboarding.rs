use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::{sleep, use_app};
use crate::components::layout::error_banner;
use crate::onboarding::{progress_percent, Answers, Question, QuestionKind, QUESTIONS};
use crate::route::Route;

#[derive(Properties, PartialEq)]
struct QuestionViewProps {
    question: Question,
    answer: Option<String>,
    on_answer: Callback<String>,
}

#[function_component(QuestionView)]
fn question_view(props: &QuestionViewProps) -> Html {
    let question = props.question;
    match question.kind {
        QuestionKind::Select(options) => html! {
            <div class="space-y-3">
                { for options.iter().map(|option| {
                    let on_answer = props.on_answer.clone();
                    let value = option.to_string();
                    let checked = props.answer.as_deref() == Some(*option);
                    html! {
                        <label class="flex items-center cursor-pointer">
                            <input type="radio" name={format!("question-{}", question.id)} value={*option} {checked}
                                onchange={Callback::from(move |_| on_answer.emit(value.clone()))}
                                class="h-4 w-4 accent-[#6246e9]" />
                            <span class="ml-3 text-sm text-[#c4c4c4]">{ *option }</span>
                        </label>
                    }
                }) }
            </div>
        },
        QuestionKind::Range { min, max, step, .. } => {
            let value = props.answer.clone().unwrap_or_else(|| min.to_string());
            let on_answer = props.on_answer.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                on_answer.emit(e.target_unchecked_into::<HtmlInputElement>().value());
            });
            html! {
                <div class="space-y-4">
                    <input type="range" min={min.to_string()} max={max.to_string()} step={step.to_string()}
                        value={value.clone()} {oninput}
                        class="w-full h-2 rounded-lg appearance-none cursor-pointer bg-[#120b25]" />
                    <div class="text-center">
                        <span class="text-2xl font-bold text-[#6246e9]">{ question.display_value(&value) }</span>
                    </div>
                </div>
            }
        }
    }
}

/// Step two of sign-up, also shown to existing accounts that never finished
/// the survey.
#[function_component(OnboardingPage)]
pub fn onboarding_page() -> Html {
    let app = use_app();
    let index = use_state(|| 0usize);
    let answers = use_state(|| {
        let mut answers = Answers::default();
        answers.ensure_default(&QUESTIONS[0]);
        answers
    });
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let question = QUESTIONS[*index];
    let is_last = *index + 1 == QUESTIONS.len();

    let on_answer = {
        let answers = answers.clone();
        Callback::from(move |value: String| {
            let mut next = (*answers).clone();
            next.set(question.id, value);
            answers.set(next);
        })
    };

    let go_to = {
        let index = index.clone();
        let answers = answers.clone();
        Callback::from(move |target: usize| {
            if let Some(question) = QUESTIONS.get(target) {
                let mut next = (*answers).clone();
                next.ensure_default(question);
                answers.set(next);
                index.set(target);
            }
        })
    };
    let on_previous = {
        let go_to = go_to.clone();
        let current = *index;
        Callback::from(move |_| go_to.emit(current.saturating_sub(1)))
    };
    let on_next = {
        let current = *index;
        Callback::from(move |_| go_to.emit(current + 1))
    };

    let on_submit = {
        let answers = answers.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_| {
            let payload = answers.to_payload();
            let session = app.session();
            error.set(None);

            if session.has_pending_signup() {
                session.set_pending_answers(payload);
                app.navigate.emit(Route::UploadCsv);
                return;
            }

            let app = app.clone();
            let loading = loading.clone();
            let error = error.clone();
            loading.set(true);
            spawn_local(async move {
                if app.session().user_id().is_none() {
                    error.set(Some("Please sign up first".to_string()));
                    loading.set(false);
                    sleep(2000).await;
                    app.navigate.emit(Route::SignUp);
                    return;
                }
                match app.api.submit_answers(&payload).await {
                    Ok(resp) if resp.success => app.navigate.emit(Route::UploadCsv),
                    Ok(resp) => error.set(Some(resp.message)),
                    Err(err) => error.set(Some(err.message)),
                }
                loading.set(false);
            });
        })
    };

    let percent = progress_percent(*index);
    let answered = answers.is_answered(question.id);

    html! {
        <div class="min-h-screen py-12 px-4 sm:px-6 lg:px-8 bg-[#120b25]">
            <div class="max-w-3xl mx-auto">
                <div class="shadow rounded-lg bg-[#221e2f] px-4 py-5 sm:p-6">
                    <div class="mb-8">
                        <div class="flex justify-between text-sm mb-2 text-[#c4c4c4]">
                            <span>{ format!("Question {} of {}", *index + 1, QUESTIONS.len()) }</span>
                            <span>{ format!("{percent}% Complete") }</span>
                        </div>
                        <div class="w-full rounded-full h-2 bg-[#120b25]">
                            <div class="h-2 rounded-full transition-all duration-300 bg-[#6246e9]" style={format!("width: {percent}%;")}></div>
                        </div>
                    </div>

                    <div class="mb-8">
                        <h2 class="text-xl font-semibold mb-6 text-white">{ question.text }</h2>
                        <QuestionView {question} answer={answers.get(question.id).map(str::to_string)} {on_answer} />
                    </div>

                    <div class="mb-6">{ error_banner(&error) }</div>

                    <div class="flex justify-between">
                        <button type="button" onclick={on_previous} disabled={*index == 0}
                            class="px-4 py-2 rounded-md text-sm font-medium bg-[#120b25] text-[#c4c4c4] disabled:opacity-50">
                            {"Previous"}
                        </button>
                        if is_last {
                            <button type="button" onclick={on_submit} disabled={*loading || !answers.is_complete()}
                                class="px-4 py-2 rounded-md text-sm font-medium bg-[#6246e9] text-white disabled:opacity-50">
                                { if *loading { "Submitting..." } else { "Complete" } }
                            </button>
                        } else {
                            <button type="button" onclick={on_next} disabled={!answered}
                                class="px-4 py-2 rounded-md text-sm font-medium bg-[#6246e9] text-white disabled:opacity-50">
                                {"Next"}
                            </button>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
