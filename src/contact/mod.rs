pub mod mailto;
pub mod validation;

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::utils::scroll;
use self::mailto::MailDraft;
use self::validation::{error_for, validate, ContactFields, Field, FieldError};

const PROJECT_TYPES: &[&str] = &[
    "Logo Animation",
    "Social Media Content",
    "Commercial Editing",
    "Motion Graphics",
    "Color Grading",
    "Audio Enhancement",
    "Other",
];

const BUDGET_RANGES: &[&str] = &[
    "Under $500",
    "$500 - $1,000",
    "$1,000 - $2,500",
    "$2,500+",
];

fn field_error_html(errors: &[FieldError], field: Field) -> Html {
    match error_for(errors, field) {
        Some(message) => html! { <div class="error-message">{message}</div> },
        None => html! {},
    }
}

fn field_class(errors: &[FieldError], field: Field) -> &'static str {
    if error_for(errors, field).is_some() {
        "error"
    } else {
        ""
    }
}

/// Contact section: the inquiry form with inline validation and the
/// mailto fallback. Fields are controlled state; submitting either opens a
/// pre-filled draft in the visitor's mail client or annotates every
/// violated rule and scrolls to the first one.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let project_type = use_state(String::new);
    let budget = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(Vec::<FieldError>::new);
    let show_success = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let project_type = project_type.clone();
        let budget = budget.clone();
        let message = message.clone();
        let errors = errors.clone();
        let show_success = show_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let fields = ContactFields {
                name: (*name).clone(),
                email: (*email).clone(),
                project_type: (*project_type).clone(),
                budget: (*budget).clone(),
                message: (*message).clone(),
            };
            // Prior annotations are replaced wholesale on every attempt.
            show_success.set(false);
            let found = validate(&fields);
            if found.is_empty() {
                let draft = MailDraft::project_inquiry(&fields);
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target(&draft.to_mailto_url(), "_blank");
                }
                log!("Opening email client to contact SS Edit Studio...");
                errors.set(Vec::new());
                show_success.set(true);
                name.set(String::new());
                email.set(String::new());
                project_type.set(String::new());
                budget.set(String::new());
                message.set(String::new());
                // Selects keep their DOM selection across re-renders, so
                // they are reset in place like the inputs' bound values.
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    for id in [Field::ProjectType.id(), Field::Budget.id()] {
                        if let Some(select) = document
                            .get_element_by_id(id)
                            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
                        {
                            select.set_value("");
                        }
                    }
                }
                scroll::scroll_to_element("contact-form");

                // Success notice auto-clears after 10 seconds; not
                // cancellable, a later submit simply shows it again.
                let show_success = show_success.clone();
                spawn_local(async move {
                    TimeoutFuture::new(10_000).await;
                    show_success.set(false);
                });
            } else {
                if let Some(first) = found.first() {
                    scroll::scroll_to_element(first.field.id());
                }
                errors.set(found);
            }
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <style>
            {r#".contact-section {
                padding: 6rem 2rem;
                max-width: 720px;
                margin: 0 auto;
            }
            .contact-section h2 {
                font-size: 2rem;
                text-align: center;
                margin-bottom: 0.5rem;
                background: linear-gradient(45deg, #fff, var(--color-primary));
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .contact-section .contact-intro {
                text-align: center;
                color: var(--color-text-secondary);
                margin-bottom: 2.5rem;
            }
            .contact-section .form-group {
                margin-bottom: 1.25rem;
                display: flex;
                flex-direction: column;
            }
            .contact-section label {
                margin-bottom: 0.4rem;
                color: var(--color-text-secondary);
                font-size: 0.9rem;
            }
            .contact-section input,
            .contact-section select,
            .contact-section textarea {
                background: rgba(30, 30, 30, 0.7);
                border: 1px solid var(--color-border);
                border-radius: 8px;
                padding: 0.75rem 1rem;
                color: var(--color-text);
                transition: border-color 0.3s ease, background-color 0.3s ease;
            }
            .contact-section input:focus,
            .contact-section select:focus,
            .contact-section textarea:focus {
                outline: none;
                border-color: var(--color-primary);
            }
            .contact-section textarea {
                min-height: 140px;
                resize: vertical;
            }
            .contact-section .error {
                border-color: var(--color-primary);
                background-color: rgba(255, 107, 53, 0.05);
            }
            .contact-section .error-message {
                color: var(--color-primary);
                font-size: 12px;
                margin-top: 5px;
                display: block;
                font-weight: 500;
            }
            .contact-section button[type="submit"] {
                width: 100%;
                padding: 0.9rem;
                border: none;
                border-radius: 8px;
                background: var(--color-primary);
                color: white;
                font-weight: 600;
                cursor: pointer;
                transition: opacity 0.3s ease;
            }
            .contact-section button[type="submit"]:hover {
                opacity: 0.85;
            }
            .success-message {
                background: rgba(255, 107, 53, 0.1);
                border: 1px solid rgba(255, 107, 53, 0.3);
                color: var(--color-primary);
                padding: 15px;
                border-radius: 8px;
                margin-top: 20px;
                text-align: center;
                animation: slideInUp 0.5s ease-out;
            }
            .success-message a {
                color: var(--color-primary);
                font-weight: bold;
            }
            @keyframes slideInUp {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }"#}
            </style>
            <h2>{"Let's Work Together"}</h2>
            <p class="contact-intro">
                {"Tell us about your project and we'll get back to you with a quote."}
            </p>
            <form id="contact-form" onsubmit={onsubmit}>
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input
                        id="name"
                        type="text"
                        placeholder="Your name"
                        class={field_class(&errors, Field::Name)}
                        value={(*name).clone()}
                        onchange={let name = name.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            name.set(input.value());
                        }}
                    />
                    { field_error_html(&errors, Field::Name) }
                </div>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        type="text"
                        placeholder="you@example.com"
                        class={field_class(&errors, Field::Email)}
                        value={(*email).clone()}
                        onchange={let email = email.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                    { field_error_html(&errors, Field::Email) }
                </div>
                <div class="form-group">
                    <label for="project-type">{"Project Type"}</label>
                    <select
                        id="project-type"
                        class={field_class(&errors, Field::ProjectType)}
                        onchange={let project_type = project_type.clone(); move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            project_type.set(select.value());
                        }}
                    >
                        <option value="" selected={project_type.is_empty()}>{"Select a project type"}</option>
                        { for PROJECT_TYPES.iter().map(|t| html! {
                            <option value={*t} selected={*project_type == *t}>{*t}</option>
                        }) }
                    </select>
                    { field_error_html(&errors, Field::ProjectType) }
                </div>
                <div class="form-group">
                    <label for="budget">{"Budget Range"}</label>
                    <select
                        id="budget"
                        class={field_class(&errors, Field::Budget)}
                        onchange={let budget = budget.clone(); move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            budget.set(select.value());
                        }}
                    >
                        <option value="" selected={budget.is_empty()}>{"Select a budget range"}</option>
                        { for BUDGET_RANGES.iter().map(|b| html! {
                            <option value={*b} selected={*budget == *b}>{*b}</option>
                        }) }
                    </select>
                    { field_error_html(&errors, Field::Budget) }
                </div>
                <div class="form-group">
                    <label for="message">{"Message"}</label>
                    <textarea
                        id="message"
                        placeholder="What are we making?"
                        class={field_class(&errors, Field::Message)}
                        value={(*message).clone()}
                        onchange={let message = message.clone(); move |e: Event| {
                            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                            message.set(textarea.value());
                        }}
                    />
                    { field_error_html(&errors, Field::Message) }
                </div>
                <button type="submit">{"Send Inquiry"}</button>
                if *show_success {
                    <div class="success-message">
                        <strong>{"✓ Thank you!"}</strong>
                        {" Your email client should open shortly. If not, you can reach us directly at: "}
                        <a href={config::mailto_href()}>{config::contact_email()}</a>
                    </div>
                }
            </form>
        </section>
    }
}
