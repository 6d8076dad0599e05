use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use super::dom;
use crate::content::{CONTACT_CHANNELS, SOCIAL_LINKS, SUBMIT_DELAY_MS};
use crate::interaction::{ContactForm, ContactState, DELIVERY_FAILED_MESSAGE};

/// Simulated delivery: a fixed delay standing in for the network round
/// trip. Wire a real mail or webhook integration here when deploying; a
/// rejection already flows through to the form banner without clearing the
/// user's input.
async fn deliver(_form: &ContactForm) -> Result<(), ()> {
    dom::sleep(SUBMIT_DELAY_MS as i32).await;
    Ok(())
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let state = use_state(ContactState::default);

    let edit_field = |apply: fn(&mut ContactForm, String)| {
        let state = state.clone();
        move |value: String| {
            let mut next = (*state).clone();
            apply(&mut next.form, value);
            state.set(next);
        }
    };

    let on_name = {
        let edit = edit_field(|form, value| form.name = value);
        Callback::from(move |event: InputEvent| {
            edit(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_email = {
        let edit = edit_field(|form, value| form.email = value);
        Callback::from(move |event: InputEvent| {
            edit(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_subject = {
        let edit = edit_field(|form, value| form.subject = value);
        Callback::from(move |event: InputEvent| {
            edit(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_message = {
        let edit = edit_field(|form, value| form.message = value);
        Callback::from(move |event: InputEvent| {
            edit(event.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let mut next = (*state).clone();
            let scheduled = next.begin_submit();
            state.set(next.clone());

            if !scheduled {
                return;
            }

            let state = state.clone();
            spawn_local(async move {
                let outcome = deliver(&next.form)
                    .await
                    .map_err(|()| DELIVERY_FAILED_MESSAGE.to_string());
                next.finish_submit(outcome);
                state.set(next);
            });
        })
    };

    let pending = state.status.is_pending();

    html! {
        <section id="contact" class="contact">
            <div class="contact-inner">
                <div class="contact-info">
                    <h2 class="section-title">{"Let's Talk"}</h2>
                    <p class="contact-description">
                        {"I'm always open to new opportunities and interesting projects. Reach \
                          out through any channel below, or send a message straight from the \
                          form."}
                    </p>

                    <ul class="channel-list">
                        { for CONTACT_CHANNELS.iter().map(|channel| html! {
                            <li class="channel" key={channel.label}>
                                <span class="channel-icon" aria-hidden="true">{channel.icon}</span>
                                <div class="channel-text">
                                    <span class="channel-label">{channel.label}</span>
                                    <span class="channel-value">{channel.value}</span>
                                </div>
                            </li>
                        }) }
                    </ul>

                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <a
                                class="social-link"
                                key={social.label}
                                href={social.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                title={social.label}
                            >
                                <span aria-hidden="true">{social.icon}</span>
                            </a>
                        }) }
                    </div>
                </div>

                <form class="contact-form" onsubmit={on_submit}>
                    <h3 class="form-title">{"Send a Message"}</h3>

                    <div class="form-group">
                        <label for="contact-name">{"Name *"}</label>
                        <input
                            id="contact-name"
                            type="text"
                            placeholder="Your full name"
                            value={state.form.name.clone()}
                            oninput={on_name}
                        />
                    </div>

                    <div class="form-group">
                        <label for="contact-email">{"Email *"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            placeholder="you@example.com"
                            value={state.form.email.clone()}
                            oninput={on_email}
                        />
                    </div>

                    <div class="form-group">
                        <label for="contact-subject">{"Subject *"}</label>
                        <input
                            id="contact-subject"
                            type="text"
                            placeholder="What is this about?"
                            value={state.form.subject.clone()}
                            oninput={on_subject}
                        />
                    </div>

                    <div class="form-group">
                        <label for="contact-message">{"Message *"}</label>
                        <textarea
                            id="contact-message"
                            placeholder="Describe your project or question..."
                            value={state.form.message.clone()}
                            oninput={on_message}
                        />
                    </div>

                    if let Some((kind, text)) = state.status.banner() {
                        <p class={classes!("form-banner", kind)} role="status">
                            {text.to_string()}
                        </p>
                    }

                    <button class="button primary submit" type="submit" disabled={pending}>
                        if pending {
                            <><span class="spinner" aria-hidden="true"></span>{"Sending..."}</>
                        } else {
                            {"Send Message"}
                        }
                    </button>
                </form>
            </div>
        </section>
    }
}
