use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use super::dom;
use crate::content::{HERO_DESCRIPTION, HERO_NAME, HERO_STATUS, HERO_SUBTITLE, HERO_TYPE_INTERVAL_MS};
use crate::interaction::{reveal_finished, revealed_prefix};

/// Landing banner. The name is revealed one character per interval tick,
/// runs to completion once per mount, and is not restartable; the interval
/// clears itself when the reveal finishes.
#[function_component(Hero)]
pub fn hero() -> Html {
    let typed = use_state_eq(|| 0usize);

    {
        let typed = typed.clone();
        use_effect_with((), move |_| {
            let count = Rc::new(Cell::new(0usize));
            let interval_id = Rc::new(Cell::new(None::<i32>));

            let tick = Closure::<dyn FnMut()>::new({
                let count = count.clone();
                let interval_id = interval_id.clone();
                move || {
                    let next = count.get() + 1;
                    count.set(next);
                    typed.set(next);

                    if reveal_finished(HERO_NAME, next) {
                        if let (Some(win), Some(id)) = (window(), interval_id.take()) {
                            win.clear_interval_with_handle(id);
                        }
                    }
                }
            });

            if let Some(win) = window() {
                if let Ok(id) = win.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    HERO_TYPE_INTERVAL_MS as i32,
                ) {
                    interval_id.set(Some(id));
                }
            }

            move || {
                if let (Some(win), Some(id)) = (window(), interval_id.take()) {
                    win.clear_interval_with_handle(id);
                }
                drop(tick);
            }
        });
    }

    let go_to = |section_id: &'static str| {
        Callback::from(move |_: MouseEvent| dom::scroll_to_section(section_id))
    };

    html! {
        <section id="home" class="hero">
            <div class="bg-circle top-left" aria-hidden="true"></div>
            <div class="bg-circle bottom-right" aria-hidden="true"></div>

            <div class="hero-content">
                <span class="status-badge">
                    <span class="status-dot" aria-hidden="true"></span>
                    {HERO_STATUS}
                </span>

                <h1 class="hero-title">
                    {revealed_prefix(HERO_NAME, *typed)}
                    <span class="cursor" aria-hidden="true">{"|"}</span>
                </h1>

                <h2 class="hero-subtitle">{HERO_SUBTITLE}</h2>
                <p class="hero-description">{HERO_DESCRIPTION}</p>

                <div class="hero-actions">
                    <button class="button primary" type="button" onclick={go_to("contact")}>
                        {"Get in Touch"}
                    </button>
                    <button class="button secondary" type="button" onclick={go_to("projects")}>
                        {"View Projects"}
                    </button>
                </div>
            </div>

            <button class="scroll-indicator" type="button" onclick={go_to("about")}>
                <span class="scroll-text">{"Scroll"}</span>
                <span class="scroll-icon" aria-hidden="true">{"⌄"}</span>
            </button>
        </section>
    }
}
