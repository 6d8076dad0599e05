use web_sys::MouseEvent;
use yew::prelude::*;

use super::dom;
use crate::content::{BRAND, HEADER_SCROLL_THRESHOLD, NAV_ITEMS, SCROLL_SPY_LOOKAHEAD, SECTION_IDS};
use crate::interaction::{active_section, past_threshold};

/// Fixed top navigation: scroll-spy section highlighting, a raised style
/// once the page scrolls past the threshold, and a slide-in mobile menu
/// that closes whenever a navigation target is chosen.
#[function_component(Header)]
pub fn header() -> Html {
    let scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| SECTION_IDS[0]);
    let menu_open = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        use_effect_with((), move |_| {
            dom::on_scroll(move || {
                let offset = dom::scroll_offset();
                scrolled.set(past_threshold(offset, HEADER_SCROLL_THRESHOLD));

                let bounds = dom::measure_sections(&SECTION_IDS);
                if let Some(section_id) = active_section(offset, SCROLL_SPY_LOOKAHEAD, &bounds) {
                    active.set(section_id);
                }
            })
        });
    }

    let navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |section_id: &'static str| {
            dom::scroll_to_section(section_id);
            menu_open.set(false);
        })
    };

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let nav_links = |mobile: bool| -> Html {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let onclick = {
                    let navigate = navigate.clone();
                    let section_id = item.section_id;
                    Callback::from(move |event: MouseEvent| {
                        event.prevent_default();
                        navigate.emit(section_id);
                    })
                };
                let class = classes!(
                    if mobile { "mobile-nav-link" } else { "nav-link" },
                    (*active == item.section_id).then_some("active"),
                );

                html! {
                    <li key={item.section_id}>
                        <a {class} href={format!("#{}", item.section_id)} {onclick}>
                            {item.label}
                        </a>
                    </li>
                }
            })
            .collect()
    };

    let cta = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit("contact"))
    };

    html! {
        <header class={classes!("site-header", (*scrolled).then_some("scrolled"))}>
            <div class="header-inner">
                <a
                    class="logo"
                    href="#home"
                    onclick={{
                        let navigate = navigate.clone();
                        Callback::from(move |event: MouseEvent| {
                            event.prevent_default();
                            navigate.emit("home");
                        })
                    }}
                >
                    {BRAND}
                </a>

                <nav class="main-nav" aria-label="Primary">
                    <ul class="nav-list">{nav_links(false)}</ul>
                    <button class="cta-button" type="button" onclick={cta.clone()}>
                        {"Let's Talk"}
                    </button>
                    <button
                        class="menu-button"
                        type="button"
                        aria-label="Open menu"
                        onclick={open_menu}
                    >
                        {"☰"}
                    </button>
                </nav>
            </div>

            if *menu_open {
                <>
                <div class="menu-overlay" onclick={close_menu.clone()}></div>
                <div class="mobile-menu" role="dialog" aria-label="Navigation menu">
                    <button
                        class="menu-close"
                        type="button"
                        aria-label="Close menu"
                        onclick={close_menu}
                    >
                        {"✕"}
                    </button>
                    <ul class="mobile-nav-list">
                        {nav_links(true)}
                        <li>
                            <button class="cta-button wide" type="button" onclick={cta}>
                                {"Let's Talk"}
                            </button>
                        </li>
                    </ul>
                </div>
                </>
            }
        </header>
    }
}
