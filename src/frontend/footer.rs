use web_sys::MouseEvent;
use yew::prelude::*;

use super::dom;
use crate::content::{
    BACK_TO_TOP_THRESHOLD, BRAND, FOOTER_DESCRIPTION, FOOTER_QUICK_LINKS, FOOTER_SERVICES,
    HERO_NAME, SOCIAL_LINKS,
};
use crate::interaction::past_threshold;

fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Footer: brand column, quick links, service list, and a back-to-top
/// button that appears once the page scrolls past the threshold.
#[function_component(Footer)]
pub fn footer() -> Html {
    let show_back_to_top = use_state_eq(|| false);

    {
        let show_back_to_top = show_back_to_top.clone();
        use_effect_with((), move |_| {
            dom::on_scroll(move || {
                show_back_to_top.set(past_threshold(dom::scroll_offset(), BACK_TO_TOP_THRESHOLD));
            })
        });
    }

    let quick_links: Html = FOOTER_QUICK_LINKS
        .iter()
        .map(|link| {
            let onclick = {
                let section_id = link.section_id;
                Callback::from(move |event: MouseEvent| {
                    event.prevent_default();
                    dom::scroll_to_section(section_id);
                })
            };

            html! {
                <li key={link.label}>
                    <a class="footer-link" href={format!("#{}", link.section_id)} {onclick}>
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect();

    let back_to_top = Callback::from(|_: MouseEvent| dom::scroll_to_top());

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-top">
                    <div class="footer-brand">
                        <span class="footer-logo">{BRAND}</span>
                        <p class="footer-description">{FOOTER_DESCRIPTION}</p>
                        <div class="footer-socials">
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

                    <div class="footer-column">
                        <h4 class="footer-column-title">{"Navigation"}</h4>
                        <ul class="footer-link-list">{quick_links}</ul>
                    </div>

                    <div class="footer-column">
                        <h4 class="footer-column-title">{"Services"}</h4>
                        <ul class="footer-link-list">
                            { for FOOTER_SERVICES.iter().map(|service| html! {
                                <li class="footer-service" key={*service}>{*service}</li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="copyright">
                        {format!("© {} {}. All rights reserved.", current_year(), HERO_NAME)}
                    </p>
                </div>
            </div>

            if *show_back_to_top {
                <button
                    class="back-to-top"
                    type="button"
                    title="Back to top"
                    onclick={back_to_top}
                >
                    {"⌃"}
                </button>
            }
        </footer>
    }
}
