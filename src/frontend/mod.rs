mod about;
mod contact;
mod dom;
mod footer;
mod header;
mod hero;
mod projects;

use web_sys::window;
use yew::prelude::*;

use about::About;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;

/// Root component. Each section owns its own local state; nothing is
/// shared across them.
#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <Header />
            <main>
                <Hero />
                <About />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
