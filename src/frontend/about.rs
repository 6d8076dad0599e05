use yew::prelude::*;

use crate::content::{ABOUT_PARAGRAPHS, SKILLS, STATS, TECHNOLOGIES};

/// Static content section: bio paragraphs, experience stats, the
/// technology grid, and the skill cards. No interactive state.
#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="about-inner">
                <div class="about-text">
                    <h2 class="section-title">{"About Me"}</h2>

                    { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! {
                        <p class="about-paragraph">{*paragraph}</p>
                    }) }

                    <div class="stats-grid">
                        { for STATS.iter().map(|stat| html! {
                            <div class="stat" key={stat.label}>
                                <span class="stat-number">{stat.number}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="about-skills">
                    <h3 class="skills-title">{"Technologies & Tools"}</h3>
                    <ul class="tech-grid">
                        { for TECHNOLOGIES.iter().map(|tech| html! {
                            <li class="tech-item" key={tech.name}>
                                <span class="tech-icon" aria-hidden="true">{tech.icon}</span>
                                <span class="tech-name">{tech.name}</span>
                            </li>
                        }) }
                    </ul>

                    <h3 class="skills-title">{"Core Skills"}</h3>
                    <div class="skill-cards">
                        { for SKILLS.iter().map(|skill| html! {
                            <article class="skill-card" key={skill.title}>
                                <header class="skill-header">
                                    <span class="skill-icon" aria-hidden="true">{skill.icon}</span>
                                    <h4 class="skill-title">{skill.title}</h4>
                                </header>
                                <p class="skill-description">{skill.description}</p>
                            </article>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
