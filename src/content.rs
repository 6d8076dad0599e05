//! Author-defined page content: navigation, hero copy, about data, the
//! project list, and contact/footer links. Everything here is constant and
//! created once; the interactive layers borrow from it.

pub static SECTION_IDS: [&str; 4] = ["home", "about", "projects", "contact"];

pub const BRAND: &str = "LH.dev";
pub const HERO_NAME: &str = "Luís Henrique";
pub const HERO_SUBTITLE: &str = "Front-End Developer & Full-Stack Java in Training";
pub const HERO_DESCRIPTION: &str = "Building high-performance digital experiences with React, \
    Next.js and TypeScript, and currently expanding toward the back-end with Java and Spring Boot.";
pub const HERO_STATUS: &str = "Available for projects";
pub const HERO_TYPE_INTERVAL_MS: u32 = 150;

pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;
pub const SCROLL_SPY_LOOKAHEAD: f64 = 100.0;
pub const SUBMIT_DELAY_MS: u32 = 2_000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", section_id: "home" },
    NavItem { label: "About", section_id: "about" },
    NavItem { label: "Projects", section_id: "projects" },
    NavItem { label: "Contact", section_id: "contact" },
];

/// Closed set of project categories. `All` is the filter sentinel and never
/// appears on a project itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    All,
    React,
    Web,
    Design,
    Templates,
}

impl Category {
    pub const FILTERS: [Category; 5] = [
        Category::All,
        Category::React,
        Category::Web,
        Category::Design,
        Category::Templates,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::React => "react",
            Self::Web => "web",
            Self::Design => "design",
            Self::Templates => "templates",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::React => "React",
            Self::Web => "Web",
            Self::Design => "Design",
            Self::Templates => "Templates",
        }
    }

    /// Unknown tags fall back to `All` rather than producing an empty grid.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "react" => Self::React,
            "web" => Self::Web,
            "design" => Self::Design,
            "templates" => Self::Templates,
            _ => Self::All,
        }
    }
}

#[derive(PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: Category,
    pub github_url: &'static str,
    pub live_url: &'static str,
    pub accent: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: "landing-template",
        title: "Landing Page Accelerator Template",
        description: "Configurable template for building high-conversion landing pages with \
            React and TypeScript, focused on performance and accessibility.",
        full_description: "An open-source landing page template designed to speed up delivery. \
            Built with React and TypeScript, it is fully customizable through theme and content \
            configuration files and ships with pre-built sections, responsive design, lazy \
            loading, WCAG 2.1 accessibility practices, and a contact form with validation and \
            webhook integration, letting developers launch quality pages in record time.",
        technologies: &[
            "React",
            "TypeScript",
            "Styled Components",
            "Accessibility",
            "Performance",
            "SEO",
        ],
        category: Category::Templates,
        github_url: "https://github.com/devhenriquejs/templateLP",
        live_url: "https://template-lp-two.vercel.app/",
        accent: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    },
    Project {
        id: "contact-manager",
        title: "Modern Contact Manager",
        description: "Complete contact management app with creation, editing, search, and \
            in-browser data persistence.",
        full_description: "An end-to-end front-end showcase built with React 19 and TypeScript. \
            It uses Redux Toolkit for global state, React Hook Form with Zod for fast and safe \
            form validation, and accessible Radix UI primitives with fluid animations. Data is \
            persisted locally, and a Jest unit test suite backs the codebase.",
        technologies: &[
            "React 19",
            "TypeScript",
            "Redux Toolkit",
            "Styled Components",
            "Framer Motion",
            "React Hook Form",
            "Jest",
        ],
        category: Category::React,
        github_url: "https://github.com/devhenriquejs/ContactListReact.git",
        live_url: "https://contact-list-react-ten.vercel.app/",
        accent: "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    },
    Project {
        id: "apod-visualizer",
        title: "APOD Visualizer",
        description: "Web app that displays NASA's astronomy picture of the day with a \
            Spotify-suggested soundtrack.",
        full_description: "A case study in API consumption, UI/UX refinement, and fluid \
            animation. It pairs NASA's APOD API with the Spotify API to suggest a soundtrack \
            matching the picture of the day, consolidating React, TypeScript, and Styled \
            Components skills along the way.",
        technologies: &[
            "React",
            "TypeScript",
            "Styled Components",
            "Framer Motion",
            "NASA API",
            "Spotify API",
        ],
        category: Category::Web,
        github_url: "https://github.com/lh5818181/Apod-visualizer-project",
        live_url: "https://apod-visualizer-project.vercel.app/",
        accent: "linear-gradient(135deg, #001f3f 0%, #1a004c 100%)",
    },
    Project {
        id: "cyberfolio",
        title: "Cyberfolio — Personal Portfolio",
        description: "This portfolio: cosmic design, fluid animations, and a focus on \
            performance and user experience.",
        full_description: "My professional showcase, built from scratch. The goal was an \
            immersive, memorable experience with a cosmic theme, deep gradients, and fluid \
            entrance animations, on top of a modular architecture with lazy loading and strict \
            linting to keep the codebase consistent.",
        technologies: &["React", "TypeScript", "Vite", "Styled Components", "Framer Motion", "UX Design"],
        category: Category::Design,
        github_url: "https://github.com/lh5818181/Cyberfolio",
        live_url: "https://cyberfolio-five.vercel.app/",
        accent: "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
    },
];

pub static ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a developer passionate about technology and innovation, focused on building digital \
     solutions that make a difference. With over three years of experience, I specialize in \
     full-stack development with modern tooling.",
    "My journey started with curiosity about how things work on the web; today I turn ideas \
     into reality through clean code, intuitive design, and exceptional user experiences.",
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { number: "3+", label: "Years of Experience" },
    Stat { number: "50+", label: "Projects Delivered" },
    Stat { number: "20+", label: "Happy Clients" },
    Stat { number: "100%", label: "Commitment" },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
}

pub static TECHNOLOGIES: [Technology; 12] = [
    Technology { name: "React", icon: "⚛️" },
    Technology { name: "TypeScript", icon: "🔷" },
    Technology { name: "JavaScript", icon: "💛" },
    Technology { name: "Node.js", icon: "🟢" },
    Technology { name: "Python", icon: "🐍" },
    Technology { name: "HTML5", icon: "🧡" },
    Technology { name: "CSS3", icon: "💙" },
    Technology { name: "Git", icon: "📚" },
    Technology { name: "Docker", icon: "🐳" },
    Technology { name: "AWS", icon: "☁️" },
    Technology { name: "MongoDB", icon: "🍃" },
    Technology { name: "PostgreSQL", icon: "🐘" },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SKILLS: [Skill; 4] = [
    Skill {
        icon: "⌨",
        title: "Full-Stack Development",
        description: "Complete applications from front to back, built for performance and scale.",
    },
    Skill {
        icon: "◩",
        title: "UI/UX Design",
        description: "Modern, intuitive interfaces that put user experience and accessibility first.",
    },
    Skill {
        icon: "⚡",
        title: "Performance Optimization",
        description: "Advanced techniques to keep applications fast and efficient.",
    },
    Skill {
        icon: "◍",
        title: "Modern Web Development",
        description: "Current frameworks and tooling applied to build innovative web solutions.",
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub static CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel { icon: "✉", label: "Email", value: "luis.henrique@email.com" },
    ContactChannel { icon: "☏", label: "Phone", value: "+55 (11) 99999-9999" },
    ContactChannel { icon: "⌖", label: "Location", value: "São Paulo, Brazil" },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/lh5818181",
        icon: "⎇",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/luis-henrique-fullstack/",
        icon: "in",
    },
    SocialLink {
        label: "Instagram",
        href: "https://instagram.com",
        icon: "◉",
    },
    SocialLink {
        label: "Email",
        href: "mailto:lh5818181@gmail.com",
        icon: "✉",
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub static FOOTER_QUICK_LINKS: [FooterLink; 4] = [
    FooterLink { label: "Home", section_id: "home" },
    FooterLink { label: "About", section_id: "about" },
    FooterLink { label: "Projects", section_id: "projects" },
    FooterLink { label: "Contact", section_id: "contact" },
];

pub static FOOTER_SERVICES: [&str; 3] = ["Web Development", "Mobile Applications", "UI/UX Design"];

pub const FOOTER_DESCRIPTION: &str = "Full-stack developer passionate about crafting innovative \
    digital experiences and technology that makes a difference.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_and_footer_links_target_known_sections() {
        for item in NAV_ITEMS {
            assert!(SECTION_IDS.contains(&item.section_id), "{} is unknown", item.section_id);
            assert!(!item.label.is_empty());
        }
        for link in FOOTER_QUICK_LINKS {
            assert!(SECTION_IDS.contains(&link.section_id), "{} is unknown", link.section_id);
            assert!(!link.label.is_empty());
        }
    }

    #[test]
    fn every_offered_filter_matches_at_least_one_project() {
        for filter in Category::FILTERS {
            if filter == Category::All {
                continue;
            }

            assert!(
                PROJECTS.iter().any(|project| project.category == filter),
                "filter {:?} would always produce an empty grid",
                filter
            );
        }
    }

    #[test]
    fn category_tags_round_trip_and_unknown_falls_back() {
        for filter in Category::FILTERS {
            assert_eq!(Category::from_tag(filter.as_str()), filter);
            assert!(!filter.label().is_empty());
        }

        assert_eq!(Category::from_tag("fullstack"), Category::All);
        assert_eq!(Category::from_tag(""), Category::All);
    }

    #[test]
    fn projects_are_unique_and_fully_described() {
        for (index, project) in PROJECTS.iter().enumerate() {
            assert!(
                PROJECTS[..index].iter().all(|other| other.id != project.id),
                "duplicate project id {}",
                project.id
            );
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.full_description.is_empty());
            assert!(!project.technologies.is_empty());
            assert_ne!(project.category, Category::All, "All never tags a project");
            assert!(project.github_url.starts_with("https://"));
            assert!(project.live_url.starts_with("https://"));
            assert!(!project.accent.is_empty());
        }
    }

    #[test]
    fn outbound_links_are_displayable() {
        for social in SOCIAL_LINKS {
            assert!(
                social.href.starts_with("https://") || social.href.starts_with("mailto:"),
                "{} link is not displayable",
                social.label
            );
            assert!(!social.icon.is_empty());
        }
        for channel in CONTACT_CHANNELS {
            assert!(!channel.label.is_empty());
            assert!(!channel.value.is_empty());
            assert!(!channel.icon.is_empty());
        }
    }

    #[test]
    fn static_copy_is_present() {
        assert!(!BRAND.is_empty());
        assert!(!HERO_NAME.is_empty());
        assert!(!HERO_SUBTITLE.is_empty());
        assert!(!HERO_DESCRIPTION.is_empty());
        assert!(!HERO_STATUS.is_empty());
        assert!(!FOOTER_DESCRIPTION.is_empty());
        assert!(ABOUT_PARAGRAPHS.iter().all(|paragraph| !paragraph.is_empty()));
        assert!(STATS.iter().all(|stat| !stat.number.is_empty() && !stat.label.is_empty()));
        assert!(TECHNOLOGIES.iter().all(|tech| !tech.name.is_empty() && !tech.icon.is_empty()));
        assert!(SKILLS
            .iter()
            .all(|skill| !skill.icon.is_empty() && !skill.title.is_empty() && !skill.description.is_empty()));
        assert!(FOOTER_SERVICES.iter().all(|service| !service.is_empty()));
    }

    #[test]
    fn timing_constants_are_sane() {
        assert!(HERO_TYPE_INTERVAL_MS > 0);
        assert!(SUBMIT_DELAY_MS > 0);
        assert!(HEADER_SCROLL_THRESHOLD < BACK_TO_TOP_THRESHOLD);
        assert!(SCROLL_SPY_LOOKAHEAD > 0.0);
    }
}
