mod about;
mod contact;
mod education;
mod experience;
mod hero;
mod navbar;
mod scroll;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::ScrollConfig;
use crate::nav::SectionRegistry;

use about::About;
use contact::{Contact, Footer};
use education::Education;
use experience::Experience;
use hero::Hero;
use navbar::Navbar;
use scroll::{use_navigator, use_scroll_tracker};
use skills::Skills;
use theme::use_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(ScrollConfig::default());

    view! {
        // sets the document title
        <Title formatter=|title| format!("Sahil Jain - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole single-page portfolio. Owns the active section, scrolled and
/// theme state and hands them down to the navbar and sections.
#[component]
fn Portfolio() -> impl IntoView {
    let registry = SectionRegistry::PORTFOLIO;
    let config = use_context::<ScrollConfig>().unwrap_or_default();

    let scroll = use_scroll_tracker(registry, config);
    let on_navigate = use_navigator(registry, config, scroll.active);
    let (theme, on_toggle_theme) = use_theme();

    view! {
        <Title text="Software Engineer" />
        <div class="min-h-screen bg-white text-slate-800 dark:bg-slate-900 dark:text-slate-100 transition-colors duration-300">
            <Navbar
                registry
                active=scroll.active
                scrolled=scroll.scrolled
                theme
                on_navigate
                on_toggle_theme
            />
            <main>
                <Hero on_navigate />
                <About />
                <Experience />
                <Skills />
                <Education />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12 section-content">
            <h2 class="text-3xl lg:text-4xl font-bold mb-2">{title}</h2>
            <p class="text-lg text-slate-500 dark:text-slate-400">{subtitle}</p>
        </div>
    }
}
