use leptos::prelude::*;

use crate::nav::{Section, SectionId, SectionRegistry, HOME};
use crate::theme::Theme;

use super::theme::ThemeToggle;

#[component]
pub fn Navbar(
    registry: SectionRegistry,
    #[prop(into)] active: Signal<SectionId>,
    #[prop(into)] scrolled: Signal<bool>,
    #[prop(into)] theme: Signal<Theme>,
    on_navigate: Callback<SectionId>,
    on_toggle_theme: Callback<()>,
) -> impl IntoView {
    let links = registry
        .iter()
        .map(|section| view! { <NavLink section active on_navigate /> })
        .collect_view();

    view! {
        <nav class=move || {
            let base = "fixed top-0 inset-x-0 z-50 h-[70px] transition-all duration-300";
            if scrolled.get() {
                format!("{base} scrolled bg-white/90 dark:bg-slate-900/90 shadow-md backdrop-blur")
            } else {
                format!("{base} bg-transparent")
            }
        }>
            <div class="max-w-6xl h-full mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between">
                <button
                    class="text-2xl font-bold text-indigo-600 dark:text-indigo-400 hover:scale-110 transition-transform duration-200"
                    on:click=move |_| on_navigate.run(HOME.id)
                >
                    "SJ"
                </button>
                <div class="hidden md:flex items-center gap-2">{links}</div>
                <ThemeToggle theme on_toggle=on_toggle_theme />
            </div>
        </nav>
    }
}

#[component]
fn NavLink(
    section: &'static Section,
    active: Signal<SectionId>,
    on_navigate: Callback<SectionId>,
) -> impl IntoView {
    let id = section.id;
    view! {
        <button
            class=move || {
                if active.get() == id {
                    "px-3 py-2 rounded-md font-medium text-indigo-600 dark:text-indigo-400 bg-indigo-50 dark:bg-slate-800"
                } else {
                    "px-3 py-2 rounded-md font-medium hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors duration-200"
                }
            }
            on:click=move |_| on_navigate.run(id)
        >
            {section.label}
        </button>
    }
}
