use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::dom::DocumentRoot;
use crate::theme::{Theme, THEME_STORAGE_KEY};

/// Theme persisted in `localStorage` and mirrored onto the document root.
///
/// A stored `"dark"` restores the dark theme; anything else, including an
/// unavailable storage, falls back to light. Storage is read only once
/// hydration is done so the first client render matches the server's.
pub fn use_theme() -> (Signal<Theme>, Callback<()>) {
    let (theme, set_theme, _) = use_local_storage_with_options::<Theme, FromToStringCodec>(
        THEME_STORAGE_KEY,
        UseStorageOptions::default().delay_during_hydration(true),
    );

    Effect::new(move |_| {
        let theme = theme.get();
        match DocumentRoot::new() {
            Ok(root) => theme.apply(&root),
            Err(err) => log::warn!("couldn't apply {theme} theme: {err}"),
        }
    });

    let toggle = Callback::new(move |_: ()| {
        set_theme.update(|t| *t = t.toggle());
    });

    (theme, toggle)
}

#[component]
pub fn ThemeToggle(#[prop(into)] theme: Signal<Theme>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="w-10 h-10 flex items-center justify-center rounded-full text-xl hover:scale-110 active:scale-95 transition-transform duration-200 hover:bg-slate-100 dark:hover:bg-slate-800"
            on:click=move |_| on_toggle.run(())
            aria-label="Toggle theme"
        >
            {move || theme.get().toggle_glyph()}
        </button>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_renders_default_glyph() {
        let html = Owner::new().with(|| {
            let theme = Signal::stored(Theme::default());
            let on_toggle = Callback::new(|_: ()| {});
            view! { <ThemeToggle theme on_toggle /> }.to_html()
        });
        assert!(html.contains("\u{263E}"));
        assert!(!html.contains("\u{2600}"));
        assert!(html.contains("aria-label=\"Toggle theme\""));
    }
}
