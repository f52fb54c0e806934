use leptos::prelude::*;

use crate::nav::{SectionId, CONTACT, EXPERIENCE, HOME};

#[component]
pub fn Hero(on_navigate: Callback<SectionId>) -> impl IntoView {
    view! {
        <section
            id=HOME.id.as_str()
            class="min-h-screen flex items-center pt-[70px] bg-gradient-to-br from-indigo-50 to-white dark:from-slate-900 dark:to-slate-800"
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 grid lg:grid-cols-2 gap-12 items-center section-content">
                <div>
                    <h1 class="text-4xl lg:text-6xl font-bold mb-4">
                        "Hi, I'm " <span class="text-indigo-600 dark:text-indigo-400">"Sahil Jain"</span>
                    </h1>
                    <p class="text-xl lg:text-2xl font-medium mb-4 text-slate-600 dark:text-slate-300">
                        "Software Engineer with a product-focused mindset"
                    </p>
                    <p class="text-base mb-8 leading-relaxed text-slate-600 dark:text-slate-400">
                        "Bringing 3 years of experience delivering scalable, high-impact backend systems. Skilled in designing and deploying resilient services using Node.js, TypeScript, and AWS."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <button
                            class="px-6 py-3 rounded-md font-medium bg-indigo-600 text-white hover:bg-indigo-700 hover:scale-105 transition-all duration-200"
                            on:click=move |_| on_navigate.run(CONTACT.id)
                        >
                            "Get In Touch"
                        </button>
                        <button
                            class="px-6 py-3 rounded-md font-medium border border-indigo-600 text-indigo-600 dark:text-indigo-400 dark:border-indigo-400 hover:scale-105 transition-all duration-200"
                            on:click=move |_| on_navigate.run(EXPERIENCE.id)
                        >
                            "View Experience"
                        </button>
                    </div>
                </div>
                <div class="flex justify-center">
                    <div class="w-64 h-64 rounded-full flex items-center justify-center bg-indigo-100 dark:bg-slate-700 text-indigo-600 dark:text-indigo-300 text-7xl font-mono">
                        "</>"
                    </div>
                </div>
            </div>
        </section>
    }
}
