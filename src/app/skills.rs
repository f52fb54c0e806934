use leptos::prelude::*;

use crate::nav::SKILLS;

use super::SectionHeader;

// (icon, heading, tags)
const CATEGORIES: &[(&str, &str, &[&str])] = &[
    (
        "</>",
        "Programming Languages",
        &["TypeScript", "JavaScript", "Node.js", "C++"],
    ),
    (
        "⛁",
        "Databases",
        &["PostgreSQL", "MySQL", "MongoDB", "Redis", "Elasticsearch"],
    ),
    ("☁", "Cloud & Tools", &["AWS", "GitHub", "GitLab", "Nest.js"]),
    (
        "★",
        "Soft Skills",
        &[
            "Attention to Detail",
            "Adaptability",
            "Creativity",
            "Time Management",
            "Self-motivation",
        ],
    ),
];

#[component]
pub fn Skills() -> impl IntoView {
    let categories = CATEGORIES
        .iter()
        .map(|(icon, heading, tags)| {
            view! {
                <div class="p-6 rounded-lg shadow bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700">
                    <div class="flex items-center gap-3 mb-4">
                        <span class="text-xl font-mono text-indigo-600 dark:text-indigo-400">{*icon}</span>
                        <h3 class="text-lg font-bold">{*heading}</h3>
                    </div>
                    <div class="flex flex-wrap gap-2">
                        {tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-3 py-1 rounded-full text-sm bg-indigo-50 text-indigo-700 dark:bg-slate-700 dark:text-indigo-300">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=SKILLS.id.as_str() class="py-20">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader title="Skills & Expertise" subtitle="Technologies and tools I work with" />
                <div class="grid sm:grid-cols-2 gap-6 section-content">{categories}</div>
            </div>
        </section>
    }
}
