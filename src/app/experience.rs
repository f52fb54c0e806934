use leptos::prelude::*;

use crate::nav::EXPERIENCE;

use super::SectionHeader;

struct Role {
    title: &'static str,
    company: &'static str,
    duration: &'static str,
    location: &'static str,
    current: bool,
    achievements: &'static [&'static str],
}

const ROLES: &[Role] = &[
    Role {
        title: "Software Engineer",
        company: "Coditas",
        duration: "August 2023 - Present",
        location: "Pune, Maharashtra",
        current: true,
        achievements: &[
            "Re-architected monolithic app into lightweight, serverless structure on AWS",
            "Elevated codebase quality by 60% and achieved 30% reduction in post-release defects",
            "Optimized cron job operations, resulting in 87.39% runtime reduction",
            "Mentored junior developers, accelerating onboarding efficiency by 35%",
        ],
    },
    Role {
        title: "Associate Software Engineer",
        company: "Coditas",
        duration: "January 2022 - July 2023",
        location: "Pune, Maharashtra",
        current: false,
        achievements: &[
            "Achieved 10% reduction in bugs through systematic refactoring",
            "Contributed to Trepp's serverless projects using Node.js",
            "Enhanced DMGT Usher repository stability and reliability",
            "Implemented granular role-based access controls, increasing returning visitors by 60%",
        ],
    },
];

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=EXPERIENCE.id.as_str() class="py-20 bg-slate-50 dark:bg-slate-800/50">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    title="Work Experience"
                    subtitle="My professional journey in software development"
                />
                <div class="relative border-l-2 border-indigo-200 dark:border-slate-600 ml-3 space-y-10 section-content">
                    {ROLES.iter().map(|role| view! { <TimelineItem role /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(role: &'static Role) -> impl IntoView {
    let marker = if role.current {
        "absolute -left-[9px] top-2 w-4 h-4 rounded-full bg-indigo-600 ring-4 ring-indigo-200 dark:ring-indigo-900"
    } else {
        "absolute -left-[9px] top-2 w-4 h-4 rounded-full bg-slate-400"
    };
    view! {
        <div class="relative pl-8">
            <div class=marker></div>
            <div class="p-6 rounded-lg shadow bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700">
                <div class="flex flex-wrap items-baseline justify-between gap-2 mb-1">
                    <h3 class="text-lg font-bold">{role.title}</h3>
                    <span class="text-sm font-medium text-slate-500 dark:text-slate-400">
                        {role.duration}
                    </span>
                </div>
                <div class="font-medium text-indigo-600 dark:text-indigo-400">{role.company}</div>
                <p class="text-sm text-slate-500 dark:text-slate-400 mb-3">{role.location}</p>
                <ul class="text-sm space-y-1 list-disc list-inside">
                    {role.achievements.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
