use leptos::prelude::*;

use crate::nav::CONTACT;

use super::SectionHeader;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=CONTACT.id.as_str() class="py-20">
            <div class="max-w-2xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader title="Get In Touch" subtitle="Let's discuss how we can work together" />
                <div class="p-6 rounded-lg shadow-lg bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700 space-y-6 section-content">
                    <ContactItem icon="✉" heading="Email" value="developer.sahiljain@gmail.com" />
                    <ContactItem icon="☎" heading="Phone" value="+91 9579484545" />
                    <ContactItem icon="⌖" heading="Location" value="Pune, India" />
                    <div class="flex justify-center gap-4 pt-2">
                        <SocialLink
                            href="https://linkedin.com/in/sahiljain1205"
                            icon="devicon-linkedin-plain"
                            label="LinkedIn"
                            color="text-blue-600 dark:text-blue-400"
                        />
                        <SocialLink
                            href="https://github.com/SahilJain1205"
                            icon="devicon-github-plain"
                            label="GitHub"
                            color="text-slate-800 dark:text-white"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactItem(icon: &'static str, heading: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <span class="w-10 h-10 flex items-center justify-center rounded-full text-xl bg-indigo-50 text-indigo-600 dark:bg-slate-700 dark:text-indigo-300">
                {icon}
            </span>
            <div>
                <h4 class="font-bold">{heading}</h4>
                <p class="text-slate-600 dark:text-slate-400">{value}</p>
            </div>
        </div>
    }
}

#[component]
fn SocialLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
    color: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class=format!(
                "{color} flex items-center gap-2 px-4 py-2 rounded-md font-medium hover:scale-105 transition-transform duration-200",
            )
            aria-label=format!("{label} Profile")
        >
            <i class=format!("{icon} text-2xl")></i>
            <span>{label}</span>
        </a>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 text-center text-sm text-slate-500 dark:text-slate-400 border-t border-slate-200 dark:border-slate-800">
            <p>{format!("© {BUILD_YEAR} Sahil Jain. All rights reserved.")}</p>
        </footer>
    }
}
