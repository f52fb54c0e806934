use leptos::prelude::*;

use crate::nav::ABOUT;

use super::SectionHeader;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=ABOUT.id.as_str() class="py-20">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader title="About Me" subtitle="Passionate about creating impactful solutions" />
                <div class="grid lg:grid-cols-3 gap-12 section-content">
                    <div class="lg:col-span-2">
                        <p class="text-base mb-4 leading-relaxed">
                            "I'm a Software Engineer with a strong focus on product development and technical excellence. With 3 years of experience, I specialize in building scalable backend systems using modern technologies like Node.js, TypeScript, and AWS."
                        </p>
                        <p class="text-base mb-8 leading-relaxed">
                            "My approach combines clean architecture principles with performance optimization, resulting in systems that are not only robust but also maintainable and efficient. I believe in the power of collaboration and mentorship to drive team success."
                        </p>
                        <div class="grid grid-cols-3 gap-4 text-center">
                            <Stat value="3+" label="Years Experience" />
                            <Stat value="60%" label="Code Quality Improvement" />
                            <Stat value="87%" label="Performance Boost" />
                        </div>
                    </div>
                    <div class="p-6 rounded-lg shadow-lg bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700">
                        <div class="text-4xl text-amber-500 mb-2">"★"</div>
                        <h3 class="text-lg font-bold mb-4">"Key Achievements"</h3>
                        <ul class="text-sm space-y-2 list-disc list-inside">
                            <li>"Runner-Up in Codemania Coding Competition (2020)"</li>
                            <li>"Top 5% in Savitribai Phule Pune University Exam"</li>
                            <li>"CGPA: 9.77 in Computer Engineering"</li>
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="p-4 rounded-md bg-indigo-50 dark:bg-slate-800">
            <h3 class="text-3xl font-bold text-indigo-600 dark:text-indigo-400">{value}</h3>
            <p class="text-sm text-slate-600 dark:text-slate-400">{label}</p>
        </div>
    }
}
