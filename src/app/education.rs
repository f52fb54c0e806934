use leptos::prelude::*;

use crate::nav::EDUCATION;

use super::SectionHeader;

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id=EDUCATION.id.as_str() class="py-20 bg-slate-50 dark:bg-slate-800/50">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    title="Education & Certifications"
                    subtitle="My academic background and professional development"
                />
                <div class="grid lg:grid-cols-2 gap-8 section-content">
                    <div class="p-6 rounded-lg shadow bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700">
                        <div class="text-4xl mb-2">"🎓"</div>
                        <h3 class="text-xl font-bold">"Bachelor of Engineering"</h3>
                        <p class="font-medium text-indigo-600 dark:text-indigo-400">
                            "Computer Engineering"
                        </p>
                        <p>"Marathwada MitraMandal's College of Engineering"</p>
                        <p class="text-sm text-slate-500 dark:text-slate-400">"Pune • 2022"</p>
                        <p class="font-bold my-2">"CGPA: 9.77"</p>
                        <div class="text-sm space-y-1">
                            <p>"• Minor in Data Science"</p>
                            <p>"• Runner-Up in Codemania Coding Competition (2020)"</p>
                            <p>"• Top 5% in Savitribai Phule Pune University Exam"</p>
                        </div>
                    </div>
                    <div>
                        <h3 class="text-xl font-bold mb-4">"Certifications"</h3>
                        <div class="space-y-4">
                            <Certification
                                name="Node.js - Master the Fundamentals"
                                issuer="Scaler Academy • 2023"
                            />
                            <Certification name="JavaScript Zero to Hero" issuer="LetsUpgrade • 2023" />
                            <Certification name="SQL (Intermediate)" issuer="HackerRank • 2021" />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Certification(name: &'static str, issuer: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 p-4 rounded-md bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700">
            <div class="text-2xl text-amber-500">"🏅"</div>
            <div>
                <h4 class="font-bold">{name}</h4>
                <p class="text-sm text-slate-500 dark:text-slate-400">{issuer}</p>
            </div>
        </div>
    }
}
