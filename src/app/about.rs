use leptos::prelude::*;
use leptos_meta::Title;

use crate::skills::{skill_icon, SKILLS};

struct Milestone {
    title: &'static str,
    subtitle: &'static str,
    years: &'static str,
    logo: &'static str,
}

const EDUCATION: &[Milestone] = &[
    Milestone {
        title: "Riga Technical University",
        subtitle: "Master's Degree of Computer Science",
        years: "2023 - present",
        logo: "/images/rtu_logo.svg",
    },
    Milestone {
        title: "Riga Technical University",
        subtitle: "Bachelor's Degree of Computer Science",
        years: "2016 - 2020",
        logo: "/images/rtu_logo.svg",
    },
];

const EXPERIENCE: &[Milestone] = &[Milestone {
    title: "Mykoob",
    subtitle: "Front-end Developer Internship",
    years: "2024",
    logo: "/images/mykoob_logo.webp",
}];

const COURSES: &[Milestone] = &[
    Milestone {
        title: "The Complete JavaScript Course 2024",
        subtitle: "JavaScript",
        years: "2024",
        logo: "/images/udemy_logo.svg",
    },
    Milestone {
        title: "Advanced CSS and Sass",
        subtitle: "SCSS/SASS Flexbox Grid",
        years: "2024",
        logo: "/images/udemy_logo.svg",
    },
    Milestone {
        title: "The Web Developer Bootcamp 2024",
        subtitle: "HTML5 CSS3 JavaScript React.js Node.js Express.js MongoDB",
        years: "2024",
        logo: "/images/udemy_logo.svg",
    },
    Milestone {
        title: "Web risinājumu izstrāde",
        subtitle: "Learning Center BUTS",
        years: "2022",
        logo: "/images/buts_logo.webp",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <section class="mb-12 flex flex-col-reverse md:flex-row md:items-center gap-4">
            <div class="md:w-2/3">
                <h1 class="text-4xl font-semibold mb-2">"Thanks for stopping by"</h1>
                <p class="text-gray-600 dark:text-gray-400 mb-4 text-lg">
                    "Front-end Developer Crafting Seamless Web Experiences with Code and Creativity"
                </p>
            </div>
            <div class="md:w-1/3 flex justify-center">
                <img
                    src="/images/memoji.png"
                    alt="Memoji profile"
                    width="150"
                    height="150"
                    class="rounded-full w-24 h-24 md:w-[150px] md:h-[150px]"
                />
            </div>
        </section>
        <section class="mb-12">
            <h2 class="text-xl font-bold mb-2">"About Me"</h2>
            <p class="text-gray-600 dark:text-gray-400 mb-4">
                "I'm a passionate web developer with a knack for creating clean, efficient and user-friendly websites. "
                "With expertise in front-end and back-end development, I focus on building responsive, dynamic "
                "and intuitive digital experiences. I enjoy turning complex problems into simple, elegant solutions, "
                "and I'm always exploring the latest technologies. When I'm not coding, you can find me diving into "
                "new design trends or collaborating on exciting tech projects."
            </p>
        </section>
        <section class="mb-8">
            <h2 class="text-xl font-bold mb-4">"My Skills"</h2>
            <SkillCloud />
        </section>
        <Timeline heading="Education" items=EDUCATION />
        <Timeline heading="Experience" items=EXPERIENCE />
        <Timeline heading="Courses" items=COURSES />
    }
}

/// Badges drifting in place; the float delay is staggered per badge.
#[component]
fn SkillCloud() -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center gap-3 py-6 rounded-md border border-gray-200 dark:border-gray-800">
            {SKILLS
                .iter()
                .enumerate()
                .map(|(i, skill)| {
                    view! {
                        <span
                            class=format!(
                                "inline-flex items-center gap-2 bg-gray-900 text-white dark:bg-white dark:text-gray-900 {}",
                                skill.badge.class(),
                            )
                            style:animation-delay=format!("{}ms", i * 250)
                        >
                            {skill_icon(skill.name).map(|icon| view! { <i class=icon /> })}
                            <span class="text-sm">{skill.name}</span>
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Timeline(heading: &'static str, items: &'static [Milestone]) -> impl IntoView {
    view! {
        <section class="mb-8">
            <h2 class="text-xl font-bold mb-4">{heading}</h2>
            {items
                .iter()
                .map(|item| {
                    view! {
                        <div class="flex items-start gap-4 mb-4">
                            <div class="w-12 h-12 flex-shrink-0 rounded-full overflow-hidden flex items-center justify-center border border-gray-200 dark:border-gray-800 bg-white">
                                <img
                                    src=item.logo
                                    alt=item.title
                                    width="36"
                                    height="36"
                                    loading="lazy"
                                    class="rounded-full"
                                />
                            </div>
                            <div class="flex-grow">
                                <h3 class="font-medium">{item.title}</h3>
                                <p class="text-gray-600 dark:text-gray-400">{item.subtitle}</p>
                            </div>
                            <span class="text-gray-500 whitespace-nowrap">{item.years}</span>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
