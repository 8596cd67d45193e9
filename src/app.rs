mod about;
mod clock;
mod contact;
mod homepage;
mod layout;
mod media;
mod navbar;
mod projects;
mod status;
mod tooltip;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SITE_PROFILE;
use about::AboutPage;
use homepage::HomePage;
use layout::{Footer, Header, NotFound};
use navbar::FloatingNavbar;
use projects::{load_listing, ProjectPage, WorksPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/png" sizes="32x32" href="/favicon.png" />
                <link rel="apple-touch-icon" sizes="180x180" href="/apple-icon.png" />
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

    // every page shows some slice of the project listing
    let listing = Resource::new(|| (), |_| load_listing());
    provide_context(listing);

    view! {
        <Title formatter=|title| format!("{title} - {} Portfolio", SITE_PROFILE.initials) />

        <Router>
            <div class="relative flex flex-col min-h-screen max-w-2xl mx-auto p-4 pb-24">
                <Header />
                <main class="flex-grow">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/projects") view=WorksPage />
                        <Route path=path!("/projects/:slug") view=ProjectPage />
                    </Routes>
                </main>
                <Footer />
                <FloatingNavbar />
            </div>
        </Router>
    }
}
