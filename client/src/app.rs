//! Root application component with routing and context providers.

use access::{Destination, SessionStore};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::Guarded;
use crate::components::notice_bar::NoticeBar;
use crate::pages::{login::LoginPage, not_found::NotFoundPage, unauthorized::UnauthorizedPage};
use crate::state::notice::NoticeState;
use crate::util::identity_cache::LocalStorageCache;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and notice contexts and sets up client-side routing.
/// The session starts in the loading phase and is restored from
/// `localStorage` once the app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::new());
    let notices = RwSignal::new(NoticeState::default());
    provide_context(session);
    provide_context(notices);

    // Effects only run in the browser, so SSR always renders the loading phase.
    Effect::new(move || session.update(|store| store.rehydrate(&LocalStorageCache)));

    // Route segments come from `Destination::id`, the same source the sidebar
    // links and gate redirects use.
    view! {
        <Stylesheet id="leptos" href="/pkg/labdesk.css"/>
        <Title text="Lab Manager"/>

        <NoticeBar/>
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=Destination::Dashboard.path()/> }/>
                <Route path=StaticSegment(Destination::Login.id()) view=LoginPage/>
                <Route path=StaticSegment(Destination::Unauthorized.id()) view=UnauthorizedPage/>
                <Route path=StaticSegment(Destination::Dashboard.id()) view=|| view! { <Guarded destination=Destination::Dashboard/> }/>
                <Route path=StaticSegment(Destination::Patients.id()) view=|| view! { <Guarded destination=Destination::Patients/> }/>
                <Route path=StaticSegment(Destination::Tests.id()) view=|| view! { <Guarded destination=Destination::Tests/> }/>
                <Route path=StaticSegment(Destination::Reports.id()) view=|| view! { <Guarded destination=Destination::Reports/> }/>
                <Route path=StaticSegment(Destination::Search.id()) view=|| view! { <Guarded destination=Destination::Search/> }/>
                <Route path=StaticSegment(Destination::Backup.id()) view=|| view! { <Guarded destination=Destination::Backup/> }/>
                <Route path=StaticSegment(Destination::Settings.id()) view=|| view! { <Guarded destination=Destination::Settings/> }/>
            </Routes>
        </Router>
    }
}
