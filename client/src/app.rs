//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::roster::RosterPage;
use crate::state::drawer::DrawerView;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ro">
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
/// Provides the drawer snapshot context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let drawer = RwSignal::new(DrawerView::default());
    provide_context(drawer);

    view! {
        <Stylesheet id="leptos" href="/pkg/roster.css"/>
        <Title text="Studenți"/>

        <Router>
            <Routes fallback=|| "Pagina nu a fost găsită.".into_view()>
                <Route path=StaticSegment("") view=RosterPage/>
            </Routes>
        </Router>
    }
}
