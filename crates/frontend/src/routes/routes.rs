use crate::layout::Shell;
use crate::system::pages::start::StartPage;
use crate::usecases::compare::page::ComparePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=StartPage />
                    <Route path=path!("/compare") view=ComparePage />
                </Routes>
            </Shell>
        </Router>
    }
}
