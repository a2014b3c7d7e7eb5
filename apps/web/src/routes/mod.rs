mod home;
mod not_found;
mod signup;

pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use signup::SignUpPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
