//! Default landing page for the app. It is intentionally minimal while only
//! the sign-up flow is wired and does not expose sensitive data.

use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the landing page with a link into the sign-up flow.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="min-h-[70vh] flex flex-col items-center justify-center gap-6 px-6 text-center">
            <h1 class="text-4xl font-semibold text-slate-900">"Horizon"</h1>
            <p class="max-w-md text-sm text-slate-500">
                "Banking for the rest of us. Open an account in a couple of minutes."
            </p>
            <A
                href="/signup"
                {..}
                class="inline-flex items-center rounded-xl bg-blue-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-800 focus:outline-none focus:ring-4 focus:ring-blue-300"
            >
                "Create account"
            </A>
            <footer class="mt-8 text-xs text-slate-400">
                {format!(
                    "horizon-web {} ({})",
                    env!("CARGO_PKG_VERSION"),
                    env!("HORIZON_WEB_GIT_SHA")
                )}
            </footer>
        </main>
    }
}
