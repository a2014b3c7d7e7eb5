//! Sign-up route for new Horizon accounts. Input is validated against the
//! shared auth schema before any request is issued, the submit control is
//! blocked while the registration request is in flight, and a successful
//! registration navigates back to the application root.
//!
//! Flow Overview: validate locally, POST the registration payload, then
//! either surface a failure notice or navigate to `/`.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, Spinner},
    features::auth::{
        client,
        schema::{self, SignUpData},
        types::RegisterRequest,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
/// Captures sign-up form input for the async action without borrowing signals.
struct SignUpInput {
    name: String,
    email: String,
    password: String,
}

/// Renders the sign-up form and drives the registration flow.
/// On success the user lands on the application root.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (success, set_success) = signal(false);

    let signup_action = Action::new_local(move |input: &SignUpInput| {
        let input = input.clone();
        async move {
            let request = RegisterRequest {
                name: input.name,
                email: input.email,
                password: input.password,
            };

            client::register(&request).await
        }
    });

    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(_created) => {
                    set_success.set(true);
                    navigate("/", Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_success.set(false);

        let name_value = name.get_untracked().trim().to_string();
        let email_value = schema::normalize_email(&email.get_untracked());
        let password_value = password.get_untracked();

        let data = SignUpData {
            name: &name_value,
            email: &email_value,
            password: &password_value,
        };

        // invalid input never leaves the page
        if let Err(message) = schema::validate(&data) {
            set_error.set(Some(AppError::Config(message)));
            return;
        }

        signup_action.dispatch(SignUpInput {
            name: name_value,
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class="min-h-[70vh] flex items-center justify-center px-6 py-10">
            <form
                class="w-full max-w-md rounded-2xl border border-slate-200 bg-white/90 p-6 shadow-[0_20px_60px_-40px_rgba(15,23,42,0.35)] backdrop-blur sm:p-8"
                on:submit=on_submit
            >
                <div class="space-y-2">
                    <p class="text-[11px] font-semibold uppercase tracking-[0.2em] text-slate-400">
                        "Horizon"
                    </p>
                    <h1 class="text-2xl font-semibold text-slate-900">
                        "Sign up"
                    </h1>
                    <p class="text-sm text-slate-500">
                        "Please enter your details to open an account."
                    </p>
                </div>

                <div class="mt-6 space-y-4">
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-slate-700"
                            for="name"
                        >
                            "Name"
                        </label>
                        <input
                            id="name"
                            type="text"
                            autofocus
                            class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                            autocomplete="name"
                            placeholder="Enter your first name"
                            required
                            on:input=move |event| set_name.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-slate-700"
                            for="email"
                        >
                            "Email"
                        </label>
                        <input
                            id="email"
                            type="email"
                            class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                            autocomplete="email"
                            inputmode="email"
                            placeholder="Enter your email"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-slate-700"
                            for="password"
                        >
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                            autocomplete="new-password"
                            placeholder="Enter your password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>

                    <Button button_type="submit" disabled=signup_action.pending()>
                        "Sign up"
                    </Button>
                </div>

                {move || {
                    signup_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    success
                        .get()
                        .then_some(view! {
                            <div class="mt-4">
                                <Alert
                                    kind=AlertKind::Success
                                    message="Account created. Welcome to Horizon.".to_string()
                                />
                            </div>
                        })
                }}
                {move || {
                    error.get().map(|err| {
                        let message = format_error(&err);
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                    })
                }}
            </form>
        </div>
    }
}

/// Maps internal errors to user-facing strings without leaking details.
fn format_error(err: &AppError) -> String {
    match err {
        AppError::Config(message) => message.clone(),
        AppError::Http { .. } => "Error creating your account. Please try again.".to_string(),
        _ => err.to_string(),
    }
}
