//! Signup Page
//!
//! Account registration form. Success routes to the login page; provider
//! failures stay inline with the fields untouched.

use leptos::*;
use leptos_router::*;

use crate::api::auth::{self, OAuthProvider};
use crate::components::SocialButton;

/// Signup page component
#[component]
pub fn Signup() -> impl IntoView {
    let navigate = use_navigate();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (show_password, set_show_password) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            set_loading.set(true);
            set_error.set(None);

            let name = name.get();
            let email = email.get();
            let password = password.get();
            let navigate = navigate.clone();
            spawn_local(async move {
                match auth::sign_up(&name, &email, &password).await {
                    Ok(()) => {
                        // Verification happens over email; send them to login
                        navigate("/login", Default::default());
                    }
                    Err(e) => {
                        set_error.set(Some(e));
                    }
                }
                set_loading.set(false);
            });
        }
    };

    let oauth = move |provider: OAuthProvider| {
        if let Err(e) = auth::sign_in_with_oauth(provider) {
            set_error.set(Some(e));
        }
    };

    view! {
        <div class="min-h-screen bg-[#F9F8F4] flex flex-col items-center justify-center p-6 relative">
            // Back button
            <A
                href="/"
                class="absolute top-8 left-8 flex items-center gap-2 text-stone-500 hover:text-stone-900
                       transition-colors text-sm font-medium uppercase tracking-wider"
            >
                "← Back to Home"
            </A>

            <div class="w-full max-w-md bg-white rounded-2xl shadow-xl overflow-hidden border border-stone-200">
                <div class="p-10">
                    <div class="text-center mb-8">
                        <h2 class="font-serif text-3xl font-medium text-stone-900">"Create Account"</h2>
                        <p class="text-stone-500 text-sm mt-2">"Join the future of foundational intelligence"</p>
                    </div>

                    {move || {
                        error.get().map(|msg| view! {
                            <div class="mb-6 p-4 bg-red-50 border border-red-200 text-red-600 text-sm rounded-lg">
                                {msg}
                            </div>
                        })
                    }}

                    <div class="space-y-4 mb-8">
                        <SocialButton
                            provider=OAuthProvider::Google
                            label="Sign up with Google".to_string()
                            on_click=oauth
                        />
                        <SocialButton
                            provider=OAuthProvider::Facebook
                            label="Sign up with Facebook".to_string()
                            on_click=oauth
                        />
                        <SocialButton
                            provider=OAuthProvider::Azure
                            label="Sign up with Microsoft".to_string()
                            on_click=oauth
                        />
                    </div>

                    <div class="relative flex items-center justify-center mb-8">
                        <div class="absolute inset-0 flex items-center">
                            <div class="w-full border-t border-stone-200" />
                        </div>
                        <span class="relative z-10 bg-white px-4 text-xs font-bold text-stone-400 uppercase tracking-widest">
                            "or sign up with email"
                        </span>
                    </div>

                    <form on:submit=on_submit class="space-y-5">
                        <div>
                            <label class="block text-xs font-bold uppercase tracking-widest text-stone-500 mb-2">
                                "Full Name"
                            </label>
                            <input
                                type="text"
                                required
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                placeholder="Ada Lovelace"
                                class="w-full px-4 py-3 bg-[#F9F8F4] border border-stone-200 rounded-lg text-stone-800
                                       focus:outline-none focus:border-amber-500 focus:ring-1 focus:ring-amber-500 transition-all"
                            />
                        </div>

                        <div>
                            <label class="block text-xs font-bold uppercase tracking-widest text-stone-500 mb-2">
                                "Work Email"
                            </label>
                            <input
                                type="email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                placeholder="ada@company.com"
                                class="w-full px-4 py-3 bg-[#F9F8F4] border border-stone-200 rounded-lg text-stone-800
                                       focus:outline-none focus:border-amber-500 focus:ring-1 focus:ring-amber-500 transition-all"
                            />
                        </div>

                        <div>
                            <label class="block text-xs font-bold uppercase tracking-widest text-stone-500 mb-2">
                                "Password"
                            </label>
                            <div class="relative">
                                <input
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    required
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    placeholder="Create a password"
                                    class="w-full pl-4 pr-12 py-3 bg-[#F9F8F4] border border-stone-200 rounded-lg text-stone-800
                                           focus:outline-none focus:border-amber-500 focus:ring-1 focus:ring-amber-500 transition-all"
                                />
                                <button
                                    type="button"
                                    on:click=move |_| set_show_password.update(|s| *s = !*s)
                                    class="absolute right-4 top-1/2 -translate-y-1/2 text-stone-400 hover:text-stone-600 focus:outline-none text-sm"
                                >
                                    {move || if show_password.get() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                        </div>

                        <label class="flex items-start gap-2 text-sm text-stone-500 cursor-pointer">
                            <input type="checkbox" required class="mt-1 rounded border-stone-300" />
                            <span>
                                "I agree to the "
                                <A href="/terms" class="underline hover:text-stone-800">"Terms of Service"</A>
                                " and "
                                <A href="/privacy" class="underline hover:text-stone-800">"Privacy Policy"</A>
                            </span>
                        </label>

                        <button
                            type="submit"
                            disabled=move || loading.get()
                            class="w-full bg-stone-900 text-white font-bold uppercase tracking-widest text-xs py-4
                                   rounded-lg hover:bg-stone-800 transition-all shadow-lg hover:shadow-xl
                                   disabled:opacity-70 disabled:cursor-not-allowed"
                        >
                            {move || if loading.get() { "Creating Account..." } else { "Create Account" }}
                        </button>
                    </form>
                </div>

                <div class="bg-stone-50 p-6 text-center border-t border-stone-200">
                    <p class="text-stone-600 text-sm">
                        "Already have an account? "
                        <A href="/login" class="text-stone-900 font-bold hover:underline">"Log in"</A>
                    </p>
                </div>
            </div>
        </div>
    }
}
