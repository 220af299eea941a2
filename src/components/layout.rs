//! Dashboard Layout
//!
//! Persistent sidebar navigation plus a content slot for the dashboard
//! pages. The shell is presentational; only sign-out has behavior.

use leptos::*;
use leptos_router::*;

use crate::state::session::SessionState;

/// Sidebar entries. Only the first two routes exist; the rest are part of
/// the shell's mock surface.
const MENU_ITEMS: [(&str, &str, &str); 5] = [
    ("▦", "Dashboard", "/dashboard"),
    ("❯_", "GaussLM Playground", "/dashboard/playground"),
    ("🗄", "Knowledge Base", "/dashboard/knowledge"),
    ("📈", "Usage & Billing", "/dashboard/usage"),
    ("⚙", "Settings", "/dashboard/settings"),
];

/// Dashboard shell wrapping page content
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <div class="min-h-screen bg-[#F9F8F4] flex text-stone-800">
            // Sidebar
            <aside class="fixed left-0 top-0 h-screen w-64 bg-stone-900 text-stone-400 flex flex-col border-r border-stone-800 z-20">
                // Brand
                <A href="/" class="p-6 border-b border-stone-800 flex items-center gap-3">
                    <span class="w-8 h-8 bg-white text-stone-900 rounded-md flex items-center justify-center font-serif font-bold">
                        "P"
                    </span>
                    <span>
                        <span class="block text-white font-serif tracking-wide text-lg">"PENROSE"</span>
                        <span class="block text-[10px] uppercase tracking-widest text-amber-500 font-bold">
                            "Enterprise"
                        </span>
                    </span>
                </A>

                // Navigation
                <nav class="flex-1 py-6 px-3 space-y-1">
                    {MENU_ITEMS
                        .iter()
                        .copied()
                        .map(|(icon, label, path)| view! { <SideLink icon=icon label=label path=path /> })
                        .collect_view()}
                </nav>

                // Sign out and user chip
                <div class="p-4 border-t border-stone-800">
                    <SignOutButton />

                    <div class="mt-4 flex items-center gap-3 px-4">
                        <div class="w-8 h-8 rounded-full bg-amber-500 text-stone-900 flex items-center justify-center font-bold text-xs">
                            {
                                let state = state.clone();
                                move || state.initials()
                            }
                        </div>
                        <div class="overflow-hidden">
                            <p class="text-sm text-white truncate">
                                {
                                    let state = state.clone();
                                    move || state.display_name()
                                }
                            </p>
                            <p class="text-xs text-stone-500 truncate">{move || state.email()}</p>
                        </div>
                    </div>
                </div>
            </aside>

            // Content area
            <main class="flex-1 ml-64 min-h-screen flex flex-col">
                <TopBar />
                <div class="p-8">{children()}</div>
            </main>
        </div>
    }
}

/// Individual sidebar link
#[component]
fn SideLink(icon: &'static str, label: &'static str, path: &'static str) -> impl IntoView {
    view! {
        <A
            href=path
            exact=true
            class="w-full flex items-center gap-3 px-4 py-3 text-sm font-medium rounded-lg transition-all duration-200
                   hover:bg-stone-800/50 hover:text-stone-200"
            active_class="bg-stone-800 text-white shadow-md"
        >
            <span class="text-amber-500/80 w-5 text-center">{icon}</span>
            {label}
        </A>
    }
}

/// Sign out of the provider and leave the dashboard
#[component]
fn SignOutButton() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");
    let navigate = use_navigate();

    let on_click = move |_| {
        state.sign_out();
        navigate("/login", Default::default());
    };

    view! {
        <button
            on:click=on_click
            class="w-full flex items-center gap-3 px-4 py-3 text-sm font-medium text-stone-400
                   hover:text-white hover:bg-red-900/20 rounded-lg transition-all"
        >
            <span class="w-5 text-center">"⎋"</span>
            "Sign Out"
        </button>
    }
}

/// Top header: search box, notifications, system status
#[component]
fn TopBar() -> impl IntoView {
    view! {
        <header class="h-16 bg-white border-b border-stone-200 sticky top-0 z-10 px-8 flex items-center justify-between">
            // Search
            <div class="relative w-96">
                <span class="absolute left-3 top-1/2 -translate-y-1/2 text-stone-400 text-sm">"🔍"</span>
                <input
                    type="text"
                    placeholder="Search projects, logs, or documentation..."
                    class="w-full pl-10 pr-4 py-2 bg-stone-50 border border-stone-200 rounded-md text-sm
                           focus:outline-none focus:ring-1 focus:ring-stone-400 focus:bg-white transition-all"
                />
            </div>

            // Right actions
            <div class="flex items-center gap-6">
                <button class="relative text-stone-500 hover:text-stone-800 transition-colors">
                    "🔔"
                    <span class="absolute top-0 right-0 w-2 h-2 bg-red-500 rounded-full border-2 border-white" />
                </button>
                <div class="h-6 w-px bg-stone-200" />
                <span class="flex items-center gap-2 text-sm font-medium text-stone-600">
                    <span class="w-2 h-2 rounded-full bg-green-500" />
                    "System Operational"
                </span>
            </div>
        </header>
    }
}
