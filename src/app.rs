//! App Root Component
//!
//! Routing table, global session provider, and the auth gate for the
//! dashboard area.

use leptos::*;
use leptos_router::*;

use crate::pages::{Dashboard, Landing, Legal, Login, Playground, Signup};
use crate::state::session::{init_session, provide_session_state, SessionState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide session state to all components
    provide_session_state();

    // Resolve any delegated sign-in returning via the URL fragment
    let state = use_context::<SessionState>().expect("SessionState not found");
    init_session(state);

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Landing />
                <Route path="/login" view=Login />
                <Route path="/signup" view=Signup />

                // One legal view behind four paths
                <Route path="/legal" view=Legal />
                <Route path="/privacy" view=Legal />
                <Route path="/terms" view=Legal />
                <Route path="/policy" view=Legal />

                <Route path="/dashboard" view=|| view! { <Protected><Dashboard /></Protected> } />
                <Route
                    path="/dashboard/playground"
                    view=|| view! { <Protected><Playground /></Protected> }
                />

                // Unknown dashboard sub-paths land on the dashboard root
                <Route path="/dashboard/*any" view=|| view! { <Redirect path="/dashboard" /> } />
            </Routes>
        </Router>
    }
}

/// Auth gate for dashboard routes: waits for session resolution, then
/// either renders its children or sends the visitor to the login page.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    view! {
        {move || {
            if state.resolving.get() {
                view! {
                    <div class="min-h-screen bg-[#F9F8F4] flex items-center justify-center">
                        <div class="loading-spinner w-8 h-8" />
                    </div>
                }
                .into_view()
            } else if state.session.get().is_some() {
                children().into_view()
            } else {
                view! { <Redirect path="/login" /> }.into_view()
            }
        }}
    }
}
