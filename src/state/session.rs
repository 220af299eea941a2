//! Session State
//!
//! Reactive holder for the identity-provider session. Views never query
//! the provider directly; they read the current session through this
//! holder and react to changes via its signals. The session lives in
//! memory only and disappears on reload or sign-out.

use leptos::*;

use crate::api::auth::{self, Session};

/// Process-wide session state provided to all components
#[derive(Clone)]
pub struct SessionState {
    /// Current session, if a sign-in has completed
    pub session: RwSignal<Option<Session>>,
    /// True until startup session resolution has finished
    pub resolving: RwSignal<bool>,
}

/// Provide session state to the component tree
pub fn provide_session_state() {
    let state = SessionState {
        session: create_rw_signal(None),
        resolving: create_rw_signal(true),
    };

    provide_context(state);
}

impl SessionState {
    /// Whether a signed-in identity is present
    pub fn is_authenticated(&self) -> bool {
        self.session.get().is_some()
    }

    /// Name to greet the user with
    pub fn display_name(&self) -> String {
        self.session
            .get()
            .map(|s| display_name_of(s.user.user_metadata.full_name.as_deref(), s.user.email.as_deref()))
            .unwrap_or_else(|| "Account".to_string())
    }

    /// Short initials for the avatar chip
    pub fn initials(&self) -> String {
        initials_of(&self.display_name())
    }

    /// Email shown under the avatar chip
    pub fn email(&self) -> String {
        self.session
            .get()
            .and_then(|s| s.user.email)
            .unwrap_or_default()
    }

    /// Drop the session, invalidating it on the provider side as well
    pub fn sign_out(&self) {
        if let Some(session) = self.session.get_untracked() {
            spawn_local(async move {
                if let Err(e) = auth::sign_out(&session.access_token).await {
                    web_sys::console::error_1(&format!("Sign-out failed: {}", e).into());
                }
            });
        }
        self.session.set(None);
    }
}

/// Resolve the startup session. A delegated sign-in returns to the app
/// with the access token in the URL fragment; anything else starts out
/// signed off.
pub fn init_session(state: SessionState) {
    let hash = window().location().hash().unwrap_or_default();

    match fragment_access_token(&hash) {
        Some(token) => {
            spawn_local(async move {
                match auth::fetch_user(&token).await {
                    Ok(user) => {
                        // Drop the token from the address bar
                        let _ = window().location().set_hash("");
                        state.session.set(Some(Session {
                            access_token: token,
                            user,
                        }));
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Delegated sign-in failed: {}", e).into(),
                        );
                    }
                }
                state.resolving.set(false);
            });
        }
        None => state.resolving.set(false),
    }
}

/// Pull the access token out of an OAuth redirect fragment
/// (`#access_token=...&token_type=bearer&...`)
fn fragment_access_token(hash: &str) -> Option<String> {
    let hash = hash.strip_prefix('#').unwrap_or(hash);

    hash.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "access_token" && !value.is_empty()).then(|| value.to_string())
    })
}

/// Pick the best display name available for an identity
fn display_name_of(full_name: Option<&str>, email: Option<&str>) -> String {
    if let Some(name) = full_name {
        if !name.trim().is_empty() {
            return name.trim().to_string();
        }
    }

    email
        .and_then(|e| e.split('@').next())
        .filter(|local| !local.is_empty())
        .map(|local| local.to_string())
        .unwrap_or_else(|| "Account".to_string())
}

/// First letters of the first and last words, uppercased
fn initials_of(name: &str) -> String {
    let mut firsts = name.split_whitespace().filter_map(|w| w.chars().next());

    match (firsts.next(), firsts.last()) {
        (Some(first), Some(last)) => first.to_uppercase().chain(last.to_uppercase()).collect(),
        (Some(first), None) => first.to_uppercase().collect(),
        _ => "?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_access_token() {
        assert_eq!(
            fragment_access_token("#access_token=abc123&token_type=bearer"),
            Some("abc123".to_string())
        );
        assert_eq!(
            fragment_access_token("#token_type=bearer&access_token=xyz"),
            Some("xyz".to_string())
        );
        assert_eq!(fragment_access_token("#access_token="), None);
        assert_eq!(fragment_access_token(""), None);
        assert_eq!(fragment_access_token("#foo=bar"), None);
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        assert_eq!(
            display_name_of(Some("Ada Lovelace"), Some("ada@example.com")),
            "Ada Lovelace"
        );
        assert_eq!(display_name_of(Some("  "), Some("ada@example.com")), "ada");
        assert_eq!(display_name_of(None, Some("ada@example.com")), "ada");
        assert_eq!(display_name_of(None, None), "Account");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials_of("Ada Lovelace"), "AL");
        assert_eq!(initials_of("Ada Augusta Lovelace"), "AL");
        assert_eq!(initials_of("ada"), "A");
        assert_eq!(initials_of(""), "?");
    }
}
