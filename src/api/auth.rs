//! Identity Provider Client
//!
//! Functions for the hosted identity service (GoTrue-compatible REST API).
//! Every operation is an opaque success/failure: callers either get a
//! session handle back or the provider's error message as a plain string,
//! which the auth forms display verbatim.

use gloo_net::http::Request;

/// Default identity provider base URL
pub const DEFAULT_AUTH_BASE: &str = "https://auth.penrose-ai.com/auth/v1";

/// Publishable API key sent with every provider request
pub const DEFAULT_AUTH_KEY: &str = "pk_live_penrose_site";

/// Get the provider base URL from local storage or use default
pub fn get_auth_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("penrose_auth_url") {
                url
            } else {
                DEFAULT_AUTH_BASE.to_string()
            }
        } else {
            DEFAULT_AUTH_BASE.to_string()
        }
    } else {
        DEFAULT_AUTH_BASE.to_string()
    };
    normalize_base(&url)
}

/// Set the provider base URL in local storage
pub fn set_auth_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("penrose_auth_url", url);
        }
    }
}

/// Get the publishable key from local storage or use default
fn get_auth_key() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(key)) = storage.get_item("penrose_auth_key") {
                return key;
            }
        }
    }
    DEFAULT_AUTH_KEY.to_string()
}

/// Normalize a base URL: remove trailing slash
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// ============ Types ============

/// Authenticated identity as reported by the provider
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Free-form profile data attached at signup
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Opaque session handle issued by the provider
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

/// Delegated sign-in providers offered on the auth forms
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Facebook,
    Azure,
}

impl OAuthProvider {
    /// Provider slug as the authorize endpoint expects it
    pub fn slug(self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Facebook => "facebook",
            OAuthProvider::Azure => "azure",
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    user: AuthUser,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ProviderError {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ProviderError {
    /// The message to surface inline, verbatim from the provider
    fn message(self) -> String {
        self.error_description
            .or(self.msg)
            .or(self.error)
            .unwrap_or_else(|| "Authentication failed".to_string())
    }
}

/// Extract the provider's error message from a non-OK response
async fn provider_error(response: gloo_net::http::Response) -> String {
    response
        .json::<ProviderError>()
        .await
        .unwrap_or_default()
        .message()
}

// ============ Operations ============

/// Sign in with email and password
pub async fn sign_in_with_password(email: &str, password: &str) -> Result<Session, String> {
    #[derive(serde::Serialize)]
    struct PasswordGrant {
        email: String,
        password: String,
    }

    let base = get_auth_base();

    let response = Request::post(&format!("{}/token?grant_type=password", base))
        .header("apikey", &get_auth_key())
        .json(&PasswordGrant {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(provider_error(response).await);
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(Session {
        access_token: token.access_token,
        user: token.user,
    })
}

/// Register a new account with email and password
pub async fn sign_up(full_name: &str, email: &str, password: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct SignupData {
        full_name: String,
    }

    #[derive(serde::Serialize)]
    struct SignupRequest {
        email: String,
        password: String,
        data: SignupData,
    }

    let base = get_auth_base();

    let response = Request::post(&format!("{}/signup", base))
        .header("apikey", &get_auth_key())
        .json(&SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            data: SignupData {
                full_name: full_name.to_string(),
            },
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(provider_error(response).await);
    }

    Ok(())
}

/// Authorize endpoint for a delegated sign-in. `redirect_to` must already
/// be URI-encoded.
pub fn oauth_authorize_url(base: &str, provider: OAuthProvider, redirect_to: &str) -> String {
    format!(
        "{}/authorize?provider={}&redirect_to={}",
        base,
        provider.slug(),
        redirect_to
    )
}

/// Start a delegated sign-in by redirecting the browser to the provider.
/// The flow resumes on return with the access token in the URL fragment.
pub fn sign_in_with_oauth(provider: OAuthProvider) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| "No origin available".to_string())?;
    let encoded: String = js_sys::encode_uri_component(&origin).into();
    let url = oauth_authorize_url(&get_auth_base(), provider, &encoded);

    window
        .location()
        .set_href(&url)
        .map_err(|_| "Redirect failed".to_string())
}

/// Fetch the identity behind an access token
pub async fn fetch_user(access_token: &str) -> Result<AuthUser, String> {
    let base = get_auth_base();

    let response = Request::get(&format!("{}/user", base))
        .header("apikey", &get_auth_key())
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(provider_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Invalidate the session on the provider side
pub async fn sign_out(access_token: &str) -> Result<(), String> {
    let base = get_auth_base();

    let response = Request::post(&format!("{}/logout", base))
        .header("apikey", &get_auth_key())
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(provider_error(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_strips_trailing_slash() {
        assert_eq!(normalize_base("https://auth.example.com/auth/v1/"), "https://auth.example.com/auth/v1");
        assert_eq!(normalize_base("https://auth.example.com/auth/v1"), "https://auth.example.com/auth/v1");
    }

    #[test]
    fn test_provider_error_precedence() {
        let err = ProviderError {
            error_description: Some("Invalid login credentials".to_string()),
            msg: Some("other".to_string()),
            error: None,
        };
        assert_eq!(err.message(), "Invalid login credentials");

        let err = ProviderError {
            error_description: None,
            msg: Some("Email not confirmed".to_string()),
            error: None,
        };
        assert_eq!(err.message(), "Email not confirmed");

        assert_eq!(ProviderError::default().message(), "Authentication failed");
    }

    #[test]
    fn test_oauth_authorize_url() {
        let url = oauth_authorize_url("https://auth.example.com/auth/v1", OAuthProvider::Google, "https%3A%2F%2Fexample.com");
        assert_eq!(
            url,
            "https://auth.example.com/auth/v1/authorize?provider=google&redirect_to=https%3A%2F%2Fexample.com"
        );
    }
}
