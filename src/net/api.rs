//! HTTP handle shared by every component.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: calls fail with [`AppError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`AppError::Http`] carrying the service's
//! `Description` when the body has one, so pages can show it as-is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;

use super::types::{ErrorBody, LoginResponse, Profile, UserList};
use crate::error::AppError;
use crate::state::auth::AuthContext;

pub const USERNAME_MIN_LEN: usize = 8;
pub const USERNAME_MAX_LEN: usize = 16;

/// Base URL plus the session it authenticates with.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    auth: AuthContext,
}

/// The app-wide [`ApiClient`] from context.
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, auth: AuthContext) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, auth }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /session` with the username as a `text/plain` body.
    /// Returns the session token; does not store it.
    ///
    /// # Errors
    ///
    /// Validation, network, HTTP status and body parsing failures.
    pub async fn login(&self, username: &str) -> Result<String, AppError> {
        let username = validate_username(username)?;
        let url = self.url("/session");
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .header("Content-Type", "text/plain")
                .body(username)
                .map_err(|e| AppError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AppError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| AppError::Parse(e.to_string()))?;
            if !(200..300).contains(&status) {
                return Err(http_error(status, &body));
            }
            parse_login_body(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("login for {username} via {url} skipped outside the browser");
            Err(AppError::Unavailable)
        }
    }

    /// `GET /users/{username}/profile`, authorized with the session token.
    ///
    /// # Errors
    ///
    /// Validation (including a missing session), network, HTTP status and
    /// body parsing failures.
    pub async fn fetch_profile(&self, username: &str) -> Result<Profile, AppError> {
        let username = validate_username(username)?;
        let token = self
            .auth
            .token()
            .ok_or_else(|| AppError::Validation("Sign in to view profiles.".to_owned()))?;
        let url = self.url(&format!("/users/{username}/profile"));
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &token)
                .send()
                .await
                .map_err(|e| AppError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| AppError::Parse(e.to_string()))?;
            if !(200..300).contains(&status) {
                return Err(http_error(status, &body));
            }
            serde_json::from_str(&body).map_err(|e| AppError::Parse(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("profile fetch {url} with token of {} bytes skipped", token.len());
            Err(AppError::Unavailable)
        }
    }

    /// `GET /users/?searched-username=…`: users whose name contains `query`.
    ///
    /// # Errors
    ///
    /// Validation (including a missing session), network, HTTP status and
    /// body parsing failures.
    pub async fn search_users(&self, query: &str) -> Result<UserList, AppError> {
        let query = validate_search_query(query)?;
        let token = self
            .auth
            .token()
            .ok_or_else(|| AppError::Validation("Sign in to search users.".to_owned()))?;
        let url = self.url("/users/");
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &token)
                .query([("searched-username", query.as_str())])
                .send()
                .await
                .map_err(|e| AppError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| AppError::Parse(e.to_string()))?;
            if !(200..300).contains(&status) {
                return Err(http_error(status, &body));
            }
            parse_user_list(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("search {query:?} at {url} with token of {} bytes skipped", token.len());
            Err(AppError::Unavailable)
        }
    }
}

/// Trim and check a username: 8 to 16 ASCII letters, digits and `._-`,
/// starting and ending alphanumeric, no two separators in a row.
///
/// # Errors
///
/// [`AppError::Validation`] with a user-facing message.
pub fn validate_username(raw: &str) -> Result<String, AppError> {
    let name = raw.trim();
    let len = name.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(AppError::Validation(format!(
            "Username must be {USERNAME_MIN_LEN} to {USERNAME_MAX_LEN} characters."
        )));
    }
    let is_separator = |c: char| matches!(c, '.' | '_' | '-');
    if name.chars().any(|c| !c.is_ascii_alphanumeric() && !is_separator(c)) {
        return Err(AppError::Validation(
            "Username may only contain letters, digits, '.', '_' and '-'.".to_owned(),
        ));
    }
    let first_last_ok = name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
        && name.chars().last().is_some_and(|c| c.is_ascii_alphanumeric());
    let doubled = name
        .as_bytes()
        .windows(2)
        .any(|pair| is_separator(char::from(pair[0])) && is_separator(char::from(pair[1])));
    if !first_last_ok || doubled {
        return Err(AppError::Validation(
            "Username must start and end with a letter or digit, without repeated separators."
                .to_owned(),
        ));
    }
    Ok(name.to_owned())
}

/// Trim and check a search fragment: non-empty, at most
/// [`USERNAME_MAX_LEN`] characters drawn from the username alphabet.
///
/// # Errors
///
/// [`AppError::Validation`] with a user-facing message.
pub fn validate_search_query(raw: &str) -> Result<String, AppError> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(AppError::Validation("Type part of a username to search.".to_owned()));
    }
    if query.chars().count() > USERNAME_MAX_LEN
        || query
            .chars()
            .any(|c| !c.is_ascii_alphanumeric() && !matches!(c, '.' | '_' | '-'))
    {
        return Err(AppError::Validation(
            "Search with letters, digits, '.', '_' or '-' only.".to_owned(),
        ));
    }
    Ok(query.to_owned())
}

/// Parse a `GET /users/` body. An empty body (204 No Content) is no users.
///
/// # Errors
///
/// [`AppError::Parse`] for malformed JSON.
pub fn parse_user_list(body: &str) -> Result<UserList, AppError> {
    if body.trim().is_empty() {
        return Ok(UserList::default());
    }
    serde_json::from_str(body).map_err(|e| AppError::Parse(e.to_string()))
}

/// Extract the session token from a `POST /session` body.
///
/// Accepts a JSON user, a JSON `{ "RandID": ... }`, or a bare identifier.
///
/// # Errors
///
/// [`AppError::Parse`] when no non-empty token can be found.
pub fn parse_login_body(body: &str) -> Result<String, AppError> {
    let body = body.trim();
    let token = match serde_json::from_str::<LoginResponse>(body) {
        Ok(response) => response.token().to_owned(),
        Err(_) if !body.starts_with(['{', '[', '"']) => body.to_owned(),
        Err(e) => return Err(AppError::Parse(e.to_string())),
    };
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(AppError::Parse("login response carried no session token".to_owned()));
    }
    Ok(token)
}

/// Map a failed response to [`AppError::Http`].
pub fn http_error(status: u16, body: &str) -> AppError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => error.description,
        Err(_) if body.trim().is_empty() => "request failed".to_owned(),
        Err(_) => body.trim().to_owned(),
    };
    AppError::Http { status, message }
}
