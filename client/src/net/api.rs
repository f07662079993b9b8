//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` carrying the server's `{ "error" }`
//! message when present, so pages can surface it in a toast verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{CaseStudy, EditableRecord, Integration, Toggle};

use super::types::AdminIdentity;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;

#[cfg(any(test, feature = "hydrate"))]
fn admin_collection_endpoint(collection: &str) -> String {
    format!("/api/admin/{collection}")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_record_endpoint(collection: &str, id: &str) -> String {
    format!("/api/admin/{collection}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_toggle_endpoint(collection: &str, id: &str, toggle: Toggle) -> String {
    format!("/api/admin/{collection}/{id}/{}", toggle.as_path())
}

#[cfg(any(test, feature = "hydrate"))]
fn case_study_endpoint(slug: &str) -> String {
    format!("/api/case-studies/{slug}")
}

/// Server `{ "error" }` message, or a status line when the body is not one.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body).map_or_else(|_| format!("request failed: {status}"), |b| b.error)
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(failure_message(status, &body));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn expect_success(resp: gloo_net::http::Response) -> Result<(), String> {
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(failure_message(status, &body))
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the signed-in admin from `/api/auth/me`.
/// Returns `None` if not signed in or on the server.
pub async fn fetch_current_admin() -> Option<AdminIdentity> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<AdminIdentity>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/auth/login`; the server sets the session cookie.
///
/// # Errors
///
/// Returns the server's message for rejected credentials or non-admin users.
pub async fn login(email: &str, password: &str) -> Result<AdminIdentity, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest { email, password };
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Sign out via `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

// =============================================================================
// PUBLIC READS
// =============================================================================

/// Published case studies in display order.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_published_case_studies() -> Result<Vec<CaseStudy>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/case-studies")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// One published case study by slug.
///
/// # Errors
///
/// Returns an error string if the request fails or the slug is unknown.
pub async fn fetch_case_study(slug: &str) -> Result<CaseStudy, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&case_study_endpoint(slug))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        Err("not available on server".to_owned())
    }
}

/// Active integrations in display order.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_active_integrations() -> Result<Vec<Integration>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/integrations")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// ADMIN COLLECTIONS
// =============================================================================

/// `GET /api/admin/{collection}`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn list_records<R: EditableRecord>() -> Result<Vec<R>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&admin_collection_endpoint(R::COLLECTION))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// `POST /api/admin/{collection}`.
///
/// # Errors
///
/// Returns the server's validation or conflict message on rejection.
pub async fn create_record<R: EditableRecord>(draft: &R::Draft) -> Result<R, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&admin_collection_endpoint(R::COLLECTION))
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// `PUT /api/admin/{collection}/{id}`.
///
/// # Errors
///
/// Returns the server's validation or conflict message on rejection.
pub async fn update_record<R: EditableRecord>(id: &str, draft: &R::Draft) -> Result<R, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&admin_record_endpoint(R::COLLECTION, id))
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft);
        Err("not available on server".to_owned())
    }
}

/// `DELETE /api/admin/{collection}/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_record<R: EditableRecord>(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&admin_record_endpoint(R::COLLECTION, id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_success(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// `POST /api/admin/{collection}/{id}/{toggle}`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn toggle_record<R: EditableRecord>(id: &str, toggle: Toggle) -> Result<R, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&admin_toggle_endpoint(R::COLLECTION, id, toggle))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, toggle);
        Err("not available on server".to_owned())
    }
}
