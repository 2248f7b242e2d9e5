//! HTTP Transport Adapter
//!
//! `HttpApi` implements the backend contract over `gloo-net` fetch calls.
//! Success/error normalization lives here; message extraction is the pure
//! `rejection_message` helper in `api.rs`.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{encode_segment, is_json, rejection_message, ApiError, CuratorApi};
use crate::models::{
    AvailableIntegration, BlacklistState, EntitySnapshot, IntegrationEntry, TargetType,
    WhitelistState,
};

const SELECTED_URL: &str = "/api/integrations/selected";
const AVAILABLE_URL: &str = "/api/integrations/available";
const BLACKLIST_URL: &str = "/api/blacklist";
const WHITELIST_URL: &str = "/api/whitelist";
const ENTITIES_URL: &str = "/api/entities";
const INGEST_URL: &str = "/api/entities/ingest";

/// Production `CuratorApi` speaking JSON over HTTP to the curator backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpApi;

// ========================
// Request Body Structs
// ========================

#[derive(Serialize)]
struct SelectIntegrationBody<'a> {
    entry_id: &'a str,
}

#[derive(Serialize)]
struct BlacklistEntryBody<'a> {
    target_type: &'a str,
    target_id: &'a str,
}

#[derive(Serialize)]
struct WhitelistEntryBody<'a> {
    entity_id: &'a str,
}

// ========================
// Transport Helpers
// ========================

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Reject non-2xx responses with the backend-provided message.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Rejected(rejection_message(
        status,
        &status_text,
        &body,
    )))
}

/// Decode a success body; `None` for 204 No Content.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
    if response.status() == 204 {
        return Ok(None);
    }
    let content_type = response.headers().get("content-type").unwrap_or_default();
    if !is_json(&content_type) {
        return Err(ApiError::Transport(format!(
            "unexpected content type: {}",
            content_type
        )));
    }
    response.json::<T>().await.map(Some).map_err(transport)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(transport)?;
    let response = check(response).await?;
    decode(response)
        .await?
        .ok_or_else(|| ApiError::Transport("empty response body".to_string()))
}

async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<Response, ApiError> {
    let response = Request::post(url)
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    check(response).await
}

/// Mutations ignore any success body; 204 is the normal case.
async fn post_no_content<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let _ = post_json(url, body).await?;
    Ok(())
}

async fn delete(url: &str) -> Result<(), ApiError> {
    let response = Request::delete(url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(transport)?;
    let _ = check(response).await?;
    Ok(())
}

impl CuratorApi for HttpApi {
    async fn selected_integrations(&self) -> Result<Vec<IntegrationEntry>, ApiError> {
        get_json(SELECTED_URL).await
    }

    async fn available_integrations(&self) -> Result<Vec<AvailableIntegration>, ApiError> {
        get_json(AVAILABLE_URL).await
    }

    async fn select_integration(&self, entry_id: &str) -> Result<(), ApiError> {
        post_no_content(SELECTED_URL, &SelectIntegrationBody { entry_id }).await
    }

    async fn deselect_integration(&self, entry_id: &str) -> Result<(), ApiError> {
        delete(&format!("{}/{}", SELECTED_URL, encode_segment(entry_id))).await
    }

    async fn fetch_blacklist(&self) -> Result<BlacklistState, ApiError> {
        get_json(BLACKLIST_URL).await
    }

    async fn add_blacklist_entry(
        &self,
        target: TargetType,
        target_id: &str,
    ) -> Result<(), ApiError> {
        let body = BlacklistEntryBody {
            target_type: target.as_str(),
            target_id,
        };
        post_no_content(BLACKLIST_URL, &body).await
    }

    async fn remove_blacklist_entry(
        &self,
        target: TargetType,
        target_id: &str,
    ) -> Result<(), ApiError> {
        delete(&format!(
            "{}/{}/{}",
            BLACKLIST_URL,
            target.as_str(),
            encode_segment(target_id)
        ))
        .await
    }

    async fn fetch_whitelist(&self) -> Result<WhitelistState, ApiError> {
        get_json(WHITELIST_URL).await
    }

    async fn add_whitelist_entry(&self, entity_id: &str) -> Result<(), ApiError> {
        post_no_content(WHITELIST_URL, &WhitelistEntryBody { entity_id }).await
    }

    async fn remove_whitelist_entry(&self, entity_id: &str) -> Result<(), ApiError> {
        delete(&format!("{}/{}", WHITELIST_URL, encode_segment(entity_id))).await
    }

    async fn fetch_entities(&self) -> Result<EntitySnapshot, ApiError> {
        get_json(ENTITIES_URL).await
    }

    async fn ingest_entities(&self) -> Result<EntitySnapshot, ApiError> {
        let response = post_json(INGEST_URL, &serde_json::json!({})).await?;
        decode(response)
            .await?
            .ok_or_else(|| ApiError::Transport("empty ingest response".to_string()))
    }
}
