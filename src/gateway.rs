//! Tag Gateway Bindings
//!
//! Frontend bindings for the REST tag gateway, organized like the rest of
//! the async boundary: free functions returning `Result<T, String>`.

use percent_encoding::utf8_percent_encode;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::TagPage;
use crate::route::QUERY_VALUE;

/// Base URL of the tag gateway.
pub const GATEWAY_BASE: &str = "http://localhost:3333";

/// Fixed page size for tag listing.
pub const PAGE_SIZE: u32 = 10;

/// Body of `POST /tags`. `amountOfVideos` always starts at 0; the gateway
/// owns the counter afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTagArgs {
    pub title: String,
    pub slug: String,
    #[serde(rename = "amountOfVideos")]
    pub amount_of_videos: u32,
}

pub(crate) fn tags_url(base: &str, filter: &str, page: u32) -> String {
    format!(
        "{base}/tags?_page={page}&_per_page={PAGE_SIZE}&title={}",
        utf8_percent_encode(filter, QUERY_VALUE)
    )
}

/// Fetch one page of tags matching `filter`.
pub async fn fetch_tags(filter: &str, page: u32) -> Result<TagPage, String> {
    let url = tags_url(GATEWAY_BASE, filter, page);
    let request = Request::new_with_str(&url).map_err(js_error)?;
    let response = send(request).await?;
    let body = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}

/// Create a tag. The response body is not consumed beyond the status.
pub async fn create_tag(args: &CreateTagArgs) -> Result<(), String> {
    let body = serde_json::to_string(args).map_err(|e| e.to_string())?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    let url = format!("{GATEWAY_BASE}/tags");
    let request = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;
    send(request).await?;
    Ok(())
}

async fn send(request: Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;
    if !response.ok() {
        return Err(format!("gateway responded with status {}", response.status()));
    }
    Ok(response)
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
