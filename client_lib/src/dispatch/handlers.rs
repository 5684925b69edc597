//! Handlers for the five page triggers
//!
//! Each handler owns its own status and error branching; the differences
//! between them (which statuses count as failure, which category the banner
//! shows) are part of the page's observed behavior and are kept as-is.

use crate::{
    banner,
    error::{AppError, Result},
    models::{ResourceRecord, SubmissionPayload},
    render,
    transport::CONTENT_TYPE_JSON,
    ui::ids,
    App,
};
use http::Method;
use tracing::info;

/// GET via the promise-style transport. Any failure in the block (network,
/// bad status, decode) lands on the banner as "Fetch Error".
pub async fn handle_fetch_request(app: &App) -> Result<()> {
    let url = app.item_url(&app.config().api.fetch_post_id.to_string());
    info!("GET {} (fetch)", url);

    if let Err(err) = fetch_post(app, &url).await {
        banner::show_error(app.ui(), app.hide_delay(), "Fetch Error", Some(&err.to_string()));
    }
    Ok(())
}

async fn fetch_post(app: &App, url: &str) -> Result<()> {
    let response = app
        .fetch_transport()
        .request(Method::GET, url, &[], None)
        .await?;

    if !response.is_success() {
        return Err(AppError::Status(response.status));
    }

    let record: ResourceRecord = response.json()?;
    render::render_into(app.ui().as_ref(), ids::GET_RESULTS, &record);
    Ok(())
}

/// GET via the XHR-style transport. Branches per outcome: 200 renders,
/// other statuses show "XHR Error", transport failure shows "Network Error"
/// with no message. The decode on the 200 branch is unguarded.
pub async fn handle_xhr_request(app: &App) -> Result<()> {
    let url = app.item_url(&app.config().api.xhr_post_id.to_string());
    info!("GET {} (xhr)", url);

    match app
        .xhr_transport()
        .request(Method::GET, &url, &[], None)
        .await
    {
        Ok(response) if response.status == 200 => {
            let record: ResourceRecord = response.json()?;
            render::render_into(app.ui().as_ref(), ids::GET_RESULTS, &record);
        }
        Ok(response) => {
            banner::show_error(
                app.ui(),
                app.hide_delay(),
                "XHR Error",
                Some(&format!("Request failed with status {}", response.status)),
            );
        }
        Err(_) => {
            banner::show_error(app.ui(), app.hide_delay(), "Network Error", None);
        }
    }
    Ok(())
}

/// POST the form payload to the collection endpoint. The response body is
/// decoded and rendered regardless of status; any failure shows "POST Error".
pub async fn handle_post_submit(app: &App) -> Result<()> {
    let payload = SubmissionPayload::from_form(app.ui().as_ref(), "post", app.config().api.user_id);
    let url = app.collection_url();
    info!("POST {} - title: {:?}", url, payload.title);

    if let Err(err) = post_submission(app, &url, &payload).await {
        banner::show_error(app.ui(), app.hide_delay(), "POST Error", Some(&err.to_string()));
    }
    Ok(())
}

async fn post_submission(app: &App, url: &str, payload: &SubmissionPayload) -> Result<()> {
    let body = serde_json::to_string(payload)?;
    let response = app
        .fetch_transport()
        .request(Method::POST, url, &[CONTENT_TYPE_JSON], Some(body))
        .await?;

    // status intentionally not checked
    let record: ResourceRecord = response.json()?;
    render::render_into(app.ui().as_ref(), ids::POST_RESULTS, &record);
    Ok(())
}

/// PUT the form payload to the item endpoint named by the payload's id.
/// An absent id is not guarded against; the malformed endpoint is requested
/// as-is. Status 200 renders, anything else shows "PUT Error", transport
/// failure shows "Network Error" with a fixed message.
pub async fn handle_put_submit(app: &App) -> Result<()> {
    let payload = SubmissionPayload::from_form(app.ui().as_ref(), "put", app.config().api.user_id);
    let url = app.item_url(payload.id.as_deref().unwrap_or_default());
    info!("PUT {} - title: {:?}", url, payload.title);

    let body = serde_json::to_string(&payload)?;

    match app
        .xhr_transport()
        .request(Method::PUT, &url, &[CONTENT_TYPE_JSON], Some(body))
        .await
    {
        Ok(response) if response.status == 200 => {
            let record: ResourceRecord = response.json()?;
            render::render_into(app.ui().as_ref(), ids::PUT_RESULTS, &record);
        }
        Ok(response) => {
            banner::show_error(
                app.ui(),
                app.hide_delay(),
                "PUT Error",
                Some(&format!("Request failed with status {}", response.status)),
            );
        }
        Err(_) => {
            banner::show_error(
                app.ui(),
                app.hide_delay(),
                "Network Error",
                Some("Failed to make PUT request"),
            );
        }
    }
    Ok(())
}

/// DELETE the post named by the `delete-id` input, then render a synthesized
/// confirmation record (the remote body is discarded and the status is not
/// treated as failure). Any raised error shows "DELETE Error".
pub async fn handle_delete_submit(app: &App) -> Result<()> {
    if let Err(err) = delete_post(app).await {
        banner::show_error(app.ui(), app.hide_delay(), "DELETE Error", Some(&err.to_string()));
    }
    Ok(())
}

async fn delete_post(app: &App) -> Result<()> {
    let post_id = app
        .ui()
        .input_value(ids::DELETE_ID)
        .ok_or_else(|| AppError::MissingElement(ids::DELETE_ID.to_string()))?;

    let url = app.item_url(&post_id);
    info!("DELETE {}", url);

    let response = app
        .fetch_transport()
        .request(Method::DELETE, &url, &[], None)
        .await?;

    let record = ResourceRecord::deleted(response.status, &post_id);
    render::render_into(app.ui().as_ref(), ids::DELETE_RESULTS, &record);
    Ok(())
}
