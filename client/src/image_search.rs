use crate::controller::{SearchController, SearchOutput};
use crate::error::SearchError;
use crate::results::{extraction_failure_message, similar_render_set};
use data::{ExtractRequest, ExtractResponse, SearchResult, SimilarityQuery};
use gloo_file::futures::read_as_data_url;
use gloo_net::http::Request;
use leptos::logging::error;
use leptos::prelude::*;
use serde_json::Value;

/// Runs one image search: extracts features from the dropped file, queries
/// the similarity endpoint and publishes the deduplicated grid. The drop
/// zone's preview signal is set as soon as the file is decoded and persists
/// regardless of how the search ends.
pub async fn run(
    controller: SearchController,
    set_preview: WriteSignal<Option<String>>,
    file: gloo_file::File,
) {
    let token = controller.begin();
    if let Err(err) = run_inner(controller, token, set_preview, file).await {
        error!("image search failed: {err}");
        controller.publish(token, SearchOutput::Message(format!("Error: {err}")));
    }
}

async fn run_inner(
    controller: SearchController,
    token: u64,
    set_preview: WriteSignal<Option<String>>,
    file: gloo_file::File,
) -> Result<(), SearchError> {
    let data_url = read_as_data_url(&file).await?;
    set_preview.set(Some(data_url.clone()));
    controller.publish(
        token,
        SearchOutput::Message("Image uploaded. Extracting features...".to_string()),
    );

    // The payload sits after the "data:<mime>;base64," prefix.
    let base64_image = data_url
        .split_once(',')
        .map(|(_, payload)| payload)
        .unwrap_or_default()
        .to_string();

    let extracted: ExtractResponse = Request::post("/extract_features")
        .json(&ExtractRequest {
            image: base64_image,
        })?
        .send()
        .await?
        .json()
        .await?;

    let Some(features) = extracted.features else {
        controller.publish(
            token,
            SearchOutput::Message(extraction_failure_message(extracted.error)),
        );
        return Ok(());
    };

    controller.publish(
        token,
        SearchOutput::Message("Features extracted. Searching similar images...".to_string()),
    );

    let body = Request::post("/search")
        .json(&SimilarityQuery::new(features))?
        .send()
        .await?
        .text()
        .await?;

    let value: Value = serde_json::from_str(&body)?;
    if !value.is_array() {
        controller.publish(
            token,
            SearchOutput::Message(format!("Server returned an unexpected response: {value}")),
        );
        return Ok(());
    }
    let results: Vec<SearchResult> = serde_json::from_value(value)?;

    controller.publish(token, SearchOutput::Results(similar_render_set(&results)));
    Ok(())
}
