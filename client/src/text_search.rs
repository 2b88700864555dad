use crate::controller::{SearchController, SearchOutput};
use crate::error::SearchError;
use crate::results::text_render_set;
use data::SearchResult;
use gloo_net::http::Request;
use leptos::logging::error;
use urlencoding::encode;

/// Runs one text search against `/search_text` and publishes the
/// deduplicated grid.
pub async fn run(controller: SearchController, query: String) {
    let token = controller.begin();

    let query = query.trim().to_string();
    if query.is_empty() {
        controller.publish(
            token,
            SearchOutput::Message("Please enter a search term.".to_string()),
        );
        return;
    }

    controller.publish(token, SearchOutput::Message("Searching...".to_string()));

    match fetch_results(&query).await {
        Ok(results) if results.is_empty() => {
            controller.publish(
                token,
                SearchOutput::Message("No images found for your query.".to_string()),
            );
        }
        Ok(results) => {
            controller.publish(token, SearchOutput::Results(text_render_set(&results)));
        }
        Err(err) => {
            error!("text search failed: {err}");
            controller.publish(token, SearchOutput::Message(format!("Error: {err}")));
        }
    }
}

async fn fetch_results(query: &str) -> Result<Vec<SearchResult>, SearchError> {
    let url = format!("/search_text?query={}", encode(query));
    let response = Request::get(&url).send().await?;
    Ok(response.json().await?)
}
