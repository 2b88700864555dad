use data::SearchResult;
use std::collections::HashSet;

/// One thumbnail in the result grid.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub src: String,
    pub alt: String,
}

pub fn resolve_path(relative_path: &str) -> String {
    format!("/images/{relative_path}")
}

/// The similarity index stores paths of the caption sidecar files; drop the
/// `.txt` suffix to get back to the image itself.
pub fn strip_annotation_suffix(relative_path: &str) -> &str {
    relative_path.strip_suffix(".txt").unwrap_or(relative_path)
}

/// User-facing message for an extraction response without features.
pub fn extraction_failure_message(error: Option<String>) -> String {
    format!(
        "Error extracting features: {}",
        error.unwrap_or_else(|| "Unknown error".to_string())
    )
}

/// Shapes a text-search response: one item per unique resolved path, in
/// first-seen order.
pub fn text_render_set(results: &[SearchResult]) -> Vec<RenderItem> {
    let mut seen = HashSet::new();
    let mut items = Vec::new();
    for result in results {
        let src = resolve_path(&result.relative_path);
        if seen.insert(src.clone()) {
            items.push(RenderItem {
                src,
                alt: result.image_id.clone().unwrap_or_default(),
            });
        }
    }
    items
}

/// Shapes a similarity-search response: keyed on the logical identity
/// (`image_id`, falling back to `relative_path`) before path resolution,
/// unlike the text flow which keys on the resolved path.
pub fn similar_render_set(results: &[SearchResult]) -> Vec<RenderItem> {
    let mut seen = HashSet::new();
    let mut items = Vec::new();
    for result in results {
        if seen.insert(result.identity_key().to_string()) {
            items.push(RenderItem {
                src: resolve_path(strip_annotation_suffix(&result.relative_path)),
                alt: format!(
                    "Image ID: {}",
                    result.image_id.clone().unwrap_or_default()
                ),
            });
        }
    }
    items
}
