use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Scoring expression sent verbatim to the similarity endpoint.
pub const SIMILARITY_METRIC: &str =
    "cosineSimilarity(params.query_vector, 'image_embedding') + 1.0";

/// Number of neighbours requested from the similarity endpoint.
pub const TOP_K: u32 = 5;

/// One hit returned by `/search_text` or `/search`.
///
/// The text endpoint always fills `image_id`; the similarity endpoint may
/// omit it, in which case `relative_path` serves as the identity.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchResult {
    #[serde(default)]
    pub image_id: Option<String>,
    pub relative_path: String,
}

impl SearchResult {
    pub fn identity_key(&self) -> &str {
        self.image_id.as_deref().unwrap_or(&self.relative_path)
    }
}

/// Body of `POST /extract_features`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExtractRequest {
    pub image: String,
}

/// Response of `POST /extract_features`. Exactly one of the fields is set;
/// `features` stays an opaque value that is forwarded to `/search` untouched.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ExtractResponse {
    #[serde(default)]
    pub features: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /search`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SimilarityQuery {
    pub features: Value,
    pub metric: String,
    #[serde(rename = "topK")]
    pub top_k: u32,
}

impl SimilarityQuery {
    pub fn new(features: Value) -> Self {
        Self {
            features,
            metric: SIMILARITY_METRIC.to_string(),
            top_k: TOP_K,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_result_with_image_id() {
        let result: SearchResult =
            serde_json::from_value(json!({"image_id": "42", "relative_path": "cats/1.jpg"}))
                .unwrap();
        assert_eq!(result.image_id.as_deref(), Some("42"));
        assert_eq!(result.identity_key(), "42");
    }

    #[test]
    fn search_result_without_image_id_falls_back_to_path() {
        let result: SearchResult =
            serde_json::from_value(json!({"relative_path": "cats/1.jpg"})).unwrap();
        assert_eq!(result.image_id, None);
        assert_eq!(result.identity_key(), "cats/1.jpg");
    }

    #[test]
    fn similarity_query_carries_fixed_metric_and_top_k() {
        let query = SimilarityQuery::new(json!([0.1, 0.2]));
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["metric"], SIMILARITY_METRIC);
        assert_eq!(value["topK"], 5);
        assert_eq!(value["features"], json!([0.1, 0.2]));
    }

    #[test]
    fn extract_response_error_variant() {
        let response: ExtractResponse =
            serde_json::from_value(json!({"error": "bad image"})).unwrap();
        assert!(response.features.is_none());
        assert_eq!(response.error.as_deref(), Some("bad image"));
    }

    #[test]
    fn extract_response_features_stay_opaque() {
        let response: ExtractResponse =
            serde_json::from_value(json!({"features": {"dim": 512, "v": [1, 2]}})).unwrap();
        assert_eq!(response.features.unwrap()["dim"], 512);
    }
}
