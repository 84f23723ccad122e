use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::config::Config;
use crate::upstream::PodcastSource;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub podcasts: Arc<dyn PodcastSource>,
}

impl AppState {
    pub fn new(config: Config, podcasts: Arc<dyn PodcastSource>) -> Self {
        Self { config, podcasts }
    }
}

// Upstream records are relayed as-is; missing or null fields fall back to empty values

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Podcast {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub images: PodcastImages,
    #[serde(deserialize_with = "null_as_default")]
    pub is_exclusive: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub media_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub has_free_episodes: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub play_sequence: String,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PodcastImages {
    #[serde(deserialize_with = "null_as_default")]
    pub default: String,
    #[serde(deserialize_with = "null_as_default")]
    pub featured: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wide: String,
}

/// Envelope shared by the upstream API and our own `/api/podcasts` reply
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PodcastsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Podcast>,
}

// API Request/Response types

#[derive(Debug, Default, PartialEq)]
pub struct PodcastsQuery {
    pub search: String,
    /// Forwarded verbatim, no numeric validation
    pub page: String,
}

impl PodcastsQuery {
    /// The first `search` and `page` win; repeats and unknown keys are ignored
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut search = None;
        let mut page = None;

        for (key, value) in pairs {
            match key.as_str() {
                "search" if search.is_none() => search = Some(value),
                "page" if page.is_none() => page = Some(value),
                _ => {}
            }
        }

        Self {
            search: search.unwrap_or_default(),
            page: page.unwrap_or_default(),
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub upstream: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_podcast_uses_upstream_field_names() {
        let json = r#"{
            "id": "7",
            "title": "Deep Dive",
            "description": "Weekly long reads",
            "images": {
                "default": "https://img.example/default.png",
                "featured": "https://img.example/featured.png",
                "thumbnail": "https://img.example/thumb.png",
                "wide": "https://img.example/wide.png"
            },
            "isExclusive": true,
            "publisherName": "Acme Audio",
            "publisherId": "42",
            "mediaType": "audio",
            "categoryId": "3",
            "categoryName": "News",
            "hasFreeEpisodes": false,
            "playSequence": "episodic"
        }"#;

        let podcast: Podcast = serde_json::from_str(json).unwrap();
        assert_eq!(podcast.publisher_id, "42");
        assert_eq!(podcast.images.thumbnail, "https://img.example/thumb.png");
        assert!(podcast.is_exclusive);

        let reencoded = serde_json::to_value(&podcast).unwrap();
        let original: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(reencoded, original);
    }

    #[test]
    fn test_missing_fields_default() {
        let response: PodcastsResponse =
            serde_json::from_str(r#"{"items": [{"id": "1", "extra": 5}]}"#).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].id, "1");
        assert_eq!(response.items[0].title, "");
        assert!(!response.items[0].has_free_episodes);

        let empty: PodcastsResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_null_fields_default() {
        let response: PodcastsResponse = serde_json::from_str(
            r#"{"items": [{"id": "1", "title": null, "isExclusive": null, "images": {"wide": null}}]}"#,
        )
        .unwrap();
        assert_eq!(response.items[0].id, "1");
        assert_eq!(response.items[0].title, "");
        assert!(!response.items[0].is_exclusive);
        assert_eq!(response.items[0].images.wide, "");

        let null_items: PodcastsResponse = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(null_items.items.is_empty());
    }

    #[test]
    fn test_query_takes_first_value() {
        let pairs = vec![
            ("search".to_string(), "a".to_string()),
            ("limit".to_string(), "10".to_string()),
            ("search".to_string(), "b".to_string()),
            ("page".to_string(), "2".to_string()),
            ("page".to_string(), "7".to_string()),
        ];
        assert_eq!(
            PodcastsQuery::from_pairs(pairs),
            PodcastsQuery { search: "a".to_string(), page: "2".to_string() }
        );
        assert_eq!(PodcastsQuery::from_pairs(Vec::new()), PodcastsQuery::default());
    }

    #[test]
    fn test_items_must_be_an_array() {
        let result = serde_json::from_str::<PodcastsResponse>(r#"{"items": "not-an-array"}"#);
        assert!(result.is_err());
    }
}
