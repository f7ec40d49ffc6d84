//! Search API response payloads.

use serde::Deserialize;

use crate::domain::entities::{Photo, SearchPage};

/// Search endpoint response envelope.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Number of matches.
    pub total: u64,
    /// Number of pages.
    pub total_pages: u32,
    /// Photos on the requested page.
    pub results: Vec<PhotoResponse>,
}

/// Photo object as returned by the search endpoint.
#[derive(Debug, Deserialize)]
pub struct PhotoResponse {
    /// Photo ID.
    pub id: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Photographer.
    pub user: UserResponse,
    /// Renditions of the photo.
    pub urls: UrlsResponse,
}

/// Photographer details.
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    /// Display name.
    pub name: String,
}

/// Image renditions. Only the regular size is used.
#[derive(Debug, Deserialize)]
pub struct UrlsResponse {
    /// Regular-size image URL.
    pub regular: String,
}

impl From<PhotoResponse> for Photo {
    fn from(value: PhotoResponse) -> Self {
        Self::new(value.id, value.created_at, value.user.name, value.urls.regular)
    }
}

impl From<SearchResponse> for SearchPage {
    fn from(value: SearchResponse) -> Self {
        Self {
            total: value.total,
            total_pages: value.total_pages,
            results: value.results.into_iter().map(Photo::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total": 133,
        "total_pages": 7,
        "results": [
            {
                "id": "eOLpJytrbsQ",
                "created_at": "2014-11-18T14:35:36-05:00",
                "width": 4000,
                "user": { "id": "Ul0QVz12Goo", "name": "Jeff Sheldon" },
                "urls": {
                    "raw": "https://images.unsplash.com/photo-1416339306562-f3d12fefd36f",
                    "regular": "https://images.unsplash.com/photo-1416339306562-f3d12fefd36f?w=1080"
                }
            }
        ]
    }"#;

    #[test]
    fn test_decode_search_response() {
        let response: SearchResponse = serde_json::from_str(SAMPLE).unwrap();
        let page = SearchPage::from(response);

        assert_eq!(page.total, 133);
        assert_eq!(page.total_pages, 7);
        assert_eq!(page.results.len(), 1);

        let photo = &page.results[0];
        assert_eq!(photo.id().as_str(), "eOLpJytrbsQ");
        assert_eq!(photo.created_at(), "2014-11-18T14:35:36-05:00");
        assert_eq!(photo.author_name(), "Jeff Sheldon");
        assert!(photo.image_url().ends_with("?w=1080"));
    }

    #[test]
    fn test_decode_rejects_missing_nested_field() {
        let body = r#"{"total":1,"total_pages":1,"results":[{"id":"x","created_at":"t","user":{},"urls":{"regular":"u"}}]}"#;
        assert!(serde_json::from_str::<SearchResponse>(body).is_err());
    }
}
