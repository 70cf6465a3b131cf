use syntify::{
    types::PlaylistItemsResponse,
    youtube::playlist::{augment_title, is_unavailable, item_title},
};

const PAGE: &str = r#"{
  "kind": "youtube#playlistItemListResponse",
  "nextPageToken": "CAUQAA",
  "items": [
    {
      "snippet": {
        "title": "Never Gonna Give You Up",
        "videoOwnerChannelTitle": "Rick Astley - Topic"
      }
    },
    {
      "snippet": {
        "title": "Deleted video"
      }
    },
    {
      "snippet": {
        "title": "Daft Punk - Get Lucky (Official Audio)",
        "videoOwnerChannelTitle": "Daft Punk"
      }
    },
    {}
  ]
}"#;

#[test]
fn test_playlist_page_deserializes() {
    let page: PlaylistItemsResponse = serde_json::from_str(PAGE).unwrap();

    assert_eq!(page.next_page_token.as_deref(), Some("CAUQAA"));
    assert_eq!(page.items.len(), 4);

    let titles: Vec<String> = page.items.iter().filter_map(item_title).collect();
    assert_eq!(
        titles,
        vec![
            "Rick Astley - Never Gonna Give You Up".to_string(),
            "Daft Punk - Get Lucky (Official Audio)".to_string(),
        ]
    );
}

#[test]
fn test_last_page_has_no_token() {
    let page: PlaylistItemsResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
    assert!(page.next_page_token.is_none());
    assert!(page.items.is_empty());

    let page: PlaylistItemsResponse = serde_json::from_str("{}").unwrap();
    assert!(page.items.is_empty());
}

#[test]
fn test_unavailable_titles() {
    assert!(is_unavailable("Deleted video"));
    assert!(is_unavailable("Private video"));
    assert!(!is_unavailable("Private Video Diaries - Episode 1"));
}

#[test]
fn test_augment_title_with_topic_channel() {
    assert_eq!(
        augment_title("Never Gonna Give You Up", Some("Rick Astley - Topic")),
        "Rick Astley - Never Gonna Give You Up"
    );
}

#[test]
fn test_augment_title_keeps_titles_with_artist() {
    assert_eq!(
        augment_title("Rick Astley - Never Gonna Give You Up", Some("RickAstleyVEVO")),
        "Rick Astley - Never Gonna Give You Up"
    );
    assert_eq!(
        augment_title("Rick Astley: Never Gonna Give You Up", Some("Rick Astley")),
        "Rick Astley: Never Gonna Give You Up"
    );
}

#[test]
fn test_augment_title_without_channel() {
    assert_eq!(augment_title("Get Lucky", None), "Get Lucky");
    assert_eq!(augment_title("Get Lucky", Some("")), "Get Lucky");
    assert_eq!(augment_title("Get Lucky", Some(" - Topic")), "Get Lucky");
}
