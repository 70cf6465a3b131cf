use syntify::{Error, utils::parse_playlist_id};

#[test]
fn test_parse_bare_playlist_id() {
    assert_eq!(
        parse_playlist_id("PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf").unwrap(),
        "PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf"
    );
    assert_eq!(parse_playlist_id("  PL123  ").unwrap(), "PL123");
}

#[test]
fn test_parse_playlist_url() {
    assert_eq!(
        parse_playlist_id("https://www.youtube.com/playlist?list=PL123").unwrap(),
        "PL123"
    );
    assert_eq!(
        parse_playlist_id("https://youtube.com/watch?v=dQw4w9WgXcQ&list=PL456&index=2").unwrap(),
        "PL456"
    );
}

#[test]
fn test_parse_rejects_invalid_references() {
    for input in [
        "",
        "   ",
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "https://www.youtube.com/playlist?list=",
        "list=PL123",
        "youtube.com/playlist?list=PL123",
    ] {
        assert!(
            matches!(parse_playlist_id(input), Err(Error::InvalidPlaylist(_))),
            "accepted {:?}",
            input
        );
    }
}
