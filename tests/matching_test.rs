use syntify::matching::{best_match, extract, normalize, score};
use syntify::types::MatchCandidate;

const SAMPLE_TITLES: [&str; 13] = [
    "Rick Astley - Never Gonna Give You Up (Official Video)",
    "Daft Punk ft. Pharrell Williams - Get Lucky (Official Audio)",
    "Artist featuring Other - Song [Lyric Video]",
    "Don't Stop Me Now! (HD)",
    "ArtistVEVO - Song [12]",
    "Song Title 2019-05-01",
    "Summer Hits 2019 new mix",
    "Song - Official (Video)",
    "Jay-Z - Empire State of Mind",
    "Beyoncé - Halo (Official Music Video) [4K]",
    "  spaced   out   title  ",
    "",
    "(((!!!)))",
];

#[test]
fn test_normalize_strips_official_video_tag() {
    assert_eq!(normalize("Artist - Song (Official Video)"), "Artist - Song");
    assert_eq!(
        normalize("Rick Astley - Never Gonna Give You Up (Official Video)"),
        "Rick Astley - Never Gonna Give You Up"
    );
}

#[test]
fn test_normalize_is_idempotent() {
    for title in SAMPLE_TITLES {
        let once = normalize(title);
        assert_eq!(normalize(&once), once, "not idempotent for {:?}", title);
    }
}

#[test]
fn test_normalize_canonicalises_featuring() {
    assert_eq!(
        normalize("Daft Punk ft. Pharrell Williams - Get Lucky"),
        "Daft Punk feat Pharrell Williams - Get Lucky"
    );
    assert_eq!(
        normalize("Artist FEAT. Other - Song"),
        "Artist feat Other - Song"
    );
    assert_eq!(
        normalize("Artist featuring Other - Song"),
        "Artist feat Other - Song"
    );
}

#[test]
fn test_normalize_removes_noise() {
    assert_eq!(normalize("ArtistVEVO - Song [12]"), "Artist - Song");
    assert_eq!(normalize("Song Title 2019-05-01"), "Song Title");
    assert_eq!(normalize("Song 1.2.3"), "Song");
    assert_eq!(normalize("Summer Hits 2019 new mix"), "Summer Hits mix");
    assert_eq!(normalize("Song (3)"), "Song");
    assert_eq!(normalize("Song High Quality Full HD"), "Song");
}

#[test]
fn test_normalize_keeps_apostrophes_and_unicode_letters() {
    assert_eq!(normalize("Don't Stop Me Now! (HD)"), "Don't Stop Me Now");
    assert_eq!(
        normalize("Beyoncé - Halo (Official Music Video) [4K]"),
        "Beyoncé - Halo"
    );
}

#[test]
fn test_normalize_keeps_only_the_spaced_separator() {
    assert_eq!(normalize("a-ha - Take On Me"), "a ha - Take On Me");
    assert_eq!(normalize("a-ha Take On Me"), "a ha Take On Me");
    assert_eq!(
        normalize("Song Title (Official Video) - "),
        "Song Title"
    );
}

#[test]
fn test_normalize_never_fails() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("(((!!!)))"), "");
    assert_eq!(normalize("  spaced   out   title  "), "spaced out title");
}

#[test]
fn test_extract_keeps_trailing_feat_on_track_side() {
    let e = extract("Artist - Song feat. Other");
    assert_eq!(e.artist.as_deref(), Some("Artist"));
    assert_eq!(e.track, "Song feat. Other");
}

#[test]
fn test_extract_swaps_when_feat_is_on_artist_side() {
    let e = extract("Daft Punk feat Pharrell Williams - Get Lucky");
    assert_eq!(e.artist.as_deref(), Some("Get Lucky"));
    assert_eq!(e.track, "Daft Punk feat Pharrell Williams");
}

#[test]
fn test_extract_does_not_swap_when_both_sides_have_feat() {
    let e = extract("A feat B - Song feat C");
    assert_eq!(e.artist.as_deref(), Some("A feat B"));
    assert_eq!(e.track, "Song feat C");
}

#[test]
fn test_extract_feat_without_dash() {
    let e = extract("Artist feat Other");
    assert_eq!(e.artist.as_deref(), Some("Artist"));
    assert_eq!(e.track, "Artist feat. Other");

    let e = extract("Artist Feat. Other Person");
    assert_eq!(e.artist.as_deref(), Some("Artist"));
    assert_eq!(e.track, "Artist feat. Other Person");
}

#[test]
fn test_extract_without_separator() {
    let e = extract("NoDashTitle");
    assert_eq!(e.artist, None);
    assert_eq!(e.track, "NoDashTitle");
}

#[test]
fn test_score_is_reflexive() {
    for title in SAMPLE_TITLES {
        assert_eq!(score(title, title), 100);
    }
}

#[test]
fn test_score_is_symmetric() {
    let pairs = [
        ("kitten", "sitting"),
        ("Rick Astley - Never Gonna Give You Up", "Rick Astley - Together Forever"),
        ("abc", ""),
        ("Daft Punk - Get Lucky", "daft punk feat pharrell - get lucky"),
    ];
    for (a, b) in pairs {
        assert_eq!(score(a, b), score(b, a), "asymmetric for {:?} / {:?}", a, b);
    }
}

#[test]
fn test_score_values() {
    assert_eq!(score("Hello", "hELLO"), 100);
    // 3 edits over 7 characters
    assert_eq!(score("kitten", "sitting"), 57);
    assert_eq!(score("abcdefghij", "abcdefghXY"), 80);
    assert_eq!(score("abc", ""), 0);
    assert_eq!(score("abc", "xyz"), 0);
}

#[test]
fn test_best_match_prefers_highest_then_earliest() {
    let candidates = vec![
        MatchCandidate::new("Other Artist - Other Song", "spotify:track:1"),
        MatchCandidate::new("Artist - Song", "spotify:track:2"),
        MatchCandidate::new("artist - song", "spotify:track:3"),
    ];

    let (best, s) = best_match("Artist - Song", &candidates).unwrap();
    assert_eq!(best.identifier, "spotify:track:2");
    assert_eq!(s, 100);

    assert!(best_match("Artist - Song", &[]).is_none());
}
