use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Extraction;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+-\s+").unwrap());
static FEAT_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bfeat\b").unwrap());
static FEAT_CREDIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(.*?)\s+feat\.?\s+(.*)$").unwrap());

/// Guesses artist and track from a cleaned title.
///
/// Tries, in order:
/// 1. `artist - track`, split at the first dash with whitespace on both
///    sides. When only the left side carries a `feat` credit the sides are
///    swapped, since credits usually trail the track name.
/// 2. `A feat B`, giving artist `A` and track `A feat. B`.
/// 3. No artist; the whole title is the track.
///
/// `feat` must be a whole word to count as a credit, so "The Feathers - Song"
/// keeps its order. A plain substring test would swap it.
///
/// This is a heuristic. Scoring downstream has to cope with wrong splits.
///
/// # Example
///
/// ```
/// use syntify::matching::extract;
///
/// let e = extract("Daft Punk feat Pharrell Williams - Get Lucky");
/// assert_eq!(e.artist.as_deref(), Some("Get Lucky"));
/// assert_eq!(e.track, "Daft Punk feat Pharrell Williams");
/// ```
pub fn extract(clean: &str) -> Extraction {
    if let Some((left, right)) = split_on_dash(clean) {
        let (artist, track) = if has_feat(left) && !has_feat(right) {
            (right, left)
        } else {
            (left, right)
        };

        return Extraction {
            artist: Some(artist.to_string()).filter(|a| !a.is_empty()),
            track: track.to_string(),
        };
    }

    if let Some(caps) = FEAT_CREDIT.captures(clean) {
        let artist = &caps[1];
        return Extraction {
            artist: Some(artist.to_string()).filter(|a| !a.is_empty()),
            track: format!("{} feat. {}", artist, &caps[2]),
        };
    }

    Extraction {
        artist: None,
        track: clean.to_string(),
    }
}

fn split_on_dash(title: &str) -> Option<(&str, &str)> {
    let separator = SEPARATOR.find(title)?;
    Some((&title[..separator.start()], &title[separator.end()..]))
}

fn has_feat(part: &str) -> bool {
    FEAT_WORD.is_match(part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_dash_wins_over_hyphenated_name() {
        let e = extract("Jay-Z - Empire State of Mind");
        assert_eq!(e.artist.as_deref(), Some("Jay-Z"));
        assert_eq!(e.track, "Empire State of Mind");
    }

    #[test]
    fn hyphen_inside_a_word_does_not_split() {
        let e = extract("a-ha Take On Me");
        assert_eq!(e.artist, None);
        assert_eq!(e.track, "a-ha Take On Me");
    }

    #[test]
    fn only_first_separator_splits() {
        let e = extract("Artist - Song - Live");
        assert_eq!(e.artist.as_deref(), Some("Artist"));
        assert_eq!(e.track, "Song - Live");
    }

    #[test]
    fn empty_artist_side_is_absent() {
        let e = extract(" - Song");
        assert_eq!(e.artist, None);
        assert_eq!(e.track, "Song");
    }

    #[test]
    fn feat_inside_a_word_does_not_swap() {
        let e = extract("The Feathers - Song");
        assert_eq!(e.artist.as_deref(), Some("The Feathers"));
        assert_eq!(e.track, "Song");
    }
}
