//! Title cleanup for YouTube video titles.

use once_cell::sync::Lazy;
use regex::Regex;

/// "ft.", "feat." and "featuring" in any case.
static FEATURING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bft\.|\bfeat\.|\bfeaturing\b").unwrap());

/// Decorative title noise, removed in order.
static NOISE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Bracketed tags: "(Official Video)", "[Lyric Video]", "(4K)"
        r"\((?:Official Video|Official Music Video|Official Audio|Audio)\)",
        r"\[(?:Official Video|Official Music Video|Official Audio|Audio)\]",
        r"\((?:Lyrics|Lyric Video|HD|HQ|4K)\)",
        r"\[(?:Lyrics|Lyric Video|HD|HQ|4K)\]",
        // Bare phrases
        r"Official Music Video",
        r"Official Video",
        r"Official Audio",
        r"High Quality",
        r"Full HD",
        r"VEVO",
        // Dates: "2019 new", "2019-05-01", "1.2.3"
        r"\d{4} new",
        r"\d{4}[.-]\d{2}[.-]\d{2}",
        r"\d+[.-]\d+[.-]\d+",
        // Numbered uploads: "(2)", "[12]"
        r"\(\d+\)",
        r"\[\d+\]",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
    .collect()
});

/// The `artist - track` separator: a dash with whitespace on both sides.
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+-\s+").unwrap());

/// Anything but word characters, whitespace and apostrophes.
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s']").unwrap());

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Cleans a raw YouTube title into a string fit for searching and scoring.
///
/// Featuring credits become a plain `feat`, decorative tags ("Official
/// Video", "(HD)", dates, upload numbers) are dropped, punctuation turns into
/// spaces and whitespace is collapsed. Apostrophes stay so "Don't" survives.
///
/// A dash with whitespace on both sides is the only dash that survives, as
/// the `artist - track` separator [`super::extract`] splits on. Hyphens
/// inside names become spaces: "Jay-Z" is cleaned to "Jay Z".
///
/// The cleanup is repeated until nothing changes any more, which makes the
/// function idempotent even when removing punctuation uncovers a phrase such
/// as `Official (Video)`.
///
/// # Arguments
///
/// * `raw` - Video title as YouTube returns it
///
/// # Returns
///
/// The cleaned title, possibly empty. Never fails.
///
/// # Example
///
/// ```
/// use syntify::matching::normalize;
///
/// assert_eq!(
///     normalize("Artist ft. Other - Song [Official Video] (2)"),
///     "Artist feat Other - Song"
/// );
/// ```
pub fn normalize(raw: &str) -> String {
    let mut current = clean_once(raw);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(title: &str) -> String {
    let mut title = FEATURING.replace_all(title, "feat").into_owned();

    for pattern in NOISE_PATTERNS.iter() {
        title = pattern.replace_all(&title, "").into_owned();
    }

    SEPARATOR
        .split(&title)
        .map(clean_part)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" - ")
}

fn clean_part(part: &str) -> String {
    let part = PUNCTUATION.replace_all(part, " ");
    WHITESPACE.replace_all(&part, " ").trim().to_string()
}
