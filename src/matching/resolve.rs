use crate::{
    Res,
    types::{Extraction, MatchCandidate, MatchOutcome, Strategy},
    warning,
};

use super::{CatalogSearch, best_match, extract, normalize};

/// Strategies in the order they are tried.
pub const STRATEGIES: [Strategy; 3] = [
    Strategy::Structured,
    Strategy::FreeText,
    Strategy::TrackOnly,
];

const STRUCTURED_MIN_SCORE: u8 = 70;
const FREE_TEXT_MIN_SCORE: u8 = 65;

impl Strategy {
    /// Search query for this strategy, or `None` if it does not apply to
    /// the title.
    pub fn query(&self, clean: &str, extraction: &Extraction) -> Option<String> {
        match self {
            Strategy::Structured => {
                let artist = extraction.artist.as_deref()?;
                if artist.chars().count() > 1 && extraction.track.chars().count() > 1 {
                    Some(format!("artist:{} track:{}", artist, extraction.track))
                } else {
                    None
                }
            }
            Strategy::FreeText => Some(clean.to_string()).filter(|q| !q.is_empty()),
            Strategy::TrackOnly => {
                extraction.artist.as_ref()?;
                Some(extraction.track.clone()).filter(|t| !t.is_empty())
            }
        }
    }

    /// Number of results requested from the catalog. The unscored fallback
    /// asks for fewer since it only ever looks at the first one.
    pub fn limit(&self) -> u32 {
        match self {
            Strategy::Structured | Strategy::FreeText => 5,
            Strategy::TrackOnly => 3,
        }
    }

    /// Picks the accepted candidate from one search response.
    ///
    /// Scored strategies compare every candidate against the clean title and
    /// keep the best one above their threshold. The track-only fallback takes
    /// the first result as is, which trades precision for recall.
    pub fn accept(&self, clean: &str, candidates: &[MatchCandidate]) -> Option<MatchOutcome> {
        let (candidate, score) = match self {
            Strategy::Structured => {
                best_match(clean, candidates).filter(|(_, s)| *s > STRUCTURED_MIN_SCORE)?
            }
            Strategy::FreeText => {
                best_match(clean, candidates).filter(|(_, s)| *s > FREE_TEXT_MIN_SCORE)?
            }
            Strategy::TrackOnly => {
                return candidates.first().map(|c| MatchOutcome::Found {
                    identifier: c.identifier.clone(),
                    strategy: *self,
                    score: None,
                });
            }
        };

        Some(MatchOutcome::Found {
            identifier: candidate.identifier.clone(),
            strategy: *self,
            score: Some(score),
        })
    }
}

/// Finds the catalog track for a raw video title.
///
/// Runs [`STRATEGIES`] one after another and stops at the first accepted
/// candidate, so a title costs at most three searches. A failed search ends
/// the resolution of this title only and yields [`MatchOutcome::NotFound`];
/// an authentication failure is returned as an error because every further
/// search would fail the same way.
pub async fn resolve<S>(raw_title: &str, search: &S) -> Res<MatchOutcome>
where
    S: CatalogSearch + ?Sized,
{
    let clean = normalize(raw_title);
    let extraction = extract(&clean);

    for strategy in STRATEGIES {
        let Some(query) = strategy.query(&clean, &extraction) else {
            continue;
        };

        let candidates = match search.search(&query, strategy.limit()).await {
            Ok(candidates) => candidates,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warning!("Error searching track {}: {}", raw_title, e);
                return Ok(MatchOutcome::NotFound);
            }
        };

        if let Some(outcome) = strategy.accept(&clean, &candidates) {
            return Ok(outcome);
        }
    }

    Ok(MatchOutcome::NotFound)
}
