//! Free-text search over brand and model names.

use crate::models::{Catalog, MatchKind, SearchResult};

/// Maximum number of results returned.
pub const MAX_RESULTS: usize = 8;

/// Queries shorter than this (after trimming) hide the results.
pub const MIN_QUERY_LEN: usize = 2;

/// Shown when a valid query matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No se encontraron resultados";

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query too short; the result list is hidden
    Hidden,
    /// Query accepted; results may be empty
    Results(Vec<SearchResult>),
}

impl SearchOutcome {
    /// Results, or an empty slice when hidden.
    pub fn results(&self) -> &[SearchResult] {
        match self {
            Self::Hidden => &[],
            Self::Results(results) => results,
        }
    }

    /// True when the result list should be shown.
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Results(_))
    }
}

/// Normalizes a raw query: trimmed and lowercased.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Searches the catalog.
///
/// Brands are visited in catalog order. When a brand's name contains the
/// query, all of its models are emitted as brand matches; otherwise each
/// model whose name contains the query is emitted as a model match. The list
/// is cut at [`MAX_RESULTS`] in discovery order.
pub fn search(catalog: &Catalog, raw_query: &str) -> SearchOutcome {
    let query = normalize_query(raw_query);
    if query.chars().count() < MIN_QUERY_LEN {
        return SearchOutcome::Hidden;
    }

    let mut results = Vec::new();
    for (brand_id, brand) in catalog.iter() {
        if brand.name.to_lowercase().contains(&query) {
            for (index, model) in brand.models.iter().enumerate() {
                results.push(SearchResult::project(
                    MatchKind::Brand,
                    brand_id,
                    brand,
                    index,
                    model,
                ));
            }
        } else {
            for (index, model) in brand.models.iter().enumerate() {
                if model.name.to_lowercase().contains(&query) {
                    results.push(SearchResult::project(
                        MatchKind::Model,
                        brand_id,
                        brand,
                        index,
                        model,
                    ));
                }
            }
        }
        if results.len() >= MAX_RESULTS {
            break;
        }
    }

    results.truncate(MAX_RESULTS);
    SearchOutcome::Results(results)
}
