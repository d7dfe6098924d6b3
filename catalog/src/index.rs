//! Fuzzy search index over feature descriptors.
//!
//! # Strategies (in order of specificity)
//!
//! 1. Exact field match (score: 1.0)
//! 2. Field prefix (score: 0.9)
//! 3. Word-start match (score: 0.85)
//! 4. Substring match (score: 0.7)
//! 5. Compact subsequence (score: 0.3-0.6)
//!
//! Field scores are weighted (title > id > description). A query is split into
//! terms; every term must match some field and the feature score is the mean of
//! the per-term best scores.

use overlap_core::Feature;

const SCORE_EXACT: f64 = 1.0;
const SCORE_PREFIX: f64 = 0.9;
const SCORE_WORD_START: f64 = 0.85;
const SCORE_SUBSTRING: f64 = 0.7;
const SCORE_SUBSEQUENCE_MIN: f64 = 0.3;
const SCORE_SUBSEQUENCE_SPAN: f64 = 0.3;

const WEIGHT_TITLE: f64 = 1.0;
const WEIGHT_ID: f64 = 0.9;
const WEIGHT_DESCRIPTION: f64 = 0.6;

/// A subsequence may spread over at most this many times the term length.
const MAX_SUBSEQUENCE_STRETCH: usize = 2;

/// One ranked search result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    /// Position of the feature in catalog order.
    pub position: usize,
    /// Match quality in `(0, 1]`.
    pub score: f64,
}

/// A normalized, searchable field.
#[derive(Debug, Clone)]
struct IndexedField {
    chars: Vec<char>,
    /// Char offsets where a word begins.
    word_starts: Vec<usize>,
    weight: f64,
}

impl IndexedField {
    fn new(text: &str, weight: f64) -> Self {
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        let word_starts = chars
            .iter()
            .enumerate()
            .filter(|(i, c)| c.is_alphanumeric() && (*i == 0 || !chars[i - 1].is_alphanumeric()))
            .map(|(i, _)| i)
            .collect();
        Self {
            chars,
            word_starts,
            weight,
        }
    }

    fn starts_with_at(&self, offset: usize, term: &[char]) -> bool {
        self.chars
            .get(offset..offset + term.len())
            .is_some_and(|window| window == term)
    }

    fn score(&self, term: &[char]) -> Option<f64> {
        let raw = self.raw_score(term)?;
        Some(raw * self.weight)
    }

    fn raw_score(&self, term: &[char]) -> Option<f64> {
        if term.is_empty() || term.len() > self.chars.len() {
            return None;
        }
        if self.chars == term {
            return Some(SCORE_EXACT);
        }
        if self.starts_with_at(0, term) {
            return Some(SCORE_PREFIX);
        }
        if self
            .word_starts
            .iter()
            .any(|&start| self.starts_with_at(start, term))
        {
            return Some(SCORE_WORD_START);
        }
        if self
            .chars
            .windows(term.len())
            .any(|window| window == term)
        {
            return Some(SCORE_SUBSTRING);
        }
        let span = self.shortest_subsequence_span(term)?;
        if span > term.len() * MAX_SUBSEQUENCE_STRETCH {
            return None;
        }
        let compactness = term.len() as f64 / span as f64;
        Some(SCORE_SUBSEQUENCE_MIN + SCORE_SUBSEQUENCE_SPAN * compactness)
    }

    /// Length of the shortest window containing `term` as a subsequence.
    fn shortest_subsequence_span(&self, term: &[char]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for start in 0..self.chars.len() {
            if self.chars[start] != term[0] {
                continue;
            }
            let mut matched = 1;
            let mut end = start;
            for (i, &c) in self.chars.iter().enumerate().skip(start + 1) {
                if matched == term.len() {
                    break;
                }
                if c == term[matched] {
                    matched += 1;
                    end = i;
                }
            }
            if matched < term.len() {
                // Later starts cannot complete either.
                break;
            }
            let span = end - start + 1;
            best = Some(best.map_or(span, |b| b.min(span)));
        }
        best
    }
}

/// Search fields of one feature.
#[derive(Debug, Clone)]
struct IndexedFeature {
    fields: Vec<IndexedField>,
}

/// Immutable fuzzy index, built once over the full feature set.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<IndexedFeature>,
}

impl SearchIndex {
    /// Build an index over `features`; hit positions refer to this slice.
    pub fn build(features: &[Feature]) -> Self {
        let entries = features
            .iter()
            .map(|feature| {
                let mut fields = vec![
                    IndexedField::new(&feature.title, WEIGHT_TITLE),
                    IndexedField::new(&feature.id, WEIGHT_ID),
                ];
                if let Some(description) = &feature.description {
                    fields.push(IndexedField::new(description, WEIGHT_DESCRIPTION));
                }
                IndexedFeature { fields }
            })
            .collect();
        Self { entries }
    }

    /// Number of indexed features.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank features against `query`, best first, at most `limit` hits.
    ///
    /// Ties keep catalog order. A blank query yields no hits; callers decide
    /// what an empty query means.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let terms: Vec<Vec<char>> = query
            .to_lowercase()
            .split_whitespace()
            .map(|t| t.chars().collect())
            .collect();
        if terms.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                let mut total = 0.0;
                for term in &terms {
                    let best = entry
                        .fields
                        .iter()
                        .filter_map(|field| field.score(term))
                        .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |a| a.max(s))))?;
                    total += best;
                }
                Some(SearchHit {
                    position,
                    score: total / terms.len() as f64,
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.position.cmp(&b.position))
        });
        hits.truncate(limit);
        hits
    }
}
