//! Playlist projection: filtered/sorted views for display
//!
//! A projection is a pure function of playlist contents plus transient view
//! parameters (search text, sort mode). It never mutates the store and is
//! deterministic: identical inputs yield identical output.

use crate::types::VideoRef;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Display ordering for a playlist projection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Insertion order, unchanged
    #[default]
    InsertionOrder,

    /// Ascending case-insensitive title compare; ties keep insertion order
    TitleAscending,

    /// Descending rating; ties broken by ascending title
    RatingDescending,
}

/// Derive a presentation-ready ordering of playlist items
///
/// Filtering is a case-insensitive substring match of `filter` against the
/// title; an empty filter passes everything. Sorting is stable, so equal
/// keys keep their relative insertion order.
pub fn project(items: &[VideoRef], filter: &str, sort: SortMode) -> Vec<VideoRef> {
    let needle = filter.trim().to_lowercase();

    let mut selected: Vec<VideoRef> = items
        .iter()
        .filter(|v| needle.is_empty() || v.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match sort {
        SortMode::InsertionOrder => {}
        SortMode::TitleAscending => {
            selected.sort_by(|a, b| compare_titles(&a.title, &b.title));
        }
        SortMode::RatingDescending => {
            selected.sort_by(|a, b| {
                b.rating
                    .cmp(&a.rating)
                    .then_with(|| compare_titles(&a.title, &b.title))
            });
        }
    }

    selected
}

/// Case-insensitive title ordering, falling back to the raw string so the
/// total order stays deterministic for titles differing only by case
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
