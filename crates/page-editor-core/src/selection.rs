//! Page selection
//!
//! The set of selected 1-based page numbers plus the selection-mode flag
//! that decides whether bulk operations are scoped to the selection.

use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pages: BTreeSet<u32>,
    mode: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, page: u32) -> bool {
        self.pages.insert(page)
    }

    pub fn deselect(&mut self, page: u32) -> bool {
        self.pages.remove(&page)
    }

    pub fn contains(&self, page: u32) -> bool {
        self.pages.contains(&page)
    }

    /// Selected page numbers in ascending order
    pub fn pages(&self) -> Vec<u32> {
        self.pages.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }

    /// Whether bulk operations are scoped to the selection
    pub fn mode(&self) -> bool {
        self.mode
    }

    pub fn set_mode(&mut self, active: bool) {
        self.mode = active;
    }

    /// Flip selection mode. Leaving the mode drops the selection.
    pub fn toggle_mode(&mut self) -> bool {
        self.mode = !self.mode;
        if !self.mode {
            self.pages.clear();
        }
        self.mode
    }

    pub fn select_all(&mut self, page_count: usize) {
        self.pages.extend(1..=page_count as u32);
    }

    pub fn deselect_all(&mut self) {
        self.pages.clear();
    }

    /// Whether a bulk operation touches the page at 1-based `page`
    pub fn in_scope(&self, page: u32) -> bool {
        !self.mode || self.pages.contains(&page)
    }

    /// Replace the selection from a range string like "1-3, 5".
    /// Pages outside `1..=page_count` and malformed parts are ignored.
    pub fn set_from_ranges(&mut self, input: &str, page_count: usize) {
        let max = u32::try_from(page_count).unwrap_or(u32::MAX);
        self.pages = parse_ranges(input, max).into_iter().collect();
    }

    /// Drop page numbers past the end of the document
    pub fn retain_existing(&mut self, page_count: usize) {
        let max = page_count as u32;
        self.pages.retain(|&page| page <= max);
    }

    /// The selection formatted for the range input, e.g. "1-3, 5"
    pub fn to_ranges(&self) -> String {
        format_ranges(&self.pages())
    }
}

/// Page numbers named by a range string like "1-3, 5, 8-10", sorted and
/// unique, limited to `1..=max_page`.
///
/// Parts that are neither a number nor a `start-end` pair are skipped, and
/// a range whose start is past its end names no pages.
pub fn parse_ranges(input: &str, max_page: u32) -> Vec<u32> {
    let mut pages = BTreeSet::new();
    for (start, end) in input.split(',').filter_map(|part| parse_part(part.trim())) {
        // Clamp before expanding so a huge end costs nothing
        pages.extend(start.max(1)..=end.min(max_page));
    }
    pages.into_iter().collect()
}

fn parse_part(part: &str) -> Option<(u32, u32)> {
    match part.split_once('-') {
        Some((start, end)) => Some((start.trim().parse().ok()?, end.trim().parse().ok()?)),
        None => {
            let page = part.parse().ok()?;
            Some((page, page))
        }
    }
}

/// Collapse sorted page numbers into "1-3, 5" form
pub fn format_ranges(pages: &[u32]) -> String {
    let mut sorted = pages.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut ranges = Vec::new();
    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let (mut start, mut end) = (first, first);
    for page in iter {
        if end.checked_add(1) == Some(page) {
            end = page;
        } else {
            ranges.push(format_range(start, end));
            start = page;
            end = page;
        }
    }
    ranges.push(format_range(start, end));

    ranges.join(", ")
}

fn format_range(start: u32, end: u32) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{}-{}", start, end)
    }
}
