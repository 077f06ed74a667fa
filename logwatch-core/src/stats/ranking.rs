use crate::stats::SectionHits;
use ahash::RandomState;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Hit counts per section with an index ordered by count.
///
/// Every section with a non-zero count appears in exactly one index bucket, the one keyed by
/// its count. Sections that were never hit have no entry anywhere.
#[derive(Debug, Default)]
pub struct SectionRanking {
    counts: HashMap<String, u64, RandomState>,
    index: BTreeMap<u64, BTreeSet<String>>,
}

impl SectionRanking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one hit and returns the section's new count.
    pub fn hit(&mut self, section: &str) -> u64 {
        let previous = match self.counts.get_mut(section) {
            Some(count) => {
                *count += 1;
                *count - 1
            }
            None => {
                self.counts.insert(section.to_string(), 1);
                0
            }
        };

        if previous > 0 {
            self.unindex(previous, section);
        }

        let count = previous + 1;
        self.index
            .entry(count)
            .or_default()
            .insert(section.to_string());

        count
    }

    fn unindex(&mut self, count: u64, section: &str) {
        if let Some(bucket) = self.index.get_mut(&count) {
            bucket.remove(section);
            if bucket.is_empty() {
                self.index.remove(&count);
            }
        }
    }

    pub fn hits(&self, section: &str) -> u64 {
        self.counts.get(section).copied().unwrap_or(0)
    }

    /// Sections in descending hit order, at most `k` of them unless ties push past `k`.
    ///
    /// A group of sections sharing a count is always returned whole: descent stops only once
    /// `k` or more entries have been emitted. Within a group, sections are ordered by name.
    pub fn top_k(&self, k: usize) -> Vec<SectionHits> {
        let mut top = Vec::new();
        if k == 0 {
            return top;
        }

        for (&hits, sections) in self.index.iter().rev() {
            top.extend(
                sections
                    .iter()
                    .map(|section| SectionHits::new(section.clone(), hits)),
            );
            if top.len() >= k {
                break;
            }
        }

        top
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.index.clear();
    }

    /// Number of distinct sections hit.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct hit counts in the index.
    pub fn bucket_count(&self) -> usize {
        self.index.len()
    }
}
