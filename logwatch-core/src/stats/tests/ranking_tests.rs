use crate::stats::{SectionHits, SectionRanking};
use pretty_assertions::assert_eq;

const SAMPLE: &[(&str, u64)] = &[
    ("/api", 8),
    ("/report", 7),
    ("/admin", 6),
    ("/user", 5),
    ("/login", 2),
    ("/logout", 4),
];

fn populated(sample: &[(&str, u64)]) -> SectionRanking {
    let mut ranking = SectionRanking::new();
    for (section, hits) in sample {
        for _ in 0..*hits {
            ranking.hit(section);
        }
    }
    ranking
}

fn pairs(top: &[SectionHits]) -> Vec<(&str, u64)> {
    top.iter().map(|s| (s.section.as_str(), s.hits)).collect()
}

#[test]
fn counts_hits_per_section() {
    let ranking = populated(SAMPLE);

    for (section, hits) in SAMPLE {
        assert_eq!(ranking.hits(section), *hits, "{section}");
    }
    assert_eq!(ranking.hits("/unseen"), 0);
    assert_eq!(ranking.len(), SAMPLE.len());
}

#[test]
fn top_k_is_descending_by_hits() {
    let ranking = populated(SAMPLE);

    assert_eq!(pairs(&ranking.top_k(2)), vec![("/api", 8), ("/report", 7)]);
    assert_eq!(
        pairs(&ranking.top_k(3)),
        vec![("/api", 8), ("/report", 7), ("/admin", 6)]
    );
    assert_eq!(
        pairs(&ranking.top_k(6)),
        vec![
            ("/api", 8),
            ("/report", 7),
            ("/admin", 6),
            ("/user", 5),
            ("/logout", 4),
            ("/login", 2),
        ]
    );
}

#[test]
fn top_k_larger_than_population_returns_everything() {
    let ranking = populated(SAMPLE);
    assert_eq!(ranking.top_k(100).len(), SAMPLE.len());
}

#[test]
fn tied_group_is_returned_whole() {
    let ranking = populated(&[("/a", 5), ("/b", 3), ("/c", 3), ("/d", 3), ("/e", 1)]);

    assert_eq!(
        pairs(&ranking.top_k(2)),
        vec![("/a", 5), ("/b", 3), ("/c", 3), ("/d", 3)]
    );
    assert_eq!(pairs(&ranking.top_k(1)), vec![("/a", 5)]);
}

#[test]
fn zero_k_or_empty_ranking_is_empty() {
    assert!(populated(SAMPLE).top_k(0).is_empty());
    assert!(SectionRanking::new().top_k(5).is_empty());
}

#[test]
fn each_section_lives_in_exactly_one_bucket() {
    let mut ranking = SectionRanking::new();
    ranking.hit("/a");
    ranking.hit("/b");
    assert_eq!(ranking.bucket_count(), 1);

    ranking.hit("/a");
    // "/a" moved from bucket 1 to bucket 2, "/b" is still alone in bucket 1.
    assert_eq!(ranking.bucket_count(), 2);
    assert_eq!(pairs(&ranking.top_k(10)), vec![("/a", 2), ("/b", 1)]);

    ranking.hit("/b");
    // Bucket 1 emptied and removed.
    assert_eq!(ranking.bucket_count(), 1);
    assert_eq!(pairs(&ranking.top_k(10)), vec![("/a", 2), ("/b", 2)]);
}

#[test]
fn clear_forgets_every_section() {
    let mut ranking = populated(SAMPLE);
    assert_eq!(ranking.top_k(SAMPLE.len()).len(), SAMPLE.len());

    ranking.clear();

    for (section, _) in SAMPLE {
        assert_eq!(ranking.hits(section), 0);
    }
    assert!(ranking.top_k(SAMPLE.len()).is_empty());
    assert!(ranking.is_empty());
    assert_eq!(ranking.bucket_count(), 0);
}

#[test]
fn empty_section_is_ranked_like_any_other() {
    let ranking = populated(&[("", 2), ("/api", 1)]);
    assert_eq!(pairs(&ranking.top_k(5)), vec![("", 2), ("/api", 1)]);
}
