// Host-side tests for the layout engine.

use app_core::{
    layout, normalize, LayoutCache, WordEntry, BASE_RADIUS, GOLDEN_ANGLE, PALETTE, RADIUS_SPAN,
};

fn entries(n: usize) -> Vec<WordEntry> {
    (0..n)
        .map(|i| WordEntry {
            word: format!("word{i}"),
            weight: 1.0 - i as f32 / n.max(1) as f32,
        })
        .collect()
}

#[test]
fn golden_angle_matches_formula() {
    let expected = std::f32::consts::PI * (1.0 + 5.0_f32.sqrt());
    assert!(
        (GOLDEN_ANGLE - expected).abs() < 1e-4,
        "GOLDEN_ANGLE should be pi * (1 + sqrt(5)), got {GOLDEN_ANGLE} vs {expected}"
    );
}

#[test]
fn layout_returns_one_placement_per_entry() {
    for n in [1, 2, 3, 7, 12, 13, 50] {
        let placements = layout(&entries(n));
        assert_eq!(placements.len(), n, "expected {n} placements");
    }
}

#[test]
fn layout_of_empty_list_is_empty() {
    let placements = layout(&[]);
    assert!(placements.is_empty());
}

#[test]
fn positions_are_pairwise_distinct() {
    for n in [1, 2, 5, 24, 100] {
        let placements = layout(&entries(n));
        for i in 0..placements.len() {
            for j in (i + 1)..placements.len() {
                let d = (placements[i].position - placements[j].position).length();
                assert!(
                    d > 1e-4,
                    "positions {i} and {j} coincide for n={n}: {:?} vs {:?}",
                    placements[i].position,
                    placements[j].position
                );
            }
        }
    }
}

#[test]
fn positions_lie_on_weight_scaled_shell() {
    let words = entries(40);
    let placements = layout(&words);
    for (entry, placement) in words.iter().zip(&placements) {
        let r = placement.position.length();
        let expected = BASE_RADIUS + entry.weight * RADIUS_SPAN;
        assert!(
            (r - expected).abs() < 1e-3,
            "word {:?}: radius {r}, expected {expected}",
            entry.word
        );
        assert!(r >= BASE_RADIUS - 1e-3 && r <= BASE_RADIUS + RADIUS_SPAN + 1e-3);
    }
}

#[test]
fn layout_is_deterministic() {
    let words = entries(17);
    let a = layout(&words);
    let b = layout(&words);
    assert_eq!(a.len(), b.len());
    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(pa.position, pb.position, "positions must be bit-identical");
        assert_eq!(pa.color, pb.color, "colors must be bit-identical");
    }
}

#[test]
fn colors_cycle_with_palette_period() {
    let placements = layout(&entries(30));
    for i in 0..placements.len() {
        assert_eq!(placements[i].color, PALETTE[i % PALETTE.len()]);
        if i + PALETTE.len() < placements.len() {
            assert_eq!(
                placements[i].color,
                placements[i + PALETTE.len()].color,
                "palette should repeat with period {}",
                PALETTE.len()
            );
        }
    }
}

#[test]
fn duplicate_words_get_independent_placements() {
    let words = vec![
        WordEntry {
            word: "echo".into(),
            weight: 0.8,
        },
        WordEntry {
            word: "echo".into(),
            weight: 0.8,
        },
    ];
    let placements = layout(&words);
    assert_eq!(placements.len(), 2);
    assert_ne!(placements[0].position, placements[1].position);
}

#[test]
fn reference_scenario_three_words() {
    let words = normalize(vec![
        WordEntry {
            word: "ai".into(),
            weight: 1.0,
        },
        WordEntry {
            word: "data".into(),
            weight: 0.5,
        },
        WordEntry {
            word: "model".into(),
            weight: 0.1,
        },
    ]);
    let placements = layout(&words);
    assert_eq!(placements.len(), 3);
    for i in 0..3 {
        assert_eq!(placements[i].color, PALETTE[i]);
        for j in (i + 1)..3 {
            assert_ne!(placements[i].position, placements[j].position);
        }
    }
}

#[test]
fn cache_recomputes_only_on_content_change() {
    let mut cache = LayoutCache::default();
    let words = entries(9);
    let first = cache.placements(&words).to_vec();
    let second = cache.placements(&words).to_vec();
    assert_eq!(first, second, "cache hit must return identical placements");

    let mut changed = words.clone();
    changed[3].weight = 0.123;
    let third = cache.placements(&changed).to_vec();
    assert_ne!(
        first[3].position, third[3].position,
        "content change must invalidate the cache"
    );
}
