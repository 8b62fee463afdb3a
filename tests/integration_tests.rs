// Integration tests for MoOn Match

use moon_match::core::{CompatibilityEngine, RankOptions};
use moon_match::models::{EngineWeights, RawNoise, RawProfile, Strategy};

fn create_test_profile(id: &str, city: &str, noise: f64, tags: &[&str], interests: &[&str], distance: f64) -> RawProfile {
    RawProfile {
        user_id: Some(id.to_string()),
        noise_preference: Some(RawNoise::Level(noise)),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        lifestyle_tags: tags.iter().map(|s| s.to_string()).collect(),
        city: Some(city.to_string()),
        commute_or_search_distance: Some(distance),
    }
}

#[test]
fn test_integration_end_to_end_suggestions() {
    let engine = CompatibilityEngine::with_default_weights();
    let subject = create_test_profile("me", "Madrid", 2.0, &["Social", "Deportista"], &["Cine", "Yoga"], 15.0);

    let candidates = vec![
        create_test_profile("1", "Madrid", 2.0, &["Social", "Deportista"], &["Cine", "Yoga"], 15.0), // Twin
        create_test_profile("2", "Madrid", 3.0, &["Social"], &["Cine"], 20.0),                      // Close
        create_test_profile("3", "Sevilla", 5.0, &["Nocturno"], &["Gaming"], 60.0),                 // Opposite
        create_test_profile("me", "Madrid", 2.0, &["Social"], &["Cine"], 15.0),                     // Self
        create_test_profile("4", "Madrid", 2.0, &[], &[], 16.0),                                    // Sparse
    ];

    let result = engine.rank(&subject, &candidates, Strategy::RoommateMatch, RankOptions::default());

    assert_eq!(result.total_candidates, 5);
    assert_eq!(result.matches.len(), 4);
    assert!(result.matches.iter().all(|m| m.user_id.as_deref() != Some("me")));
    assert_eq!(result.matches[0].user_id.as_deref(), Some("1"));
    assert_eq!(result.matches.last().and_then(|m| m.user_id.as_deref()), Some("3"));

    // Results are sorted descending
    for pair in result.matches.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_integration_listing_candidates() {
    let engine = CompatibilityEngine::with_default_weights();
    let tenant = create_test_profile("tenant", "Madrid", 2.0, &["tech", "remote"], &[], 10.0);

    let owners = vec![
        create_test_profile("o1", "Barcelona", 2.0, &["tech", "remote"], &[], 10.0),
        create_test_profile("o2", "MADRID", 2.0, &["tech", "remote", "pets"], &[], 10.0),
        create_test_profile("o3", "madrid", 4.0, &["social"], &[], 10.0),
    ];

    let result = engine.rank(&tenant, &owners, Strategy::ListingMatch, RankOptions::default());

    let scores: Vec<(String, u8)> = result
        .matches
        .iter()
        .map(|m| (m.user_id.clone().unwrap(), m.score))
        .collect();

    assert_eq!(
        scores,
        vec![
            ("o2".to_string(), 70),
            ("o1".to_string(), 50),
            ("o3".to_string(), 20),
        ]
    );
}

#[test]
fn test_integration_strategies_differ() {
    let engine = CompatibilityEngine::with_default_weights();
    let a = create_test_profile("a", "Madrid", 3.0, &["Social"], &["Cine"], 10.0);
    let b = create_test_profile("b", "Madrid", 3.0, &["Social"], &["Cine"], 10.0);

    let roommate = engine.score_raw(&a, &b, Strategy::RoommateMatch);
    let listing = engine.score_raw(&a, &b, Strategy::ListingMatch);

    // 30 + 5 + 2 + 15 + 10
    assert_eq!(roommate, 62);
    // 20 + 15 + 20
    assert_eq!(listing, 55);
}

#[test]
fn test_integration_idempotent() {
    let engine = CompatibilityEngine::new(EngineWeights::default());
    let a = create_test_profile("a", "Valencia", 1.0, &["Ordenado"], &["Lectura", "Cine"], 30.0);
    let b = create_test_profile("b", "valencia", 2.0, &["ordenado", "Social"], &["cine"], 21.0);

    for strategy in [Strategy::ListingMatch, Strategy::RoommateMatch] {
        let first = engine.score_raw(&a, &b, strategy);
        let second = engine.score_raw(&a, &b, strategy);
        assert_eq!(first, second);
    }
}

#[test]
fn test_integration_large_candidate_list() {
    let engine = CompatibilityEngine::with_default_weights();
    let subject = create_test_profile("me", "Madrid", 3.0, &["Social"], &["Cine"], 20.0);

    let candidates: Vec<RawProfile> = (0..500)
        .map(|i| {
            create_test_profile(
                &i.to_string(),
                if i % 2 == 0 { "Madrid" } else { "Sevilla" },
                (i % 5 + 1) as f64,
                &["Social"],
                &["Cine"],
                (i % 40) as f64,
            )
        })
        .collect();

    let result = engine.rank(
        &subject,
        &candidates,
        Strategy::RoommateMatch,
        RankOptions { limit: 25, min_score: 0 },
    );

    assert_eq!(result.matches.len(), 25);
    assert_eq!(result.total_candidates, 500);
    assert!(result.matches.iter().all(|m| m.score <= 100));
}
