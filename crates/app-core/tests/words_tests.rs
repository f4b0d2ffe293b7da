// Host-side tests for word-list ingestion.

use app_core::{ingest, normalize, AnalyzeResponse, WordEntry, WordListError};

fn entry(word: &str, weight: f32) -> WordEntry {
    WordEntry {
        word: word.into(),
        weight,
    }
}

#[test]
fn ingest_accepts_a_successful_reply() {
    let reply = AnalyzeResponse {
        words: vec![entry("ai", 1.0), entry("data", 0.5)],
        success: true,
        message: String::new(),
    };
    let words = ingest(reply).expect("successful reply must ingest");
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].word, "ai");
}

#[test]
fn ingest_rejects_a_failed_reply() {
    let reply = AnalyzeResponse {
        words: Vec::new(),
        success: false,
        message: "could not extract topics".into(),
    };
    let err = ingest(reply).expect_err("failed reply must be an error");
    match err {
        WordListError::ServiceFailure(message) => {
            assert!(message.contains("could not extract topics"));
        }
    }
}

#[test]
fn ingest_keeps_an_empty_successful_word_list() {
    let reply = AnalyzeResponse {
        words: Vec::new(),
        success: true,
        message: String::new(),
    };
    let words = ingest(reply).expect("empty success is a valid terminal state");
    assert!(words.is_empty());
}

#[test]
fn normalize_clamps_out_of_range_weights() {
    let words = normalize(vec![entry("hot", 3.5), entry("cold", -0.2), entry("ok", 0.6)]);
    assert_eq!(words[0].weight, 1.0);
    assert_eq!(words[1].weight, 0.0);
    assert_eq!(words[2].weight, 0.6);
}

#[test]
fn normalize_collapses_non_finite_weights_to_zero() {
    let words = normalize(vec![
        entry("nan", f32::NAN),
        entry("inf", f32::INFINITY),
        entry("ninf", f32::NEG_INFINITY),
    ]);
    for word in &words {
        assert_eq!(word.weight, 0.0, "word {:?} kept a non-finite weight", word.word);
    }
}

#[test]
fn normalize_preserves_order_and_duplicates() {
    let words = normalize(vec![entry("dup", 0.9), entry("other", 0.5), entry("dup", 0.1)]);
    let names: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(names, vec!["dup", "other", "dup"]);
}

#[test]
fn wire_format_round_trips_through_serde() {
    let json = r#"{
        "words": [
            {"word": "ai", "weight": 1.0},
            {"word": "data", "weight": 0.5}
        ],
        "success": true,
        "message": "Successfully extracted 2 keywords"
    }"#;
    let reply: AnalyzeResponse = serde_json::from_str(json).expect("reply should parse");
    assert!(reply.success);
    assert_eq!(reply.words.len(), 2);
    assert_eq!(reply.words[1], entry("data", 0.5));

    // `message` is optional in the reply.
    let bare: AnalyzeResponse =
        serde_json::from_str(r#"{"words": [], "success": true}"#).expect("bare reply");
    assert!(bare.message.is_empty());
}
