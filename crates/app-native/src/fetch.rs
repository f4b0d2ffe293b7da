//! Analysis-service client.
//!
//! One worker thread per request; a completed fetch drops the whole word
//! list into the mailbox, and the frame loop swaps the scene atomically at
//! its next tick. A failed fetch only logs: the current scene stays up.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use app_core::{ingest, AnalyzeRequest, AnalyzeResponse, WordEntry};

pub type WordMailbox = Arc<Mutex<Option<Vec<WordEntry>>>>;

/// Take delivered words out of the mailbox, if any.
pub fn take(mailbox: &WordMailbox) -> Option<Vec<WordEntry>> {
    mailbox.lock().unwrap().take()
}

/// Kick off a single analyze request on a named worker thread.
pub fn spawn_analyze(endpoint: String, article_url: String, mailbox: WordMailbox) {
    let spawned = thread::Builder::new()
        .name("analyze-fetch".into())
        .spawn(move || match request_words(&endpoint, &article_url) {
            Ok(words) => {
                log::info!("analyze returned {} keywords for {article_url}", words.len());
                *mailbox.lock().unwrap() = Some(words);
            }
            Err(e) => log::error!("analyze request failed: {e:#}"),
        });
    if let Err(e) = spawned {
        log::error!("could not spawn fetch thread: {e}");
    }
}

fn request_words(endpoint: &str, article_url: &str) -> anyhow::Result<Vec<WordEntry>> {
    let article = url::Url::parse(article_url)
        .with_context(|| format!("invalid article URL {article_url:?}"))?;

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .context("building HTTP client")?;

    let response: AnalyzeResponse = client
        .post(format!("{}/analyze", endpoint.trim_end_matches('/')))
        .json(&AnalyzeRequest {
            url: article.to_string(),
        })
        .send()
        .context("sending analyze request")?
        .error_for_status()
        .context("analyze request rejected")?
        .json()
        .context("decoding analyze response")?;

    Ok(ingest(response)?)
}

/// Built-in sample set, usable without a running analysis service.
pub fn demo_words() -> Vec<WordEntry> {
    [
        ("ai", 1.0),
        ("learning", 0.92),
        ("model", 0.85),
        ("data", 0.78),
        ("neural", 0.70),
        ("network", 0.63),
        ("training", 0.55),
        ("language", 0.48),
        ("algorithm", 0.40),
        ("research", 0.33),
        ("compute", 0.26),
        ("system", 0.20),
        ("vision", 0.15),
        ("agent", 0.10),
    ]
    .into_iter()
    .map(|(word, weight)| WordEntry {
        word: word.into(),
        weight,
    })
    .collect()
}
