use super::*;
use crate::clipboard::MemoryClipboard;
use crate::speech::RecordingSpeech;
use crate::Error;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex as StdMutex;
use tokio::sync::Notify;

/// Replays queued outcomes and records the words it was called with.
#[derive(Default)]
struct ScriptedGenerator {
    outcomes: StdMutex<VecDeque<Result<String>>>,
    calls: StdMutex<Vec<Vec<String>>>,
}

impl ScriptedGenerator {
    fn with(outcomes: Vec<Result<String>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: StdMutex::new(outcomes.into()),
            calls: StdMutex::default(),
        })
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiaryGenerator for ScriptedGenerator {
    async fn generate(&self, words: &WordSet) -> Result<String> {
        self.calls.lock().unwrap().push(words.filled());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

/// Blocks inside `generate` until released.
#[derive(Default)]
struct GatedGenerator {
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl DiaryGenerator for GatedGenerator {
    async fn generate(&self, _: &WordSet) -> Result<String> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok("門の向こうの日記".to_string())
    }
}

fn relay_failure() -> Error {
    Error::Relay {
        status: 500,
        message: "x (y)".into(),
    }
}

fn fill(orch: &Orchestrator, words: &[&str]) {
    for (i, w) in words.iter().enumerate() {
        orch.set_word(i, *w).unwrap();
    }
}

#[tokio::test]
async fn incomplete_words_never_reach_the_generator() {
    let gen = ScriptedGenerator::with(vec![]);
    let orch = Orchestrator::builder(gen.clone()).build();
    fill(&orch, &["海", "", "猫"]);

    let status = orch.generate().await;
    assert_eq!(status, Status::MissingWords(WordCount::Three));
    assert_eq!(status.to_string(), "単語を3個すべて入力して。");
    assert!(gen.calls().is_empty());
    assert!(orch.can_generate());
}

#[tokio::test]
async fn successful_generation_stores_result() {
    let gen = ScriptedGenerator::with(vec![Ok("今日は海で猫を見た。".into())]);
    let orch = Orchestrator::builder(gen.clone()).build();
    fill(&orch, &[" 海 ", "夏", "猫"]);

    assert_eq!(orch.generate().await, Status::Generated);
    assert_eq!(orch.result(), "今日は海で猫を見た。");
    assert_eq!(gen.calls(), vec![vec!["海", "夏", "猫"]]);
    assert!(!orch.is_generating());
}

#[tokio::test]
async fn empty_text_is_a_distinct_success() {
    let gen = ScriptedGenerator::with(vec![Ok("  ".into())]);
    let orch = Orchestrator::builder(gen).build();
    fill(&orch, &["a", "b", "c"]);

    let status = orch.generate().await;
    assert_eq!(status, Status::GeneratedEmpty);
    assert!(!status.is_failure());
    assert!(!orch.can_copy());
}

#[tokio::test]
async fn failed_generation_keeps_previous_result_and_reenables_trigger() {
    let gen = ScriptedGenerator::with(vec![Ok("最初の日記".into()), Err(relay_failure())]);
    let orch = Orchestrator::builder(gen).build();
    fill(&orch, &["a", "b", "c"]);

    orch.generate().await;
    let status = orch.generate().await;
    match &status {
        Status::GenerationFailed { reason } => assert_eq!(reason, "x (y)"),
        other => panic!("unexpected status {:?}", other),
    }
    assert!(status.is_failure());
    assert_eq!(orch.result(), "最初の日記");
    assert!(orch.can_generate());
}

#[tokio::test]
async fn second_generate_while_in_flight_is_rejected() {
    let gen = Arc::new(GatedGenerator::default());
    let orch = Arc::new(Orchestrator::builder(gen.clone()).build());
    fill(&orch, &["a", "b", "c"]);

    let running = {
        let orch = orch.clone();
        tokio::spawn(async move { orch.generate().await })
    };
    gen.entered.notified().await;

    assert!(orch.is_generating());
    assert!(!orch.can_generate());
    assert_eq!(orch.status(), Some(Status::Generating));
    assert_eq!(orch.generate().await, Status::Busy);

    gen.release.notify_one();
    assert_eq!(running.await.unwrap(), Status::Generated);
    assert!(orch.can_generate());
    assert_eq!(orch.result(), "門の向こうの日記");
}

#[tokio::test]
async fn dropped_generation_releases_the_flag() {
    let gen = Arc::new(GatedGenerator::default());
    let orch = Arc::new(Orchestrator::builder(gen.clone()).build());
    fill(&orch, &["a", "b", "c"]);

    let running = {
        let orch = orch.clone();
        tokio::spawn(async move { orch.generate().await })
    };
    gen.entered.notified().await;
    assert!(orch.is_generating());

    running.abort();
    let _ = running.await;
    assert!(!orch.is_generating());
}

#[tokio::test]
async fn changing_count_resets_words_and_status() {
    let orch = Orchestrator::builder(ScriptedGenerator::with(vec![])).build();
    fill(&orch, &["a", "", ""]);
    orch.generate().await;
    assert!(orch.status().is_some());

    orch.set_word_count(WordCount::Seven);
    assert_eq!(orch.words(), WordSet::blank(WordCount::Seven));
    assert_eq!(orch.status(), None);
    assert!(orch.set_word(6, "七").is_ok());
    assert!(orch.set_word(7, "八").is_err());
}

#[tokio::test]
async fn copy_writes_trimmed_text() {
    let clip = Arc::new(MemoryClipboard::new());
    let orch = Orchestrator::builder(ScriptedGenerator::with(vec![]))
        .clipboard(clip.clone())
        .build();

    assert!(!orch.can_copy());
    assert_eq!(orch.copy().await, None);

    orch.set_result("  日記本文\n");
    assert!(orch.can_copy());
    assert_eq!(orch.copy().await, Some(Status::Copied));
    assert_eq!(clip.contents().as_deref(), Some("日記本文"));

    clip.set_failing(true);
    assert_eq!(orch.copy().await, Some(Status::CopyFailed));
}

#[tokio::test]
async fn copy_disabled_without_clipboard() {
    let orch = Orchestrator::builder(ScriptedGenerator::with(vec![])).build();
    orch.set_result("text");
    assert!(!orch.can_copy());
    assert_eq!(orch.copy().await, Some(Status::CopyFailed));
}

#[test]
fn speak_and_stop_drive_speech_controller() {
    let synth = Arc::new(RecordingSpeech::new().auto_start(true));
    let orch = Orchestrator::builder(ScriptedGenerator::with(vec![]))
        .speech(synth.clone())
        .build();

    assert_eq!(orch.speak(), None);
    orch.set_result(" 読み上げる日記 ");
    assert!(orch.can_speak());
    assert_eq!(orch.speak(), Some(Status::Speaking));
    assert!(orch.can_stop());
    assert_eq!(synth.utterances()[0].text, "読み上げる日記");
    assert_eq!(synth.utterances()[0].lang, "ja-JP");

    assert_eq!(orch.stop(), Status::SpeechStopped);
    assert!(!orch.can_stop());
}

#[test]
fn speak_without_engine_reports_failure() {
    let orch = Orchestrator::builder(ScriptedGenerator::with(vec![])).build();
    orch.set_result("text");
    assert!(!orch.can_speak());
    assert_eq!(orch.speak(), Some(Status::SpeechFailed));
}

#[test]
fn draft_save_load_clear_cycle() {
    let store = Arc::new(MemoryDraftStore::new());
    let orch = Orchestrator::builder(ScriptedGenerator::with(vec![]))
        .drafts(store.clone())
        .word_count(WordCount::Five)
        .build();
    fill(&orch, &["a", "b", "c", "d", "e"]);
    orch.set_result("text");

    assert_eq!(orch.load_draft(), Status::NoDraft);
    assert_eq!(orch.save_draft(), Status::DraftSaved);

    orch.set_word_count(WordCount::Three);
    orch.set_result("");
    assert_eq!(orch.load_draft(), Status::DraftRestored);
    assert_eq!(orch.word_count(), WordCount::Five);
    assert_eq!(orch.words().as_slice(), &["a", "b", "c", "d", "e"]);
    assert_eq!(orch.result(), "text");

    assert_eq!(orch.clear_draft(), Status::DraftCleared);
    assert_eq!(orch.clear_draft(), Status::DraftCleared);
    assert_eq!(orch.load_draft(), Status::NoDraft);
}

#[test]
fn malformed_stored_draft_is_reconciled() {
    let store = Arc::new(MemoryDraftStore::new());
    store
        .put_raw(r#"{"count": 9, "words": "not-a-list", "result": null}"#)
        .unwrap();
    let orch = Orchestrator::builder(ScriptedGenerator::with(vec![]))
        .drafts(store.clone())
        .word_count(WordCount::Seven)
        .build();
    orch.set_result("kept until restore");

    assert_eq!(orch.load_draft(), Status::DraftRestored);
    assert_eq!(orch.words(), WordSet::blank(WordCount::Seven));
    assert_eq!(orch.result(), "");

    store.put_raw("{broken").unwrap();
    assert_eq!(orch.load_draft(), Status::DraftLoadFailed);
}
