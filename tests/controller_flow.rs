//! End-to-end submission flows through the controller, with tokio's clock paused.

use std::collections::HashSet;
use std::time::Duration;
use tokio::time::Instant;
use tubeloader::controller::CANNED_TITLES;
use tubeloader::{
    classify, AppSettings, DownloadController, DownloadRecord, DownloadStatus, History,
    TubeloaderError, UrlCategory, VideoQuality,
};

fn controller(seed: u64) -> DownloadController {
    DownloadController::seeded(&AppSettings::default(), seed)
}

fn assert_elapsed(started: Instant, millis: u64) {
    let elapsed = started.elapsed();
    let expected = Duration::from_millis(millis);
    assert!(
        elapsed >= expected && elapsed < expected + Duration::from_millis(5),
        "expected ~{:?}, got {:?}",
        expected,
        elapsed
    );
}

#[tokio::test(start_paused = true)]
async fn watch_url_submission_records_completed_video() {
    let mut controller = controller(1);
    let mut history = History::new();
    let url = "https://www.youtube.com/watch?v=abc123";

    let classification = controller.update_url(url);
    assert!(classification.is_valid);
    assert_eq!(classification.category, UrlCategory::Video);

    let started = Instant::now();
    let record = controller.submit(&mut history).await.expect("submit");

    assert_elapsed(started, 3000);
    assert_eq!(history.len(), 1);
    assert_eq!(history.latest(), Some(&record));
    assert_eq!(record.category, UrlCategory::Video);
    assert_eq!(record.status, DownloadStatus::Completed);
    assert_eq!(record.url, url);
    assert_eq!(record.quality, VideoQuality::Highest);
    assert!(CANNED_TITLES.contains(&record.title.as_str()));
    assert!(record.thumbnail_url.starts_with("https://picsum.photos/seed/"));

    let form = controller.form();
    assert!(form.url.is_empty());
    assert!(!form.is_valid());
    assert!(!form.is_loading());
}

#[tokio::test(start_paused = true)]
async fn playlist_submission_uses_shorter_delay() {
    let mut controller = controller(2);
    let mut history = History::new();
    controller.update_url("https://youtube.com/playlist?list=XYZ");

    let started = Instant::now();
    let record = controller.submit(&mut history).await.unwrap();

    assert_elapsed(started, 2000);
    assert_eq!(record.category, UrlCategory::Playlist);
}

#[tokio::test(start_paused = true)]
async fn invalid_url_is_rejected_without_history_change() {
    let mut controller = controller(3);
    let mut history = History::new();
    controller.update_url("not a url");

    let err = controller.submit(&mut history).await.unwrap_err();

    assert!(matches!(err, TubeloaderError::InvalidUrl(_)));
    assert_eq!(err.to_string(), "Please enter a valid YouTube URL");
    assert!(history.is_empty());
    assert!(!controller.form().is_loading());
    assert_eq!(controller.form().url, "not a url");
}

#[tokio::test(start_paused = true)]
async fn record_category_matches_classifier() {
    let urls = [
        "https://www.youtube.com/watch?v=abc123",
        "youtu.be/xyz",
        "https://www.youtube.com/shorts/q1w2e3",
        "www.youtube.com/playlist?list=PL-1_2",
    ];
    let mut controller = controller(4);
    let mut history = History::new();

    for url in urls {
        controller.update_url(url);
        let record = controller.submit(&mut history).await.unwrap();
        assert_eq!(record.category, classify(&record.url).category, "url: {}", url);
    }

    // most recent first
    let recorded: Vec<&str> = history.items().map(|r| r.url.as_str()).collect();
    let mut expected = urls.to_vec();
    expected.reverse();
    assert_eq!(recorded, expected);
}

#[tokio::test(start_paused = true)]
async fn ids_are_unique_within_a_session() {
    let mut controller = controller(5);
    let mut history = History::new();

    for i in 0..50 {
        controller.update_url(format!("https://youtu.be/clip{}", i));
        controller.submit(&mut history).await.unwrap();
    }

    let ids: HashSet<&str> = history.items().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), 50);
}

#[tokio::test(start_paused = true)]
async fn closure_sink_receives_each_record_once() {
    let mut controller = controller(6);
    let mut received: Vec<DownloadRecord> = Vec::new();
    let mut sink = |record: DownloadRecord| received.push(record);

    controller.update_url("https://www.youtube.com/shorts/abc");
    let record = controller.submit(&mut sink).await.unwrap();

    controller.update_url("");
    assert!(controller.submit(&mut sink).await.is_err());

    assert_eq!(received, vec![record]);
}

#[tokio::test(start_paused = true)]
async fn second_submit_while_loading_is_refused() {
    let mut controller = controller(7);
    let mut history = History::new();
    controller.update_url("https://youtu.be/abc");

    let pending = controller.begin_submit().unwrap();
    assert!(matches!(
        controller.begin_submit(),
        Err(TubeloaderError::InProgress)
    ));

    let pending = pending.wait().await;
    controller.finish(pending, &mut history).unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn configured_delays_and_quality_apply() {
    let settings = AppSettings {
        video_delay_ms: 50,
        other_delay_ms: 10,
        quality: VideoQuality::AudioOnly,
        ..AppSettings::default()
    };
    let mut controller = DownloadController::seeded(&settings, 8);
    let mut history = History::new();

    controller.update_url("https://youtu.be/abc");
    let started = Instant::now();
    let record = controller.submit(&mut history).await.unwrap();

    assert_elapsed(started, 50);
    assert_eq!(record.quality, VideoQuality::AudioOnly);
}

#[test]
fn record_serializes_with_lowercase_tags() {
    let mut controller = controller(9);
    let mut history = History::new();
    controller.update_url("https://www.youtube.com/watch?v=abc123");
    controller.set_quality(VideoQuality::AudioOnly);

    let pending = controller.begin_submit().unwrap();
    let record = controller.finish(pending, &mut history).unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["status"], "completed");
    assert_eq!(json["category"], "video");
    assert_eq!(json["quality"], "audio");

    let back: DownloadRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}
