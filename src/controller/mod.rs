//! Mock download controller
//!
//! Owns the download form and turns a submission into a fabricated
//! [`DownloadRecord`] after a fixed delay. Event-loop hosts drive the two
//! halves separately: [`DownloadController::begin_submit`] validates and
//! enters the loading phase, the host awaits [`PendingDownload::wait`], then
//! [`DownloadController::finish`] builds the record and resets the form.

pub mod fabricate;
pub mod notice;
pub mod state;

pub use fabricate::{Fabricator, CANNED_TITLES};
pub use notice::{Notice, NoticeKind};
pub use state::{FormState, Phase};

use crate::classifier::{classify, Classification, UrlCategory};
use crate::history::{DownloadRecord, DownloadStatus, HistorySink};
use crate::utils::config::{AppSettings, VideoQuality};
use crate::utils::error::TubeloaderError;
use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info, warn};

/// A submission that passed validation and is waiting out its delay.
///
/// Only [`DownloadController::begin_submit`] builds one.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDownload {
    url: String,
    quality: VideoQuality,
    destination: String,
    category: UrlCategory,
    delay: Duration,
}

impl PendingDownload {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn quality(&self) -> VideoQuality {
        self.quality
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn category(&self) -> UrlCategory {
        self.category
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleep for the simulated processing time. Not cancellable.
    pub async fn wait(self) -> Self {
        tokio::time::sleep(self.delay).await;
        self
    }
}

/// Mock download controller
#[derive(Debug)]
pub struct DownloadController<R = StdRng> {
    form: FormState,
    fabricator: Fabricator<R>,
    destinations: Vec<String>,
    video_delay: Duration,
    other_delay: Duration,
}

impl DownloadController<StdRng> {
    /// Controller with an entropy-seeded random source
    pub fn new(settings: &AppSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Controller whose titles, thumbnails and ids repeat for a given seed
    pub fn seeded(settings: &AppSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DownloadController<R> {
    pub fn with_rng(settings: &AppSettings, rng: R) -> Self {
        Self {
            form: FormState::new(settings.quality, settings.default_destination.clone()),
            fabricator: Fabricator::new(rng),
            destinations: settings.destinations.clone(),
            video_delay: Duration::from_millis(settings.video_delay_ms),
            other_delay: Duration::from_millis(settings.other_delay_ms),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Re-classify on every edit
    pub fn update_url(&mut self, text: impl Into<String>) -> Classification {
        self.form.set_url(text.into());
        self.form.classification
    }

    pub fn clear_url(&mut self) {
        self.form.clear_url();
    }

    pub fn set_quality(&mut self, quality: VideoQuality) {
        self.form.quality = quality;
    }

    /// Swap the destination label for a random canned path
    pub fn select_destination(&mut self) -> &str {
        if let Some(choice) = self.fabricator.pick(&self.destinations) {
            self.form.destination = choice.to_string();
        }
        debug!("Destination set to {}", self.form.destination);
        &self.form.destination
    }

    /// Simulated processing time; videos take longer than everything else
    pub fn delay_for(&self, category: UrlCategory) -> Duration {
        match category {
            UrlCategory::Video => self.video_delay,
            _ => self.other_delay,
        }
    }

    /// Validate the form and enter the loading phase.
    ///
    /// A rejected submission leaves the form untouched.
    pub fn begin_submit(&mut self) -> Result<PendingDownload, TubeloaderError> {
        if self.form.is_loading() {
            warn!("Submit ignored, download already in progress");
            return Err(TubeloaderError::InProgress);
        }
        if !self.form.is_valid() {
            warn!("Rejected submit for {:?}", self.form.url);
            return Err(TubeloaderError::InvalidUrl(self.form.url.clone()));
        }

        let category = self.form.category();
        let pending = PendingDownload {
            url: self.form.url.clone(),
            quality: self.form.quality,
            destination: self.form.destination.clone(),
            category,
            delay: self.delay_for(category),
        };

        self.form.phase = Phase::Loading;
        info!(
            "Simulating {} download of {} ({:?})",
            category, pending.url, pending.delay
        );
        Ok(pending)
    }

    /// Fabricate the record, hand it to `sink`, and reset the form.
    ///
    /// Only accepted while a submission is loading. The record's category is
    /// re-derived from its URL.
    pub fn finish<S>(
        &mut self,
        pending: PendingDownload,
        sink: &mut S,
    ) -> Result<DownloadRecord, TubeloaderError>
    where
        S: HistorySink + ?Sized,
    {
        if !self.form.is_loading() {
            warn!("Finish ignored, no download in progress for {}", pending.url);
            return Err(TubeloaderError::NotLoading);
        }

        let classification = classify(&pending.url);
        if !classification.is_valid {
            warn!("Refusing to record invalid URL {:?}", pending.url);
            self.form.phase = Phase::Idle;
            return Err(TubeloaderError::InvalidUrl(pending.url));
        }

        let record = DownloadRecord {
            id: self.fabricator.identifier(),
            url: pending.url,
            title: self.fabricator.title().to_string(),
            quality: pending.quality,
            destination: pending.destination,
            created_at: Local::now(),
            status: DownloadStatus::Completed,
            thumbnail_url: self.fabricator.thumbnail_url(),
            category: classification.category,
        };

        sink.record(record.clone());
        self.form.clear_url();
        self.form.phase = Phase::Idle;

        info!("Completed {} as {:?}", record.id, record.title);
        Ok(record)
    }

    /// Full submission: validate, wait, record
    pub async fn submit<S>(&mut self, sink: &mut S) -> Result<DownloadRecord, TubeloaderError>
    where
        S: HistorySink + ?Sized,
    {
        let pending = self.begin_submit()?.wait().await;
        self.finish(pending, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;

    fn controller() -> DownloadController {
        DownloadController::seeded(&AppSettings::default(), 42)
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        let form = c.form();
        assert!(form.url.is_empty());
        assert!(!form.is_valid());
        assert_eq!(form.category(), UrlCategory::Unrecognized);
        assert_eq!(form.phase, Phase::Idle);
        assert_eq!(form.quality, VideoQuality::Highest);
        assert_eq!(form.destination, AppSettings::default().default_destination);
    }

    #[test]
    fn test_update_url_reclassifies() {
        let mut c = controller();
        assert!(c.update_url("https://youtube.com/playlist?list=XYZ").is_valid);
        assert_eq!(c.form().category(), UrlCategory::Playlist);

        let cls = c.update_url("nope");
        assert!(!cls.is_valid);
        assert_eq!(c.form().category(), UrlCategory::Unrecognized);
        assert_eq!(c.form().url, "nope");
    }

    #[test]
    fn test_select_destination_uses_canned_paths() {
        let settings = AppSettings::default();
        let mut c = controller();
        for _ in 0..10 {
            let picked = c.select_destination().to_string();
            assert!(settings.destinations.contains(&picked));
        }
    }

    #[test]
    fn test_invalid_submit_is_rejected_without_state_change() {
        let mut c = controller();
        c.update_url("not a url");
        let before = c.form().clone();

        let err = c.begin_submit().unwrap_err();
        assert!(matches!(err, TubeloaderError::InvalidUrl(ref u) if u == "not a url"));
        assert_eq!(c.form(), &before);
    }

    #[test]
    fn test_begin_submit_enters_loading() {
        let mut c = controller();
        c.update_url("https://www.youtube.com/shorts/abc");
        c.set_quality(VideoQuality::Low);

        let pending = c.begin_submit().unwrap();
        assert!(c.form().is_loading());
        assert!(!c.form().can_submit());
        assert_eq!(pending.category(), UrlCategory::Short);
        assert_eq!(pending.quality(), VideoQuality::Low);
        assert_eq!(pending.delay(), Duration::from_millis(2000));

        assert!(matches!(c.begin_submit(), Err(TubeloaderError::InProgress)));
    }

    #[test]
    fn test_video_delay_is_longer() {
        let c = controller();
        assert_eq!(c.delay_for(UrlCategory::Video), Duration::from_millis(3000));
        assert_eq!(c.delay_for(UrlCategory::Playlist), Duration::from_millis(2000));
        assert_eq!(c.delay_for(UrlCategory::Short), Duration::from_millis(2000));
    }

    #[test]
    fn test_finish_records_and_resets() {
        let mut c = controller();
        let mut history = History::new();
        c.update_url("https://www.youtube.com/watch?v=abc123");
        let pending = c.begin_submit().unwrap();

        let record = c.finish(pending, &mut history).unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), Some(&record));
        assert_eq!(record.category, UrlCategory::Video);
        assert_eq!(record.status, DownloadStatus::Completed);
        assert_eq!(record.url, "https://www.youtube.com/watch?v=abc123");
        assert!(CANNED_TITLES.contains(&record.title.as_str()));
        assert!(c.form().url.is_empty());
        assert!(!c.form().is_valid());
        assert_eq!(c.form().phase, Phase::Idle);
    }

    #[test]
    fn test_finish_while_idle_appends_nothing() {
        let mut other = controller();
        other.update_url("https://youtube.com/playlist?list=XYZ");
        let pending = other.begin_submit().unwrap();

        let mut c = controller();
        let mut history = History::new();
        c.update_url("not a url");

        let err = c.finish(pending, &mut history).unwrap_err();
        assert!(matches!(err, TubeloaderError::NotLoading));
        assert!(history.is_empty());
        assert_eq!(c.form().url, "not a url");
        assert_eq!(c.form().phase, Phase::Idle);
    }

    #[test]
    fn test_finish_twice_records_once() {
        let mut c = controller();
        let mut history = History::new();
        c.update_url("https://www.youtube.com/shorts/abc");
        let pending = c.begin_submit().unwrap();

        c.finish(pending.clone(), &mut history).unwrap();
        assert!(matches!(
            c.finish(pending, &mut history),
            Err(TubeloaderError::NotLoading)
        ));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_finish_category_follows_url() {
        let mut c = controller();
        let mut history = History::new();
        c.update_url("https://youtu.be/abc");
        let mut pending = c.begin_submit().unwrap();
        pending.category = UrlCategory::Playlist;

        let record = c.finish(pending, &mut history).unwrap();
        assert_eq!(record.category, classify(&record.url).category);
        assert_eq!(record.category, UrlCategory::Video);
    }

    #[test]
    fn test_finish_refuses_invalid_url() {
        let mut c = controller();
        let mut history = History::new();
        c.update_url("https://www.youtube.com/watch?v=abc123");
        let mut pending = c.begin_submit().unwrap();
        pending.url = "not a url".to_string();

        let err = c.finish(pending, &mut history).unwrap_err();
        assert!(matches!(err, TubeloaderError::InvalidUrl(ref u) if u == "not a url"));
        assert!(history.is_empty());
        assert!(!c.form().is_loading());
    }

    #[test]
    fn test_submit_with_zero_delay() {
        let settings = AppSettings {
            video_delay_ms: 0,
            other_delay_ms: 0,
            ..AppSettings::default()
        };
        let mut c = DownloadController::seeded(&settings, 9);
        let mut history = History::new();

        c.update_url("https://youtube.com/playlist?list=XYZ");
        let record = tokio_test::block_on(c.submit(&mut history)).unwrap();
        assert_eq!(record.category, UrlCategory::Playlist);

        let err = tokio_test::block_on(c.submit(&mut history)).unwrap_err();
        assert!(matches!(err, TubeloaderError::InvalidUrl(_)));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_same_seed_same_record_fields() {
        let mut a = controller();
        let mut b = controller();
        let mut ha = History::new();
        let mut hb = History::new();

        for (c, h) in [(&mut a, &mut ha), (&mut b, &mut hb)] {
            c.update_url("youtu.be/xyz");
            let pending = c.begin_submit().unwrap();
            c.finish(pending, h).unwrap();
        }

        let (ra, rb) = (ha.latest().unwrap(), hb.latest().unwrap());
        assert_eq!(ra.id, rb.id);
        assert_eq!(ra.title, rb.title);
        assert_eq!(ra.thumbnail_url, rb.thumbnail_url);
    }
}
