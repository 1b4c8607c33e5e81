//! Canned data generators for simulated downloads

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use uuid::Builder;

/// Titles handed out to finished downloads
pub const CANNED_TITLES: [&str; 5] = [
    "How to Build a Website in 2025",
    "Amazing Travel Destinations You Must Visit",
    "Learning React in 30 Days",
    "Top 10 Programming Languages in 2025",
    "The Ultimate Cooking Guide",
];

const THUMBNAIL_WIDTH: u32 = 640;
const THUMBNAIL_HEIGHT: u32 = 360;

/// Random source for titles, thumbnails, destinations and ids.
///
/// Ids handed out by one fabricator never repeat.
#[derive(Debug)]
pub struct Fabricator<R> {
    rng: R,
    issued: HashSet<String>,
}

impl<R: Rng> Fabricator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
        }
    }

    pub fn title(&mut self) -> &'static str {
        CANNED_TITLES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(CANNED_TITLES[0])
    }

    pub fn thumbnail_url(&mut self) -> String {
        let seed: u64 = self.rng.gen();
        format!(
            "https://picsum.photos/seed/{}/{}/{}",
            seed, THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT
        )
    }

    /// Pick one of `choices`, or `None` when there is nothing to pick from
    pub fn pick<'a>(&mut self, choices: &'a [String]) -> Option<&'a str> {
        choices.choose(&mut self.rng).map(String::as_str)
    }

    pub fn identifier(&mut self) -> String {
        loop {
            let id = Builder::from_random_bytes(self.rng.gen())
                .into_uuid()
                .to_string();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_same_seed_same_output() {
        let mut a = Fabricator::new(StdRng::seed_from_u64(7));
        let mut b = Fabricator::new(StdRng::seed_from_u64(7));

        assert_eq!(a.title(), b.title());
        assert_eq!(a.thumbnail_url(), b.thumbnail_url());
        assert_eq!(a.identifier(), b.identifier());
    }

    #[test]
    fn test_title_is_canned() {
        let mut f = Fabricator::new(StdRng::seed_from_u64(1));
        for _ in 0..20 {
            assert!(CANNED_TITLES.contains(&f.title()));
        }
    }

    #[test]
    fn test_thumbnail_shape() {
        let mut f = Fabricator::new(StdRng::seed_from_u64(2));
        let url = f.thumbnail_url();
        assert!(url.starts_with("https://picsum.photos/seed/"));
        assert!(url.ends_with("/640/360"));
    }

    #[test]
    fn test_identifiers_unique() {
        let mut f = Fabricator::new(StdRng::seed_from_u64(3));
        let ids: HashSet<String> = (0..500).map(|_| f.identifier()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_identifier_is_random_uuid() {
        let mut f = Fabricator::new(StdRng::seed_from_u64(5));
        let id = uuid::Uuid::parse_str(&f.identifier()).unwrap();
        assert_eq!(id.get_version(), Some(uuid::Version::Random));
    }

    #[test]
    fn test_pick_from_empty() {
        let mut f = Fabricator::new(StdRng::seed_from_u64(4));
        assert_eq!(f.pick(&[]), None);
        let one = vec!["~/Videos".to_string()];
        assert_eq!(f.pick(&one), Some("~/Videos"));
    }
}
