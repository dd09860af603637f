//! Logo rendering strategies.
//!
//! A listing's logo is drawn either as the image itself or, when the image cannot be
//! resolved, as the first character of the company name. The choice is made here from
//! an availability check; listing data is never altered.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;

use crate::models::job::JobListing;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogoView {
    Image { src: String, alt: String },
    Initial { initial: String },
}

pub trait LogoRenderer: Send + Sync {
    fn render(&self, listing: &JobListing) -> LogoView;
}

/// Shows the logo image.
pub struct ImageLogo;

impl LogoRenderer for ImageLogo {
    fn render(&self, listing: &JobListing) -> LogoView {
        LogoView::Image {
            src: listing.company_logo.clone(),
            alt: format!("{} logo", listing.company_name),
        }
    }
}

/// Shows the company's first character in place of the image.
pub struct InitialLogo;

impl LogoRenderer for InitialLogo {
    fn render(&self, listing: &JobListing) -> LogoView {
        LogoView::Initial {
            initial: listing
                .company_name
                .chars()
                .next()
                .map(String::from)
                .unwrap_or_default(),
        }
    }
}

/// Logo availability, settled once for the whole listing set.
///
/// Availability never touches the filesystem at render time: every logo in the set is
/// checked when the resolver is built and each fallback is logged then.
#[derive(Debug, Clone, Default)]
pub struct LogoResolver {
    logo_dir: Option<PathBuf>,
    availability: HashMap<String, bool>,
}

impl LogoResolver {
    pub fn new(logo_dir: Option<PathBuf>, listings: &[JobListing]) -> Self {
        let mut availability = HashMap::new();
        for listing in listings {
            if availability.contains_key(&listing.company_logo) {
                continue;
            }
            let available = check_logo(logo_dir.as_deref(), &listing.company_logo);
            if !available {
                warn!(
                    "Failed to resolve logo '{}' for {}; using initial",
                    listing.company_logo, listing.company_name
                );
            }
            availability.insert(listing.company_logo.clone(), available);
        }

        Self {
            logo_dir,
            availability,
        }
    }

    /// Cached answer for known logos. Unknown logos are only trusted when no logo
    /// directory is configured.
    pub fn is_available(&self, logo: &str) -> bool {
        match self.availability.get(logo) {
            Some(available) => *available,
            None => self.logo_dir.is_none() && check_logo(None, logo),
        }
    }

    pub fn renderer_for(&self, listing: &JobListing) -> &'static dyn LogoRenderer {
        if self.is_available(&listing.company_logo) {
            &ImageLogo
        } else {
            &InitialLogo
        }
    }

    pub fn render(&self, listing: &JobListing) -> LogoView {
        self.renderer_for(listing).render(listing)
    }
}

/// Remote URLs are trusted; relative paths are checked under the logo directory when
/// one is configured. An empty reference never resolves.
fn check_logo(logo_dir: Option<&Path>, logo: &str) -> bool {
    let logo = logo.trim();
    if logo.is_empty() {
        return false;
    }
    if logo.starts_with("http://") || logo.starts_with("https://") {
        return true;
    }
    match logo_dir {
        Some(dir) => resolve_under(dir, logo).is_file(),
        None => true,
    }
}

fn resolve_under(dir: &Path, logo: &str) -> PathBuf {
    let relative = logo.trim_start_matches("./").trim_start_matches('/');
    dir.join(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(company: &str, logo: &str) -> JobListing {
        JobListing {
            id: "1".to_string(),
            company_name: company.to_string(),
            company_logo: logo.to_string(),
            position: "Dev".to_string(),
            posted_at: "1d ago".to_string(),
            job_type: "Full Time".to_string(),
            location: "Remote".to_string(),
            is_new: false,
            is_featured: false,
            skills: Vec::new(),
        }
    }

    #[test]
    fn test_without_logo_dir_relative_logo_is_image() {
        let resolver = LogoResolver::default();
        assert_eq!(
            resolver.render(&listing("Photosnap", "/images/photosnap.svg")),
            LogoView::Image {
                src: "/images/photosnap.svg".to_string(),
                alt: "Photosnap logo".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_logo_falls_back_to_initial() {
        let resolver = LogoResolver::default();
        assert_eq!(
            resolver.render(&listing("Manage", "")),
            LogoView::Initial {
                initial: "M".to_string()
            }
        );
    }

    #[test]
    fn test_missing_file_under_logo_dir_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let faceit = listing("FaceIt", "/images/faceit.svg");
        let resolver = LogoResolver::new(Some(dir.path().to_path_buf()), &[faceit.clone()]);
        assert!(!resolver.is_available("/images/faceit.svg"));
        assert!(matches!(resolver.render(&faceit), LogoView::Initial { .. }));
    }

    #[test]
    fn test_existing_file_under_logo_dir_is_available() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/insure.svg"), "<svg/>").unwrap();
        assert!(check_logo(Some(dir.path()), "/images/insure.svg"));
        assert!(check_logo(Some(dir.path()), "./images/insure.svg"));

        let resolver = LogoResolver::new(
            Some(dir.path().to_path_buf()),
            &[listing("Insure", "/images/insure.svg")],
        );
        assert!(resolver.is_available("/images/insure.svg"));
    }

    #[test]
    fn test_remote_urls_are_trusted() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_logo(Some(dir.path()), "https://cdn.example.com/logo.png"));
    }

    #[test]
    fn test_availability_is_settled_at_construction() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("images")).unwrap();
        let logo_path = dir.path().join("images/insure.svg");
        std::fs::write(&logo_path, "<svg/>").unwrap();

        let insure = listing("Insure", "/images/insure.svg");
        let resolver = LogoResolver::new(Some(dir.path().to_path_buf()), &[insure.clone()]);

        // Renders keep using the cached answer after the file disappears.
        std::fs::remove_file(&logo_path).unwrap();
        for _ in 0..5 {
            assert!(matches!(resolver.render(&insure), LogoView::Image { .. }));
        }
    }

    #[test]
    fn test_unknown_logo_with_logo_dir_is_not_checked_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("late.svg"), "<svg/>").unwrap();
        let resolver = LogoResolver::new(Some(dir.path().to_path_buf()), &[]);
        assert!(!resolver.is_available("late.svg"));
    }

    #[test]
    fn test_initial_handles_multibyte_and_empty_names() {
        assert_eq!(
            InitialLogo.render(&listing("Ëyecam", "")),
            LogoView::Initial {
                initial: "Ë".to_string()
            }
        );
        assert_eq!(
            InitialLogo.render(&listing("", "")),
            LogoView::Initial {
                initial: String::new()
            }
        );
    }
}
