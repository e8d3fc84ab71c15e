//! Data models for thumbnail candidates, card state and save tasks.

use eframe::egui;

/// The five nominal quality tiers YouTube publishes for every video,
/// highest resolution first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailQuality {
    MaxRes,
    High,
    Standard,
    Medium,
    Default,
}

impl ThumbnailQuality {
    /// Human-readable quality label shown on the card badge
    pub fn label(&self) -> &'static str {
        match self {
            Self::MaxRes => "Max Resolution",
            Self::High => "High Quality",
            Self::Standard => "Standard Quality",
            Self::Medium => "Medium Quality",
            Self::Default => "Default Quality",
        }
    }

    /// File segment used by the img.youtube.com location scheme
    pub fn file_segment(&self) -> &'static str {
        match self {
            Self::MaxRes => "maxresdefault",
            Self::High => "hqdefault",
            Self::Standard => "sddefault",
            Self::Medium => "mqdefault",
            Self::Default => "default",
        }
    }

    /// Nominal pixel dimensions; a convention, not a guarantee of the
    /// actual size of the returned image
    pub fn dimensions(&self) -> &'static str {
        match self {
            Self::MaxRes => "1280x720px",
            Self::High => "480x360px",
            Self::Standard => "640x480px",
            Self::Medium => "320x180px",
            Self::Default => "120x90px",
        }
    }

    /// Short tag embedded in the suggested filename
    pub fn filename_tag(&self) -> &'static str {
        match self {
            Self::MaxRes => "maxres",
            Self::High => "hq",
            Self::Standard => "sd",
            Self::Medium => "mq",
            Self::Default => "default",
        }
    }

    /// All tiers in fixed presentation order
    pub fn all() -> &'static [ThumbnailQuality] {
        &[
            Self::MaxRes,
            Self::High,
            Self::Standard,
            Self::Medium,
            Self::Default,
        ]
    }
}

/// One hypothesized thumbnail location at a specific quality tier.
/// Both `url` and `filename` are pure functions of (video id, tier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailCandidate {
    /// Quality tier this candidate belongs to
    pub quality: ThumbnailQuality,
    /// Candidate image location on the external host
    pub url: String,
    /// Suggested filename for save-to-disk
    pub filename: String,
}

/// Availability of a candidate as the probe pipeline advances.
pub enum CardStatus {
    /// Probe has not reported back yet
    Pending,
    /// Probe returned HTTP 200 and the image decoded; texture is ready
    Available(egui::TextureHandle),
    /// Probe failed, returned non-200, or the image did not decode
    Unavailable,
}

/// Per-candidate presentation state: the candidate plus its probe outcome.
pub struct CardState {
    pub candidate: ThumbnailCandidate,
    pub status: CardStatus,
}

/// The image currently shown enlarged in the preview modal.
/// At most one exists; cleared when the modal closes.
pub struct PreviewSelection {
    pub url: String,
    pub filename: String,
    pub texture: egui::TextureHandle,
}

/// Represents the current state of a save-to-disk task
#[derive(Clone)]
pub enum SaveStatus {
    /// Fetch and write are in progress
    Saving,
    /// File was written successfully
    Done,
    /// Fetch or write failed, with the reason
    Failed(String),
}

/// Data structure for tracking a save-to-disk task in the side panel
pub struct SaveTask {
    /// Unique task id; results and removals are keyed on it
    pub id: u64,
    /// Suggested filename the task is writing to
    pub filename: String,
    /// Current status of the task
    pub status: SaveStatus,
}
