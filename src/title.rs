//! Recognized CPS-3 disc titles.
//!
//! The loader identifies a disc by an 8-byte ASCII tag; the trailing `-` is
//! part of the tag. Each game has its own expected value for the SIMM 5
//! checksum byte, taken from DarkSoft's loader code.

use crate::layout::{SF3_TARGET, TITLE_LEN, WARZARD_TARGET};

/// A recognized game disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    /// Warzard / Red Earth (`CAP-WZD-`)
    Warzard,
    /// Street Fighter III (`CAP-SF3-`)
    StreetFighter3,
}

impl Game {
    /// Classify a raw title tag. Comparison is exact and case-sensitive.
    pub fn from_tag(tag: &[u8; TITLE_LEN]) -> Option<Self> {
        match tag {
            b"CAP-WZD-" => Some(Self::Warzard),
            b"CAP-SF3-" => Some(Self::StreetFighter3),
            _ => None,
        }
    }

    /// The title tag as found on disc, trailing marker included.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Warzard => "CAP-WZD-",
            Self::StreetFighter3 => "CAP-SF3-",
        }
    }

    /// Expected low byte of the spliced region's byte sum.
    pub fn checksum_target(&self) -> u8 {
        match self {
            Self::Warzard => WARZARD_TARGET,
            Self::StreetFighter3 => SF3_TARGET,
        }
    }

    /// Human-readable game name for progress output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Warzard => "Warzard / Red Earth",
            Self::StreetFighter3 => "Street Fighter III",
        }
    }
}
