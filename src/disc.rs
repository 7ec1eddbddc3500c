//! CPS-3 disc image handling: load, title classification, ROM splice.
//!
//! The disc is loaded whole into memory, mutated in place and written back
//! out by [`crate::output`]. The splice overwrites the SIMM 5 slot and then
//! adjusts a single checksum byte so the loader's byte-sum check comes out
//! at the game's expected value.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::layout::{CHECKSUM_OFFSET, ROM_SIZE, SPLICE_OFFSET, TITLE_LEN, TITLE_OFFSET};
use crate::rom::RomImage;
use crate::title::Game;

#[derive(Debug, Error)]
pub enum DiscError {
    #[error(
        "read {actual:#X} bytes from '{}', expected {expected:#X}", .path.display()
    )]
    ReadMismatch {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("disc image is {len:#X} bytes, need at least {required:#X}")]
    TooSmall { len: usize, required: usize },

    #[error(
        "unrecognized disc title tag '{}': disc must be from Warzard/Red Earth or Street Fighter III",
        String::from_utf8_lossy(.tag)
    )]
    UnrecognizedTitle { tag: [u8; TITLE_LEN] },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A disc image held fully in memory.
#[derive(Debug, Clone)]
pub struct DiscImage {
    data: Vec<u8>,
}

impl DiscImage {
    /// Load a disc image whole. The read must return exactly the file's
    /// reported length.
    pub fn load(path: &Path) -> Result<Self, DiscError> {
        let io_err = |source| DiscError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let expected = file.metadata().map_err(io_err)?.len();

        let mut data = Vec::with_capacity(expected as usize);
        file.read_to_end(&mut data).map_err(io_err)?;
        if data.len() as u64 != expected {
            return Err(DiscError::ReadMismatch {
                path: path.to_path_buf(),
                expected,
                actual: data.len() as u64,
            });
        }

        Ok(Self { data })
    }

    /// Read the 8-byte title tag and classify the disc.
    pub fn title(&self) -> Result<Game, DiscError> {
        let end = TITLE_OFFSET + TITLE_LEN;
        if self.data.len() < end {
            return Err(DiscError::TooSmall {
                len: self.data.len(),
                required: end,
            });
        }

        let mut tag = [0u8; TITLE_LEN];
        tag.copy_from_slice(&self.data[TITLE_OFFSET..end]);
        Game::from_tag(&tag).ok_or(DiscError::UnrecognizedTitle { tag })
    }

    /// Splice the ROM image into the SIMM 5 slot and adjust the checksum
    /// byte.
    ///
    /// The loader sums every byte of the slot and compares the low byte
    /// against the game's target, so after the copy the byte at
    /// `SPLICE_OFFSET + CHECKSUM_OFFSET` is bumped by the wrapping delta
    /// `target - (sum & 0xFF)`. No other byte is touched.
    pub fn splice(&mut self, rom: &RomImage, target: u8) -> Result<(), DiscError> {
        let rom = rom.as_bytes();
        debug_assert_eq!(rom.len(), ROM_SIZE);

        let required = SPLICE_OFFSET + ROM_SIZE;
        if self.data.len() < required {
            return Err(DiscError::TooSmall {
                len: self.data.len(),
                required,
            });
        }

        self.data[SPLICE_OFFSET..SPLICE_OFFSET + ROM_SIZE].copy_from_slice(rom);
        let sum = rom.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));

        let checksum_byte = &mut self.data[SPLICE_OFFSET + CHECKSUM_OFFSET];
        *checksum_byte = checksum_byte.wrapping_add(target.wrapping_sub(sum));

        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disc_with_title(tag: &[u8; TITLE_LEN]) -> DiscImage {
        let mut data = vec![0u8; SPLICE_OFFSET + ROM_SIZE];
        data[TITLE_OFFSET..TITLE_OFFSET + TITLE_LEN].copy_from_slice(tag);
        DiscImage { data }
    }

    fn test_rom() -> RomImage {
        let data: Vec<u8> = (0..ROM_SIZE).map(|i| (i % 251) as u8).collect();
        RomImage::from_bytes(data)
    }

    #[test]
    fn test_title_classification() {
        assert_eq!(disc_with_title(b"CAP-WZD-").title().unwrap(), Game::Warzard);
        assert_eq!(
            disc_with_title(b"CAP-SF3-").title().unwrap(),
            Game::StreetFighter3
        );
    }

    #[test]
    fn test_title_unrecognized() {
        let result = disc_with_title(b"CAP-XXX-").title();
        assert!(matches!(
            result,
            Err(DiscError::UnrecognizedTitle { tag }) if &tag == b"CAP-XXX-"
        ));
    }

    #[test]
    fn test_title_disc_too_small() {
        let disc = DiscImage {
            data: vec![0u8; TITLE_OFFSET],
        };
        assert!(matches!(disc.title(), Err(DiscError::TooSmall { .. })));
    }

    #[test]
    fn test_splice_too_small() {
        let mut disc = DiscImage {
            data: vec![0u8; SPLICE_OFFSET + ROM_SIZE - 1],
        };
        let result = disc.splice(&test_rom(), 0x6C);
        assert!(matches!(
            result,
            Err(DiscError::TooSmall { required, .. }) if required == SPLICE_OFFSET + ROM_SIZE
        ));
    }

    #[test]
    fn test_splice_copies_rom_and_adjusts_checksum_byte() {
        let mut disc = disc_with_title(b"CAP-SF3-");
        let rom = test_rom();
        let target = 0x6C;

        disc.splice(&rom, target).unwrap();

        let spliced = &disc.as_bytes()[SPLICE_OFFSET..SPLICE_OFFSET + ROM_SIZE];
        let sum = rom
            .as_bytes()
            .iter()
            .fold(0u8, |acc, &b| acc.wrapping_add(b));

        // The adjustment is an additive delta on top of the copied byte.
        let old_byte = rom.as_bytes()[CHECKSUM_OFFSET];
        let expected = old_byte.wrapping_add(target.wrapping_sub(sum));
        assert_eq!(spliced[CHECKSUM_OFFSET], expected);

        // Every other byte of the slot is the ROM verbatim.
        for (i, (&got, &want)) in spliced.iter().zip(rom.as_bytes()).enumerate() {
            if i != CHECKSUM_OFFSET {
                assert_eq!(got, want, "mismatch at slot offset {i:#X}");
            }
        }
    }

    #[test]
    fn test_splice_leaves_rest_of_disc_untouched() {
        let mut disc = disc_with_title(b"CAP-WZD-");
        let before = disc.clone();
        disc.splice(&test_rom(), 0x32).unwrap();

        assert_eq!(
            &disc.as_bytes()[..SPLICE_OFFSET],
            &before.as_bytes()[..SPLICE_OFFSET]
        );
        assert_eq!(disc.as_bytes().len(), before.as_bytes().len());
    }

    #[test]
    fn test_splice_checksum_wraparound() {
        // All-0xFF ROM: sum = 0x400000 * 0xFF mod 256 = 0.
        let mut disc = disc_with_title(b"CAP-SF3-");
        let rom = RomImage::from_bytes(vec![0xFF; ROM_SIZE]);
        disc.splice(&rom, 0x6C).unwrap();

        // old byte 0xFF, delta 0x6C - 0 = 0x6C, 0xFF + 0x6C wraps to 0x6B.
        assert_eq!(disc.as_bytes()[SPLICE_OFFSET + CHECKSUM_OFFSET], 0x6B);
    }
}
