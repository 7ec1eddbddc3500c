//! CPS-2 ROM set assembly.
//!
//! A full set is 8 dump files of 0x80000 bytes each, numbered `.03` through
//! `.10` after a common base name. Boards with fewer populated sockets ship
//! fewer files; everything past the first two is optional and its window in
//! the assembled image stays at the flash erase value 0xFF.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use thiserror::Error;

use crate::layout::{
    FILL_BYTE, REQUIRED_SEGMENTS, ROM_SIZE, SEGMENT_COUNT, SEGMENT_NUMBER_BASE, SEGMENT_SIZE,
};

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("required ROM segment '{}' could not be read", .path.display())]
    MissingRequiredSegment { path: PathBuf },

    #[error(
        "read {actual:#X} bytes from '{}', expected {expected:#X}", .path.display()
    )]
    SegmentReadMismatch {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error(
        "segment '{}' is {len:#X} bytes but only {available:#X} fit in its slot", .path.display()
    )]
    SegmentOversized {
        path: PathBuf,
        len: u64,
        available: u64,
    },

    #[error("buffer length {length} is not a multiple of 2 for word swap")]
    LengthNotEven { length: usize },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The assembled, byte-swapped 0x400000-byte ROM image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomImage {
    data: Vec<u8>,
}

impl RomImage {
    /// Assemble the ROM image from the segment files of `base_name`.
    ///
    /// The buffer is pre-filled with 0xFF, segments are placed at
    /// `SEGMENT_SIZE * (index - 1)`, and the whole buffer is word-swapped
    /// afterwards. The first two segments must be readable; later ones may
    /// be absent.
    pub fn assemble(base_name: &str) -> Result<Self, AssembleError> {
        let mut data = vec![FILL_BYTE; ROM_SIZE];

        for index in 1..=SEGMENT_COUNT {
            let path = segment_path(base_name, index);
            let mut file = match File::open(&path) {
                Ok(file) => file,
                Err(_) if index <= REQUIRED_SEGMENTS => {
                    return Err(AssembleError::MissingRequiredSegment { path });
                }
                // Unpopulated socket: the window stays 0xFF.
                Err(_) => continue,
            };

            let expected = file
                .metadata()
                .map_err(|source| AssembleError::Io {
                    path: path.clone(),
                    source,
                })?
                .len();

            let offset = SEGMENT_SIZE * (index - 1);
            let available = (ROM_SIZE - offset) as u64;
            if expected > available {
                return Err(AssembleError::SegmentOversized {
                    path,
                    len: expected,
                    available,
                });
            }

            let mut contents = Vec::with_capacity(expected as usize);
            file.read_to_end(&mut contents)
                .map_err(|source| AssembleError::Io {
                    path: path.clone(),
                    source,
                })?;
            if contents.len() as u64 != expected {
                return Err(AssembleError::SegmentReadMismatch {
                    path,
                    expected,
                    actual: contents.len() as u64,
                });
            }

            // A short segment leaves the rest of its window at 0xFF.
            data[offset..offset + contents.len()].copy_from_slice(&contents);
        }

        // ROM_SIZE is even, so the swap cannot fail here.
        swap_word_pairs(&mut data)?;

        Ok(Self { data })
    }

    /// Wrap an already-assembled buffer.
    #[cfg(test)]
    pub(crate) fn from_bytes(data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), ROM_SIZE);
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// File name of segment `index` (1-based): `<base_name>.NN` with NN
/// starting at 03.
pub fn segment_path(base_name: &str, index: usize) -> PathBuf {
    PathBuf::from(format!("{base_name}.{:02}", index + SEGMENT_NUMBER_BASE))
}

/// Exchange each adjacent byte pair in place (16-bit word byte order).
///
/// Self-inverse: applying it twice restores the buffer. An odd-length
/// buffer has no complete final pair and is rejected.
pub fn swap_word_pairs(data: &mut [u8]) -> Result<(), AssembleError> {
    if !data.len().is_multiple_of(2) {
        return Err(AssembleError::LengthNotEven { length: data.len() });
    }
    for pair in data.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }
    Ok(())
}
