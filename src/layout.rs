//! Fixed binary layout of the CPS-3 disc image and the CPS-2 ROM set.
//!
//! These offsets come from DarkSoft's and Razoola's analysis of the CPS-3
//! loader. They are the format: every value here is consumed verbatim by the
//! hardware's integrity check, so none of them is tunable.

/// Total size of the assembled CPS-2 ROM image (32 mbit).
pub const ROM_SIZE: usize = 0x40_0000;

/// Nominal size of one ROM dump file.
pub const SEGMENT_SIZE: usize = 0x8_0000;

/// Number of ROM dump files in a full set.
pub const SEGMENT_COUNT: usize = 8;

/// The first this many segments must be present and readable.
pub const REQUIRED_SEGMENTS: usize = 2;

/// Segment files are numbered `.03` through `.10`: file number is the
/// 1-based segment index plus this.
pub const SEGMENT_NUMBER_BASE: usize = 2;

/// Sentinel written to every unpopulated byte of the ROM buffer.
pub const FILL_BYTE: u8 = 0xFF;

/// Offset of the 8-byte game title tag within the disc image.
pub const TITLE_OFFSET: usize = 0x8028;

/// Length of the title tag, trailing `-` included.
pub const TITLE_LEN: usize = 8;

/// Absolute offset of the SIMM 5 slot ("file 50") the ROM is spliced into.
pub const SPLICE_OFFSET: usize = 0x0280_A800;

/// Offset of the checksum byte, relative to [`SPLICE_OFFSET`].
pub const CHECKSUM_OFFSET: usize = 0x3F_EE07;

/// Checksum target for Warzard / Red Earth discs.
pub const WARZARD_TARGET: u8 = 0x32;

/// Checksum target for Street Fighter III discs.
pub const SF3_TARGET: u8 = 0x6C;
