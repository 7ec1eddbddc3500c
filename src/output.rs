//! Output persistence with derived file names.
//!
//! Standalone mode writes the bare ROM image for SuperBios usage; normal
//! mode writes the whole patched disc. Either way exactly one output file is
//! produced, named after the ROM base name (and, for discs, the title tag).

use std::path::PathBuf;

use thiserror::Error;

use crate::disc::DiscImage;
use crate::rom::RomImage;
use crate::title::Game;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(
        "could not write '{}' in full (a partial file may remain): {source}", .path.display()
    )]
    WriteIncomplete {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Name of the standalone ROM output: `<base_name>-SB.bin`.
pub fn standalone_name(base_name: &str) -> PathBuf {
    PathBuf::from(format!("{base_name}-SB.bin"))
}

/// Name of the patched disc output: `<tag>Patched-<base_name>.iso`.
pub fn spliced_name(game: Game, base_name: &str) -> PathBuf {
    PathBuf::from(format!("{}Patched-{}.iso", game.tag(), base_name))
}

/// Write the bare ROM image. Returns the path written.
pub fn write_standalone(rom: &RomImage, base_name: &str) -> Result<PathBuf, OutputError> {
    let path = standalone_name(base_name);
    write_file(path, rom.as_bytes())
}

/// Write the patched disc image. Returns the path written.
pub fn write_spliced(
    disc: &DiscImage,
    game: Game,
    base_name: &str,
) -> Result<PathBuf, OutputError> {
    let path = spliced_name(game, base_name);
    write_file(path, disc.as_bytes())
}

fn write_file(path: PathBuf, data: &[u8]) -> Result<PathBuf, OutputError> {
    match std::fs::write(&path, data) {
        Ok(()) => Ok(path),
        Err(source) => Err(OutputError::WriteIncomplete { path, source }),
    }
}
