pub mod disc;
pub mod error;
pub mod layout;
pub mod output;
pub mod rom;
pub mod title;

pub use disc::{DiscError, DiscImage};
pub use error::Error;
pub use output::{OutputError, spliced_name, standalone_name, write_spliced, write_standalone};
pub use rom::{AssembleError, RomImage, segment_path, swap_word_pairs};
pub use title::Game;
