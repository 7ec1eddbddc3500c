use thiserror::Error;

use crate::disc::DiscError;
use crate::output::OutputError;
use crate::rom::AssembleError;

/// Any failure in the assemble → classify → splice → write pipeline.
///
/// All of these are fatal: the run aborts on the first one, and at most one
/// output file exists afterwards.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Assemble(#[from] AssembleError),

    #[error(transparent)]
    Disc(#[from] DiscError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
