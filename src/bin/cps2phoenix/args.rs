//! CLI argument parsing and pipeline execution.
//!
//! Two modes:
//! - `cps2phoenix <disc.iso> <rom-base>` patches a CPS-3 disc image.
//! - `cps2phoenix -sp <rom-base>` writes the bare ROM for SuperBios usage.
//!
//! `-q` suppresses progress output; errors always go to stderr. Exit code is
//! zero only on full success of either mode.

use std::path::PathBuf;
use std::process::ExitCode;

use cps2phoenix::{DiscImage, Error, RomImage, write_spliced, write_standalone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Splice the ROM set into a disc image.
    Patch { disc: PathBuf, base_name: String },
    /// Emit the assembled ROM standalone.
    Standalone { base_name: String },
}

#[derive(Debug)]
pub struct Args {
    pub mode: Mode,
    pub quiet: bool,
}

#[derive(Debug)]
pub enum ParseArgError {
    MissingRomBase,
    MissingDiscImage,
    UnexpectedArgument(String),
}

impl std::fmt::Display for ParseArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRomBase => write!(f, "missing ROM base name"),
            Self::MissingDiscImage => write!(f, "missing disc image path"),
            Self::UnexpectedArgument(s) => write!(f, "unexpected argument: {s}"),
        }
    }
}

impl std::error::Error for ParseArgError {}

impl Args {
    pub fn parse() -> Result<Self, ParseArgError> {
        Self::parse_from(std::env::args().skip(1).collect())
    }

    pub fn parse_from(args: Vec<String>) -> Result<Self, ParseArgError> {
        let mut quiet = false;
        let mut standalone = false;
        let mut positional: Vec<String> = Vec::new();

        for arg in args {
            match arg.as_str() {
                "-q" => quiet = true,
                "-sp" => standalone = true,
                _ if positional.len() < 2 => positional.push(arg),
                _ => return Err(ParseArgError::UnexpectedArgument(arg)),
            }
        }

        let mode = if standalone {
            let base_name = positional.pop().ok_or(ParseArgError::MissingRomBase)?;
            if let Some(extra) = positional.pop() {
                return Err(ParseArgError::UnexpectedArgument(extra));
            }
            Mode::Standalone { base_name }
        } else {
            let base_name = positional.pop().ok_or(ParseArgError::MissingRomBase)?;
            let disc = positional.pop().ok_or(ParseArgError::MissingDiscImage)?;
            Mode::Patch {
                disc: PathBuf::from(disc),
                base_name,
            }
        };

        Ok(Args { mode, quiet })
    }

    /// Run the pipeline: assemble -> classify -> splice -> write.
    /// Returns the path of the single output file on success.
    pub fn execute(&self) -> Result<PathBuf, Error> {
        match &self.mode {
            Mode::Standalone { base_name } => {
                self.progress("* Loading CPS-2 ROM segments.");
                let rom = RomImage::assemble(base_name)?;
                let path = write_standalone(&rom, base_name)?;
                self.progress(&format!("* ROM saved as '{}'.", path.display()));
                Ok(path)
            }
            Mode::Patch { disc, base_name } => {
                let mut image = DiscImage::load(disc)?;
                let game = image.title()?;
                self.progress(&format!("* {} disc found.", game.name()));
                self.progress("* Loading CPS-2 ROM segments.");
                let rom = RomImage::assemble(base_name)?;
                self.progress("* Injecting ROM into the SIMM 5 file on disc.");
                image.splice(&rom, game.checksum_target())?;
                let path = write_spliced(&image, game, base_name)?;
                self.progress(&format!("* Disc patched and saved as '{}'.", path.display()));
                Ok(path)
            }
        }
    }

    fn progress(&self, msg: &str) {
        if !self.quiet {
            println!("{msg}");
        }
    }
}

fn print_usage(cmd: &str) {
    eprintln!("Usage: {cmd} <disc.iso> <rom-base>");
    eprintln!("       {cmd} -sp <rom-base>");
    eprintln!();
    eprintln!("  Ex: {cmd} cap-sf3-3.iso mvcj-pnx");
    eprintln!("      uses the mvcj-pnx.03 .. mvcj-pnx.10 ROM files");
    eprintln!();
    eprintln!("  -sp  write a standalone <rom-base>-SB.bin for SuperBios usage");
    eprintln!("  -q   suppress progress output");
}

pub fn run() -> ExitCode {
    let cmd = std::env::args()
        .next()
        .unwrap_or_else(|| "cps2phoenix".to_string());

    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage(&cmd);
            return ExitCode::FAILURE;
        }
    };

    if !args.quiet {
        println!(
            "-= CPS-2 Phoenix tool =-  v{}\n   based on DarkSoft's and Razoola's work\n",
            env!("CARGO_PKG_VERSION")
        );
    }

    match args.execute() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
