//! Responsible for creating and managing the linedraw settings

mod cli;

use std::ffi::OsString;

use clap::Parser;
use raster::{Algorithm, DEFAULT_MARKER_SIZE};

/// Number of stars drawn when the canvas is reset
pub const DEFAULT_STAR_COUNT: usize = 1000;

/// Holds all the configurable information for a linedraw session
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Seed for the random number generator, `None` seeds from the system time
    pub seed: Option<u64>,

    pub star_count: usize,

    /// Half-width of endpoint markers
    pub marker_size: i32,

    /// Algorithm used to draw random lines
    pub algorithm: Algorithm,
}

impl Settings {
    /// Build the settings from the command line of the current process.
    ///
    /// Invalid arguments print a usage message and terminate the process.
    #[must_use]
    pub fn init() -> Self {
        let mut settings = Self::default();

        let args = cli::Arguments::parse();

        args.update_settings(&mut settings);

        settings
    }

    /// Like [Settings::init], but with explicit arguments and without exiting on failure.
    ///
    /// The first argument is the binary name.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut settings = Self::default();

        let args = cli::Arguments::try_parse_from(args)?;

        args.update_settings(&mut settings);

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            star_count: DEFAULT_STAR_COUNT,
            marker_size: DEFAULT_MARKER_SIZE,
            algorithm: Algorithm::IncrementalError,
        }
    }
}
