// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The error type shared by both kernels and their drivers.

use std::io;

/// Everything that can go wrong while building a field, sampling pi,
/// or writing an image.
#[derive(Debug, Fail)]
pub enum Error {
    /// The scalar field could not be allocated.
    #[fail(display = "failed to allocate memory for {} cells", cells)]
    Allocation {
        /// Number of cells requested.
        cells: usize,
    },

    /// The mapping formula divides by `width - 1` and `height - 1`.
    #[fail(display = "grid of {}x{} is degenerate; both sides must be at least 2", width, height)]
    DegenerateGrid {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// The window's lower corner is not below and left of its upper corner.
    #[fail(display = "the window's lower corner is not below and to the left of its upper corner")]
    InvertedWindow,

    /// A scoped worker panicked before the join barrier.
    #[fail(display = "a worker thread panicked")]
    WorkerPanicked,

    /// Writing the raster failed.
    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = ::std::result::Result<T, Error>;
