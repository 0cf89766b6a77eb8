#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two embarrassingly parallel kernels for comparing ways of
//! splitting a loop across threads.
//!
//! The first renders the Mandelbrot set as an escape-time field: every
//! pixel is mapped onto a window of the complex plane, the point is
//! iterated until it escapes or the iteration cap is reached, and the
//! log of the count is stored.  Pixels never share anything, so any
//! split of the grid among threads produces the same field.  The field
//! is coloured through HSV and written out as a binary pixmap.
//!
//! The second estimates pi by throwing random points at the unit
//! square.  It does so three ways: a serial loop, a parallel loop in
//! which every thread draws from one shared generator, and a parallel
//! loop in which every thread owns a generator seeded from a base seed
//! and its index.  The shared generator is deliberately racy; the
//! difference between the last two is what the benchmark measures.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate rand;

pub mod cli;
pub mod colour;
pub mod errors;
pub mod escape;
pub mod partition;
pub mod pi;
pub mod planes;
pub mod ppm;
pub mod streams;
pub mod timer;

pub use errors::{Error, Result};
pub use escape::{escape_time, render_serial, render_threaded, Renderer, ScalarField};
pub use pi::{Estimator, Strategy};
pub use planes::{ComplexPlane, Pixel, PlaneMapper};
pub use streams::SharedStream;
