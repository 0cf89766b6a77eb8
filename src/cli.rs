// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Argument validators shared by the `pi` and `mandel` binaries, in the
//! shape clap's `Arg::validator` expects.

use std::str::FromStr;

/// The mode value that runs every strategy.
pub const ALL_MODES: &str = "all";

/// Accepts `s` if it parses as a `T`.
pub fn validate_parse<T: FromStr>(s: &str, isnotanumber_err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

/// Accepts `s` if it parses as a `T` within `low..=high`.
pub fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(ref i) if *i >= low && *i <= high => Ok(()),
        Ok(_) => Err(isnotinrange_err.to_string()),
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}
