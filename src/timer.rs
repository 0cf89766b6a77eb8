// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Wall-clock timing of a single kernel invocation.

use std::fmt;
use std::time::{Duration, Instant};

/// The result of a timed call along with how long it took.
#[derive(Debug)]
pub struct Timed<T> {
    /// What was timed.
    pub label: String,
    /// How long the call ran.
    pub elapsed: Duration,
    /// What the call returned.
    pub value: T,
}

impl<T> Timed<T> {
    /// Elapsed time in fractional seconds.
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs() as f64 + f64::from(self.elapsed.subsec_nanos()) * 1e-9
    }
}

impl<T> fmt::Display for Timed<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Elapsed: {:7.3} seconds [{}]", self.seconds(), self.label)
    }
}

/// Runs `call` once and measures it.
pub fn measure<T, F: FnOnce() -> T>(label: &str, call: F) -> Timed<T> {
    let start = Instant::now();
    let value = call();
    let elapsed = start.elapsed();
    debug!("{} finished in {:?}", label, elapsed);
    Timed {
        label: label.to_string(),
        elapsed,
        value,
    }
}

/// Runs `call` once, prints the timing line, and hands back the value.
pub fn time<T, F: FnOnce() -> T>(label: &str, call: F) -> T {
    let timed = measure(label, call);
    println!("{}", timed);
    timed.value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn measure_returns_the_value() {
        let timed = measure("sum", || (1..=10).sum::<u32>());
        assert_eq!(timed.value, 55);
        assert_eq!(timed.label, "sum");
    }

    #[test]
    fn measure_covers_the_call() {
        let timed = measure("sleep", || thread::sleep(Duration::from_millis(20)));
        assert!(timed.elapsed >= Duration::from_millis(20));
        assert!(timed.seconds() >= 0.02);
    }

    #[test]
    fn report_line_is_padded() {
        let timed = Timed {
            label: "Serial".to_string(),
            elapsed: Duration::from_millis(1500),
            value: (),
        };
        assert_eq!(timed.to_string(), "Elapsed:   1.500 seconds [Serial]");
    }
}
