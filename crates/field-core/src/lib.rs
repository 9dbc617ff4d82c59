pub mod constants;
pub mod environment;
pub mod grid;
pub mod sources;

use num_complex::Complex64;

pub use environment::{Environment, EnvironmentError};
pub use grid::Grid;
pub use sources::Monopole;

/// Trait for acoustic emitters that contribute a complex pressure to a
/// sampled field.
///
/// A source is immutable once constructed and never holds a reference back
/// to any environment that samples it, so a single instance may be shared
/// by several environments.
pub trait Source: Send + Sync {
    /// Position of the emitter in the sampling plane, in metres.
    fn position(&self) -> (f64, f64);

    /// Complex pressure contribution at distance `r` (metres) from the
    /// emitter, with speed of sound `c` (m/s).
    ///
    /// `r == 0` is not special-cased: a source sitting exactly on a sample
    /// point yields a non-finite value there, which propagates.
    fn pressure(&self, r: f64, c: f64) -> Complex64;
}
