pub use enob::*;
pub use fft::*;

pub mod enob;
pub mod fft;
