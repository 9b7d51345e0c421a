pub mod error;
pub mod loader;
pub mod math;
pub mod pipeline;
pub mod types;
pub mod utils;

pub use error::*;
pub use loader::*;
pub use math::*;
pub use pipeline::*;
pub use types::*;
pub use utils::*;
