mod engine;
mod traits;
mod types;


pub use engine::*;
pub use traits::*;
pub use types::*;
