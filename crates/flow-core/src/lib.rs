pub mod error;
pub mod filter;
pub mod stats;
pub mod types;
pub mod validate;

pub use error::*;
pub use filter::*;
pub use types::*;
pub use validate::*;
