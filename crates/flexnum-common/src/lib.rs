pub mod error;
pub mod kind;
pub mod render;
pub mod value;

#[cfg(feature = "json")]
mod json;

pub use error::*;
pub use kind::*;
pub use render::*;
pub use value::*;
