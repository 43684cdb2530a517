pub mod codec;
pub mod icns;
pub mod ico;
pub mod iconset;
pub mod process;
pub mod source;

mod error;
pub use error::Error;
