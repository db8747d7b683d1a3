//! Page components for mdraft.

mod create;
mod landing;

pub use create::Create;
pub use landing::Landing;
