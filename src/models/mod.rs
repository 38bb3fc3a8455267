mod photo;
mod upload;

pub use photo::*;
pub use upload::*;
