pub mod propfind;
pub mod types;

pub use propfind::{Property, PropfindRequest};
pub use types::Depth;
