mod decode;
mod reading;

pub use decode::{decode, DecodeError};
pub use reading::Reading;
