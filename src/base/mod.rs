#[macro_use]
mod debug_trace;

mod bytes;

pub use self::bytes::Bytes;
