pub mod codec;

pub use codec::{decode_bytes, decode_file, encode_png, EncodeOptions};
