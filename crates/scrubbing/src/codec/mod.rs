//! Conversion between the Relay PII config and the flat rule list.
//!
//! `decode` never fails: a config that cannot be read yields an empty list so
//! the editor can always render. `encode` writes rule `i` under key `"i"`,
//! which `decode` uses to restore list order.

mod decode;
mod encode;

pub use self::decode::{decode, decode_config};
pub use self::encode::{encode, encode_config};
