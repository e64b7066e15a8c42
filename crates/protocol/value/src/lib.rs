#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod errors;
pub use errors::{ValueError, ValueResult};

mod value;
pub use value::{MAX_TUPLE_SIZE, Value, ValueKind};

mod codec;
pub use codec::{TYPE_CODE_CODE_POINT, TYPE_CODE_HASH_ONLY, TYPE_CODE_INT, TYPE_CODE_TUPLE};

mod hash;

#[cfg(feature = "serde")]
mod serde_hex;

mod bytestack;
pub use bytestack::{bytes_to_bytestack, bytestack_to_bytes};
