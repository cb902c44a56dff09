//! Big Int \
//! This crate provides [`BigInt`]: arbitrary-precision signed integers with
//! the full operator surface of a built-in integer. Values are plain data;
//! clones are independent and every operation runs to completion without
//! suspending.
//!
//! # Example
//! ```
//! use big_int::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "10900000000000");
//! assert_eq!((&a - &b).to_string(), "9100000000000");
//! assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
//! assert_eq!((&a / &b).to_string(), "11");
//! assert_eq!((&a % &b).to_string(), "100000000000");
//! assert_eq!((&a << 10).to_string(), "10240000000000000");
//! assert_eq!((&a >> 10).to_string(), "9765625000");
//! ```

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;

pub use big_int::BigInt;
pub use error::ParseBigIntError;
