//! A value that is either a successful outcome carrying a result, or a failed
//! outcome carrying an error, plus the combinators to compose such values.
//!
//! ```
//! use outcome::Outcome;
//!
//! let length: Outcome<usize, String> = Outcome::success("success").map(str::len);
//! assert_eq!(length, Outcome::success(7));
//! ```

mod outcome;
pub mod raise;

pub use crate::outcome::Outcome;
pub use crate::raise::{narrow, ErrorInitializing};
pub use macros::ErrorInitializing;

#[doc(hidden)]
pub use anyhow;
