//! Reduces arithmetic expressions to a single number one operation at a time, recording every
//! intermediate expression along with a description of the operation that produced it.
//!
//! ```
//! use stepwise_compute::{evaluate, fmt::format_tokens};
//!
//! let steps = evaluate("(1+1)*2").unwrap();
//! let lines = steps.iter().map(|step| format_tokens(&step.tokens)).collect::<Vec<_>>();
//! assert_eq!(lines, ["( 1 + 1 ) * 2", "2 * 2", "4"]);
//! assert_eq!(steps[2].description.as_deref(), Some("multiply 2 by 2"));
//! ```
//!
//! # Features
//!
//! - `serde`: Derives [`Serialize`] and [`Deserialize`] for [`Step`], [`Interval`], and the token
//! types.
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html

pub mod error;
pub mod eval;
pub mod fmt;
pub mod reduce;
pub mod step;

pub use error::Error;
pub use eval::{evaluate, evaluate_with};
pub use fmt::{DescribeOptions, DescribeOptionsBuilder};
pub use reduce::{reduce, Reduction};
pub use step::{Interval, Step};
