//! Composable specifications with diagnosable failure reasons.
//!
//! A [`Specification`] is a reusable boolean condition over a value type
//! that evaluates to a [`SatisfactionResult`]: a satisfied flag plus the
//! ordered reasons for any violation. Specifications compose through four
//! operators:
//!
//! - [`and`](Specification::and) evaluates both sides and reports every
//!   failing side's reasons, left first.
//! - [`and_also`](Specification::and_also) stops at the first failing side.
//! - [`or`](Specification::or) stops at the first satisfied side and reports
//!   both sides' reasons when neither holds.
//! - [`not`](Specification::not) inverts, failing with a caller-supplied
//!   reason.
//!
//! The [identity](Specification::identity) specification is always
//! satisfied. It vanishes from conjunctions and absorbs disjunctions.
//!
//! ```
//! use litespec_core::{MatchingExt, Specification};
//!
//! let odd = Specification::predicate(|i: &i32| i % 2 != 0, "Not an odd integer.");
//! let ones = Specification::predicate(|i: &i32| *i == 1, "Not a 1.");
//! let threes = Specification::predicate(|i: &i32| *i == 3, "Not a 3.");
//!
//! let spec = odd.and(&ones.or(&threes));
//! let kept: Vec<i32> = (1..=10).matching(&spec).collect();
//! assert_eq!(kept, vec![1, 3]);
//!
//! let r = ones.or(&threes).evaluate(&2);
//! assert_eq!(r.reasons(), ["Not a 1.", "Not a 3."]);
//! ```

mod combinator;
pub mod error;
pub mod evaluate;
pub mod filter;
pub mod result;
pub mod specification;

pub use error::SpecError;
pub use evaluate::Evaluate;
pub use filter::{Matching, MatchingExt};
pub use result::SatisfactionResult;
pub use specification::{SpecKind, Specification};
