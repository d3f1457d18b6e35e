//! The combinator algebra.
//!
//! Every combinator is a plain struct holding its sub-parsers and
//! configuration, built by a free function here or a method on
//! [`ParserExt`](crate::ParserExt). Nothing runs at construction time.
//!
//! # Consumption rules
//!
//! | Combinator | Sub-parser fails without consuming | Sub-parser fails after consuming |
//! |------------|------------------------------------|----------------------------------|
//! | `or`, [`choice`] | next branch is tried, errors merge | failure propagates |
//! | [`optional`], `maybe` | default value, no input consumed | failure propagates |
//! | [`many`], [`sep_by`], [`chain_left1`] | loop ends successfully | failure propagates |
//! | [`attempt`] | failure, `consumed = false` | failure, `consumed = false` |

mod attempt;
mod bind;
mod chain;
mod choice;
mod label;
mod lazy;
mod lookahead;
mod map;
mod optional;
mod repeat;
mod separated;
mod user;

pub use attempt::{Attempt, attempt};
pub use bind::{And, AndThen, Between, Skip, Then, between};
pub use chain::{ChainLeft1, chain_left1};
pub use choice::{Choice, Or, choice};
pub use label::{Label, label};
pub use lazy::{Lazy, lazy};
pub use lookahead::{LookAhead, NotFollowedBy, look_ahead, not_followed_by};
pub use map::Map;
pub use optional::{Maybe, Optional, optional};
pub use repeat::{Count, Many, ManyTill, SkipMany, count, many, many_till, many1, skip_many, skip_many1};
pub use separated::{SepBy, sep_by, sep_by1};
pub use user::{get_user, position, put_user, update_user};
