//! Domain model (arguments, states, outcomes, errors).
//!
//! すべて 1 回の invocation の間だけ生きる一時的な値です。永続化はしません。

pub mod args;
pub mod errors;
pub mod outcome;
pub mod state;

pub use self::args::{InvocationArgs, EXPECTED_ARG_COUNT, MISCONFIGURED_ARGS_MESSAGE};
pub use self::errors::{ErrorKind, ShimError};
pub use self::outcome::{ExitStatus, InvocationReport};
pub use self::state::ShimState;
