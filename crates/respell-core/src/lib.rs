// respell-core: value types and character utilities shared by the engine
// and the command-line tools.

pub mod alphabet;
pub mod candidates;
pub mod case;
pub mod enums;
pub mod token;

pub use candidates::{CandidateSet, NO_SUGGESTION};
pub use enums::{Category, ParseModeError, SearchMode};
