pub mod matcher;
pub mod types;

pub use matcher::{find_aspects, match_pair};
pub use types::{Aspect, AspectType};
