use serde::{Deserialize, Serialize};

/// Entry in the explore page's trending list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub rank: u32,
    pub topic: String,
    /// Display count, already abbreviated (e.g. "125K").
    pub tweets: String,
}
