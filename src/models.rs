use crate::words::pick_word;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyState {
    pub word: String,
    #[serde(default)]
    pub count: u64,
}

impl DailyState {
    pub fn fresh() -> Self {
        Self {
            word: pick_word(None),
            count: 0,
        }
    }
}
