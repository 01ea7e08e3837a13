use serde::{Deserialize, Serialize};

/// Collected-coin counter. `collected` only ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinTally {
    pub collected: u32,
    pub total: u32,
}

impl CoinTally {
    pub fn new(total: u32) -> Self {
        Self {
            collected: 0,
            total,
        }
    }

    /// Count one more coin and return the new count.
    pub fn record(&mut self) -> u32 {
        self.collected = (self.collected + 1).min(self.total);
        self.collected
    }

    pub fn is_won(&self) -> bool {
        self.collected == self.total
    }

    /// Status text for the element beside the canvas.
    pub fn status_line(&self) -> String {
        if self.is_won() {
            format!(
                "Coins: {} / {} - You collected every coin!",
                self.collected, self.total
            )
        } else {
            format!("Coins: {} / {}", self.collected, self.total)
        }
    }
}
