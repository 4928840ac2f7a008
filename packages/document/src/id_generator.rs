/// Sequential ID generator for sections and content items.
///
/// IDs are decimal strings counting up from a numeric seed (normally the
/// host's millisecond clock at startup), so ids minted in one session
/// never repeat.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: u64,
    count: u64,
}

impl IdGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        self.seed.saturating_add(self.count).to_string()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.count
    }
}
