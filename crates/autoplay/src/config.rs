use crate::PickPolicy;
use jokerdraw_core::TableConfig;

#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    pub seed: u64,
    /// Fixed tick length. Zero jumps straight to the next scheduled continuation.
    pub tick_ms: u64,
    pub max_ticks: u32,
    pub policy: PickPolicy,
    pub check_invariants: bool,
    pub table: TableConfig,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            tick_ms: 0,
            max_ticks: 50_000,
            policy: PickPolicy::Random,
            check_invariants: true,
            table: TableConfig::default(),
        }
    }
}
