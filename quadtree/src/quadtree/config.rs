use crate::error::{QuadtreeError, QuadtreeResult};

/// Occupancy a leaf may reach before the next insertion splits it.
pub const PREFERRED_LEN: usize = 10;
/// Depth of the deepest nodes; the root sits at level 0.
pub const MAX_LEVEL: u32 = 3;
/// Deepest tree the pools are allowed to be sized for (5^6 slots).
pub const MAX_LEVEL_LIMIT: u32 = 6;

#[derive(Debug, Clone)]
pub struct Config {
    pub preferred_len: usize,
    pub max_level: u32,
    /// Slots preallocated in each pool. `None` sizes the pools for the worst case,
    /// `5^max_level`.
    pub pool_size: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            preferred_len: PREFERRED_LEN,
            max_level: MAX_LEVEL,
            pool_size: None,
        }
    }
}

impl Config {
    pub fn pool_size(&self) -> usize {
        self.pool_size
            .unwrap_or_else(|| 5usize.pow(self.max_level.min(MAX_LEVEL_LIMIT)))
            .max(1)
    }

    pub(crate) fn validate(&self) -> QuadtreeResult<()> {
        if self.max_level > MAX_LEVEL_LIMIT {
            return Err(QuadtreeError::MaxLevelTooDeep {
                max_level: self.max_level,
                limit: MAX_LEVEL_LIMIT,
            });
        }
        if self.preferred_len == 0 {
            return Err(QuadtreeError::InvalidPreferredLen);
        }
        Ok(())
    }
}
