use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error("quadtree region width/height must be positive (width: {width}, height: {height})")]
    InvalidRegion { width: i32, height: i32 },
    #[error("quadtree region edges overflow i32 (x: {x}, y: {y}, width: {width}, height: {height})")]
    RegionOverflow {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    #[error("quadtree max level {max_level} exceeds the supported limit of {limit}")]
    MaxLevelTooDeep { max_level: u32, limit: u32 },
    #[error("quadtree preferred node length must be at least 1")]
    InvalidPreferredLen,
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
