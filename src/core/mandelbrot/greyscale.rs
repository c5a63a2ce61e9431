use std::error::Error;
use std::fmt;

const NR_BUCKETS: u32 = 256;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GreyscaleMapError {
    IterationLimitTooSmall { limit: u32 },
    IterationLimitNotMultiple { limit: u32 },
}

impl fmt::Display for GreyscaleMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationLimitTooSmall { limit } => {
                write!(
                    f,
                    "iteration limit {} must be at least {}",
                    limit, NR_BUCKETS
                )
            }
            Self::IterationLimitNotMultiple { limit } => {
                write!(
                    f,
                    "iteration limit {} must be a multiple of {}",
                    limit, NR_BUCKETS
                )
            }
        }
    }
}

impl Error for GreyscaleMapError {}

/// Quantises iteration counts in `[1, limit]` into 256 equal-width buckets,
/// one per 8-bit intensity: 0 is the fastest escape (darkest), 255 the
/// iteration cap (points presumed inside the set).
///
/// The constructor enforces the bucket precondition — `limit` a positive
/// multiple of 256 — so a constructed map can never divide by zero or produce
/// an out-of-range bucket.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GreyscaleMap {
    bucket_size: u32,
}

impl GreyscaleMap {
    pub fn new(limit: u32) -> Result<Self, GreyscaleMapError> {
        if limit < NR_BUCKETS {
            return Err(GreyscaleMapError::IterationLimitTooSmall { limit });
        }

        if limit % NR_BUCKETS != 0 {
            return Err(GreyscaleMapError::IterationLimitNotMultiple { limit });
        }

        Ok(Self {
            bucket_size: limit / NR_BUCKETS,
        })
    }

    /// Maps an iteration count from the escape loop to its bucket index.
    /// Counts are 1-based, so `iterations = 1` lands in bucket 0 and
    /// `iterations = limit` in bucket 255.
    #[must_use]
    pub fn pixel(&self, iterations: u32) -> u8 {
        let bucket = iterations.saturating_sub(1) / self.bucket_size;
        bucket.min(u32::from(u8::MAX)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_limit_below_256() {
        assert_eq!(
            GreyscaleMap::new(0),
            Err(GreyscaleMapError::IterationLimitTooSmall { limit: 0 })
        );
        assert_eq!(
            GreyscaleMap::new(255),
            Err(GreyscaleMapError::IterationLimitTooSmall { limit: 255 })
        );
    }

    #[test]
    fn test_new_rejects_unaligned_limit() {
        assert_eq!(
            GreyscaleMap::new(300),
            Err(GreyscaleMapError::IterationLimitNotMultiple { limit: 300 })
        );
        assert_eq!(
            GreyscaleMap::new(1000),
            Err(GreyscaleMapError::IterationLimitNotMultiple { limit: 1000 })
        );
    }

    #[test]
    fn test_extremes_at_limit_256() {
        let map = GreyscaleMap::new(256).unwrap();

        assert_eq!(map.pixel(1), 0);
        assert_eq!(map.pixel(256), 255);
    }

    #[test]
    fn test_bucket_boundaries_at_limit_1024() {
        let map = GreyscaleMap::new(1024).unwrap();

        // bucket_size = 4: counts 1..=4 land in bucket 0, 5 starts bucket 1
        assert_eq!(map.pixel(1), 0);
        assert_eq!(map.pixel(4), 0);
        assert_eq!(map.pixel(5), 1);
        assert_eq!(map.pixel(1024), 255);
    }

    #[test]
    fn test_monotonically_non_decreasing() {
        let map = GreyscaleMap::new(512).unwrap();
        let mut previous = 0;

        for iterations in 1..=512 {
            let pixel = map.pixel(iterations);
            assert!(pixel >= previous);
            previous = pixel;
        }
    }
}
