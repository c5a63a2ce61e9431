use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ValidationError {
    NonFiniteBound { bound: &'static str, value: f64 },
    ZeroGridDimension { axis: &'static str },
    IterationLimitTooSmall { limit: u32 },
    IterationLimitNotMultiple { limit: u32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBound { bound, value } => {
                write!(f, "bound {} must be finite, got {}", bound, value)
            }
            Self::ZeroGridDimension { axis } => {
                write!(f, "grid dimension {} must be at least 1", axis)
            }
            Self::IterationLimitTooSmall { limit } => {
                write!(f, "iteration limit {} must be at least 256", limit)
            }
            Self::IterationLimitNotMultiple { limit } => {
                write!(f, "iteration limit {} must be a multiple of 256", limit)
            }
        }
    }
}

impl Error for ValidationError {}

/// Validated parameters for one grid render: a rectangular region of the
/// complex plane, the number of sample points per axis, and the iteration cap.
///
/// Construction is the single validation gate of the pipeline; a constructed
/// request is immutable and every downstream stage may rely on its invariants.
/// The bounds are not required to be ordered: a reversed region simply renders
/// mirrored, so only finiteness is checked.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    x_num: u32,
    y_num: u32,
    n_lim: u32,
}

impl RenderRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        x_num: u32,
        y_num: u32,
        n_lim: u32,
    ) -> Result<Self, ValidationError> {
        for (bound, value) in [
            ("x_min", x_min),
            ("x_max", x_max),
            ("y_min", y_min),
            ("y_max", y_max),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteBound { bound, value });
            }
        }

        if x_num == 0 {
            return Err(ValidationError::ZeroGridDimension { axis: "x_num" });
        }

        if y_num == 0 {
            return Err(ValidationError::ZeroGridDimension { axis: "y_num" });
        }

        // The greyscale map quantises [1, n_lim] into 256 equal buckets, so the
        // limit must provide at least one full iteration per bucket.
        if n_lim < 256 {
            return Err(ValidationError::IterationLimitTooSmall { limit: n_lim });
        }

        if n_lim % 256 != 0 {
            return Err(ValidationError::IterationLimitNotMultiple { limit: n_lim });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
            x_num,
            y_num,
            n_lim,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn x_num(&self) -> u32 {
        self.x_num
    }

    #[must_use]
    pub fn y_num(&self) -> u32 {
        self.y_num
    }

    #[must_use]
    pub fn iteration_limit(&self) -> u32 {
        self.n_lim
    }

    /// Total number of samples in the grid, widened so a large grid cannot
    /// overflow the multiplication.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.x_num as usize * self.y_num as usize
    }
}
