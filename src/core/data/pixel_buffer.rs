use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "grid of {} pixels does not match buffer of {} bytes",
                    expected, actual
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Flat grayscale image buffer, one byte per sample, laid out row-major:
/// all samples of a row (fixed y) are contiguous, index = y * x_num + x.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    x_num: u32,
    y_num: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// A zeroed buffer sized for an `x_num` by `y_num` grid.
    #[must_use]
    pub fn new(x_num: u32, y_num: u32) -> Self {
        Self {
            x_num,
            y_num,
            data: vec![0; x_num as usize * y_num as usize],
        }
    }

    pub fn from_data(x_num: u32, y_num: u32, data: Vec<u8>) -> Result<Self, PixelBufferError> {
        let expected = x_num as usize * y_num as usize;

        if data.len() != expected {
            return Err(PixelBufferError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { x_num, y_num, data })
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
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer, handing the raw bytes to the transport.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
