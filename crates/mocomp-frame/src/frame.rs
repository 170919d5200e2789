use crate::error::FrameError;

/// Frame size in pixels
///
/// A struct to represent the size of a video frame in pixels.
///
/// # Examples
///
/// ```
/// use mocomp_frame::FrameSize;
///
/// let frame_size = FrameSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(frame_size.width, 10);
/// assert_eq!(frame_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSize {
    /// Width of the frame in pixels
    pub width: usize,
    /// Height of the frame in pixels
    pub height: usize,
}

impl std::fmt::Display for FrameSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "FrameSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for FrameSize {
    fn from(size: [usize; 2]) -> Self {
        FrameSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for frame sample data types.
///
/// Send and Sync is required for the rayon-based parallel helpers.
pub trait FrameDtype: Copy + Default + Into<f32> + Send + Sync {
    /// Convert a f32 value to the frame data type.
    fn from_f32(x: f32) -> Self;
}

impl FrameDtype for f32 {
    fn from_f32(x: f32) -> Self {
        x
    }
}

impl FrameDtype for u8 {
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

/// Represents a video frame with pixel data.
///
/// The frame is stored row-major with interleaved channels, i.e. with shape
/// (H, W, C), where H is the height of the frame, W the width and C the
/// number of channels.
#[derive(Clone)]
pub struct Frame<T, const CHANNELS: usize> {
    shape: [usize; 3],
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Frame<T, CHANNELS> {
    /// Create a new frame from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the frame in pixels.
    /// * `data` - The pixel data of the frame.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the frame size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use mocomp_frame::{Frame, FrameSize};
    ///
    /// let frame = Frame::<u8, 3>::new(
    ///     FrameSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(frame.size().width, 10);
    /// assert_eq!(frame.size().height, 20);
    /// assert_eq!(frame.num_channels(), 3);
    /// ```
    pub fn new(size: FrameSize, data: Vec<T>) -> Result<Self, FrameError> {
        // check if the data length matches the frame size
        if data.len() != size.width * size.height * CHANNELS {
            return Err(FrameError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self {
            shape: [size.height, size.width, CHANNELS],
            data,
        })
    }

    /// Create a new frame with the given size, filled with a default value.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the frame in pixels.
    /// * `val` - The value every sample is initialized with.
    pub fn from_size_val(size: FrameSize, val: T) -> Result<Self, FrameError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Frame::new(size, data)
    }

    /// Create a new frame by copying pixel data from a slice.
    pub fn from_size_slice(size: FrameSize, data: &[T]) -> Result<Self, FrameError>
    where
        T: Clone,
    {
        Frame::new(size, data.to_vec())
    }

    /// Get the size of the frame in pixels.
    pub fn size(&self) -> FrameSize {
        FrameSize {
            width: self.shape[1],
            height: self.shape[0],
        }
    }

    /// Get the number of columns of the frame.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the frame.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the frame in pixels.
    pub fn width(&self) -> usize {
        self.shape[1]
    }

    /// Get the height of the frame in pixels.
    pub fn height(&self) -> usize {
        self.shape[0]
    }

    /// Get the number of channels in the frame.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the total number of samples in the frame.
    pub fn numel(&self) -> usize {
        self.shape[0] * self.shape[1] * self.shape[2]
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a mutable flat slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get a reference to the sample at `[y, x, c]`, or `None` if out of bounds.
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [y, x, c] = index;
        if y >= self.shape[0] || x >= self.shape[1] || c >= self.shape[2] {
            return None;
        }
        self.data.get((y * self.shape[1] + x) * CHANNELS + c)
    }

    /// Get a reference to the sample at `[y, x, c]` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset is outside of the data buffer.
    pub fn get_unchecked(&self, index: [usize; 3]) -> &T {
        let [y, x, c] = index;
        &self.data[(y * self.shape[1] + x) * CHANNELS + c]
    }

    /// Cast the pixel data of the frame to a different type.
    ///
    /// # Returns
    ///
    /// A new frame with the pixel data cast to the given type.
    pub fn cast<U>(&self) -> Result<Frame<U, CHANNELS>, FrameError>
    where
        U: num_traits::NumCast,
        T: num_traits::NumCast + Copy,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(FrameError::CastError))
            .collect::<Result<Vec<U>, FrameError>>()?;

        Frame::new(self.size(), casted_data)
    }

    /// Cast the pixel data to a different type and scale it.
    ///
    /// # Arguments
    ///
    /// * `scale` - The scale to multiply the pixel data with.
    ///
    /// # Examples
    ///
    /// ```
    /// use mocomp_frame::{Frame, FrameSize};
    ///
    /// let frame_u8 = Frame::<u8, 3>::new(
    ///     FrameSize {
    ///         width: 1,
    ///         height: 2,
    ///     },
    ///     vec![0u8, 0, 255, 0, 0, 255],
    /// ).unwrap();
    ///
    /// let frame_f32 = frame_u8.cast_and_scale::<f32>(1.0 / 255.0).unwrap();
    ///
    /// assert_eq!(frame_f32.get([1, 0, 2]), Some(&1.0f32));
    /// ```
    pub fn cast_and_scale<U>(self, scale: U) -> Result<Frame<U, CHANNELS>, FrameError>
    where
        U: num_traits::NumCast + std::ops::Mul<Output = U> + Copy,
        T: num_traits::NumCast + Copy,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| {
                let xu = U::from(x).ok_or(FrameError::CastError)?;
                Ok(xu * scale)
            })
            .collect::<Result<Vec<U>, FrameError>>()?;

        Frame::new(self.size(), casted_data)
    }

    /// Get a single channel of the frame.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel(&self, channel: usize) -> Result<Frame<T, 1>, FrameError>
    where
        T: Copy,
    {
        if channel >= CHANNELS {
            return Err(FrameError::ChannelIndexOutOfBounds(channel, CHANNELS));
        }

        let mut channel_data = Vec::with_capacity(self.shape[0] * self.shape[1]);

        for y in 0..self.height() {
            for x in 0..self.width() {
                channel_data.push(*self.get_unchecked([y, x, channel]));
            }
        }

        Frame::new(self.size(), channel_data)
    }

    /// Split the frame into its channels.
    pub fn split_channels(&self) -> Result<Vec<Frame<T, 1>>, FrameError>
    where
        T: Copy,
    {
        let mut channels = Vec::with_capacity(CHANNELS);

        for i in 0..CHANNELS {
            channels.push(self.channel(i)?);
        }

        Ok(channels)
    }
}
