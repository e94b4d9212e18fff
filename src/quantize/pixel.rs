/// A single image pixel: red, green, blue, one byte each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Create a pixel from its three channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Pack the color into a 24-bit integer key (`0xRRGGBB`).
    ///
    /// This is the hash/equality contract used for color→index lookup:
    /// two pixels are the same color iff their packed keys are equal.
    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | (self.blue as u32)
    }

    /// Euclidean distance to another color in RGB space.
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = self.red as f64 - other.red as f64;
        let dg = self.green as f64 - other.green as f64;
        let db = self.blue as f64 - other.blue as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self { red, green, blue }
    }
}

/// Per-cluster running channel sums, accumulated in `f64`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ChannelSum {
    pub(crate) red: f64,
    pub(crate) green: f64,
    pub(crate) blue: f64,
    pub(crate) count: usize,
}

impl ChannelSum {
    #[inline]
    pub(crate) fn add(&mut self, p: Rgb) {
        self.red += p.red as f64;
        self.green += p.green as f64;
        self.blue += p.blue as f64;
        self.count += 1;
    }

    /// Mean color, channels rounded to nearest for minimum mean-square error.
    pub(crate) fn mean(self) -> Rgb {
        debug_assert!(self.count > 0);
        let n = self.count as f64;
        Rgb {
            red: (self.red / n).round() as u8,
            green: (self.green / n).round() as u8,
            blue: (self.blue / n).round() as u8,
        }
    }
}
