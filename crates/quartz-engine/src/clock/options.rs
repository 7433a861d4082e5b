use std::fmt;

/// Edge length of a clock surface created without explicit dimensions.
pub const DEFAULT_SIZE: u32 = 400;

/// Construction-time configuration for a [`ClockRenderer`](super::ClockRenderer).
///
/// ```rust,ignore
/// let options = ClockOptions::new()
///     .time_offset_hours(-5)
///     .size(300, 300)
///     .numeral_font(load_font());
/// ```
#[derive(Clone)]
pub struct ClockOptions {
    /// Adopt this surface from the provider instead of creating one.
    pub surface_id: Option<String>,
    pub time_offset_hours: i32,
    /// Only used when the clock creates its own surface.
    pub width: u32,
    pub height: u32,
    pub numeral_font: Option<Vec<u8>>,
    /// Falls back to the numeral font when unset.
    pub brand_font: Option<Vec<u8>>,
}

impl ClockOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface_id(mut self, id: impl Into<String>) -> Self {
        self.surface_id = Some(id.into());
        self
    }

    pub fn time_offset_hours(mut self, hours: i32) -> Self {
        self.time_offset_hours = hours;
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn numeral_font(mut self, bytes: Vec<u8>) -> Self {
        self.numeral_font = Some(bytes);
        self
    }

    pub fn brand_font(mut self, bytes: Vec<u8>) -> Self {
        self.brand_font = Some(bytes);
        self
    }
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            surface_id: None,
            time_offset_hours: 0,
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            numeral_font: None,
            brand_font: None,
        }
    }
}

impl fmt::Debug for ClockOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockOptions")
            .field("surface_id", &self.surface_id)
            .field("time_offset_hours", &self.time_offset_hours)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("numeral_font_bytes", &self.numeral_font.as_ref().map(Vec::len))
            .field("brand_font_bytes", &self.brand_font.as_ref().map(Vec::len))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standalone_clock() {
        let o = ClockOptions::default();
        assert_eq!((o.width, o.height), (400, 400));
        assert_eq!(o.time_offset_hours, 0);
        assert!(o.surface_id.is_none());
    }

    #[test]
    fn debug_elides_font_bytes() {
        let o = ClockOptions::new().numeral_font(vec![0; 1024]);
        let s = format!("{o:?}");
        assert!(s.contains("Some(1024)"));
        assert!(s.len() < 300);
    }
}
