use crate::error::Error;

/// One interleaved pixel, conventional channel order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        [value.red, value.green, value.blue]
    }
}

/// Color components relative to an arbitrary maximum, as found in PPM files
pub struct RangeColorFormat {
    max: u16,
    red: u16,
    green: u16,
    blue: u16,
}

impl RangeColorFormat {
    pub fn new(max: u16, red: u16, green: u16, blue: u16) -> crate::Result<Self> {
        for component in [red, green, blue] {
            if component > max {
                return Err(Error::ColorValueExceedsMaxValue(component, max));
            }
        }
        Ok(RangeColorFormat {
            max,
            red,
            green,
            blue,
        })
    }

    fn scale(&self, component: u16) -> u8 {
        if self.max == 0 {
            return 0;
        }
        let max = self.max as u32;
        ((component as u32 * 255 + max / 2) / max) as u8
    }
}

impl From<&RangeColorFormat> for Rgb {
    fn from(value: &RangeColorFormat) -> Self {
        Rgb {
            red: value.scale(value.red),
            green: value.scale(value.green),
            blue: value.scale(value.blue),
        }
    }
}

impl From<RangeColorFormat> for Rgb {
    fn from(value: RangeColorFormat) -> Self {
        Rgb::from(&value)
    }
}
