use crate::{color::Rgb, math8::dim8};

/// Create an RGB color from a u32 value (0xRRGGBB format)
///
/// The upper byte is ignored.
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Dim a color by dividing every channel by `width`
///
/// This is the trail decay law: repeated application drives each channel
/// to zero and keeps it there.
#[inline]
pub const fn dim_color(color: Rgb, width: u8) -> Rgb {
    Rgb {
        r: dim8(color.r, width),
        g: dim8(color.g, width),
        b: dim8(color.b, width),
    }
}
