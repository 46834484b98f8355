pub const PIXEL_BITS: usize = 4;

/// One frame's worth of RGBA pixels, borrowed from the pixels buffer for
/// the duration of a draw callback.
pub struct RenderFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub buffer: &'a mut [u8],
}

impl<'a> RenderFrame<'a> {
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8; PIXEL_BITS]> {
        self.buffer
            .chunks_exact_mut(PIXEL_BITS)
            .map(|chunk| chunk.try_into().unwrap())
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8; PIXEL_BITS]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (x as usize + y as usize * self.width as usize) * PIXEL_BITS;
        let chunk = self.buffer.get_mut(index..index + PIXEL_BITS)?;

        Some(chunk.try_into().unwrap())
    }

    /// Off-frame pixels are silently dropped, so squares overlapping the
    /// frame edge draw their visible part only.
    pub fn draw_pixel(&mut self, x: u32, y: u32, color: [u8; PIXEL_BITS]) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            *pixel = color;
        }
    }

    pub fn draw_square(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        color: [u8; PIXEL_BITS],
    ) {
        for y in y..y + height {
            for x in x..x + width {
                self.draw_pixel(x, y, color);
            }
        }
    }

    pub fn fill(&mut self, color: [u8; PIXEL_BITS]) {
        for pixel in self.pixels_mut() {
            *pixel = color;
        }
    }
}
