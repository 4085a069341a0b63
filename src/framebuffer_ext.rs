use crate::framebuffer::framebuffer::FrameBuffer;

/// Raster drawing operations layered on the pixel primitives.
impl FrameBuffer {
    /// Draw a straight segment with integer Bresenham.
    ///
    /// Both endpoints are plotted; every lattice point on the segment is
    /// set exactly once. Coordinates may lie outside the buffer, the
    /// off-screen part is clipped pixel by pixel.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set_pixel(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Horizontal line of `width` pixels starting at `(x, y)`.
    pub fn hline(&mut self, x: i32, y: i32, width: u32) {
        for i in 0..width as i32 {
            self.set_pixel(x + i, y);
        }
    }

    /// Vertical line of `height` pixels starting at `(x, y)`.
    pub fn vline(&mut self, x: i32, y: i32, height: u32) {
        for i in 0..height as i32 {
            self.set_pixel(x, y + i);
        }
    }

    /// Rectangle outline. Zero width or height draws nothing.
    pub fn rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        if w == 0 || h == 0 {
            return;
        }
        self.hline(x, y, w);
        self.hline(x, y + h as i32 - 1, w);
        self.vline(x, y, h);
        self.vline(x + w as i32 - 1, y, h);
    }

    /// Filled rectangle, drawn as one span per row.
    pub fn rect_filled(&mut self, x: i32, y: i32, w: u32, h: u32) {
        for row in 0..h as i32 {
            self.hline(x, y + row, w);
        }
    }

    /// Circle outline via the integer midpoint algorithm.
    ///
    /// `r == 0` plots the single center pixel.
    pub fn circle(&mut self, cx: i32, cy: i32, r: u32) {
        let mut x = 0;
        let mut y = r as i32;
        let mut d = 1 - y;

        self.circle_points(cx, cy, x, y);
        while x < y {
            if d < 0 {
                d += 2 * x + 3;
            } else {
                d += 2 * (x - y) + 5;
                y -= 1;
            }
            x += 1;
            self.circle_points(cx, cy, x, y);
        }
    }

    /// Solid disk: same midpoint stepping, four horizontal spans per
    /// step. The outline pixel set is a subset of the result at any
    /// radius.
    pub fn circle_filled(&mut self, cx: i32, cy: i32, r: u32) {
        let mut x = 0;
        let mut y = r as i32;
        let mut d = 1 - y;

        self.span(cx - y, cx + y, cy);
        while x < y {
            if d < 0 {
                d += 2 * x + 3;
            } else {
                d += 2 * (x - y) + 5;
                y -= 1;
            }
            x += 1;

            self.span(cx - x, cx + x, cy + y);
            self.span(cx - x, cx + x, cy - y);
            self.span(cx - y, cx + y, cy + x);
            self.span(cx - y, cx + y, cy - x);
        }
    }

    /// The 8 symmetric points of one midpoint-circle state.
    fn circle_points(&mut self, cx: i32, cy: i32, x: i32, y: i32) {
        let points = [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ];
        for (px, py) in points {
            self.set_pixel(px, py);
        }
    }

    /// Inclusive horizontal span used by the fills.
    fn span(&mut self, x0: i32, x1: i32, y: i32) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in x0..=x1 {
            self.set_pixel(x, y);
        }
    }

    /// Bordered progress bar, filled proportionally to `percent`.
    ///
    /// `percent` above 100 is treated as 100. Bars thinner than 3 pixels
    /// in either direction have no interior and stay an outline.
    pub fn progress_bar(&mut self, x: i32, y: i32, w: u32, h: u32, percent: u8) {
        if w == 0 || h == 0 {
            return;
        }
        let percent = percent.min(100) as u32;
        self.rect(x, y, w, h);
        if w <= 2 || h <= 2 {
            return;
        }
        let filled = (w - 2) * percent / 100;
        self.rect_filled(x + 1, y + 1, filled, h - 2);
    }
}
