use super::Color;

/// Colour and width of one stroke kind.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl StrokeStyle {
    #[inline]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Current drawing style: fill, outer stroke and inner stroke.
///
/// Setting a colour enables the matching pass; `no_*` disables it and keeps the
/// colour for the next time it is enabled. Defaults: white fill, black stroke of
/// width 1, no inner stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    fill: Color,
    fill_enabled: bool,
    stroke: StrokeStyle,
    stroke_enabled: bool,
    inner_stroke: StrokeStyle,
    inner_stroke_enabled: bool,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            fill_enabled: true,
            stroke: StrokeStyle::new(Color::BLACK, 1.0),
            stroke_enabled: true,
            inner_stroke: StrokeStyle::new(Color::BLACK, 1.0),
            inner_stroke_enabled: false,
        }
    }
}

impl Brush {
    pub fn set_fill(&mut self, color: Color) {
        self.fill = color;
        self.fill_enabled = true;
    }

    pub fn no_fill(&mut self) {
        self.fill_enabled = false;
    }

    /// Fill colour, if filling is enabled.
    pub fn fill(&self) -> Option<Color> {
        self.fill_enabled.then_some(self.fill)
    }

    pub fn set_stroke(&mut self, color: Color) {
        self.stroke.color = color;
        self.stroke_enabled = true;
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke.width = width;
    }

    pub fn no_stroke(&mut self) {
        self.stroke_enabled = false;
    }

    /// Outer stroke, if enabled with a positive width.
    pub fn stroke(&self) -> Option<StrokeStyle> {
        (self.stroke_enabled && self.stroke.width > 0.0).then_some(self.stroke)
    }

    pub fn set_inner_stroke(&mut self, color: Color) {
        self.inner_stroke.color = color;
        self.inner_stroke_enabled = true;
    }

    pub fn set_inner_stroke_width(&mut self, width: f32) {
        self.inner_stroke.width = width;
    }

    pub fn no_inner_stroke(&mut self) {
        self.inner_stroke_enabled = false;
    }

    /// Inner stroke, if enabled with a positive width.
    pub fn inner_stroke(&self) -> Option<StrokeStyle> {
        (self.inner_stroke_enabled && self.inner_stroke.width > 0.0).then_some(self.inner_stroke)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_and_stroke() {
        let brush = Brush::default();
        assert_eq!(brush.fill(), Some(Color::WHITE));
        assert_eq!(brush.stroke(), Some(StrokeStyle::new(Color::BLACK, 1.0)));
        assert_eq!(brush.inner_stroke(), None);
    }

    #[test]
    fn disabling_keeps_colour() {
        let mut brush = Brush::default();
        brush.set_fill(Color::gray(10));
        brush.no_fill();
        assert_eq!(brush.fill(), None);

        brush.set_fill(Color::gray(20));
        assert_eq!(brush.fill(), Some(Color::gray(20)));
    }

    #[test]
    fn zero_width_stroke_is_inactive() {
        let mut brush = Brush::default();
        brush.set_stroke_width(0.0);
        assert_eq!(brush.stroke(), None);

        brush.set_inner_stroke(Color::WHITE);
        brush.set_inner_stroke_width(2.0);
        assert_eq!(brush.inner_stroke(), Some(StrokeStyle::new(Color::WHITE, 2.0)));
    }
}
