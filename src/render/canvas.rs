use web_sys::CanvasRenderingContext2d;

/// The slice of the 2D canvas API the renderers draw with.
pub trait Canvas {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    #[allow(clippy::too_many_arguments)]
    fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64);
    fn translate(&mut self, x: f64, y: f64);
    fn scale(&mut self, x: f64, y: f64);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn set_fill_style(&mut self, style: &str);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_global_alpha(&mut self, alpha: f64);

    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    fn stroke_text(&mut self, text: &str, x: f64, y: f64);
}

impl Canvas for CanvasRenderingContext2d {
    fn width(&self) -> f64 {
        self.canvas().map(|c| c.width() as f64).unwrap_or(0.0)
    }

    fn height(&self) -> f64 {
        self.canvas().map(|c| c.height() as f64).unwrap_or(0.0)
    }

    fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        CanvasRenderingContext2d::set_transform(self, a, b, c, d, e, f).ok();
    }

    fn translate(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::translate(self, x, y).ok();
    }

    fn scale(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::scale(self, x, y).ok();
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        // Negative radii throw IndexSizeError; nothing is drawn either way.
        CanvasRenderingContext2d::arc(self, x, y, radius, start, end).ok();
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.set_fill_style_str(style);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.set_stroke_style_str(style);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        CanvasRenderingContext2d::set_global_alpha(self, alpha);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn set_text_align(&mut self, align: &str) {
        CanvasRenderingContext2d::set_text_align(self, align);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        CanvasRenderingContext2d::fill_text(self, text, x, y).ok();
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) {
        CanvasRenderingContext2d::stroke_text(self, text, x, y).ok();
    }
}

/// Canvas stand-in that records every call, for native tests.
#[cfg(test)]
pub mod recording {
    use super::Canvas;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        SetTransform([f64; 6]),
        Translate(f64, f64),
        Scale(f64, f64),
        BeginPath,
        ClosePath,
        MoveTo(f64, f64),
        LineTo(f64, f64),
        Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
        Fill,
        Stroke,
        FillRect(f64, f64, f64, f64),
        FillStyle(String),
        StrokeStyle(String),
        LineWidth(f64),
        GlobalAlpha(f64),
        Font(String),
        TextAlign(String),
        FillText(String, f64, f64),
        StrokeText(String, f64, f64),
    }

    pub const IDENTITY: DrawCall = DrawCall::SetTransform([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    #[derive(Debug, Default)]
    pub struct RecordingCanvas {
        pub width: f64,
        pub height: f64,
        pub calls: Vec<DrawCall>,
    }

    impl RecordingCanvas {
        pub fn new(width: f64, height: f64) -> Self {
            Self { width, height, calls: Vec::new() }
        }

        pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
            self.calls.iter().filter(|c| pred(c)).count()
        }

        /// Line endpoints of the path started by the last `BeginPath`.
        pub fn last_path(&self) -> Vec<(f64, f64)> {
            let start = self
                .calls
                .iter()
                .rposition(|c| *c == DrawCall::BeginPath)
                .map(|i| i + 1)
                .unwrap_or(0);
            self.calls[start..]
                .iter()
                .filter_map(|c| match c {
                    DrawCall::MoveTo(x, y) | DrawCall::LineTo(x, y) => Some((*x, *y)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn width(&self) -> f64 {
            self.width
        }
        fn height(&self) -> f64 {
            self.height
        }
        fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
            self.calls.push(DrawCall::SetTransform([a, b, c, d, e, f]));
        }
        fn translate(&mut self, x: f64, y: f64) {
            self.calls.push(DrawCall::Translate(x, y));
        }
        fn scale(&mut self, x: f64, y: f64) {
            self.calls.push(DrawCall::Scale(x, y));
        }
        fn begin_path(&mut self) {
            self.calls.push(DrawCall::BeginPath);
        }
        fn close_path(&mut self) {
            self.calls.push(DrawCall::ClosePath);
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.calls.push(DrawCall::MoveTo(x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.calls.push(DrawCall::LineTo(x, y));
        }
        fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
            self.calls.push(DrawCall::Arc { x, y, radius, start, end });
        }
        fn fill(&mut self) {
            self.calls.push(DrawCall::Fill);
        }
        fn stroke(&mut self) {
            self.calls.push(DrawCall::Stroke);
        }
        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.calls.push(DrawCall::FillRect(x, y, w, h));
        }
        fn set_fill_style(&mut self, style: &str) {
            self.calls.push(DrawCall::FillStyle(style.to_string()));
        }
        fn set_stroke_style(&mut self, style: &str) {
            self.calls.push(DrawCall::StrokeStyle(style.to_string()));
        }
        fn set_line_width(&mut self, width: f64) {
            self.calls.push(DrawCall::LineWidth(width));
        }
        fn set_global_alpha(&mut self, alpha: f64) {
            self.calls.push(DrawCall::GlobalAlpha(alpha));
        }
        fn set_font(&mut self, font: &str) {
            self.calls.push(DrawCall::Font(font.to_string()));
        }
        fn set_text_align(&mut self, align: &str) {
            self.calls.push(DrawCall::TextAlign(align.to_string()));
        }
        fn fill_text(&mut self, text: &str, x: f64, y: f64) {
            self.calls.push(DrawCall::FillText(text.to_string(), x, y));
        }
        fn stroke_text(&mut self, text: &str, x: f64, y: f64) {
            self.calls.push(DrawCall::StrokeText(text.to_string(), x, y));
        }
    }
}
