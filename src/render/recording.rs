use crate::error::DashResult;
use crate::render::primitives::{LinePrimitive, RectPrimitive, TextPrimitive};
use crate::render::DrawSurface;

/// Command-recording surface used by tests and headless hosts.
///
/// It validates every primitive on receipt so invalid geometry is caught
/// before a real backend is introduced, and keeps the commands in draw order
/// for inspection.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RecordingSurface {
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.lines.len() + self.rects.len() + self.texts.len()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.rects.clear();
        self.texts.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn line(&mut self, line: &LinePrimitive) -> DashResult<()> {
        line.validate()?;
        self.lines.push(*line);
        Ok(())
    }

    fn rect(&mut self, rect: &RectPrimitive) -> DashResult<()> {
        rect.validate()?;
        self.rects.push(*rect);
        Ok(())
    }

    fn text(&mut self, text: &TextPrimitive) -> DashResult<()> {
        text.validate()?;
        self.texts.push(text.clone());
        Ok(())
    }
}
