//! Free-hand sketch layered over the slide page.
//!
//! Editable while composing a question; read-only when showing the sketch a
//! question was asked with.

use api::{Drawing, Point, Stroke};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawAction {
    Begin(Point),
    Extend(Point),
    End,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingOverlay {
    visible: bool,
    read_only: bool,
    strokes: Drawing,
    pen_down: bool,
}

impl DrawingOverlay {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Visible and accepting strokes.
    pub fn is_editing(&self) -> bool {
        self.visible && !self.read_only
    }

    pub fn strokes(&self) -> &Drawing {
        &self.strokes
    }

    /// Hide and forget everything drawn.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn begin_editing(&mut self) {
        self.clear();
        self.visible = true;
    }

    pub fn show_read_only(&mut self, strokes: Drawing) {
        self.visible = true;
        self.read_only = true;
        self.pen_down = false;
        self.strokes = strokes;
    }

    /// Apply a pointer action. Ignored unless editing.
    pub fn apply(&mut self, action: DrawAction) {
        if !self.is_editing() {
            return;
        }
        match action {
            DrawAction::Begin(point) => {
                self.strokes.push(Stroke(vec![clamp(point)]));
                self.pen_down = true;
            }
            DrawAction::Extend(point) if self.pen_down => {
                if let Some(stroke) = self.strokes.last_mut() {
                    stroke.0.push(clamp(point));
                }
            }
            DrawAction::Extend(_) => {}
            DrawAction::End => self.pen_down = false,
        }
    }
}

fn clamp(point: Point) -> Point {
    Point {
        x: point.x.clamp(0.0, 1.0),
        y: point.y.clamp(0.0, 1.0),
    }
}
