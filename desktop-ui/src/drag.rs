use dioxus::prelude::*;
use shared_types::Position;

use crate::transform::format_translate;

/// A gesture in progress: where the pointer went down and where the window
/// was at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub pointer_origin: (f64, f64),
    pub offset_origin: Position,
}

impl DragGesture {
    pub fn new(pointer_x: f64, pointer_y: f64, offset_origin: Position) -> Self {
        Self {
            pointer_origin: (pointer_x, pointer_y),
            offset_origin,
        }
    }

    pub fn offset_at(&self, pointer_x: f64, pointer_y: f64) -> Position {
        let (origin_x, origin_y) = self.pointer_origin;
        self.offset_origin
            .translated(pointer_x - origin_x, pointer_y - origin_y)
    }
}

/// Live drag state of one window. The offset is rendered as an inline
/// `translate(..)` transform; only the end of a gesture is reported.
#[derive(Clone, Copy, PartialEq)]
pub struct DragState {
    offset: Signal<Position>,
    gesture: Signal<Option<DragGesture>>,
}

impl DragState {
    pub fn begin(&self, pointer_x: f64, pointer_y: f64) {
        let mut gesture = self.gesture;
        let offset = *self.offset.peek();
        gesture.set(Some(DragGesture::new(pointer_x, pointer_y, offset)));
    }

    pub fn update(&self, pointer_x: f64, pointer_y: f64) {
        let Some(gesture) = *self.gesture.peek() else {
            return;
        };
        let mut offset = self.offset;
        offset.set(gesture.offset_at(pointer_x, pointer_y));
    }

    /// Finish the gesture, returning the transform the window is rendered
    /// with. `None` when no gesture was in progress.
    pub fn end(&self) -> Option<String> {
        let mut gesture = self.gesture;
        gesture.write().take()?;
        Some(format_translate(*self.offset.peek()))
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.read().is_some()
    }

    pub fn transform(&self) -> String {
        format_translate(*self.offset.read())
    }
}

pub fn use_drag(default_position: Position) -> DragState {
    let offset = use_signal(|| default_position);
    let gesture = use_signal(|| None::<DragGesture>);
    DragState { offset, gesture }
}
