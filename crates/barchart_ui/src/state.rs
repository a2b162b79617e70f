//! Host-owned widget state.
//!
//! Widgets are rebuilt every frame, so anything that must survive between frames
//! lives here and is passed back in by the application.

/// Slider thumb drag interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderDragState {
    /// Not dragging
    #[default]
    Idle,
    /// Dragging the slider thumb
    Dragging,
}

impl SliderDragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, SliderDragState::Dragging)
    }

    pub fn start_drag(&mut self) {
        *self = SliderDragState::Dragging;
    }

    pub fn stop_drag(&mut self) {
        *self = SliderDragState::Idle;
    }
}

/// State for slider widgets
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderState {
    /// Current value
    pub value: f32,
    /// Drag interaction state
    pub drag: SliderDragState,
}

impl SliderState {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            drag: SliderDragState::Idle,
        }
    }

    /// Value rounded to the nearest integer, for integral sliders.
    pub fn rounded(&self) -> i64 {
        self.value.round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_transitions() {
        let mut d = SliderDragState::default();
        assert!(!d.is_dragging());
        d.start_drag();
        assert!(d.is_dragging());
        d.stop_drag();
        assert!(!d.is_dragging());
    }

    #[test]
    fn test_rounded() {
        assert_eq!(SliderState::new(7.6).rounded(), 8);
        assert_eq!(SliderState::new(1.0).rounded(), 1);
    }
}
