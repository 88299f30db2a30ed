/// Single-pointer input delivered to the layout, in layout coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Finger touched down
    Down { x: f32, y: f32 },
    /// Finger moved while down
    Move { x: f32, y: f32 },
    /// Finger lifted
    Up { x: f32, y: f32 },
    /// Gesture taken away by the system
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// Left for the inner content
    Ignored,
    /// Consumed by the pull gesture
    Handled,
}

impl EventResponse {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResponse::Handled)
    }
}
