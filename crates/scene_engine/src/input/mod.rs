//! Pointer input routing
//!
//! The host delivers raw stage events (mouse and touch flavours of the same
//! gesture). Each raw [`InputSource`] maps onto one [`PointerKind`], and the
//! scene forwards it to the matching [`PointerHandler`] callback.

use crate::foundation::math::Vec2;
use crate::stage::Stage;

/// Raw event names delivered by the stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Mouse moved over the stage
    MouseMove,
    /// Touch point moved
    TouchMove,
    /// Mouse click
    Click,
    /// Touch tap
    Tap,
    /// Mouse button pressed
    MouseDown,
    /// Touch began
    TouchStart,
    /// Mouse button released over the stage
    MouseUp,
    /// Mouse button released outside the stage
    MouseUpOutside,
    /// Touch ended over the stage
    TouchEnd,
    /// Touch ended outside the stage
    TouchEndOutside,
    /// Mouse left the stage
    MouseOut,
}

/// Gesture a raw event stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Click or tap
    Click,
    /// Press began
    Down,
    /// Press ended
    Up,
    /// Pointer moved
    Move,
    /// Pointer left the stage
    Out,
}

impl InputSource {
    /// Every raw source, in declaration order
    pub const ALL: [Self; 11] = [
        Self::MouseMove,
        Self::TouchMove,
        Self::Click,
        Self::Tap,
        Self::MouseDown,
        Self::TouchStart,
        Self::MouseUp,
        Self::MouseUpOutside,
        Self::TouchEnd,
        Self::TouchEndOutside,
        Self::MouseOut,
    ];

    /// Gesture this raw event is routed as
    pub const fn kind(self) -> PointerKind {
        match self {
            Self::MouseMove | Self::TouchMove => PointerKind::Move,
            Self::Click | Self::Tap => PointerKind::Click,
            Self::MouseDown | Self::TouchStart => PointerKind::Down,
            Self::MouseUp | Self::MouseUpOutside | Self::TouchEnd | Self::TouchEndOutside => {
                PointerKind::Up
            }
            Self::MouseOut => PointerKind::Out,
        }
    }

    /// Whether the event came from a touch surface
    pub const fn is_touch(self) -> bool {
        matches!(
            self,
            Self::TouchMove | Self::Tap | Self::TouchStart | Self::TouchEnd | Self::TouchEndOutside
        )
    }
}

/// Pointer state attached to an input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionData {
    /// Pointer position in stage pixels
    pub position: Vec2,
    /// Touch identifier, `0` for the mouse
    pub pointer_id: u32,
}

impl InteractionData {
    /// Mouse pointer at the given position
    pub fn mouse(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            pointer_id: 0,
        }
    }

    /// Touch point `pointer_id` at the given position
    pub fn touch(pointer_id: u32, x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            pointer_id,
        }
    }
}

/// One raw stage event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageInput {
    /// Raw event name
    pub source: InputSource,
    /// Pointer state
    pub data: InteractionData,
}

impl StageInput {
    /// Bundle a source with its pointer data
    pub const fn new(source: InputSource, data: InteractionData) -> Self {
        Self { source, data }
    }

    /// Gesture this event is routed as
    pub const fn kind(&self) -> PointerKind {
        self.source.kind()
    }
}

/// Pointer callbacks of a scene
///
/// All methods default to doing nothing; implement the ones a scene cares
/// about.
pub trait PointerHandler {
    /// Mouse click or touch tap
    fn click(&mut self, _stage: &mut Stage, _data: &InteractionData) {}

    /// Mouse down or touch start
    fn mousedown(&mut self, _stage: &mut Stage, _data: &InteractionData) {}

    /// Mouse up or touch end, inside or outside the stage
    fn mouseup(&mut self, _stage: &mut Stage, _data: &InteractionData) {}

    /// Mouse or touch move
    fn mousemove(&mut self, _stage: &mut Stage, _data: &InteractionData) {}

    /// Mouse left the stage
    fn mouseout(&mut self, _stage: &mut Stage, _data: &InteractionData) {}

    /// Route `input` to the callback for its gesture
    fn dispatch(&mut self, stage: &mut Stage, input: &StageInput) {
        let data = &input.data;
        match input.kind() {
            PointerKind::Click => self.click(stage, data),
            PointerKind::Down => self.mousedown(stage, data),
            PointerKind::Up => self.mouseup(stage, data),
            PointerKind::Move => self.mousemove(stage, data),
            PointerKind::Out => self.mouseout(stage, data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<PointerKind>,
    }

    impl PointerHandler for Recorder {
        fn click(&mut self, _stage: &mut Stage, _data: &InteractionData) {
            self.seen.push(PointerKind::Click);
        }

        fn mouseup(&mut self, _stage: &mut Stage, _data: &InteractionData) {
            self.seen.push(PointerKind::Up);
        }
    }

    #[test]
    fn test_mouse_and_touch_share_gestures() {
        assert_eq!(InputSource::Click.kind(), InputSource::Tap.kind());
        assert_eq!(InputSource::MouseDown.kind(), InputSource::TouchStart.kind());
        assert_eq!(InputSource::MouseMove.kind(), InputSource::TouchMove.kind());
        assert_eq!(InputSource::MouseOut.kind(), PointerKind::Out);
    }

    #[test]
    fn test_every_release_flavour_is_up() {
        let ups = InputSource::ALL
            .iter()
            .filter(|source| source.kind() == PointerKind::Up)
            .count();
        assert_eq!(ups, 4);
    }

    #[test]
    fn test_dispatch_routes_to_callbacks() {
        let mut stage = Stage::new();
        let mut recorder = Recorder::default();

        for source in [InputSource::Tap, InputSource::TouchEndOutside, InputSource::MouseMove] {
            recorder.dispatch(&mut stage, &StageInput::new(source, InteractionData::touch(1, 0.0, 0.0)));
        }

        assert_eq!(recorder.seen, vec![PointerKind::Click, PointerKind::Up]);
    }
}
