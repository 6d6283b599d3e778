//! Zoom and pan state machine driven by gestures and zoom buttons.
//!
//! Scale stays within [`SCALE_MIN`, `SCALE_MAX`] once a gesture or command has
//! settled; a pinch in progress may briefly report values outside that range.
//! Whenever the scale is back at [`SCALE_MIN`], the offset is zero.

use std::ops::Mul;

/// Minimum scale (1.0 = image fits the screen).
pub const SCALE_MIN: f32 = 1.0;

/// Maximum scale, also the double-tap target.
pub const SCALE_MAX: f32 = 5.0;

/// Scale change applied by the zoom-in and zoom-out buttons.
pub const ZOOM_STEP: f32 = 1.0;

/// Pan translation in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub width: f32,
    pub height: f32,
}

impl Offset {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl Mul<f32> for Offset {
    type Output = Self;

    fn mul(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// Events delivered by the gesture recognizer.
///
/// Drag and pinch arrive as streams: any number of `*Changed` events
/// followed by exactly one `*Ended`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    DoubleTap,
    /// Running translation since the drag started.
    DragChanged(Offset),
    DragEnded,
    /// Running magnification since the pinch started (1.0 = unchanged).
    PinchChanged(f32),
    PinchEnded,
}

/// Fire-once actions from the zoom control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ZoomOutStep,
    Reset,
    ZoomInStep,
}

/// Current scale and pan offset of the displayed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPanState {
    scale: f32,
    offset: Offset,
}

impl Default for ZoomPanState {
    fn default() -> Self {
        Self {
            scale: SCALE_MIN,
            offset: Offset::ZERO,
        }
    }
}

impl ZoomPanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Whether the zoom-in button has any effect.
    pub fn can_zoom_in(&self) -> bool {
        self.scale < SCALE_MAX
    }

    /// Whether the zoom-out button has any effect.
    pub fn can_zoom_out(&self) -> bool {
        self.scale > SCALE_MIN
    }

    /// Applies a gesture event.
    pub fn handle_gesture(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::DoubleTap => self.on_double_tap(),
            Gesture::DragChanged(translation) => self.on_drag_changed(translation),
            Gesture::DragEnded => self.on_drag_ended(),
            Gesture::PinchChanged(magnification) => self.on_pinch_changed(magnification),
            Gesture::PinchEnded => self.on_pinch_ended(),
        }
        log::trace!("{gesture:?} -> scale {}, offset {:?}", self.scale, self.offset);
    }

    /// Applies a button command.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::ZoomOutStep => self.on_zoom_out_step(),
            Command::Reset => self.reset(),
            Command::ZoomInStep => self.on_zoom_in_step(),
        }
        log::trace!("{command:?} -> scale {}, offset {:?}", self.scale, self.offset);
    }

    /// Jumps straight to maximum zoom from the fitted size, otherwise resets.
    pub fn on_double_tap(&mut self) {
        if self.scale == SCALE_MIN {
            self.scale = SCALE_MAX;
        } else {
            self.reset();
        }
    }

    /// Tracks the live drag translation verbatim.
    pub fn on_drag_changed(&mut self, translation: Offset) {
        self.offset = translation;
    }

    pub fn on_drag_ended(&mut self) {
        if self.scale <= SCALE_MIN {
            self.reset();
        }
    }

    /// Overwrites the scale with the running magnification.
    ///
    /// Has no effect until the image is already zoomed past [`SCALE_MIN`]
    /// by some other means.
    pub fn on_pinch_changed(&mut self, magnification: f32) {
        if self.scale > SCALE_MIN && self.scale <= SCALE_MAX {
            self.scale = magnification;
        } else if self.scale > SCALE_MAX {
            self.scale = SCALE_MAX;
        }
    }

    pub fn on_pinch_ended(&mut self) {
        if self.scale > SCALE_MAX {
            self.scale = SCALE_MAX;
        } else if self.scale <= SCALE_MIN {
            self.reset();
        }
    }

    /// Steps the scale down; landing on or below the minimum is a full reset.
    pub fn on_zoom_out_step(&mut self) {
        if self.scale > SCALE_MIN {
            self.scale -= ZOOM_STEP;

            if self.scale <= SCALE_MIN {
                self.reset();
            }
        }
    }

    pub fn on_zoom_in_step(&mut self) {
        if self.scale < SCALE_MAX {
            self.scale += ZOOM_STEP;

            if self.scale > SCALE_MAX {
                self.scale = SCALE_MAX;
            }
        }
    }

    pub fn reset(&mut self) {
        self.scale = SCALE_MIN;
        self.offset = Offset::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(scale: f32, offset: [f32; 2]) -> ZoomPanState {
        ZoomPanState {
            scale,
            offset: Offset::new(offset[0], offset[1]),
        }
    }

    #[test]
    fn new_state_is_fitted_and_centered() {
        let state = ZoomPanState::new();
        assert_eq!(state.scale(), 1.0);
        assert!(state.offset().is_zero());
        assert!(!state.can_zoom_out());
    }

    #[test]
    fn double_tap_at_fitted_size_jumps_to_max() {
        let mut state = ZoomPanState::new();
        state.on_double_tap();
        assert_eq!(state, self::state(5.0, [0.0, 0.0]));
    }

    #[test]
    fn double_tap_at_fitted_size_keeps_offset() {
        let mut state = state(1.0, [12.0, -4.0]);
        state.on_double_tap();
        assert_eq!(state, self::state(5.0, [12.0, -4.0]));
    }

    #[test]
    fn double_tap_when_zoomed_resets() {
        let mut state = state(2.7, [12.0, -4.0]);
        state.on_double_tap();
        assert_eq!(state, ZoomPanState::default());
    }

    #[test]
    fn drag_changed_overwrites_offset_without_scale_compensation() {
        let mut state = state(3.0, [5.0, 5.0]);
        state.on_drag_changed(Offset::new(10.0, 20.0));
        state.on_drag_changed(Offset::new(15.0, 25.0));
        assert_eq!(state.offset(), Offset::new(15.0, 25.0));
        assert_eq!(state.scale(), 3.0);
    }

    #[test]
    fn drag_ended_at_fitted_size_snaps_back() {
        let mut state = ZoomPanState::new();
        state.on_drag_changed(Offset::new(80.0, -35.0));
        state.on_drag_ended();
        assert_eq!(state, ZoomPanState::default());
    }

    #[test]
    fn drag_ended_when_zoomed_keeps_offset() {
        let mut state = state(2.0, [0.0, 0.0]);
        state.on_drag_changed(Offset::new(30.0, -10.0));
        state.on_drag_ended();
        assert_eq!(state, self::state(2.0, [30.0, -10.0]));
    }

    #[test]
    fn pinch_at_fitted_size_is_a_no_op() {
        let mut state = ZoomPanState::new();
        state.on_pinch_changed(3.0);
        assert_eq!(state.scale(), 1.0);
    }

    #[test]
    fn pinch_at_max_scale_engages() {
        let mut state = ZoomPanState::new();
        state.on_double_tap();
        state.on_pinch_changed(2.5);
        assert_eq!(state.scale(), 2.5);
    }

    #[test]
    fn pinch_when_zoomed_overwrites_scale() {
        let mut state = state(4.0, [0.0, 0.0]);
        state.on_pinch_changed(1.2);
        assert_eq!(state.scale(), 1.2);
    }

    #[test]
    fn pinch_overshoot_is_clamped_on_next_change_and_on_end() {
        let mut state = state(4.0, [0.0, 0.0]);
        state.on_pinch_changed(7.0);
        assert_eq!(state.scale(), 7.0);

        state.on_pinch_changed(8.0);
        assert_eq!(state.scale(), 5.0);

        state.on_pinch_changed(9.0);
        state.on_pinch_ended();
        assert_eq!(state.scale(), 5.0);
    }

    #[test]
    fn pinch_below_minimum_resets_on_end() {
        let mut state = state(2.0, [40.0, 40.0]);
        state.on_pinch_changed(0.6);
        state.on_pinch_ended();
        assert_eq!(state, ZoomPanState::default());
    }

    #[test]
    fn zoom_out_step_to_minimum_is_full_reset() {
        let mut state = state(2.0, [30.0, -10.0]);
        state.on_zoom_out_step();
        assert_eq!(state, ZoomPanState::default());
    }

    #[test]
    fn zoom_out_step_from_fractional_scale_resets() {
        let mut state = state(1.5, [3.0, 3.0]);
        state.on_zoom_out_step();
        assert_eq!(state, ZoomPanState::default());
    }

    #[test]
    fn zoom_out_step_at_minimum_does_nothing() {
        let mut state = ZoomPanState::new();
        state.on_zoom_out_step();
        assert_eq!(state, ZoomPanState::default());
    }

    #[test]
    fn zoom_in_step_clamps_to_max() {
        let mut state = state(4.5, [0.0, 0.0]);
        state.on_zoom_in_step();
        assert_eq!(state.scale(), 5.0);
        assert!(!state.can_zoom_in());
    }

    #[test]
    fn zoom_in_step_keeps_offset() {
        let mut state = state(2.0, [8.0, 9.0]);
        state.on_zoom_in_step();
        assert_eq!(state, self::state(3.0, [8.0, 9.0]));
    }

    #[test]
    fn commands_dispatch_to_steps() {
        let mut state = ZoomPanState::new();
        state.handle_command(Command::ZoomInStep);
        state.handle_command(Command::ZoomInStep);
        assert_eq!(state.scale(), 3.0);

        state.handle_command(Command::ZoomOutStep);
        assert_eq!(state.scale(), 2.0);

        state.handle_gesture(Gesture::DragChanged(Offset::new(1.0, 2.0)));
        state.handle_command(Command::Reset);
        assert_eq!(state, ZoomPanState::default());
    }

    #[test]
    fn documented_scenario() {
        let mut state = ZoomPanState::new();

        state.handle_gesture(Gesture::DoubleTap);
        assert_eq!(state, self::state(5.0, [0.0, 0.0]));

        state.handle_gesture(Gesture::DragChanged(Offset::new(30.0, -10.0)));
        assert_eq!(state, self::state(5.0, [30.0, -10.0]));

        state.handle_gesture(Gesture::DragEnded);
        assert_eq!(state, self::state(5.0, [30.0, -10.0]));

        for expected in [4.0, 3.0, 2.0] {
            state.handle_command(Command::ZoomOutStep);
            assert_eq!(state, self::state(expected, [30.0, -10.0]));
        }

        state.handle_command(Command::ZoomOutStep);
        assert_eq!(state, ZoomPanState::default());
    }
}
