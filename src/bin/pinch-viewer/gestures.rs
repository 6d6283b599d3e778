//! Turns egui pointer input into the gesture streams the zoom/pan state expects.

use crate::constants::{LONG_PRESS_SECONDS, PINCH_IDLE_SECONDS};
use eframe::egui;
use pinch_viewer::{Gesture, Offset};

/// Pointer input relevant to the image for a single frame.
#[derive(Debug, Clone, Copy)]
pub struct PointerFrame {
    pub time: f64,
    pub double_clicked: bool,
    pub drag_started: bool,
    pub drag_delta: egui::Vec2,
    pub drag_stopped: bool,
    /// Multiplicative zoom since last frame (1.0 = none).
    pub zoom_delta: f32,
    /// Whether two or more fingers are down on the image.
    pub multi_touch: bool,
}

impl PointerFrame {
    /// A frame with no pointer activity.
    pub fn idle(time: f64) -> Self {
        Self {
            time,
            double_clicked: false,
            drag_started: false,
            drag_delta: egui::Vec2::ZERO,
            drag_stopped: false,
            zoom_delta: 1.0,
            multi_touch: false,
        }
    }

    /// Captures this frame's input for the image widget.
    ///
    /// Zoom input only counts while the pointer is over the image, or while a
    /// pinch that started there is still running.
    pub fn capture(ui: &egui::Ui, response: &egui::Response, pinch_active: bool) -> Self {
        let (time, zoom_delta, multi_touch) =
            ui.input(|i| (i.time, i.zoom_delta(), i.multi_touch().is_some()));
        let targeted = pinch_active || response.contains_pointer();

        Self {
            time,
            double_clicked: response.double_clicked(),
            drag_started: response.drag_started(),
            drag_delta: if response.dragged() {
                response.drag_delta()
            } else {
                egui::Vec2::ZERO
            },
            drag_stopped: response.drag_stopped(),
            zoom_delta: if targeted { zoom_delta } else { 1.0 },
            multi_touch: targeted && multi_touch,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PinchStream {
    magnification: f32,
    last_input: f64,
    touch: bool,
}

/// Tracks the running drag translation and pinch magnification.
///
/// A drag in progress is ended when a pinch begins; drag input is ignored
/// until the pinch is over.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    drag: Option<Offset>,
    pinch: Option<PinchStream>,
}

impl GestureRecognizer {
    pub fn pinch_active(&self) -> bool {
        self.pinch.is_some()
    }

    /// Returns the gestures completed or updated by this frame, in order.
    pub fn recognize(&mut self, frame: &PointerFrame) -> Vec<Gesture> {
        let mut gestures = Vec::new();

        self.recognize_pinch(frame, &mut gestures);
        if self.pinch.is_none() {
            self.recognize_drag(frame, &mut gestures);
        }
        if frame.double_clicked {
            gestures.push(Gesture::DoubleTap);
        }

        gestures
    }

    fn recognize_pinch(&mut self, frame: &PointerFrame, gestures: &mut Vec<Gesture>) {
        let zooming = frame.zoom_delta != 1.0;

        if zooming || frame.multi_touch {
            if self.pinch.is_none() && self.drag.take().is_some() {
                gestures.push(Gesture::DragEnded);
            }
            let pinch = self.pinch.get_or_insert(PinchStream {
                magnification: 1.0,
                last_input: frame.time,
                touch: frame.multi_touch,
            });

            pinch.touch |= frame.multi_touch;
            pinch.last_input = frame.time;
            if zooming {
                pinch.magnification *= frame.zoom_delta;
                gestures.push(Gesture::PinchChanged(pinch.magnification));
            }
        } else if let Some(pinch) = self.pinch {
            // Touch pinches end when the fingers lift, trackpad pinches after a pause
            if pinch.touch || frame.time - pinch.last_input >= PINCH_IDLE_SECONDS {
                self.pinch = None;
                gestures.push(Gesture::PinchEnded);
            }
        }
    }

    fn recognize_drag(&mut self, frame: &PointerFrame, gestures: &mut Vec<Gesture>) {
        if frame.drag_started && self.drag.is_none() {
            self.drag = Some(Offset::ZERO);
        }

        let Some(translation) = &mut self.drag else {
            return;
        };

        if frame.drag_delta != egui::Vec2::ZERO {
            translation.width += frame.drag_delta.x;
            translation.height += frame.drag_delta.y;
            gestures.push(Gesture::DragChanged(*translation));
        }

        if frame.drag_stopped {
            self.drag = None;
            gestures.push(Gesture::DragEnded);
        }
    }
}

/// Fires once when a press has been held for [`LONG_PRESS_SECONDS`].
/// Releasing earlier cancels it without firing.
#[derive(Debug, Default)]
pub struct LongPress {
    pressed_since: Option<f64>,
    fired: bool,
}

impl LongPress {
    pub fn update(&mut self, held: bool, time: f64) -> bool {
        if !held {
            self.pressed_since = None;
            self.fired = false;
            return false;
        }

        let since = *self.pressed_since.get_or_insert(time);
        if !self.fired && time - since >= LONG_PRESS_SECONDS {
            self.fired = true;
            return true;
        }
        false
    }

    /// Whether a press is being held but has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pressed_since.is_some() && !self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(time: f64, dx: f32, dy: f32) -> PointerFrame {
        PointerFrame {
            drag_delta: egui::vec2(dx, dy),
            ..PointerFrame::idle(time)
        }
    }

    fn zoom(time: f64, delta: f32) -> PointerFrame {
        PointerFrame {
            zoom_delta: delta,
            ..PointerFrame::idle(time)
        }
    }

    #[test]
    fn drag_reports_running_translation_then_ends() {
        let mut recognizer = GestureRecognizer::default();

        let start = PointerFrame {
            drag_started: true,
            ..drag(0.0, 10.0, 5.0)
        };
        assert_eq!(
            recognizer.recognize(&start),
            vec![Gesture::DragChanged(Offset::new(10.0, 5.0))]
        );
        assert_eq!(
            recognizer.recognize(&drag(0.1, 20.0, -15.0)),
            vec![Gesture::DragChanged(Offset::new(30.0, -10.0))]
        );

        let stop = PointerFrame {
            drag_stopped: true,
            ..PointerFrame::idle(0.2)
        };
        assert_eq!(recognizer.recognize(&stop), vec![Gesture::DragEnded]);
    }

    #[test]
    fn drag_delta_without_start_is_ignored() {
        let mut recognizer = GestureRecognizer::default();
        assert!(recognizer.recognize(&drag(0.0, 4.0, 4.0)).is_empty());
    }

    #[test]
    fn trackpad_pinch_multiplies_and_ends_after_idle() {
        let mut recognizer = GestureRecognizer::default();

        assert_eq!(
            recognizer.recognize(&zoom(0.0, 2.0)),
            vec![Gesture::PinchChanged(2.0)]
        );
        assert_eq!(
            recognizer.recognize(&zoom(0.05, 1.5)),
            vec![Gesture::PinchChanged(3.0)]
        );
        assert!(recognizer.recognize(&PointerFrame::idle(0.1)).is_empty());
        assert!(recognizer.pinch_active());

        assert_eq!(
            recognizer.recognize(&PointerFrame::idle(0.3)),
            vec![Gesture::PinchEnded]
        );
        assert!(!recognizer.pinch_active());
    }

    #[test]
    fn touch_pinch_ends_when_fingers_lift() {
        let mut recognizer = GestureRecognizer::default();
        let touch = PointerFrame {
            multi_touch: true,
            ..zoom(0.0, 0.5)
        };

        assert_eq!(
            recognizer.recognize(&touch),
            vec![Gesture::PinchChanged(0.5)]
        );
        assert_eq!(
            recognizer.recognize(&PointerFrame::idle(0.01)),
            vec![Gesture::PinchEnded]
        );
    }

    #[test]
    fn pinch_ends_drag_and_suppresses_it() {
        let mut recognizer = GestureRecognizer::default();
        let start = PointerFrame {
            drag_started: true,
            ..drag(0.0, 3.0, 3.0)
        };
        recognizer.recognize(&start);

        let pinch = PointerFrame {
            drag_delta: egui::vec2(8.0, 8.0),
            multi_touch: true,
            ..zoom(0.1, 1.25)
        };
        assert_eq!(
            recognizer.recognize(&pinch),
            vec![Gesture::DragEnded, Gesture::PinchChanged(1.25)]
        );
    }

    #[test]
    fn double_click_is_a_double_tap() {
        let mut recognizer = GestureRecognizer::default();
        let frame = PointerFrame {
            double_clicked: true,
            ..PointerFrame::idle(0.0)
        };
        assert_eq!(recognizer.recognize(&frame), vec![Gesture::DoubleTap]);
    }

    #[test]
    fn long_press_fires_once_after_hold() {
        let mut press = LongPress::default();
        assert!(!press.update(true, 0.0));
        assert!(press.is_pending());
        assert!(!press.update(true, 0.5));
        assert!(press.update(true, 1.0));
        assert!(!press.update(true, 2.0));
        assert!(!press.is_pending());
    }

    #[test]
    fn early_release_cancels_long_press() {
        let mut press = LongPress::default();
        press.update(true, 0.0);
        assert!(!press.update(false, 0.6));
        assert!(!press.update(true, 0.7));
        assert!(!press.update(true, 1.5));
        assert!(press.update(true, 1.8));
    }
}
