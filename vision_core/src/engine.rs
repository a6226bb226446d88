use glam::Vec2;

use crate::classifier::Gesture;
use crate::debounce::GestureDebouncer;
use crate::landmarks::HandLandmarks;

/// Combines up to two tracked hands into one confirmed gesture and one aim
/// point per frame.
///
/// Slot assignment follows the tracker's stable ordering. With two hands
/// the rightmost wrist (larger x in the flipped camera view) drives the
/// cursor, and the combined gesture prioritizes offense over defense:
/// Shoot > Shield > first non-None slot.
#[derive(Debug, Default)]
pub struct TwoHandEngine {
    slots: [GestureDebouncer; 2],
    confirmed: Gesture,
    aim: Option<Vec2>,
}

impl TwoHandEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve one frame of tracker output.
    ///
    /// Returns the confirmed gesture and the aim point (index tip of the
    /// cursor-driving hand, normalized image space). The aim point is
    /// `None` only when no hand is present - callers keep the previous
    /// cursor in that case.
    pub fn update(&mut self, hands: [Option<&HandLandmarks>; 2]) -> (Gesture, Option<Vec2>) {
        let g0 = self.slots[0].update(hands[0]);
        let g1 = self.slots[1].update(hands[1]);

        (self.confirmed, self.aim) = match (hands[0], hands[1]) {
            (None, None) => (Gesture::None, None),
            (Some(hand), None) => (g0, Some(hand.aim_point())),
            (None, Some(hand)) => (g1, Some(hand.aim_point())),
            (Some(h0), Some(h1)) => {
                let aim = if h0.wrist_x() >= h1.wrist_x() {
                    h0.aim_point()
                } else {
                    h1.aim_point()
                };
                let gesture = if g0 == Gesture::Shoot || g1 == Gesture::Shoot {
                    Gesture::Shoot
                } else if g0 == Gesture::Shield || g1 == Gesture::Shield {
                    Gesture::Shield
                } else if g0 != Gesture::None {
                    g0
                } else {
                    g1
                };
                (gesture, Some(aim))
            }
        };
        (self.confirmed, self.aim)
    }

    pub fn confirmed(&self) -> Gesture {
        self.confirmed
    }

    pub fn aim(&self) -> Option<Vec2> {
        self.aim
    }
}
