//! Contact classification.
//!
//! Pure half of the collision router: decide what a contact means before any
//! state is touched. The session applies the result, including the
//! dispatch-time voice-mask re-check that classification deliberately does
//! not perform.

use crate::harmony::degree::Degree;
use crate::harmony::tables::KEY_COUNT;
use crate::scene::contact::{ContactEvent, Participant, Vec2};

/// What a contact asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dispatch {
    /// A free body landed on a key zone: trigger one chord tone.
    KeyStrike { key: usize, velocity: Vec2 },
    /// The root body landed on a chord zone: bass trigger plus a degree
    /// change, if the zone's voice is enabled.
    ChordStrike { degree: Degree, velocity: Vec2 },
    /// Anything else: body-on-body contact, boundary bounces, malformed
    /// roles. No audio.
    Silent,
}

pub fn classify(ev: &ContactEvent) -> Dispatch {
    use Participant::*;

    for (subject, object) in [(ev.a, ev.b), (ev.b, ev.a)] {
        match (subject, object) {
            (FreeBody, PitchZone(k)) if (k as usize) < KEY_COUNT => {
                return Dispatch::KeyStrike {
                    key: k as usize,
                    velocity: ev.velocity,
                };
            }
            (RootBody, ChordZone(degree)) => {
                return Dispatch::ChordStrike {
                    degree,
                    velocity: ev.velocity,
                };
            }
            _ => {}
        }
    }
    Dispatch::Silent
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(a: Participant, b: Participant) -> ContactEvent {
        ContactEvent::new(a, b, Vec2::new(200.0, -100.0))
    }

    #[test]
    fn participant_order_does_not_matter() {
        use Participant::*;
        let d = Degree::new(4).unwrap();
        assert_eq!(
            classify(&ev(PitchZone(2), FreeBody)),
            classify(&ev(FreeBody, PitchZone(2)))
        );
        assert_eq!(
            classify(&ev(ChordZone(d), RootBody)),
            classify(&ev(RootBody, ChordZone(d)))
        );
    }

    #[test]
    fn out_of_range_key_zone_is_silent() {
        use Participant::*;
        assert_eq!(classify(&ev(FreeBody, PitchZone(4))), Dispatch::Silent);
    }

    #[test]
    fn cross_role_pairs_are_silent() {
        use Participant::*;
        let d = Degree::new(1).unwrap();
        for contact in [
            ev(FreeBody, FreeBody),
            ev(FreeBody, ChordZone(d)),
            ev(FreeBody, Boundary),
            ev(RootBody, PitchZone(0)),
            ev(RootBody, Boundary),
            ev(RootBody, FreeBody),
            ev(Unknown, PitchZone(0)),
            ev(Boundary, Boundary),
        ] {
            assert_eq!(classify(&contact), Dispatch::Silent, "{contact:?}");
        }
    }
}
