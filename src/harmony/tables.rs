//! Fixed pitch lookup tables.
//!
//! One row of chord tones per degree, one column per key zone, plus a bass
//! tone per degree. Populated once; the octave placement of a few tones is
//! deliberately uneven (e.g. the IV row carries C4, not C5) so neighbouring
//! degrees share register with the tonic row.

use crate::audio::events::Pitch;
use crate::harmony::degree::Degree;

/// Number of key zones on the scene.
pub const KEY_COUNT: usize = 4;

const C3: Pitch = Pitch(48);
const D3: Pitch = Pitch(50);
const E3: Pitch = Pitch(52);
const F3: Pitch = Pitch(53);
const G3: Pitch = Pitch(55);
const A3: Pitch = Pitch(57);
const B3: Pitch = Pitch(59);

const C4: Pitch = Pitch(60);
const D4: Pitch = Pitch(62);
const E4: Pitch = Pitch(64);
const F4: Pitch = Pitch(65);
const G4: Pitch = Pitch(67);
const A4: Pitch = Pitch(69);
const B4: Pitch = Pitch(71);
const C5: Pitch = Pitch(72);
const D5: Pitch = Pitch(74);
const E5: Pitch = Pitch(76);
const F5: Pitch = Pitch(77);
const G5: Pitch = Pitch(79);
const A5: Pitch = Pitch(81);

/// Chord tones per degree: root, third, fifth, seventh of each diatonic
/// seventh chord in C major.
pub const CHORD_TONES: [[Pitch; KEY_COUNT]; Degree::COUNT] = [
    [C4, E4, G4, B4], // I
    [D4, F4, A4, C5], // ii
    [E4, G4, B4, D5], // iii
    [F4, A4, C4, E5], // IV
    [G4, B4, D4, F5], // V
    [A4, C4, E4, G5], // vi
    [B4, D4, F4, A5], // vii°
];

/// Bass tone struck when the root body hits a chord zone.
pub const BASS_TONES: [Pitch; Degree::COUNT] = [C3, D3, E3, F3, G3, A3, B3];

pub fn chord_tone(degree: Degree, key: usize) -> Pitch {
    CHORD_TONES[degree.index()][key]
}

pub fn bass_tone(degree: Degree) -> Pitch {
    BASS_TONES[degree.index()]
}
