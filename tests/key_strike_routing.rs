use caromba::audio::events::{AudioCommand, Pitch};
use caromba::config::EngineConfig;
use caromba::harmony::degree::Degree;
use caromba::harmony::tables;
use caromba::scene::contact::{ContactEvent, Participant, Vec2};
use caromba::scene::hooks::NullHooks;
use caromba::session::Session;

fn contact(a: Participant, b: Participant) -> ContactEvent {
    ContactEvent::new(a, b, Vec2::new(900.0, 900.0))
}

#[test]
fn key_strike_plays_the_tonic_row_entry() {
    let mut out: Vec<AudioCommand> = Vec::new();
    {
        let mut session = Session::with_seed(EngineConfig::default(), 1, &mut out, NullHooks);
        session.on_contact(contact(Participant::FreeBody, Participant::PitchZone(1)));
    }
    assert_eq!(out.len(), 1);
    match out[0] {
        AudioCommand::NoteOn { pitch, .. } => {
            assert_eq!(pitch, tables::chord_tone(Degree::I, 1));
            assert_eq!(pitch, Pitch(64));
        }
        other => panic!("expected a note, got {other:?}"),
    }
}

#[test]
fn key_strike_follows_the_active_degree() {
    let mut out: Vec<AudioCommand> = Vec::new();
    {
        let mut session = Session::with_seed(EngineConfig::default(), 1, &mut out, NullHooks);
        let v = Degree::new(4).unwrap();
        session.on_contact(contact(Participant::RootBody, Participant::ChordZone(v)));
        for key in 0..tables::KEY_COUNT {
            session.on_contact(contact(
                Participant::FreeBody,
                Participant::PitchZone(key as u8),
            ));
        }
    }
    // One bass note, then the full V row.
    let pitches: Vec<Pitch> = out
        .iter()
        .map(|cmd| match cmd {
            AudioCommand::NoteOn { pitch, .. } => *pitch,
            other => panic!("expected notes only, got {other:?}"),
        })
        .collect();
    assert_eq!(pitches[0], tables::bass_tone(Degree::new(4).unwrap()));
    assert_eq!(
        pitches[1..],
        tables::CHORD_TONES[4],
        "key strikes should read the V row"
    );
}

#[test]
fn key_strike_intensity_is_quantized_from_the_contact_velocity() {
    let mut out: Vec<AudioCommand> = Vec::new();
    {
        let mut session = Session::with_seed(EngineConfig::default(), 1, &mut out, NullHooks);
        session.on_contact(ContactEvent::new(
            Participant::FreeBody,
            Participant::PitchZone(0),
            Vec2::new(100.0, 0.0),
        ));
        session.on_contact(ContactEvent::new(
            Participant::FreeBody,
            Participant::PitchZone(0),
            Vec2::new(900.0, 900.0),
        ));
    }
    let strengths: Vec<u8> = out
        .iter()
        .map(|cmd| match cmd {
            AudioCommand::NoteOn { intensity, .. } => intensity.get(),
            other => panic!("expected notes only, got {other:?}"),
        })
        .collect();
    // avg 50 maps below the floor; avg 900 maps to round(900 * 2/13 - 23).
    assert_eq!(strengths, [35, 115]);
}

#[test]
fn non_musical_pairs_stay_silent() {
    let mut out: Vec<AudioCommand> = Vec::new();
    {
        let mut session = Session::with_seed(EngineConfig::default(), 1, &mut out, NullHooks);
        let d = Degree::new(2).unwrap();
        for ev in [
            contact(Participant::FreeBody, Participant::FreeBody),
            contact(Participant::FreeBody, Participant::Boundary),
            contact(Participant::FreeBody, Participant::ChordZone(d)),
            contact(Participant::RootBody, Participant::PitchZone(0)),
            contact(Participant::RootBody, Participant::Boundary),
            contact(Participant::RootBody, Participant::FreeBody),
            contact(Participant::Unknown, Participant::PitchZone(2)),
            contact(Participant::FreeBody, Participant::Unknown),
        ] {
            session.on_contact(ev);
        }
        assert_eq!(session.degree(), Degree::I);
    }
    assert!(out.is_empty(), "got {out:?}");
}
