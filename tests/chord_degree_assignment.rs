use caromba::audio::events::AudioCommand;
use caromba::config::EngineConfig;
use caromba::harmony::degree::Degree;
use caromba::harmony::tables;
use caromba::scene::contact::{ContactEvent, Participant, Vec2};
use caromba::scene::hooks::NullHooks;
use caromba::session::Session;

fn chord_hit(degree: Degree) -> ContactEvent {
    ContactEvent::new(
        Participant::RootBody,
        Participant::ChordZone(degree),
        Vec2::new(700.0, 700.0),
    )
}

#[test]
fn degree_is_assigned_not_advanced() {
    let mut out: Vec<AudioCommand> = Vec::new();
    let mut session = Session::with_seed(EngineConfig::default(), 3, &mut out, NullHooks);

    // Jump around in a deliberately non-sequential order: the struck zone
    // wins regardless of where the harmony was.
    for k in [4u8, 1, 6, 1, 0, 5, 2, 2, 3] {
        let target = Degree::new(k).unwrap();
        session.on_contact(chord_hit(target));
        assert_eq!(session.degree(), target);
    }
}

#[test]
fn every_prior_state_yields_the_struck_degree() {
    let mut out: Vec<AudioCommand> = Vec::new();
    let mut session = Session::with_seed(EngineConfig::default(), 3, &mut out, NullHooks);

    for prior in Degree::all() {
        for target in Degree::all() {
            session.on_contact(chord_hit(prior));
            session.on_contact(chord_hit(target));
            assert_eq!(session.degree(), target);
        }
    }
}

#[test]
fn chord_hit_plays_the_matching_bass_tone() {
    let mut out: Vec<AudioCommand> = Vec::new();
    {
        let mut session = Session::with_seed(EngineConfig::default(), 3, &mut out, NullHooks);
        for degree in Degree::all() {
            session.on_contact(chord_hit(degree));
        }
    }
    assert_eq!(out.len(), Degree::COUNT);
    for (cmd, degree) in out.iter().zip(Degree::all()) {
        match cmd {
            AudioCommand::NoteOn { pitch, intensity } => {
                assert_eq!(*pitch, tables::bass_tone(degree));
                // avg 700 -> round(700 * 2/13 - 23) = 85, lifted by 30.
                assert_eq!(intensity.get(), 115);
            }
            other => panic!("expected a bass note, got {other:?}"),
        }
    }
}

#[test]
fn bass_lift_saturates_at_the_protocol_ceiling() {
    let mut out: Vec<AudioCommand> = Vec::new();
    {
        let mut session = Session::with_seed(EngineConfig::default(), 3, &mut out, NullHooks);
        session.on_contact(ContactEvent::new(
            Participant::RootBody,
            Participant::ChordZone(Degree::I),
            Vec2::new(5000.0, 5000.0),
        ));
    }
    match out[0] {
        AudioCommand::NoteOn { intensity, .. } => assert_eq!(intensity.get(), 128),
        other => panic!("expected a bass note, got {other:?}"),
    }
}
