use homebrew_mqtt::module::lifecycle::{Error, Event, State, transition};

#[test]
fn full_application_cycle() {
    let mut state = State::Loaded;

    for (event, expected) in [
        (Event::Initialize, State::Initialized),
        (Event::RelocationsDone, State::RelocationsDone),
        (Event::ApplicationStarts, State::Running),
        (Event::ApplicationRequestsExit, State::ExitRequested),
        (Event::ApplicationEnds, State::Ended),
    ] {
        state = transition(state, event).unwrap();
        assert_eq!(state, expected);
    }
}

#[test]
fn start_is_valid_without_relocations_notification() {
    let state = transition(State::Initialized, Event::ApplicationStarts).unwrap();
    assert_eq!(state, State::Running);
}

#[test]
fn end_is_valid_without_exit_request() {
    let state = transition(State::Running, Event::ApplicationEnds).unwrap();
    assert_eq!(state, State::Ended);
}

#[test]
fn module_stays_resident_across_application_launches() {
    let state = transition(State::Ended, Event::RelocationsDone).unwrap();
    assert_eq!(state, State::RelocationsDone);

    let state = transition(State::Ended, Event::ApplicationStarts).unwrap();
    assert_eq!(state, State::Running);
}

#[test]
fn rejects_events_outside_the_host_order() {
    let cases = [
        (State::Loaded, Event::ApplicationStarts),
        (State::Loaded, Event::RelocationsDone),
        (State::Initialized, Event::Initialize),
        (State::Running, Event::Initialize),
        (State::Running, Event::ApplicationStarts),
        (State::ExitRequested, Event::ApplicationRequestsExit),
        (State::Ended, Event::ApplicationEnds),
    ];

    for (from, event) in cases {
        assert_eq!(
            transition(from, event),
            Err(Error::UnexpectedEvent { from, event }),
            "{from:?} should not admit {event:?}"
        );
    }
}

#[test]
fn rejected_event_names_state_and_event() {
    let err = transition(State::Loaded, Event::ApplicationEnds).unwrap_err();
    let Error::UnexpectedEvent { from, event } = err;
    assert_eq!(from, State::Loaded);
    assert_eq!(event, Event::ApplicationEnds);
}

#[test]
fn state_serialization() {
    let mut buf = [0u8; 32];
    let len = serde_json_core::to_slice(&State::RelocationsDone, &mut buf).unwrap();
    assert_eq!(&buf[..len], b"\"relocations_done\"");

    let (parsed, _) = serde_json_core::from_slice::<State>(b"\"exit_requested\"").unwrap();
    assert_eq!(parsed, State::ExitRequested);
}
