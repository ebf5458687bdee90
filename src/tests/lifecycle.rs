//! Compositor lifecycle tests: construction, event-loop binding,
//! thread affinity, teardown.

use std::sync::Mutex;
use std::thread;

use crate::config::Client;
use crate::core::compositor::Compositor;
use crate::core::errors::CoreError;
use crate::core::input::{KeyEvent, KeyState};
use crate::platform::HeadlessContext;
use crate::tests::support::{drain, EngineCall, RecordingEngine};

fn compositor() -> (Compositor, crate::tests::support::CallLog) {
    let (engine, calls) = RecordingEngine::new();
    let compositor = Compositor::new(&HeadlessContext::default(), Box::new(engine)).unwrap();
    (compositor, calls)
}

#[test]
fn test_construction_with_client_creates_then_launches() {
    let (engine, calls) = RecordingEngine::new();
    let client = Client::new("/bin/shell", false);

    let compositor =
        Compositor::with_client(&HeadlessContext::default(), Box::new(engine), &client).unwrap();

    assert_eq!(
        drain(&calls),
        vec![
            EngineCall::Create,
            EngineCall::LaunchClient {
                command: b"/bin/shell".to_vec(),
                run_as_root: false,
            },
        ]
    );
    assert!(!compositor.is_attached());
}

#[test]
fn test_engine_allocation_failure_is_fatal() {
    let result = Compositor::new(
        &HeadlessContext::default(),
        Box::new(RecordingEngine::failing_create()),
    );
    assert_eq!(
        result.err(),
        Some(CoreError::engine_error("allocation failed"))
    );
}

#[test]
fn test_launch_failure_propagates_unmasked() {
    let (engine, _calls) = RecordingEngine::failing_launch();
    let mut compositor =
        Compositor::new(&HeadlessContext::default(), Box::new(engine)).unwrap();

    let err = compositor
        .launch_client(&Client::new("/bin/shell", true))
        .unwrap_err();
    assert_eq!(err, CoreError::engine_error("fork failed"));
    assert!(!err.is_precondition_violation());
}

#[test]
fn test_repeated_launches_are_allowed() {
    let (mut compositor, calls) = compositor();
    drain(&calls);

    compositor.launch_client(&Client::new("/bin/term", false)).unwrap();
    compositor.launch_client(&Client::new("/bin/panel", true)).unwrap();

    assert_eq!(
        drain(&calls),
        vec![
            EngineCall::LaunchClient {
                command: b"/bin/term".to_vec(),
                run_as_root: false,
            },
            EngineCall::LaunchClient {
                command: b"/bin/panel".to_vec(),
                run_as_root: true,
            },
        ]
    );
}

#[test]
fn test_second_attach_fails_from_any_thread() {
    let (compositor, _calls) = compositor();
    let shared = Mutex::new(compositor);

    shared.lock().unwrap().attach_to_event_loop().unwrap();
    assert_eq!(
        shared.lock().unwrap().attach_to_event_loop(),
        Err(CoreError::AlreadyAttached)
    );

    thread::scope(|scope| {
        scope.spawn(|| {
            assert_eq!(
                shared.lock().unwrap().attach_to_event_loop(),
                Err(CoreError::AlreadyAttached)
            );
        });
    });
}

#[test]
fn test_dispatch_from_wrong_thread_fails() {
    let (compositor, calls) = compositor();
    let shared = Mutex::new(compositor);

    shared.lock().unwrap().attach_to_event_loop().unwrap();
    drain(&calls);

    thread::scope(|scope| {
        scope.spawn(|| {
            let event = KeyEvent::new(30, KeyState::Pressed, 0);
            assert_eq!(
                shared.lock().unwrap().dispatch_key(&event),
                Err(CoreError::WrongThread)
            );
            assert_eq!(
                shared.lock().unwrap().primary_output().err(),
                Some(CoreError::WrongThread)
            );
        });
    });

    // Nothing reached the engine from the wrong thread
    assert!(drain(&calls).is_empty());
}

#[test]
fn test_detach_from_wrong_thread_fails() {
    let (compositor, _calls) = compositor();
    let shared = Mutex::new(compositor);

    shared.lock().unwrap().attach_to_event_loop().unwrap();

    thread::scope(|scope| {
        scope.spawn(|| {
            assert_eq!(
                shared.lock().unwrap().detach_from_event_loop(),
                Err(CoreError::WrongThread)
            );
        });
    });

    // Still attached; the owning thread can detach normally
    assert!(shared.lock().unwrap().is_attached());
    shared.lock().unwrap().detach_from_event_loop().unwrap();
}

#[test]
fn test_detach_releases_affinity_to_other_threads() {
    let (compositor, _calls) = compositor();
    let shared = Mutex::new(compositor);

    shared.lock().unwrap().attach_to_event_loop().unwrap();
    shared.lock().unwrap().detach_from_event_loop().unwrap();

    // After detach any thread may bind the compositor again
    thread::scope(|scope| {
        scope.spawn(|| {
            shared.lock().unwrap().attach_to_event_loop().unwrap();
            shared.lock().unwrap().detach_from_event_loop().unwrap();
        });
    });
}

#[test]
fn test_destroy_is_idempotent() {
    let (mut compositor, calls) = compositor();
    drain(&calls);

    compositor.destroy();
    let first = drain(&calls);
    assert_eq!(first, vec![EngineCall::Destroy]);

    // Second destroy performs no sub-destroys and no engine calls
    compositor.destroy();
    assert!(drain(&calls).is_empty());
    assert!(compositor.is_destroyed());
}

#[test]
fn test_destroy_is_callable_from_any_thread() {
    let (compositor, calls) = compositor();
    let shared = Mutex::new(compositor);

    shared.lock().unwrap().attach_to_event_loop().unwrap();
    drain(&calls);

    thread::scope(|scope| {
        scope.spawn(|| {
            shared.lock().unwrap().destroy();
        });
    });

    assert_eq!(drain(&calls), vec![EngineCall::Destroy]);
}

#[test]
fn test_drop_releases_the_engine_instance() {
    let (engine, calls) = RecordingEngine::new();
    {
        let _compositor =
            Compositor::new(&HeadlessContext::default(), Box::new(engine)).unwrap();
    }
    assert_eq!(
        drain(&calls),
        vec![EngineCall::Create, EngineCall::Destroy]
    );
}
