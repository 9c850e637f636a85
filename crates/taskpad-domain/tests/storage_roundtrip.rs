//! Round-trip tests for the task storage grammar
//!
//! Parsing a task's storage string back must yield a task that is
//! duplicate-equal to the original with the same completion flag.

use taskpad_domain::Task;

fn assert_round_trips(task: &Task) {
    let restored = Task::from_storage_line(&task.storage_string()).unwrap();
    assert!(restored.is_duplicate_of(task));
    assert_eq!(restored.is_done(), task.is_done());
    assert_eq!(restored.storage_string(), task.storage_string());
}

#[test]
fn test_todo_round_trips() {
    let pending = Task::todo("buy milk").unwrap();
    assert_round_trips(&pending);

    let mut done = Task::todo("buy milk").unwrap();
    done.mark_done();
    assert_round_trips(&done);
}

#[test]
fn test_deadline_round_trips() {
    let pending = Task::deadline("submit report /by 02/12/2019 1800").unwrap();
    assert_round_trips(&pending);

    let mut done = Task::deadline("pay rent /by 01/01/2020 0900").unwrap();
    done.mark_done();
    assert_round_trips(&done);
}

#[test]
fn test_event_round_trips() {
    let pending = Task::event("team sync /at 03/12/2019 1400 1600").unwrap();
    assert_round_trips(&pending);

    let mut done = Task::event("standup /at 04/12/2019 0915 0930").unwrap();
    done.mark_done();
    assert_round_trips(&done);
}

#[test]
fn test_round_trip_with_multi_word_descriptions() {
    let task = Task::todo("call the garage about the winter tyres").unwrap();
    assert_round_trips(&task);

    let task = Task::deadline("book flights to Lisbon /by 15/06/2021 1230").unwrap();
    assert_round_trips(&task);
}
