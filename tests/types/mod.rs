use dare_rail::{CodeRange, ConstructionError, Failure, TraceEntry};


#[test]
fn raise_starts_with_an_empty_trace() {
    let failure = Failure::raise("Message", 20);

    assert_eq!(failure.message(), "Message");
    assert_eq!(failure.code(), 20);
    assert_eq!(failure.trace_len(), 0);
    assert!(failure.cause().is_none());
    assert_eq!(failure.depth(), 1);
}

#[test]
fn owned_and_static_messages_are_accepted() {
    let id = 42;
    let failure = Failure::raise(format!("user {id} not found"), 404);
    assert_eq!(failure.message(), "user 42 not found");
}

#[test]
fn push_trace_appends_at_the_newest_end() {
    let mut failure = Failure::raise("boom", 1);
    failure.push_trace("first.rs:1");
    failure.push_trace(TraceEntry::location("second.rs", 2));
    failure.push_trace(String::from("third"));

    let entries: Vec<String> = failure.trace().map(ToString::to_string).collect();
    assert_eq!(entries, ["first.rs:1", "second.rs:2", "third"]);
}

#[test]
fn try_push_trace_grows_past_inline_capacity() {
    let mut failure = Failure::raise("boom", 1);
    for line in 0..16 {
        assert_eq!(failure.try_push_trace(TraceEntry::location("loop.rs", line)), Ok(()));
    }
    assert_eq!(failure.trace_len(), 16);
    assert_eq!(failure.trace().nth(15).map(TraceEntry::as_str), Some("loop.rs:15"));
}

#[test]
fn chain_walks_outermost_to_innermost() {
    let inner = Failure::raise("inner", 1);
    let middle = Failure::caused_by("middle", 2, inner);
    let outer = Failure::caused_by("outer", 3, middle);

    let codes: Vec<i32> = outer.chain().map(Failure::code).collect();
    assert_eq!(codes, [3, 2, 1]);
    assert_eq!(outer.root_cause().message(), "inner");
    assert_eq!(outer.depth(), 3);
}

#[test]
fn into_cause_hands_over_the_inner_failure() {
    let inner = Failure::raise("inner", 1).traced("inner.rs:1");
    let outer = Failure::caused_by("outer", 2, inner).traced("outer.rs:1");

    let inner = outer.into_cause().expect("cause present");
    assert_eq!(inner.message(), "inner");
    assert_eq!(inner.trace_len(), 1);
}

#[test]
fn take_cause_detaches_the_chain() {
    let mut outer = Failure::caused_by("outer", 2, Failure::raise("inner", 1));
    let inner = outer.take_cause();

    assert!(outer.cause().is_none());
    assert_eq!(inner.map(|f| f.code()), Some(1));
}

#[test]
fn release_counts_every_record_and_entry() {
    let inner = Failure::raise("inner", 1).traced("a").traced("b");
    let outer = Failure::caused_by("outer", 2, inner).traced("c");

    let released = outer.release();
    assert_eq!(released.records, 2);
    assert_eq!(released.trace_entries, 3);
}

#[test]
fn very_deep_chains_drop_without_recursion() {
    let mut failure = Failure::raise("root", 0);
    for code in 1..200_000 {
        failure = Failure::caused_by("wrapper", code, failure);
    }
    assert_eq!(failure.code(), 199_999);
    drop(failure);
}

#[test]
fn code_ranges_classify_failures() {
    const ENGINE: CodeRange = CodeRange::new("engine", 1000, 2000);
    const MAIN: CodeRange = CodeRange::new("main", 2000, 3000);

    let failure = Failure::raise("Too few arguments!", 1000);
    assert!(failure.is_in(&ENGINE));
    assert!(!failure.is_in(&MAIN));

    assert_eq!(ENGINE.code(5), Some(1005));
    assert_eq!(ENGINE.code(1000), None);
    assert_eq!(ENGINE.code(-1), None);
    assert_eq!(ENGINE.to_string(), "engine [1000, 2000)");
    assert_eq!(std::ops::Range::from(MAIN), 2000..3000);
}

#[test]
fn construction_error_messages() {
    assert_eq!(ConstructionError::CapacityOverflow.to_string(), "trace capacity overflow");
    assert_eq!(
        ConstructionError::AllocationFailed { size: 64 }.to_string(),
        "could not allocate 64 bytes for trace storage"
    );
}

#[test]
fn display_shows_code_and_message() {
    let failure = Failure::raise("Division by zero!", 1000).traced("engine.rs:97");

    assert_eq!(format!("{failure}"), "(1000) Division by zero!");
    assert_eq!(format!("{failure:#}"), "Exception: (1000) Division by zero!\n  at engine.rs:97\n");
}
