//! Scope discipline across nested frames.

use dare_rail::prelude::*;
use std::cell::RefCell;

#[derive(Debug)]
enum AppError {
    Failed(Box<Failure>),
}

impl From<Box<Failure>> for AppError {
    fn from(failure: Box<Failure>) -> Self {
        Self::Failed(failure)
    }
}

fn raise_in_app() -> Result<(), AppError> {
    throw!("configuration missing", 4001);
}

#[test]
fn macros_convert_into_caller_error_types() {
    let AppError::Failed(failure) = raise_in_app().unwrap_err();
    assert_eq!(failure.code(), 4001);
    assert_eq!(failure.trace_len(), 1);
}

#[test]
fn statements_after_a_failure_do_not_run() {
    let log = RefCell::new(Vec::new());

    let step = |name: &'static str, fail: bool| -> Outcome {
        log.borrow_mut().push(name);
        if fail {
            throw!("step failed", 5);
        }
        Ok(())
    };

    let outcome = scope(|| {
        check!(step("first", false));
        check!(step("second", true));
        check!(step("third", false));
        Ok(())
    })
    .catch(|failure| {
        log.borrow_mut().push("handler");
        assert_eq!(failure.trace_len(), 2);
        Ok(())
    });

    assert!(outcome.is_ok());
    assert_eq!(*log.borrow(), ["first", "second", "handler"]);
}

#[test]
fn nested_scopes_each_add_their_own_entry() {
    fn level3() -> Outcome {
        throw!("deepest", 1);
    }

    fn level2() -> Outcome {
        scope(|| {
            check!(level3());
            Ok(())
        })
        .catch(Err)
    }

    fn level1() -> Outcome {
        scope(|| {
            check!(level2());
            Ok(())
        })
        .propagate()
    }

    let failure = level1().unwrap_err();
    let lines: Vec<String> = failure
        .trace()
        .map(|e| e.as_str().rsplit(':').next().unwrap_or_default().to_string())
        .collect();

    assert_eq!(failure.trace_len(), 3);
    let numbers: Vec<u32> = lines.iter().map(|l| l.parse().unwrap()).collect();
    assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{numbers:?}");
}

#[test]
fn recovering_handler_releases_and_resumes() {
    fn risky(fail: bool) -> Outcome<&'static str> {
        assert_false!(fail, "refused", 9);
        Ok("done")
    }

    let results: Vec<&str> = [false, true, false]
        .into_iter()
        .map(|fail| scope(|| risky(fail)).recover(|_| "recovered"))
        .collect();

    assert_eq!(results, ["done", "recovered", "done"]);
}

#[test]
fn handler_may_rewrap_with_context() {
    fn load() -> Outcome {
        throw!("file not found", 3002);
    }

    let failure = scope(load)
        .catch(|failure| Err(Failure::caused_by("could not start", 1001, failure).traced_here()))
        .unwrap_err();

    assert_eq!(failure.code(), 1001);
    assert_eq!(failure.root_cause().code(), 3002);
    assert_eq!(failure.depth(), 2);
}
