// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use skyfeed_core::{SkyfeedError, SubjectError};

#[derive(Debug, thiserror::Error)]
#[error("custom error: {msg}")]
struct CustomError {
    msg: String,
}

#[test]
fn fetch_failed_displays_context() {
    let err = SkyfeedError::fetch_failed("connection reset");
    assert_eq!(err.to_string(), "fetch failed: connection reset");
}

#[test]
fn from_user_errors_aggregates() {
    let errors = vec![
        CustomError {
            msg: "first".to_string(),
        },
        CustomError {
            msg: "second".to_string(),
        },
    ];

    let aggregated = SkyfeedError::from_user_errors(errors);
    assert!(matches!(
        aggregated,
        SkyfeedError::MultipleErrors { count: 2, .. }
    ));
}

#[test]
fn subject_error_converts_to_root_error() {
    let err: SkyfeedError = SubjectError::Closed.into();
    assert!(matches!(err, SkyfeedError::Subject(SubjectError::Closed)));
    assert_eq!(err.to_string(), "Subject is closed");
}

#[test]
fn cloning_a_user_error_degrades_to_its_message() {
    let err = SkyfeedError::user_error(CustomError {
        msg: "boom".to_string(),
    });

    let cloned = err.clone();
    match cloned {
        SkyfeedError::StreamProcessing { context } => {
            assert!(context.contains("custom error: boom"));
        }
        other => panic!("expected StreamProcessing, got {other:?}"),
    }
}

#[test]
fn clone_preserves_structured_variants() {
    let err = SkyfeedError::fetch_failed("boom");
    assert!(matches!(err.clone(), SkyfeedError::FetchFailed { .. }));

    let err: SkyfeedError = SubjectError::Closed.into();
    assert!(matches!(err.clone(), SkyfeedError::Subject(_)));
}
