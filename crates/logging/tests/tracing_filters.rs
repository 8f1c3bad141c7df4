//! Integration tests for the tracing bridge.
#![cfg(feature = "tracing")]

use logging::{TracingSink, Verbosity, Warning, WarningSink, build_filter, targets};

#[test]
fn filters_build_for_every_verbosity() {
    for verbosity in [
        Verbosity::Quiet,
        Verbosity::Normal,
        Verbosity::Verbose,
        Verbosity::Debug,
        Verbosity::Trace,
    ] {
        let filter = build_filter(verbosity, None).expect("builtin directive parses");
        assert!(filter.to_string().contains(verbosity.level_name()));
    }
}

#[test]
fn override_directive_takes_precedence() {
    let filter = build_filter(Verbosity::Normal, Some("launchargs::rules=trace"))
        .expect("override parses");
    assert!(filter.to_string().contains("launchargs::rules=trace"));
}

#[test]
fn every_target_shares_the_workspace_prefix() {
    for target in targets::ALL {
        assert!(target.starts_with("launchargs::"), "{target}");
    }
}

#[test]
fn tracing_sink_accepts_warnings_without_subscriber() {
    let mut sink = TracingSink;
    sink.warn(Warning::deprecation("\"-gc\" is deprecated"));
}
