use unparser::{
    LogicalOptions, NullSink, RuntimeVersion, StaticProbe, Unparser, ValueStyle, Warning,
    WarningKind,
};

fn node(major: u32, minor: u32, patch: u32) -> Unparser<StaticProbe> {
    Unparser::new(StaticProbe::new(RuntimeVersion::new(major, minor, patch)))
}

type Outcome = (Vec<String>, Vec<String>, Vec<Warning>);

fn unparse_json(unparser: &Unparser<StaticProbe>, json: &str) -> Outcome {
    let options = LogicalOptions::from_json_str(json).expect("valid options");
    let mut warnings: Vec<Warning> = Vec::new();
    let args = unparser.unparse(&options, &mut warnings);
    (args.runtime_args, args.framework_args, warnings)
}

#[test]
fn debug_command_on_modern_runtime_disables_timeout() {
    let (runtime, framework, warnings) =
        unparse_json(&node(10, 0, 0), r#"{"_": ["debug"], "timeout": 2000}"#);

    assert_eq!(runtime.first().map(String::as_str), Some("inspect"));
    assert_eq!(framework, ["--timeout", "0"]);
    assert!(warnings.is_empty());
}

#[test]
fn v8_options_is_not_trimmed() {
    let (runtime, framework, _) = unparse_json(&node(10, 0, 0), r#"{"v8-options": true}"#);
    assert_eq!(runtime, ["--v8-options"]);
    assert!(framework.is_empty());
}

#[test]
fn v8_prefix_is_trimmed() {
    let (runtime, _, _) = unparse_json(&node(10, 0, 0), r#"{"v8-something": 5}"#);
    assert_eq!(runtime, ["--something", "5"]);
}

#[test]
fn mixed_options_split_by_owner() {
    let (runtime, framework, warnings) = unparse_json(
        &node(12, 18, 1),
        r#"{
            "_": ["test/**/*.spec.js"],
            "require": ["ts-node/register", "./setup.js"],
            "max-old-space-size": 4096,
            "R": "spec",
            "harmony": true,
            "no-warnings": true,
            "slow": 75,
            "exit": false,
            "preserve-symlinks": true
        }"#,
    );

    assert_eq!(
        runtime,
        [
            "--max-old-space-size",
            "4096",
            "--harmony",
            "--no-warnings",
            "--preserve-symlinks"
        ]
    );
    assert_eq!(
        framework,
        [
            "test/**/*.spec.js",
            "--require",
            "ts-node/register",
            "--require",
            "./setup.js",
            "--reporter",
            "spec",
            "--slow",
            "75",
            "--no-exit"
        ]
    );
    assert!(warnings.is_empty());
}

#[test]
fn flags_unknown_to_the_host_stay_with_framework() {
    let json = r#"{"title": "x", "enable-source-maps": true}"#;

    let (runtime, framework, warnings) = unparse_json(&node(8, 0, 0), json);
    assert!(runtime.is_empty());
    assert_eq!(framework, ["--title", "x", "--enable-source-maps"]);
    assert!(warnings.is_empty());

    let (runtime, framework, _) = unparse_json(&node(12, 12, 0), json);
    assert_eq!(runtime, ["--title", "x", "--enable-source-maps"]);
    assert!(framework.is_empty());
}

#[test]
fn negated_escape_hatch_keys_lose_the_prefix() {
    let (runtime, _, _) = unparse_json(&node(12, 0, 0), r#"{"no-v8-lazy": true}"#);
    assert_eq!(runtime, ["--no-lazy"]);
}

#[test]
fn require_values_are_not_classified() {
    let (runtime, framework, _) =
        unparse_json(&node(10, 0, 0), r#"{"require": "trace-dependency"}"#);
    assert!(runtime.is_empty());
    assert_eq!(framework, ["--require", "trace-dependency"]);
}

#[test]
fn inspect_command_with_flags_reports_each_conflict() {
    let unparser = node(8, 9, 4);
    let json = r#"{"_": ["inspect", "spec.js"], "debug-brk": true, "inspect": "9229", "t": 500}"#;
    let (runtime, framework, warnings) = unparse_json(&unparser, json);

    assert_eq!(runtime, ["inspect"]);
    assert_eq!(framework, ["spec.js", "--timeout", "0"]);
    let rendered: Vec<_> = warnings.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "warning: command \"inspect\" provided; --inspect ignored",
            "warning: command \"inspect\" provided; --debug-brk ignored",
        ]
    );

    let rerun = unparse_json(&unparser, json);
    assert_eq!(rerun, (runtime, framework, warnings));
}

#[test]
fn debug_command_on_legacy_runtime_keeps_debug() {
    let (runtime, framework, _) =
        unparse_json(&node(6, 11, 0), r#"{"_": ["debug", "a.js"], "timeouts": 100}"#);
    assert_eq!(runtime, ["debug"]);
    assert_eq!(framework, ["a.js", "--timeout", "0"]);
}

#[test]
fn legacy_debug_flag_becomes_inspect() {
    let (runtime, framework, warnings) =
        unparse_json(&node(10, 15, 3), r#"{"debug": true, "reporter": "dot"}"#);

    assert_eq!(runtime, ["--inspect"]);
    assert_eq!(framework, ["--reporter", "dot", "--timeout", "0"]);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind(), WarningKind::Deprecation);
    assert_eq!(
        warnings[0].message(),
        "\"--debug\" is not available in Node.js v10.15.3; use \"--inspect\" instead."
    );
}

#[test]
fn legacy_debug_flag_left_alone_where_supported() {
    let (runtime, framework, warnings) =
        unparse_json(&node(7, 10, 1), r#"{"debug-brk": true}"#);
    assert_eq!(runtime, ["--debug-brk"]);
    assert_eq!(framework, ["--timeout", "0"]);
    assert!(warnings.is_empty());
}

#[test]
fn gc_becomes_gc_global() {
    let (runtime, _, warnings) = unparse_json(&node(12, 0, 0), r#"{"gc": true}"#);
    assert_eq!(runtime, ["--gc-global"]);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind(), WarningKind::Deprecation);
}

#[test]
fn passthrough_tokens_follow_separator() {
    let (_, framework, _) = unparse_json(
        &node(12, 0, 0),
        r#"{"_": ["spec.js"], "--": ["--custom-arg", "value"], "bail": true}"#,
    );
    assert_eq!(framework, ["spec.js", "--bail", "--", "--custom-arg", "value"]);
}

#[test]
fn joined_style_matches_runtime_conventions() {
    let unparser = node(12, 0, 0).runtime_value_style(ValueStyle::Joined);
    let (runtime, framework, _) = unparse_json(
        &unparser,
        r#"{"inspect": "127.0.0.1:9229", "stack-trace-limit": 50, "grep": "slow"}"#,
    );
    assert_eq!(runtime, ["--inspect=127.0.0.1:9229", "--stack-trace-limit=50"]);
    assert_eq!(framework, ["--grep", "slow", "--timeout", "0"]);
}

#[test]
fn command_line_assembles_launch() {
    let options = LogicalOptions::new()
        .with("_", vec!["inspect", "spec.js"])
        .with("ui", "tdd");
    let args = node(12, 0, 0).unparse(&options, &mut NullSink);
    assert_eq!(
        args.command_line("node", "bin/runner.js"),
        ["node", "inspect", "bin/runner.js", "spec.js", "--ui", "tdd", "--timeout", "0"]
    );
}
