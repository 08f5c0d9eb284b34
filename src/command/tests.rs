use super::*;

#[test]
fn test_posix_quotes_value_with_space() {
    let spec = CommandSpec::new("codex", ["-p", "my profile"]);
    assert_eq!(build_final_command(&spec, Platform::Posix), "codex -p 'my profile'");
}

#[test]
fn test_windows_quotes_every_argument() {
    let spec = CommandSpec::new("codex", ["-p", "my \"quoted\" profile"]);
    assert_eq!(
        build_final_command(&spec, Platform::Windows),
        r#"codex "-p" "my \"quoted\" profile""#
    );
}

#[test]
fn test_composite_argument_posix() {
    let spec = CommandSpec::new("codex", ["-p brain"]);
    assert_eq!(build_final_command(&spec, Platform::Posix), "codex -p brain");
}

#[test]
fn test_composite_argument_windows() {
    let spec = CommandSpec::new("codex", ["-p brain"]);
    assert_eq!(build_final_command(&spec, Platform::Windows), r#"codex "-p" "brain""#);
}

#[test]
fn test_no_arguments_yields_base_only() {
    let spec = CommandSpec::new("python3", Vec::<String>::new());
    assert_eq!(spec.command_line(Platform::Posix), "python3");
    assert_eq!(spec.command_line(Platform::Windows), "python3");
}

#[test]
fn test_empty_spec_is_empty_line() {
    assert_eq!(build_final_command(&CommandSpec::default(), Platform::Posix), "");
}

#[test]
fn test_posix_output_splits_back_into_logical_arguments() {
    let spec = CommandSpec::new("tool", ["--name 'my app'", "it's", "$HOME", "plain"]);
    let line = build_final_command(&spec, Platform::Posix);
    assert_eq!(
        shell_words::split(&line).unwrap(),
        vec!["tool", "--name", "my app", "it's", "$HOME", "plain"]
    );
}

#[test]
fn test_hash_value_stays_a_separate_argument() {
    let spec = CommandSpec::new("codex", ["-p #general"]);
    assert_eq!(build_final_command(&spec, Platform::Posix), "codex -p '#general'");
    assert_eq!(
        build_final_command(&spec, Platform::Windows),
        r##"codex "-p" "#general""##
    );
}

#[test]
fn test_build_is_deterministic() {
    let spec = CommandSpec::new("codex", ["-p brain", "x y"]);
    assert_eq!(
        build_final_command(&spec, Platform::Posix),
        build_final_command(&spec, Platform::Posix)
    );
}

#[test]
fn test_build_with_flag_split_lexer() {
    let spec = CommandSpec::new("codex", ["-p my profile"]);
    assert_eq!(
        build_final_command_with(&FlagSplitLexer, &spec, Platform::Posix),
        "codex -p 'my profile'"
    );
}

#[test]
fn test_has_inline_flags() {
    assert!(has_inline_flags("codex -p brain"));
    assert!(has_inline_flags("codex  --full-auto"));
    assert!(!has_inline_flags("codex"));
    assert!(!has_inline_flags("my-tool"));
    assert!(!has_inline_flags("tool - x"));
}
