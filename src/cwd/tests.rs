use super::*;

fn folders() -> Vec<WorkspaceFolder> {
    vec![
        WorkspaceFolder::named("A", "/work/A"),
        WorkspaceFolder::named("B", "/work/B"),
    ]
}

fn request(mode: CwdMode, folders: &[WorkspaceFolder]) -> CwdRequest<'_> {
    CwdRequest {
        platform: Platform::Posix,
        ..CwdRequest::new(mode, folders)
    }
}

#[test]
fn test_workspace_root_uses_first_folder() {
    let folders = folders();
    let res = resolve_cwd(&request(CwdMode::WorkspaceRoot, &folders));
    assert_eq!(res.cwd, Some(PathBuf::from("/work/A")));
    assert!(!res.needs_prompt);
}

#[test]
fn test_workspace_root_without_folders_is_absent() {
    let res = resolve_cwd(&request(CwdMode::WorkspaceRoot, &[]));
    assert_eq!(res, CwdResolution::default());
}

#[test]
fn test_active_workspace_uses_folder_containing_file() {
    let folders = folders();
    let editor = EditorContext::file("/work/B/src/index.js");
    let res = resolve_cwd(&CwdRequest {
        editor: Some(&editor),
        ..request(CwdMode::ActiveWorkspace, &folders)
    });
    assert_eq!(res.cwd, Some(PathBuf::from("/work/B")));
    assert!(!res.needs_prompt);
}

#[test]
fn test_active_workspace_prefers_most_specific_folder() {
    let folders = vec![
        WorkspaceFolder::new("/work"),
        WorkspaceFolder::new("/work/B/nested"),
        WorkspaceFolder::new("/work/B"),
    ];
    let editor = EditorContext::file("/work/B/nested/deep/file.rs");
    let res = resolve_cwd(&CwdRequest {
        editor: Some(&editor),
        ..request(CwdMode::ActiveWorkspace, &folders)
    });
    assert_eq!(res.cwd, Some(PathBuf::from("/work/B/nested")));
}

#[test]
fn test_active_workspace_respects_component_boundary() {
    let folders = vec![WorkspaceFolder::new("/x"), WorkspaceFolder::new("/a/bc")];
    let editor = EditorContext::file("/a/bcd/x");
    let res = resolve_cwd(&CwdRequest {
        editor: Some(&editor),
        ..request(CwdMode::ActiveWorkspace, &folders)
    });
    assert_eq!(res.cwd, Some(PathBuf::from("/x")));
}

#[test]
fn test_active_workspace_falls_back_without_file() {
    let folders = folders();
    let untitled = EditorContext::virtual_buffer("untitled");
    let res = resolve_cwd(&CwdRequest {
        editor: Some(&untitled),
        ..request(CwdMode::ActiveWorkspace, &folders)
    });
    assert_eq!(res.cwd, Some(PathBuf::from("/work/A")));

    let res = resolve_cwd(&request(CwdMode::ActiveWorkspace, &folders));
    assert_eq!(res.cwd, Some(PathBuf::from("/work/A")));
}

#[test]
fn test_active_workspace_windows_paths_ignore_case() {
    let folders = vec![
        WorkspaceFolder::new(r"C:\Work\A"),
        WorkspaceFolder::new(r"C:\Work\B"),
    ];
    let editor = EditorContext::file(r"c:\work\b\src\main.rs");
    let res = resolve_cwd(&CwdRequest {
        editor: Some(&editor),
        platform: Platform::Windows,
        ..CwdRequest::new(CwdMode::ActiveWorkspace, &folders)
    });
    assert_eq!(res.cwd, Some(PathBuf::from(r"C:\Work\B")));
}

#[test]
fn test_active_file_dir_uses_parent_directory() {
    let folders = folders();
    let editor = EditorContext::file("/work/B/src/index.js");
    let res = resolve_cwd(&CwdRequest {
        editor: Some(&editor),
        ..request(CwdMode::ActiveFileDir, &folders)
    });
    assert_eq!(res.cwd, Some(PathBuf::from("/work/B/src")));
    assert!(!res.needs_prompt);
}

#[test]
fn test_active_file_dir_falls_back_for_untitled() {
    let folders = folders();
    let editor = EditorContext::virtual_buffer("untitled");
    let res = resolve_cwd(&CwdRequest {
        editor: Some(&editor),
        ..request(CwdMode::ActiveFileDir, &folders)
    });
    assert_eq!(res.cwd, Some(PathBuf::from("/work/A")));
}

#[test]
fn test_file_scheme_path_is_ignored_for_other_schemes() {
    let editor = EditorContext {
        scheme: "git".to_string(),
        path: Some(PathBuf::from("/work/B/x.rs")),
    };
    assert_eq!(editor.file_path(), None);
}

#[test]
fn test_prompt_with_single_folder_does_not_prompt() {
    let folders = vec![WorkspaceFolder::new("/only")];
    let res = resolve_cwd(&request(CwdMode::Prompt, &folders));
    assert_eq!(res.cwd, Some(PathBuf::from("/only")));
    assert!(!res.needs_prompt);

    let res = resolve_cwd(&request(CwdMode::Prompt, &[]));
    assert_eq!(res, CwdResolution::default());
}

#[test]
fn test_prompt_reuses_remembered_selection() {
    let folders = folders();
    let last = PathBuf::from("/work/B");
    let res = resolve_cwd(&CwdRequest {
        remembered: Some(&last),
        ..request(CwdMode::Prompt, &folders)
    });
    assert!(!res.needs_prompt);
    assert_eq!(res.cwd, Some(PathBuf::from("/work/B")));
}

#[test]
fn test_prompt_remembered_selection_matches_after_normalization() {
    let folders = vec![
        WorkspaceFolder::new(r"C:\Work\A"),
        WorkspaceFolder::new(r"C:\Work\B"),
    ];
    let last = PathBuf::from("c:/work/b/");
    let res = resolve_cwd(&CwdRequest {
        remembered: Some(&last),
        platform: Platform::Windows,
        ..CwdRequest::new(CwdMode::Prompt, &folders)
    });
    assert!(!res.needs_prompt);
    assert_eq!(res.cwd, Some(last));
}

#[test]
fn test_prompt_stale_selection_requires_prompt() {
    let folders = folders();
    let last = PathBuf::from("/work/C");
    let res = resolve_cwd(&CwdRequest {
        remembered: Some(&last),
        ..request(CwdMode::Prompt, &folders)
    });
    assert!(res.needs_prompt);
    assert_eq!(res.cwd, None);
}

#[test]
fn test_prompt_posix_selection_is_case_sensitive() {
    let folders = folders();
    let last = PathBuf::from("/work/b");
    let res = resolve_cwd(&CwdRequest {
        remembered: Some(&last),
        ..request(CwdMode::Prompt, &folders)
    });
    assert!(res.needs_prompt);
}

#[test]
fn test_prompt_ignores_selection_when_not_remembering() {
    let folders = folders();
    let last = PathBuf::from("/work/B");
    let res = resolve_cwd(&CwdRequest {
        remembered: Some(&last),
        remember_selection: false,
        ..request(CwdMode::Prompt, &folders)
    });
    assert!(res.needs_prompt);
    assert_eq!(res.cwd, None);
}

#[test]
fn test_mode_parse_and_display() {
    for mode in [
        CwdMode::WorkspaceRoot,
        CwdMode::ActiveWorkspace,
        CwdMode::ActiveFileDir,
        CwdMode::Prompt,
    ] {
        assert_eq!(mode.to_string().parse::<CwdMode>(), Ok(mode));
    }
    assert_eq!(
        "cwd".parse::<CwdMode>(),
        Err(Error::UnknownCwdMode("cwd".to_string()))
    );
}

#[test]
fn test_folder_label() {
    assert_eq!(WorkspaceFolder::named("api", "/srv/x").label(), "api");
    assert_eq!(WorkspaceFolder::new("/srv/web/").label(), "web");
    assert_eq!(WorkspaceFolder::new(r"C:\src\tool").label(), "tool");
    assert_eq!(WorkspaceFolder::new("/").label(), "/");
}
