//! Integration Tests for Command Flows
//!
//! These tests drive the shell through its public entry point with the
//! POSIX toolchain and a recording runner, checking validation, the
//! native invocations that are planned and how their results are reported.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use shellport::session::Session;
use shellport::{LineCategory, PlatformKind, Shell};
use std::fs;
use std::path::PathBuf;
use test_utils::{arg, Fixture, RecordingRunner};

#[test]
fn test_copy_with_one_token_spawns_nothing() {
    let mut fx = Fixture::posix();
    fx.write("a.txt", "x");

    let result = fx.submit("cp", "a.txt");

    assert!(result.is_error());
    assert!(result.display_text.contains("requires a source and a destination"));
    assert_eq!(fx.runner.spawn_count(), 0);
}

#[test]
fn test_copy_missing_source() {
    let mut fx = Fixture::posix();

    let result = fx.submit("cp", "ghost.txt backup.txt");

    assert!(result.is_error());
    assert_eq!(
        result.display_text,
        "Error: Source file/directory does not exist: ghost.txt"
    );
    assert_eq!(fx.runner.spawn_count(), 0);
}

#[test]
fn test_copy_quoted_destination_with_space() {
    let mut fx = Fixture::posix();
    let source = fx.write("file1.txt", "data");

    let result = fx.submit("cp", "file1.txt \"my doc.txt\"");

    assert!(!result.is_error(), "{}", result.display_text);
    assert_eq!(
        result.display_text,
        "Copied successfully: file1.txt → my doc.txt"
    );

    let invocations = fx.runner.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].program_path, "cp");
    assert_eq!(
        invocations[0].argv,
        vec![arg(&source), arg(&fx.path("my doc.txt"))]
    );
    assert_eq!(invocations[0].working_directory, fx.root());
}

#[test]
fn test_copy_into_new_directory_creates_it() {
    let mut fx = Fixture::posix();
    fx.write("a.txt", "x");

    let result = fx.submit("cp", "a.txt backup/");

    assert!(!result.is_error(), "{}", result.display_text);
    assert!(fx.path("backup").is_dir());
    assert_eq!(fx.runner.spawn_count(), 1);
}

#[test]
fn test_copy_directory_is_recursive() {
    let mut fx = Fixture::posix();
    let source = fx.mkdir("src");

    fx.submit("cp", "src dst");

    assert_eq!(
        fx.runner.invocations()[0].argv,
        vec!["-R".to_string(), arg(&source), arg(&fx.path("dst"))]
    );
}

#[test]
fn test_move_reports_both_paths() {
    let mut fx = Fixture::posix();
    fx.write("old.txt", "x");

    let result = fx.submit("mv", "old.txt new.txt");

    assert_eq!(result.display_text, "Moved successfully: old.txt → new.txt");
    assert_eq!(fx.runner.invocations()[0].program_path, "mv");
}

#[test]
fn test_copy_failure_carries_native_output() {
    let mut fx = Fixture::posix();
    fx.write("a.txt", "x");
    fx.runner.script("cp: cannot create regular file: Permission denied\n", 1);

    let result = fx.submit("cp", "a.txt /root/locked.txt");

    assert!(result.is_error());
    assert!(result.display_text.contains("exit code 1"));
    assert!(result.display_text.contains("Permission denied"));
}

#[test]
fn test_cat_checks_every_file_first() {
    let mut fx = Fixture::posix();
    fx.write("one.txt", "1");

    let result = fx.submit("cat", "one.txt two.txt");

    assert_eq!(result.display_text, "Error: File not found: two.txt");
    assert_eq!(fx.runner.spawn_count(), 0);
}

#[test]
fn test_cat_runs_once_for_all_files() {
    let mut fx = Fixture::posix();
    let one = fx.write("one.txt", "1");
    let two = fx.write("two.txt", "2");
    fx.runner.script("1\n2\n", 0);

    let result = fx.submit("cat", "one.txt two.txt");

    assert_eq!(result.display_text, "1\n2\n");
    assert_eq!(
        fx.runner.command_lines(),
        vec![format!("cat {} {}", arg(&one), arg(&two))]
    );
}

#[test]
fn test_less_accepts_one_file() {
    let mut fx = Fixture::posix();
    fx.write("a.txt", "x");
    fx.write("b.txt", "y");

    let result = fx.submit("less", "a.txt b.txt");
    assert!(result.display_text.contains("accepts exactly one file"));

    let result = fx.submit("less", "");
    assert!(result.is_error());
    assert_eq!(fx.runner.spawn_count(), 0);
}

#[test]
fn test_head_line_counts() {
    let mut fx = Fixture::posix();
    let log = fx.write("app.log", "a\nb\nc\n");

    fx.submit("head", "app.log");
    fx.submit("head", "-n 2 app.log");

    assert_eq!(
        fx.runner.command_lines(),
        vec![
            format!("head -n 10 {}", arg(&log)),
            format!("head -n 2 {}", arg(&log)),
        ]
    );
}

#[test]
fn test_head_rejects_non_numeric_count() {
    let mut fx = Fixture::posix();
    fx.write("app.log", "a\n");

    let result = fx.submit("head", "-n ten app.log");

    assert!(result.is_error());
    assert!(result.display_text.contains("'ten' is not a valid line count"));
    assert_eq!(fx.runner.spawn_count(), 0);
}

#[test]
fn test_grep_without_matches_is_informational() {
    let mut fx = Fixture::posix();
    fx.write("notes.txt", "alpha\n");
    fx.runner.script("", 1);

    let result = fx.submit("grep", "beta notes.txt");

    assert!(!result.is_error());
    assert_eq!(result.display_text, "No matches for 'beta' in notes.txt");
}

#[test]
fn test_grep_error_exit_is_failure() {
    let mut fx = Fixture::posix();
    fx.write("notes.txt", "alpha\n");
    fx.runner.script("grep: Unmatched [\n", 2);

    let result = fx.submit("grep", "[ notes.txt");

    assert!(result.is_error());
    assert!(result.display_text.contains("Unmatched"));
}

#[test]
fn test_grep_requires_pattern_and_file() {
    let mut fx = Fixture::posix();

    let result = fx.submit("grep", "pattern");

    assert!(result.display_text.contains("requires a pattern and a file"));
    assert_eq!(fx.runner.spawn_count(), 0);
}

#[test]
fn test_wc_counts_in_process() {
    let mut fx = Fixture::posix();
    fx.write("three.txt", "a\nb\nc\n");
    fx.write("two.txt", "hello world\nbye");

    let result = fx.submit("wc", "three.txt two.txt");

    assert_eq!(fx.runner.spawn_count(), 0);
    let lines: Vec<&str> = result.display_text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "      3       3       6 three.txt");
    assert_eq!(lines[1], "      2       3      15 two.txt");
    assert_eq!(lines[2], "      5       6      21 total");
}

#[test]
fn test_wc_single_file_has_no_total() {
    let mut fx = Fixture::posix();
    fx.write("three.txt", "a\nb\nc\n");

    let result = fx.submit("wc", "three.txt");

    assert_eq!(result.display_text, "      3       3       6 three.txt");
}

#[test]
fn test_chmod_runs_native_tool() {
    let mut fx = Fixture::posix();
    let file = fx.write("script.sh", "");

    let result = fx.submit("chmod", "755 script.sh");

    assert_eq!(result.display_text, "Changed permissions for script.sh");
    assert_eq!(
        fx.runner.command_lines(),
        vec![format!("chmod 755 {}", arg(&file))]
    );
}

#[test]
fn test_chown_path_with_spaces() {
    let mut fx = Fixture::posix();
    let file = fx.write("my file.txt", "");

    let result = fx.submit("chown", "alice:staff my file.txt");

    assert_eq!(result.display_text, "Changed owner of my file.txt to alice:staff");
    assert_eq!(fx.runner.invocations()[0].argv, vec!["alice:staff".to_string(), arg(&file)]);
}

#[test]
fn test_chgrp_failure_is_command_failed_on_posix() {
    let mut fx = Fixture::posix();
    fx.write("a.txt", "");
    fx.runner.script("chgrp: changing group: Operation not permitted\n", 1);

    let result = fx.submit("chgrp", "wheel a.txt");

    assert!(result.display_text.contains("chgrp failed with exit code 1"));
}

#[test]
fn test_add_user_failure_is_permission_denied() {
    let mut fx = Fixture::posix();
    fx.runner.script("useradd: Permission denied.\n", 1);

    let result = fx.submit("addUser", "bob");

    assert!(result.is_error());
    assert!(result.display_text.contains("administrator privileges required"));
    assert_eq!(fx.runner.command_lines(), vec!["sudo useradd -m bob"]);
}

#[test]
fn test_add_group_success() {
    let mut fx = Fixture::posix();

    let result = fx.submit("addgroup", "devs");

    assert_eq!(result.display_text, "Added group: devs");
    assert_eq!(fx.runner.command_lines(), vec!["sudo groupadd devs"]);
}

#[test]
fn test_ps_defaults_to_all_processes() {
    let mut fx = Fixture::posix();
    fx.runner.script("USER PID\nroot 1\n", 0);

    let result = fx.submit("ps", "");

    assert_eq!(fx.runner.command_lines(), vec!["ps aux"]);
    assert_eq!(result.lines.len(), 2);
}

#[test]
fn test_quota_unsupported_is_informational() {
    let mut fx = Fixture::posix();
    fx.runner
        .script("quotacheck: This system does not support quotas\n", 1);

    let result = fx.submit("quotacheck", "");

    assert!(!result.is_error());
    assert_eq!(result.display_text, "Quotas are not enabled on this system");
    assert_eq!(fx.runner.command_lines(), vec!["sudo quotacheck -avug"]);
}

#[test]
fn test_quota_empty_output() {
    let mut fx = Fixture::posix();

    let result = fx.submit("quotacheck", "-u");

    assert_eq!(
        result.display_text,
        "No quota information available (quotas may be disabled)"
    );
}

#[test]
fn test_du_defaults_to_current_directory() {
    let mut fx = Fixture::posix();

    fx.submit("du", "");
    fx.submit("du", "-s src");

    assert_eq!(fx.runner.command_lines(), vec!["du -h .", "du -h -s src"]);
}

#[test]
fn test_du_forwards_operands_without_resolving() {
    let runner = RecordingRunner::new();
    let session = Session::new(PathBuf::from("/"), PathBuf::from("/"), PlatformKind::Posix).unwrap();
    let mut shell = Shell::with_parts(session, runner.clone());

    let result = shell.submit("du", "..");

    assert!(!result.is_error(), "{}", result.display_text);
    assert_eq!(runner.command_lines(), vec!["du -h .."]);
}

#[test]
fn test_wc_rejects_directory_before_reading() {
    let mut fx = Fixture::posix();
    fx.mkdir("d");
    fx.write("a.txt", "one two\n");

    let result = fx.submit("wc", "a.txt d");

    assert!(result.is_error());
    assert_eq!(result.display_text, "Error: File not found: d");
    assert_eq!(fx.runner.spawn_count(), 0);
}

#[test]
fn test_gzip_names_compressed_file() {
    let mut fx = Fixture::posix();
    fx.write("data.csv", "1,2");

    let result = fx.submit("gzip", "data.csv");

    assert_eq!(result.display_text, "Compressed: data.csv.gz");
}

#[test]
fn test_find_without_results() {
    let mut fx = Fixture::posix();

    let result = fx.submit("find", "report");

    assert!(!result.is_error());
    assert_eq!(
        result.display_text,
        format!("No files matching 'report' found in {}", fx.root().display())
    );
    assert_eq!(fx.runner.command_lines(), vec!["find . -name *report*"]);
}

#[test]
fn test_locate_without_results() {
    let mut fx = Fixture::posix();
    fx.runner.script("", 1);

    let result = fx.submit("locate", "passwd");

    assert_eq!(result.display_text, "No files matching 'passwd' found");
}

#[test]
fn test_file_type_uses_native_tool() {
    let mut fx = Fixture::posix();
    let file = fx.write("a.txt", "hello");
    fx.runner.script(&format!("{}: ASCII text\n", arg(&file)), 0);

    let result = fx.submit("file", "a.txt");

    assert!(result.display_text.contains("ASCII text"));
}

#[test]
fn test_wget_derives_output_name() {
    let mut fx = Fixture::posix();

    let result = fx.submit("wget", "https://example.com/files/data.csv");

    assert_eq!(
        result.display_text,
        "Downloaded: https://example.com/files/data.csv -> data.csv"
    );
    assert_eq!(
        fx.runner.command_lines(),
        vec!["wget -O data.csv https://example.com/files/data.csv"]
    );
}

#[test]
fn test_wget_explicit_output_name() {
    let mut fx = Fixture::posix();

    fx.submit("wget", "https://example.com/ home.html");

    assert_eq!(
        fx.runner.command_lines(),
        vec!["wget -O home.html https://example.com/"]
    );
}

#[test]
fn test_touch_reports_creation() {
    let mut fx = Fixture::posix();
    let file = fx.path("new.txt");

    let result = fx.submit("touch", "new.txt");

    assert_eq!(
        result.display_text,
        format!("Created empty file: {}", file.display())
    );
    assert_eq!(fx.runner.command_lines(), vec![format!("touch {}", arg(&file))]);
}

#[test]
fn test_access_rights_tolerates_missing_acl_tool() {
    let mut fx = Fixture::posix();
    let file = fx.write("a.txt", "");
    fx.runner.script("-rw-r--r-- 1 me me 0 Jan 1 00:00 a.txt\n", 0);
    fx.runner.script("sh: getfacl: not found\n", 127);

    let result = fx.submit("accessrights", "a.txt");

    assert!(!result.is_error());
    assert!(result
        .display_text
        .starts_with(&format!("Access rights for: {}", file.display())));
    assert!(result.display_text.contains("-rw-r--r--"));
    assert!(!result.display_text.contains("ACL details:"));
    assert_eq!(fx.runner.spawn_count(), 2);
}

#[test]
fn test_access_rights_defaults_to_current_directory() {
    let mut fx = Fixture::posix();

    fx.submit("accessrights", "");

    assert_eq!(
        fx.runner.command_lines()[0],
        format!("ls -ld {}", arg(fx.root()))
    );
}

#[test]
fn test_passthrough_failure_is_command_failed() {
    let mut fx = Fixture::posix();
    fx.runner.script("ls: cannot access 'nope': No such file or directory\n", 2);

    let result = fx.submit("ls", "nope");

    assert!(result.is_error());
    assert!(result.display_text.contains("ls failed with exit code 2"));
    assert!(result.display_text.contains("No such file or directory"));
    assert_eq!(fx.runner.command_lines(), vec!["ls nope"]);
}

#[test]
fn test_passthrough_output_is_classified() {
    let mut fx = Fixture::posix();
    fx.runner
        .script("total 8\n-rwxr-xr-x 1 user group 123 file\nmkdir: error\n", 0);

    let result = fx.submit("ls", "-l");

    let categories: Vec<LineCategory> = result.lines.iter().map(|l| l.category).collect();
    assert_eq!(
        categories,
        vec![LineCategory::Output, LineCategory::Output, LineCategory::Error]
    );
}

#[test]
fn test_processes_run_in_current_directory() {
    let mut fx = Fixture::posix();
    let sub = fx.mkdir("sub");

    let result = fx.submit("cd", "sub");
    assert_eq!(
        result.display_text,
        format!("Changed directory to: {}", sub.display())
    );

    fx.submit("mkdir", "out");
    assert_eq!(fx.runner.invocations()[0].working_directory, sub);
    assert_eq!(fx.shell.current_working_directory(), sub);
}

#[test]
fn test_cd_to_missing_directory_keeps_session() {
    let mut fx = Fixture::posix();

    let result = fx.submit("cd", "missing");

    assert!(result.is_error());
    assert!(result.display_text.contains("Directory not found"));
    assert_eq!(fx.shell.current_working_directory(), fx.root());
}

#[test]
fn test_cd_without_argument_goes_home() {
    let mut fx = Fixture::posix();
    let home = fx.mkdir("home");

    fx.submit("cd", "");

    assert_eq!(fx.shell.current_working_directory(), home);
}

#[test]
fn test_history_listing() {
    let mut fx = Fixture::posix();

    assert_eq!(fx.submit("history", "").display_text, "No commands in history");

    fx.submit("pwd", "");
    fx.submit("ls", "-la");
    fx.submit("history", "");

    let result = fx.submit("history", "");
    assert_eq!(result.display_text, "  1: pwd\n  2: ls -la");
    assert_eq!(fx.shell.history_entries(), vec!["pwd", "ls -la"]);
}

#[test]
fn test_history_search() {
    let mut fx = Fixture::posix();
    fx.submit("pwd", "");
    fx.submit("ls", "-la");

    let result = fx.submit("history", "ls");

    assert_eq!(result.display_text, "  2: ls -la");
}

#[test]
fn test_touch_then_wc_on_real_file() {
    let mut fx = Fixture::posix();
    fs::write(fx.path("empty.txt"), "").unwrap();

    let result = fx.submit("wc", "empty.txt");

    assert_eq!(result.display_text, "      0       0       0 empty.txt");
}
