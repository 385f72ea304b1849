use super::*;

#[test]
fn run_script_reports_each_command() {
    let out = run_script("mkdisk -size=10\n\n# comentario\nfdisk -size=5 -name=Part1\n");
    assert_eq!(out, "MKDISK: ok\nFDISK: ok\n");
}

#[test]
fn blank_script_reports_no_commands() {
    assert_eq!(run_script(" \n\t\n"), NO_COMMANDS);
}

#[test]
fn parse_user_requires_three_fields() {
    let u = parse_user("root:123:781A").expect("parse user");
    assert_eq!(u.name, "root");
    assert_eq!(u.partition_id, "781A");

    assert!(parse_user("root:123").is_err());
    assert!(parse_user("root::781A").is_err());
}
