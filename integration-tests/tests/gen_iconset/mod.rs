use crate::{command, new_workdir, stdout_of, write_png};
use integration_tests::Workdir;

const ICONSET_NAMES: &[&str] = &[
    "icon_1024x1024.png",
    "icon_128x128.png",
    "icon_128x128@2x.png",
    "icon_16x16.png",
    "icon_16x16@2x.png",
    "icon_256x256.png",
    "icon_256x256@2x.png",
    "icon_32x32.png",
    "icon_32x32@2x.png",
    "icon_512x512.png",
    "icon_512x512@2x.png",
    "icon_64x64.png",
    "icon_64x64@2x.png",
    "icon_8x8@2x.png",
];

fn gen_iconset(workdir: &Workdir) -> assert_cmd::Command {
    let mut cmd = command("test-gen-iconset", workdir);
    cmd.arg("--resize-tool")
        .arg(workdir.resize_tool())
        .arg("--package-tool")
        .arg(workdir.package_tool());
    cmd
}

#[test]
fn should_build_iconset_and_package_it() {
    let workdir = new_workdir();
    write_png(&workdir, "logo.png", 1024, 1024);
    let source = workdir.path().join("logo.png");
    let iconset = workdir.path().join("logo.iconset");

    gen_iconset(&workdir).arg(&source).assert().success();

    let invocations = workdir.invocations();
    assert_eq!(invocations.len(), 15);
    assert!(invocations[..14].iter().all(|i| i.program == "sips"));
    invocations[1].assert_args(&[
        "-z".to_owned(),
        "16".to_owned(),
        "16".to_owned(),
        source.display().to_string(),
        "--out".to_owned(),
        iconset.join("icon_8x8@2x.png").display().to_string(),
    ]);
    assert_eq!(invocations[14].program, "iconutil");
    invocations[14].assert_args(&[
        "-c".to_owned(),
        "icns".to_owned(),
        iconset.display().to_string(),
        "-o".to_owned(),
        workdir.path().join("logo.icns").display().to_string(),
    ]);

    assert_eq!(workdir.entries("logo.iconset"), ICONSET_NAMES);
    assert!(workdir.path().join("logo.icns").is_file());
}

#[test]
fn should_succeed_when_run_twice() {
    let workdir = new_workdir();
    write_png(&workdir, "logo.png", 64, 64);

    gen_iconset(&workdir).arg("logo.png").assert().success();
    std::fs::remove_file(workdir.path().join("logo.icns")).unwrap();
    gen_iconset(&workdir).arg("logo.png").assert().success();

    assert_eq!(workdir.invocations().len(), 30);
    assert_eq!(workdir.entries("logo.iconset"), ICONSET_NAMES);
    assert!(workdir.path().join("logo.icns").is_file());
}

#[test]
fn should_fail_without_arguments() {
    let workdir = new_workdir();

    let output = gen_iconset(&workdir)
        .assert()
        .failure()
        .code(1)
        .get_output()
        .clone();

    assert!(stdout_of(&output).contains("No path to original / hi-res icon provided"));
    assert!(workdir.invocations().is_empty());
    assert_eq!(workdir.entries("."), vec!["tools"]);
}

#[test]
fn should_fail_with_too_many_arguments() {
    let workdir = new_workdir();
    write_png(&workdir, "a.png", 16, 16);

    let output = gen_iconset(&workdir)
        .args(["a.png", "does-not-exist.png"])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .clone();

    assert!(stdout_of(&output).contains("Too many arguments"));
    assert!(workdir.invocations().is_empty());
    assert_eq!(workdir.entries("."), vec!["a.png", "tools"]);
}

#[test]
fn should_fail_for_missing_file() {
    let workdir = new_workdir();

    let output = gen_iconset(&workdir)
        .arg("missing.png")
        .assert()
        .failure()
        .code(1)
        .get_output()
        .clone();

    assert!(stdout_of(&output).contains("There is no such file: missing.png"));
    assert!(workdir.invocations().is_empty());
    assert_eq!(workdir.entries("."), vec!["tools"]);
}

#[test]
fn should_ignore_tool_failures_by_default() {
    let workdir = new_workdir().with_exit_status("sips", 1);
    write_png(&workdir, "logo.png", 64, 64);

    gen_iconset(&workdir).arg("logo.png").assert().success();

    assert_eq!(workdir.invocations().len(), 15);
    assert!(workdir.entries("logo.iconset").is_empty());
}

#[test]
fn should_fail_on_tool_failure_when_checking_status() {
    let workdir = new_workdir().with_exit_status("sips", 1);
    write_png(&workdir, "logo.png", 64, 64);

    gen_iconset(&workdir)
        .arg("--check-status")
        .arg("logo.png")
        .assert()
        .failure()
        .code(1);

    assert_eq!(workdir.invocations().len(), 1);
    assert!(!workdir.path().join("logo.icns").exists());
}

#[test]
fn should_read_tools_from_environment() {
    let workdir = new_workdir();
    write_png(&workdir, "logo.png", 64, 64);

    command("test-gen-iconset", &workdir)
        .env("ICONKIT_RESIZE_TOOL", workdir.resize_tool())
        .env("ICONKIT_PACKAGE_TOOL", workdir.package_tool())
        .arg("logo.png")
        .assert()
        .success();

    assert_eq!(workdir.invocations().len(), 15);
}

#[test]
fn should_read_check_status_from_environment() {
    let workdir = new_workdir().with_exit_status("sips", 1);
    write_png(&workdir, "logo.png", 64, 64);

    gen_iconset(&workdir)
        .env("ICONKIT_CHECK_STATUS", "true")
        .arg("logo.png")
        .assert()
        .failure()
        .code(1);

    assert_eq!(workdir.invocations().len(), 1);
    assert!(!workdir.path().join("logo.icns").exists());
}

#[test]
fn should_pass_through_tool_output() {
    let workdir = new_workdir().with_stdout("iconutil", "packaged logo.icns\n");
    write_png(&workdir, "logo.png", 64, 64);

    let output = gen_iconset(&workdir)
        .arg("logo.png")
        .assert()
        .success()
        .get_output()
        .clone();

    assert!(stdout_of(&output).contains("packaged logo.icns"));
}

#[test]
fn should_discard_tool_output_when_quiet() {
    let workdir = new_workdir().with_stdout("iconutil", "packaged logo.icns\n");
    write_png(&workdir, "logo.png", 64, 64);

    let output = gen_iconset(&workdir)
        .arg("--quiet")
        .arg("logo.png")
        .assert()
        .success()
        .get_output()
        .clone();

    assert!(!stdout_of(&output).contains("packaged logo.icns"));
    assert_eq!(workdir.invocations().len(), 15);
    assert!(workdir.path().join("logo.icns").is_file());
}
