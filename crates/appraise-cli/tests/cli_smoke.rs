use assert_cmd::Command;
use predicates::prelude::*;

fn appraise() -> Command {
    Command::cargo_bin("appraise").expect("binary built")
}

#[test]
fn help_runs() {
    appraise()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("appraise"));
}

#[test]
fn missing_credential_is_fatal_at_startup() {
    let tmp = tempfile::tempdir().unwrap();
    appraise()
        .env_remove("OPENAI_API_KEY")
        .env("APPRAISE_HOME", tmp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn missing_rubric_is_fatal_before_any_model_call() {
    let tmp = tempfile::tempdir().unwrap();
    appraise()
        .env("OPENAI_API_KEY", "test-key")
        .env("APPRAISE_HOME", tmp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("judge.agent.md"));
}

#[test]
fn invalid_remote_url_fails_the_run() {
    let tmp = tempfile::tempdir().unwrap();
    let rubric_dir = tmp.path().join(".specify").join("agents");
    std::fs::create_dir_all(&rubric_dir).unwrap();
    std::fs::write(rubric_dir.join("judge.agent.md"), "Output ONLY JSON.").unwrap();

    appraise()
        .env("OPENAI_API_KEY", "test-key")
        .env("APPRAISE_HOME", tmp.path())
        .arg("https://github.com/user/repo/tree/main/file.py")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid GitHub URL"));

    assert!(!tmp.path().join("data").join("evaluation_report.json").exists());
}
