use std::process::Command;

fn write_cases(name: &str, text: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("shipcount-{}-{}.txt", name, std::process::id()));
    std::fs::write(&path, text).expect("failed to write cases");
    path
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--bin", "shipcount", "--"])
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run shipcount binary")
}

#[test]
fn shipcount_binary_human_output() {
    let path = write_cases("human", "#\n\n#.\n##\n");
    let output = run(&[path.to_str().unwrap()]);
    let _ = std::fs::remove_file(&path);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert_eq!(stdout, "Test 1:\n\n[1,0,0]\n\nTest 2:\n\n[0,0,1]\n\n");
}

#[test]
fn shipcount_binary_json_and_policies() {
    let path = write_cases("json", "####\n\n#\n");
    let p = path.to_str().unwrap();

    let rejected = run(&[p, "--json"]);
    assert!(!rejected.status.success());

    let clamped = run(&[p, "--json", "--clamp", "--strategy", "pairwise"]);
    let widened = run(&[p, "--json", "--widen"]);
    let _ = std::fs::remove_file(&path);

    assert!(clamped.status.success());
    let lines: Vec<serde_json::Value> = String::from_utf8(clamped.stdout)
        .expect("non utf8 output")
        .lines()
        .map(|l| serde_json::from_str(l).expect("invalid json"))
        .collect();
    assert_eq!(lines[0]["counts"], serde_json::json!([0, 0, 1]));
    assert_eq!(lines[1]["counts"], serde_json::json!([1, 0, 0]));

    assert!(widened.status.success());
    let first: serde_json::Value = serde_json::from_str(
        String::from_utf8(widened.stdout).expect("non utf8 output").lines().next().unwrap(),
    )
    .expect("invalid json");
    assert_eq!(first["counts"], serde_json::json!([0, 0, 0, 1]));
}
