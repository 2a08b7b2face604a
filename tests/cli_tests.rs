use std::fs;
use std::process::Command;

#[test]
fn splits_master_list_in_working_dir() {
    let exe = env!("CARGO_BIN_EXE_list_partitioner");
    let dir = tempfile::tempdir().unwrap();
    let mut text = String::from("word,cat\n");
    for i in 0..20 {
        text.push_str(&format!("w{i},noun\n"));
    }
    text.push_str("Apple,noun\nUP,adv\n");
    fs::write(dir.path().join("master_word_list.csv"), text).unwrap();
    fs::create_dir(dir.path().join("lists")).unwrap();

    let output = Command::new(exe)
        .current_dir(dir.path())
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let mut total = 0;
    for i in 1..=7 {
        let text = fs::read_to_string(dir.path().join("lists").join(format!("wordlist{i}.csv"))).unwrap();
        assert!(!text.contains("Apple") && !text.contains("UP"));
        total += text.lines().count() - 1;
    }
    assert_eq!(total, 20);
}

#[test]
fn missing_input_exits_nonzero() {
    let exe = env!("CARGO_BIN_EXE_list_partitioner");
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(exe)
        .current_dir(dir.path())
        .env("RUST_LOG", "off")
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("load step"));
    assert!(stderr.contains("master_word_list.csv"));
}
