use assert_cmd::Command;
use pretty_assertions::assert_eq;

#[test]
fn prints_the_six_facts_under_two_captions() {
    let assert = Command::cargo_bin("ism-probe").unwrap().assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "typename: size_in_bytes");
    assert_eq!(lines[5], "MACRO or other special name: value");

    let type_names = [
        "sem_t",
        "pthread_mutexattr_t",
        "pthread_rwlockattr_t",
        "pthread_rwlock_t",
    ];
    for (line, expected) in lines[1..5].iter().zip(type_names) {
        let (name, size) = line.split_once(": ").unwrap();
        assert_eq!(name, expected);
        assert!(size.parse::<usize>().unwrap() > 0, "{line}");
    }

    let (name, address) = lines[6].split_once(": ").unwrap();
    assert_eq!(name, "SEM_FAILED");
    let digits = address.strip_prefix("0x").unwrap();
    assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit()));

    let (name, flag) = lines[7].split_once(": ").unwrap();
    assert_eq!(name, "PTHREAD_PROCESS_SHARED");
    flag.parse::<i32>().unwrap();
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = Command::cargo_bin("ism-probe").unwrap().assert().success();
    let second = Command::cargo_bin("ism-probe").unwrap().assert().success();

    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}
