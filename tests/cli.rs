use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("passprobe"));
    cmd.env_remove("PASSPROBE_ITERATIONS")
        .env_remove("PASSPROBE_SALT_LEN")
        .env_remove("PASSPROBE_OUTPUT_BITS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn hash_defaults_to_sha256() {
    bin()
        .env("PASSPROBE_SECRET", "abc")
        .arg("hash")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ))
        .stdout(predicate::str::contains("salt:").not());
}

#[test]
fn digest_ignores_invalid_pbkdf2_settings() {
    bin()
        .env("PASSPROBE_SECRET", "abc")
        .env("PASSPROBE_ITERATIONS", "0")
        .arg("hash")
        .arg("-a")
        .arg("sha-256")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ));

    bin()
        .env("PASSPROBE_SECRET", "abc")
        .arg("hash")
        .arg("--output-bits")
        .arg("12")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ));
}

#[test]
fn pbkdf2_still_rejects_invalid_output_bits() {
    bin()
        .env("PASSPROBE_SECRET", "abc")
        .arg("hash")
        .arg("-a")
        .arg("pbkdf2")
        .arg("--output-bits")
        .arg("12")
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive multiple of 8"));
}

#[test]
fn hash_reads_piped_stdin() {
    bin()
        .env_remove("PASSPROBE_SECRET")
        .arg("hash")
        .arg("--algorithm")
        .arg("sha-512")
        .write_stdin("abc\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a",
        ));
}

#[test]
fn hash_pbkdf2_with_supplied_salt() {
    bin()
        .env("PASSPROBE_SECRET", "password")
        .arg("hash")
        .arg("-a")
        .arg("pbkdf2")
        .arg("--salt")
        .arg("00000000000000000000000000000000")
        .arg("--iterations")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1fefe125ab13dd2c06db86711ec448e9490e6c73024d7d8d659126c6f9fadd68",
        ))
        .stdout(predicate::str::contains(
            "salt: 00000000000000000000000000000000",
        ))
        .stdout(predicate::str::contains("iterations: 1"));
}

#[test]
fn hash_pbkdf2_generates_salt_that_verifies() {
    let output = bin()
        .env("PASSPROBE_SECRET", "pw")
        .arg("hash")
        .arg("-a")
        .arg("pbkdf2")
        .arg("--iterations")
        .arg("10")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let hex = json["hex"].as_str().unwrap();
    let salt = json["saltUsed"].as_str().unwrap();
    assert_eq!(salt.len(), 32);
    assert_eq!(json["iterations"], 10);

    bin()
        .env("PASSPROBE_SECRET", "pw")
        .arg("verify")
        .arg("--salt")
        .arg(salt)
        .arg("--expected")
        .arg(hex)
        .arg("--iterations")
        .arg("10")
        .assert()
        .success()
        .stdout(predicate::str::contains("match"));
}

#[test]
fn verify_wrong_password_fails() {
    bin()
        .env("PASSPROBE_SECRET", "wrong")
        .arg("verify")
        .arg("--salt")
        .arg("00000000000000000000000000000000")
        .arg("--expected")
        .arg("1fefe125ab13dd2c06db86711ec448e9490e6c73024d7d8d659126c6f9fadd68")
        .arg("--iterations")
        .arg("1")
        .assert()
        .failure()
        .stdout(predicate::str::contains("mismatch"));
}

#[test]
fn hash_rejects_zero_iterations() {
    bin()
        .env("PASSPROBE_SECRET", "pw")
        .arg("hash")
        .arg("-a")
        .arg("pbkdf2")
        .arg("--iterations")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("iterations must be >= 1"));
}

#[test]
fn hash_rejects_malformed_salt() {
    bin()
        .env("PASSPROBE_SECRET", "pw")
        .arg("hash")
        .arg("-a")
        .arg("pbkdf2")
        .arg("--salt")
        .arg("abc")
        .assert()
        .failure();
}

#[test]
fn iterations_from_env() {
    bin()
        .env("PASSPROBE_SECRET", "password")
        .env("PASSPROBE_ITERATIONS", "1")
        .arg("hash")
        .arg("-a")
        .arg("pbkdf2")
        .arg("--salt")
        .arg("00000000000000000000000000000000")
        .assert()
        .success()
        .stdout(predicate::str::contains("iterations: 1"));
}

#[test]
fn low_iterations_warn_without_leaking_secret() {
    bin()
        .env("PASSPROBE_SECRET", "hunter2")
        .arg("hash")
        .arg("-a")
        .arg("pbkdf2")
        .arg("--iterations")
        .arg("5")
        .assert()
        .success()
        .stderr(predicate::str::contains("below the recommended minimum"))
        .stderr(predicate::str::contains("hunter2").not());
}

#[test]
fn strength_reports_entropy_and_score() {
    bin()
        .env("PASSPROBE_SECRET", "Password123!")
        .arg("strength")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entropy: 79 bits"))
        .stdout(predicate::str::contains("Classes: 4/4"))
        .stdout(predicate::str::contains("Score: 4/5 Strong"));
}

#[test]
fn strength_json() {
    let output = bin()
        .env("PASSPROBE_SECRET", "abc")
        .arg("strength")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["entropy"], 14);
    assert_eq!(json["verdict"]["score"], 1);
    assert_eq!(json["verdict"]["label"], "Very Weak");
    assert_eq!(json["pool"]["lowercase"], true);
}

#[test]
fn salt_prints_hex_of_requested_length() {
    bin()
        .arg("salt")
        .arg("--length")
        .arg("8")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]{16}\n$").unwrap());
}

#[test]
fn salt_zero_length_fails() {
    bin().arg("salt").arg("--length").arg("0").assert().failure();
}

#[test]
fn missing_input_fails() {
    bin()
        .env_remove("PASSPROBE_SECRET")
        .arg("strength")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input provided"));
}
