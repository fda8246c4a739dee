use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile;

type STDRESULT = Result<(), Box<dyn std::error::Error>>;

fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents).unwrap();
    path
}

#[test]
fn encode_known_vector() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = write_temp(&temp_dir, "in.txt", b"A");
    let out_path = temp_dir.path().join("out.fgk");

    Command::cargo_bin("fgkhuff")?
        .arg("encode")
        .arg("-i").arg(&in_path)
        .arg("-o").arg(&out_path)
        .assert()
        .success();

    let compressed = std::fs::read(out_path)?;
    assert_eq!(compressed, hex::decode("4108")?);
    Ok(())
}

#[test]
fn empty_file_round_trips() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = write_temp(&temp_dir, "in.txt", b"");
    let enc_path = temp_dir.path().join("out.fgk");
    let dec_path = temp_dir.path().join("out.txt");

    Command::cargo_bin("fgkhuff")?
        .arg("encode")
        .arg("-i").arg(&in_path)
        .arg("-o").arg(&enc_path)
        .assert()
        .success();
    assert_eq!(std::fs::read(&enc_path)?, hex::decode("08")?);

    Command::cargo_bin("fgkhuff")?
        .arg("decode")
        .arg("-i").arg(&enc_path)
        .arg("-o").arg(&dec_path)
        .assert()
        .success();
    assert_eq!(std::fs::read(dec_path)?, b"".to_vec());
    Ok(())
}

#[test]
fn round_trip_through_cli() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let original = b"the quick brown fox jumps over the lazy dog, again and again.".to_vec();
    let in_path = write_temp(&temp_dir, "in.txt", &original);
    let enc_path = temp_dir.path().join("out.fgk");
    let dec_path = temp_dir.path().join("roundtrip.txt");

    Command::cargo_bin("fgkhuff")?
        .arg("encode")
        .arg("-i").arg(&in_path)
        .arg("-o").arg(&enc_path)
        .assert()
        .success();

    Command::cargo_bin("fgkhuff")?
        .arg("decode")
        .arg("-i").arg(&enc_path)
        .arg("-o").arg(&dec_path)
        .assert()
        .success();

    assert_eq!(std::fs::read(dec_path)?, original);
    Ok(())
}

#[test]
fn missing_input_file_fails() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let missing = temp_dir.path().join("does_not_exist.txt");
    let out_path = temp_dir.path().join("out.fgk");

    Command::cargo_bin("fgkhuff")?
        .arg("encode")
        .arg("-i").arg(&missing)
        .arg("-o").arg(&out_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("os error"));
    Ok(())
}
