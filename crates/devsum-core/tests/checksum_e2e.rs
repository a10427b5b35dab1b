//! End-to-end: real processes standing in for the checksum binaries and adb.
//!
//! The host binary and the device binary are small shell scripts that print a
//! fixed digest for files that exist and a "Could not open" diagnostic for
//! files that don't. The fake `adb` evaluates shell commands locally and
//! implements `push` with `cp`, so the device install directory is just a
//! temp dir on the host.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use devsum_core::checksum::{
    ChecksumError, ChecksumLayout, DeviceChecksumCalculator, HostChecksumCalculator,
};
use devsum_core::compare::{changed_files, FilePair};
use devsum_core::exec::{AdbTarget, ProcessExecutor};
use tempfile::tempdir;

const DIGEST: &str = "d41d8cd98f00b204e9800998ecf8427e";

const FAKE_MD5SUM: &str = r#"#!/bin/sh
echo "WARNING: linker: md5sum_bin: unused DT entry: type 0x1d arg 0x15db"
for f in "$@"; do
  if [ -f "$f" ]; then
    echo "d41d8cd98f00b204e9800998ecf8427e  $f"
  else
    echo "[0819/203513:ERROR:md5sum.cc(25)] Could not open file $f"
  fi
done
exit 0
"#;

const FAKE_ADB: &str = r#"#!/bin/sh
if [ "$1" = shell ]; then shift; exec sh -c "$1"; fi
if [ "$1" = push ]; then mkdir -p "$3" && cp -R "$2"/. "$3"; exit $?; fi
exit 1
"#;

fn write_executable(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

// Scripts are written then executed; serializing avoids ETXTBSY when another
// test thread forks while a script is still open for writing.
static SERIAL: Mutex<()> = Mutex::new(());

struct Fixture {
    _guard: MutexGuard<'static, ()>,
    _root: tempfile::TempDir,
    layout: ChecksumLayout,
    adb: AdbTarget,
    files: PathBuf,
    install_dir: PathBuf,
}

fn fixture() -> Fixture {
    let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let root = tempdir().unwrap();
    let out_dir = root.path().join("out");
    let bundle = out_dir.join("md5sum_dist");
    let install_dir = root.path().join("device").join("md5sum");
    let files = root.path().join("files");
    fs::create_dir_all(&bundle).unwrap();
    fs::create_dir_all(&files).unwrap();

    write_executable(&out_dir.join("md5sum_bin_host"), FAKE_MD5SUM);
    write_executable(&bundle.join("md5sum_bin"), FAKE_MD5SUM);
    let adb = root.path().join("adb");
    write_executable(&adb, FAKE_ADB);

    fs::write(files.join("a.txt"), b"").unwrap();
    fs::write(files.join("b c.txt"), b"").unwrap();

    let mut layout = ChecksumLayout::default().with_out_dir(&out_dir);
    layout.device_install_dir = format!("{}/", install_dir.display());

    Fixture {
        _guard: guard,
        adb: AdbTarget::new(adb.to_string_lossy(), None),
        _root: root,
        layout,
        files,
        install_dir,
    }
}

fn path_str(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

#[test]
fn host_checksums_skip_unreadable_files() {
    let fx = fixture();
    let a = path_str(&fx.files.join("a.txt"));
    let spaced = path_str(&fx.files.join("b c.txt"));
    let missing = path_str(&fx.files.join("missing.txt"));

    let calc = HostChecksumCalculator::new(ProcessExecutor, fx.layout.clone());
    let out = calc.compute(vec![a.clone(), spaced.clone(), missing.clone()]).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[&a], DIGEST);
    assert_eq!(out[&spaced], DIGEST);
    assert!(!out.contains_key(&missing));
}

#[test]
fn device_checksums_deploy_binary_on_first_use() {
    let fx = fixture();
    let a = path_str(&fx.files.join("a.txt"));
    let spaced = path_str(&fx.files.join("b c.txt"));
    assert!(!fx.install_dir.join("md5sum_bin").exists());

    let calc = DeviceChecksumCalculator::new(fx.layout.clone());
    let out = calc.compute([a.as_str(), spaced.as_str()], &fx.adb).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[&a], DIGEST);
    assert_eq!(out[&spaced], DIGEST);
    assert!(fx.install_dir.join("md5sum_bin").exists(), "bundle should be pushed");

    // Already deployed: plain single invocation.
    let again = calc.compute(a.as_str(), &fx.adb).unwrap();
    assert_eq!(again[&a], DIGEST);
}

#[test]
fn device_failure_other_than_missing_binary_is_not_retried() {
    let fx = fixture();
    let mut layout = fx.layout.clone();
    // 127 from the missing binary no longer counts as recoverable.
    layout.missing_binary_exit_codes = vec![2];

    let calc = DeviceChecksumCalculator::new(layout);
    let err = calc.compute("/x", &fx.adb).unwrap_err();
    match err {
        ChecksumError::RemoteCommandFailed { exit_code, .. } => assert_eq!(exit_code, 127),
        other => panic!("expected RemoteCommandFailed, got {other:?}"),
    }
    assert!(!fx.install_dir.exists(), "nothing should be pushed");
}

#[test]
fn changed_files_end_to_end() {
    let fx = fixture();
    let host_a = path_str(&fx.files.join("a.txt"));
    let pairs = vec![
        FilePair::new(host_a.clone(), host_a.clone()),
        FilePair::new(host_a.clone(), path_str(&fx.files.join("not-on-device.txt"))),
    ];

    let host = HostChecksumCalculator::new(ProcessExecutor, fx.layout.clone());
    let device = DeviceChecksumCalculator::new(fx.layout.clone());
    let changed = changed_files(&host, &device, &fx.adb, &pairs).unwrap();

    assert_eq!(changed, vec![pairs[1].clone()]);
}
