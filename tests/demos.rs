use std::fs;
use std::io::Write;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, Stdio};

//-------------------------------------------------------------------
// Test: test_write_file_demo_round_trip
//
// Description:
//  Test that the write_file demo, given a destination path and one
//  line of standard input, exits 0 and leaves exactly the payload on
//  disk.
//
#[test]
fn test_write_file_demo_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut child = Command::new(env!("CARGO_BIN_EXE_write_file"))
        .arg(&path)
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The one-line signal to proceed to cleanup.
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(fs::read(&path).unwrap(), b"Hello, from Rust.".to_vec());
}

//-------------------------------------------------------------------
// Test: test_lock_mutex_demo_exits_cleanly
//
// Description:
//  Test that the lock/unlock/destroy cycle demo exits 0.
//
#[test]
fn test_lock_mutex_demo_exits_cleanly() {
    let output = Command::new(env!("CARGO_BIN_EXE_lock_mutex"))
        .output()
        .unwrap();
    assert!(output.status.success());
}

//-------------------------------------------------------------------
// Test: test_cascade_demo_aborts_without_reaching_a_handler
//
// Description:
//  Test that a second teardown failure raised while the first is
//  still unwinding terminates the process abnormally, with the stage
//  markers in nested order and the catch handler never reached.
//
#[test]
fn test_cascade_demo_aborts_without_reaching_a_handler() {
    let output = Command::new(env!("CARGO_BIN_EXE_cascade"))
        .stderr(Stdio::piped())
        .output()
        .unwrap();

    // Killed by the runtime's abort, not a normal (even panicking) exit.
    assert!(!output.status.success());
    assert!(output.status.signal().is_some());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let begin_outer = stderr.find("begin CascadeStage::drop").unwrap();
    let outer_failure = stderr.find("failing from CascadeStage::drop").unwrap();
    let begin_middle = stderr.find("begin FaultyStage::drop").unwrap();
    let end_inner = stderr.find("end QuietStage::drop").unwrap();
    let middle_failure = stderr.find("failing from FaultyStage::drop").unwrap();

    // Construction outer-to-inner, teardown in strict reverse; the
    // nested teardown fails while the outer failure is in flight.
    assert!(begin_outer < outer_failure);
    assert!(outer_failure < begin_middle);
    assert!(begin_middle < end_inner);
    assert!(end_inner < middle_failure);

    // Neither failure was delivered anywhere.
    assert!(!stderr.contains("caught teardown failure"));
    assert!(!stderr.contains("end main"));
    assert!(!stderr.contains("end CascadeStage::drop"));
}
