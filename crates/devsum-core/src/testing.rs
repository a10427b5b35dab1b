//! Recording fakes for the execution collaborators.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::checksum::ChecksumError;
use crate::exec::{LocalExecutor, RemoteTarget};

pub(crate) fn remote_failure(exit_code: i32) -> ChecksumError {
    ChecksumError::RemoteCommandFailed {
        command: "md5sum_bin".to_string(),
        exit_code,
        output: Vec::new(),
    }
}

/// Exit status the shell reports when `md5sum_bin` is not installed.
pub(crate) fn missing_binary() -> ChecksumError {
    remote_failure(2)
}

/// Remote target replaying scripted shell results and recording every call.
pub(crate) struct FakeTarget {
    responses: RefCell<VecDeque<Result<Vec<String>, ChecksumError>>>,
    commands: RefCell<Vec<String>>,
    pushes: RefCell<Vec<(PathBuf, String)>>,
    events: RefCell<Vec<&'static str>>,
    fail_push: bool,
}

impl FakeTarget {
    pub(crate) fn new(responses: Vec<Result<Vec<String>, ChecksumError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            commands: RefCell::new(Vec::new()),
            pushes: RefCell::new(Vec::new()),
            events: RefCell::new(Vec::new()),
            fail_push: false,
        }
    }

    pub(crate) fn failing_push(mut self) -> Self {
        self.fail_push = true;
        self
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    pub(crate) fn command_count(&self) -> usize {
        self.commands.borrow().len()
    }

    pub(crate) fn pushes(&self) -> Vec<(PathBuf, String)> {
        self.pushes.borrow().clone()
    }

    pub(crate) fn push_count(&self) -> usize {
        self.pushes.borrow().len()
    }

    pub(crate) fn events(&self) -> Vec<&'static str> {
        self.events.borrow().clone()
    }
}

impl RemoteTarget for FakeTarget {
    fn run_shell_command(&self, command: &str) -> Result<Vec<String>, ChecksumError> {
        self.commands.borrow_mut().push(command.to_string());
        self.events.borrow_mut().push("shell");
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected shell command: {command}"))
    }

    fn push(&self, local_dir: &Path, remote_dir: &str) -> Result<(), ChecksumError> {
        self.pushes
            .borrow_mut()
            .push((local_dir.to_path_buf(), remote_dir.to_string()));
        self.events.borrow_mut().push("push");
        if self.fail_push {
            return Err(ChecksumError::Deployment {
                local: local_dir.to_path_buf(),
                remote: remote_dir.to_string(),
                reason: "device offline".to_string(),
            });
        }
        Ok(())
    }
}

/// Local executor returning a fixed result and recording argv.
pub(crate) struct FakeExecutor {
    result: RefCell<Option<Result<String, ChecksumError>>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl FakeExecutor {
    pub(crate) fn returning(output: impl Into<String>) -> Self {
        Self {
            result: RefCell::new(Some(Ok(output.into()))),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn failing(err: ChecksumError) -> Self {
        Self {
            result: RefCell::new(Some(Err(err))),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl LocalExecutor for FakeExecutor {
    fn run(&self, argv: &[String]) -> Result<String, ChecksumError> {
        self.calls.borrow_mut().push(argv.to_vec());
        self.result
            .borrow_mut()
            .take()
            .unwrap_or_else(|| panic!("unexpected local invocation: {argv:?}"))
    }
}
