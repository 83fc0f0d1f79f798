//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an envseed command running in the test directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("envseed").expect("failed to find envseed binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("ENVSEED_LOG");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Run `envseed` feeding `stdin` to the confirmation prompt.
    pub fn run_with_input(&self, stdin: &str) -> Output {
        self.cmd()
            .write_stdin(stdin)
            .output()
            .expect("failed to run envseed")
    }

    /// Run `envseed` with no input.
    pub fn run(&self) -> Output {
        self.run_with_input("")
    }

    /// Run `envseed --force`.
    pub fn run_force(&self) -> Output {
        self.cmd()
            .arg("--force")
            .write_stdin("")
            .output()
            .expect("failed to run envseed --force")
    }
}
