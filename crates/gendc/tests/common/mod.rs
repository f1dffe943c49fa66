use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestProject {
    pub root: TempDir,
    pub home: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        Self { root, home }
    }

    pub fn write_spec(&self, content: &str) {
        let path = self.root.path().join("gendc.kdl");
        fs::write(path, content).unwrap();
    }

    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root.path().join(relative)).unwrap()
    }

    #[allow(dead_code)]
    pub fn exists(&self, relative: &str) -> bool {
        self.root.path().join(relative).exists()
    }

    /// ホームと設定ディレクトリを一時ディレクトリに隔離したコマンド
    pub fn command(&self) -> assert_cmd::Command {
        #[allow(deprecated)]
        let mut cmd = assert_cmd::Command::cargo_bin("gendc").unwrap();
        cmd.current_dir(self.root.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("CI", "1")
            .env("SSH_AUTH_SOCK", "/tmp/ssh-agent.sock")
            .env_remove("GENDC_CONFIG_PATH")
            .env_remove("RUST_LOG");
        cmd
    }
}
