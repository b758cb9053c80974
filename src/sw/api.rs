//! # API Layer
//!
//! [`SwApi`] is the facade the CLI talks to. Every method follows the same
//! shape: load the keyring from the store, run the command against it, and
//! save the result back only when the command reports a modification. Soft
//! failures therefore never touch the file.
//!
//! Methods return [`CmdResult`]; printing is left to the caller. Commands that
//! have something to say *before* they finish (`connect`, `run`, `import`) take
//! a `notify` callback that is invoked immediately.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Keyring;
use crate::runner::ProcessRunner;
use crate::store::KeyringStore;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct SwApi<S: KeyringStore, R: ProcessRunner> {
    store: S,
    runner: R,
    ssh_program: String,
}

impl<S: KeyringStore, R: ProcessRunner> SwApi<S, R> {
    pub fn new(store: S, runner: R, ssh_program: impl Into<String>) -> Self {
        Self {
            store,
            runner,
            ssh_program: ssh_program.into(),
        }
    }

    pub fn version(&self) -> &'static str {
        VERSION
    }

    pub fn list(&self) -> Result<CmdResult> {
        let keyring = self.store.load()?;
        Ok(commands::list::run(keyring))
    }

    pub fn add(&mut self, args: &[String]) -> Result<CmdResult> {
        let keyring = self.store.load()?;
        self.persist(commands::add::run(keyring, args))
    }

    pub fn rename(&mut self, args: &[String]) -> Result<CmdResult> {
        let keyring = self.store.load()?;
        self.persist(commands::rename::run(keyring, args))
    }

    pub fn remove(&mut self, args: &[String]) -> Result<CmdResult> {
        let keyring = self.store.load()?;
        self.persist(commands::remove::run(keyring, args))
    }

    pub fn connect(
        &mut self,
        args: &[String],
        notify: &mut dyn FnMut(CmdMessage),
    ) -> Result<CmdResult> {
        let keyring = self.store.load()?;
        commands::ssh::connect(keyring, args, &self.ssh_program, &mut self.runner, notify)
    }

    pub fn run(
        &mut self,
        args: &[String],
        notify: &mut dyn FnMut(CmdMessage),
    ) -> Result<CmdResult> {
        let keyring = self.store.load()?;
        commands::ssh::run(keyring, args, &self.ssh_program, &mut self.runner, notify)
    }

    pub fn export(&self) -> Result<CmdResult> {
        let keyring = self.store.load()?;
        commands::export::run(keyring)
    }

    pub fn import(
        &mut self,
        args: &[String],
        notify: &mut dyn FnMut(CmdMessage),
    ) -> Result<CmdResult> {
        let keyring = self.store.load()?;
        let result = commands::import::run(keyring, args, notify)?;
        self.persist(result)
    }

    /// The current keyring, as stored.
    pub fn keyring(&self) -> Result<Keyring> {
        self.store.load()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn persist(&mut self, mut result: CmdResult) -> Result<CmdResult> {
        if result.modified {
            let keyring = std::mem::take(&mut result.keyring);
            result.keyring = self.store.save(keyring)?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::RecordingRunner;
    use crate::store::memory::InMemoryStore;
    use crate::store::memory::fixtures::StoreFixture;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn api(store: InMemoryStore) -> SwApi<InMemoryStore, RecordingRunner> {
        SwApi::new(store, RecordingRunner::new(), "ssh")
    }

    #[test]
    fn test_add_then_list() {
        let mut api = api(InMemoryStore::new());
        api.add(&args(&["db", "10.0.0.1"])).unwrap();

        let listed = api.list().unwrap().listed_entries;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].label, "db");
        assert_eq!(listed[0].address, "10.0.0.1");
        assert_eq!(api.store().saves(), 1);
    }

    #[test]
    fn test_soft_failure_does_not_save() {
        let mut api = api(StoreFixture::new().with_entry("db", "x").store);

        let result = api.add(&args(&["db", "x"])).unwrap();

        assert!(!result.modified);
        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn test_rename_persists() {
        let mut api = api(StoreFixture::new().with_entry("a", "me@a").store);

        api.rename(&args(&["a", "b"])).unwrap();

        let keyring = api.keyring().unwrap();
        assert_eq!(keyring.get("b"), Some("me@a"));
        assert!(!keyring.contains("a"));
    }

    #[test]
    fn test_remove_unknown_leaves_store_alone() {
        let mut api = api(StoreFixture::new().with_entries(2).store);

        let result = api.remove(&args(&["ghost"])).unwrap();

        assert_eq!(result.messages[0].content, "ghost is not a valid label!");
        assert_eq!(api.keyring().unwrap().len(), 2);
        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn test_connect_does_not_save() {
        let mut api = api(StoreFixture::new().with_entry("db", "me@db").store);

        api.connect(&args(&["db"]), &mut |_| {}).unwrap();

        assert_eq!(api.runner().invocations.len(), 1);
        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn test_run_dispatches_to_runner() {
        let mut api = api(StoreFixture::new().with_entry("db", "me@db").store);

        api.run(&args(&["db", "uptime"]), &mut |_| {}).unwrap();

        assert_eq!(api.runner().invocations[0].args, vec!["-t", "me@db", "uptime"]);
    }

    #[test]
    fn test_export_reflects_store() {
        let api = api(StoreFixture::new().with_entry("db", "me@db").store);
        let exported = api.export().unwrap().exported.unwrap();
        assert_eq!(exported, r#"{"db":"me@db"}"#);
    }

    #[test]
    fn test_import_error_does_not_save() {
        let mut api = api(StoreFixture::new().with_entry("db", "me@db").store);

        let result = api.import(&args(&["/definitely/not/here.json"]), &mut |_| {});

        assert!(result.is_err());
        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn test_version() {
        let api = api(InMemoryStore::new());
        assert_eq!(api.version(), "0.2.0");
    }
}
