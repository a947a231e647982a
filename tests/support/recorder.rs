//! Recording version control backend for library-level tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use ghsec::core::vcs::Vcs;
use ghsec::error::Result;

/// One backend call, with paths reduced to file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Clone(String),
    Committer(String),
    Refresh,
    Publish(Vec<String>, String),
    PublishRemoval(Vec<String>, String),
}

/// Backend that records every call and touches nothing but the clone dir.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl Recorder {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Calls that handed artifacts to version control.
    pub fn publishes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Publish(..) | Call::PublishRemoval(..)))
            .collect()
    }

    pub fn boxed(&self) -> Box<dyn Vcs> {
        Box::new(self.clone())
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect()
}

impl Vcs for Recorder {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        self.record(Call::Clone(url.to_string()));
        std::fs::create_dir_all(dest)?;
        Ok(())
    }

    fn configure_committer(&self, _repo: &Path, name: &str, _email: &str) -> Result<()> {
        self.record(Call::Committer(name.to_string()));
        Ok(())
    }

    fn refresh(&self, _repo: &Path) -> Result<()> {
        self.record(Call::Refresh);
        Ok(())
    }

    fn publish(&self, _repo: &Path, paths: &[PathBuf], branch: &str, _message: &str) -> Result<()> {
        self.record(Call::Publish(file_names(paths), branch.to_string()));
        Ok(())
    }

    fn publish_removal(
        &self,
        _repo: &Path,
        paths: &[PathBuf],
        branch: &str,
        _message: &str,
    ) -> Result<()> {
        self.record(Call::PublishRemoval(file_names(paths), branch.to_string()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recorder"
    }
}
