#![allow(dead_code)]
use std::fs;
use std::path::PathBuf;

/// A scratch directory for one test, removed when dropped.
pub struct Scratch {
    pub dir: PathBuf,
}

impl Scratch {
    pub fn new(name: &str) -> Scratch {
        let dir = std::env::temp_dir().join(format!("boggle-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        Scratch { dir }
    }

    /// Write `contents` to file `name` and return its path.
    pub fn file(&self, name: &str, contents: &str) -> String {
        let path = self.dir.join(name);
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    /// Path of a file that does not exist yet.
    pub fn path(&self, name: &str) -> String {
        self.dir.join(name).to_string_lossy().into_owned()
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

pub const BOARD: &str = "P W Y R\nE N T H\nG S I Q\nO L S A\n";

pub const WORDS: &str = "\
as
gel
hit
its
nest
pen
peg
pest
quit
sent
sit
slit
slits
ten
";
