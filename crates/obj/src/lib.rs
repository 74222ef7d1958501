//! Readers for Wavefront OBJ meshes and their MTL material libraries.
//!
//! Both formats are read line by line and are forgiving: statements that are
//! unknown or malformed are skipped instead of failing the whole file. The
//! only errors reported are I/O errors from the underlying reader.

mod mtl;
mod obj;

pub use mtl::*;
pub use obj::*;

use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Returns the material library path that accompanies a mesh file.
///
/// This is the mesh path with its extension replaced by `mtl`.
pub fn material_path<P: AsRef<Path>>(obj_path: P) -> PathBuf {
    obj_path.as_ref().with_extension("mtl")
}

/// Calls `f` with the whitespace separated tokens of every statement.
///
/// Blank lines and `#` comments are skipped. Invalid UTF-8 is replaced rather
/// than treated as an error.
fn for_each_statement<R: BufRead, F: FnMut(&[&str])>(r: &mut R, mut f: F) -> std::io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if r.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        f(tokens.as_slice());
    }
}
