//! Takeout archive access.
//!
//! The pipeline only needs two things from an archive: the list of member
//! paths and the bytes of one member. [`MemberSource`] captures that, so
//! tests and library users can feed in-memory archives.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use log::debug;
use zip::ZipArchive;

use crate::error::Result;

/// A container of named members.
pub trait MemberSource {
    /// Member paths in a stable order.
    fn member_names(&self) -> Vec<String>;

    /// Reads the full content of one member.
    fn read_member(&mut self, name: &str) -> Result<Vec<u8>>;
}

/// A Google Takeout ZIP archive.
///
/// # Example
///
/// ```rust,no_run
/// use google_voice_history::archive::{MemberSource, TakeoutArchive};
///
/// let takeout = TakeoutArchive::open("takeout.zip")?;
/// for name in takeout.member_names() {
///     println!("{name}");
/// }
/// # Ok::<(), google_voice_history::HistoryError>(())
/// ```
pub struct TakeoutArchive<R> {
    zip: ZipArchive<R>,
}

impl TakeoutArchive<BufReader<File>> {
    /// Opens a Takeout file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("opening {}", path.display());
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> TakeoutArchive<R> {
    /// Reads the central directory of an archive.
    pub fn new(reader: R) -> Result<Self> {
        let zip = ZipArchive::new(reader)?;
        debug!("archive has {} members", zip.len());
        Ok(Self { zip })
    }

    pub fn len(&self) -> usize {
        self.zip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zip.len() == 0
    }
}

impl<R: Read + Seek> MemberSource for TakeoutArchive<R> {
    /// Member paths in central directory order.
    fn member_names(&self) -> Vec<String> {
        (0..self.zip.len())
            .filter_map(|i| self.zip.name_for_index(i))
            .map(str::to_string)
            .collect()
    }

    fn read_member(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut member = self.zip.by_name(name)?;
        let mut bytes = Vec::with_capacity(usize::try_from(member.size()).unwrap_or(0));
        member.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}
