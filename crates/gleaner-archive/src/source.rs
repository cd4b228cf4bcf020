use std::fs::File;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::format::{self, ArchiveFormat, Decoder, TarCompress};

/// One entry yielded during a walk.
///
/// The reader streams the entry's bytes and is valid only for the duration
/// of the visit; entries are not retained across visits.
pub struct EntryRecord<'a> {
    pub path: PathBuf,
    pub is_dir: bool,
    pub reader: &'a mut dyn Read,
}

/// An opened, read-only view over one archive file.
///
/// Owned by a single walk invocation; dropping it releases the underlying
/// file handle.
pub enum ArchiveSource {
    Zip(ZipSource<File>),
    Tar(TarSource<Decoder<File>>),
}

impl std::fmt::Debug for ArchiveSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zip(_) => f.write_str("ArchiveSource::Zip"),
            Self::Tar(_) => f.write_str("ArchiveSource::Tar"),
        }
    }
}

impl ArchiveSource {
    /// Probe `path` and open the matching entry source.
    ///
    /// Fails with [`Error::UnsupportedFormat`] when the leading bytes match
    /// no supported container, or [`Error::Corrupted`] when the container
    /// metadata cannot be parsed.
    pub fn open(path: &Path) -> Result<Self> {
        let mut file = File::open(path)?;
        let format = format::detect_from_reader(&mut file)?.ok_or(Error::UnsupportedFormat)?;
        match format {
            ArchiveFormat::Zip => Ok(Self::Zip(ZipSource::new(file)?)),
            ArchiveFormat::Tar(codec) => Ok(Self::Tar(TarSource::new(file, codec))),
        }
    }

    pub fn format(&self) -> ArchiveFormat {
        match self {
            Self::Zip(_) => ArchiveFormat::Zip,
            Self::Tar(source) => ArchiveFormat::Tar(source.codec),
        }
    }

    /// Visit every entry in archive order.
    ///
    /// Per-entry failures (corrupt local entry, undecodable name) are handed
    /// to the visitor as `Err` and the walk continues. The returned error
    /// covers only container-level failures that end the walk early.
    pub fn for_each_entry(
        &mut self,
        visit: &mut dyn FnMut(Result<EntryRecord<'_>>),
    ) -> Result<()> {
        match self {
            Self::Zip(source) => source.for_each_entry(visit),
            Self::Tar(source) => source.for_each_entry(visit),
        }
    }
}

pub struct ZipSource<R: Read + Seek> {
    archive: zip::ZipArchive<R>,
}

impl<R: Read + Seek> ZipSource<R> {
    pub fn new(reader: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader).map_err(|_| Error::Corrupted)?;
        Ok(Self { archive })
    }

    pub fn for_each_entry(
        &mut self,
        visit: &mut dyn FnMut(Result<EntryRecord<'_>>),
    ) -> Result<()> {
        for index in 0..self.archive.len() {
            let mut file = match self.archive.by_index(index) {
                Ok(file) => file,
                Err(_) => {
                    visit(Err(Error::Corrupted));
                    continue;
                }
            };
            // `enclosed_name` rejects names that escape the archive root
            // as well as names that cannot be decoded.
            let path = match file.enclosed_name() {
                Some(path) => path,
                None => {
                    visit(Err(Error::InvalidEntryName));
                    continue;
                }
            };
            let is_dir = file.is_dir();
            visit(Ok(EntryRecord {
                path,
                is_dir,
                reader: &mut file,
            }));
        }
        Ok(())
    }
}

pub struct TarSource<R: Read> {
    archive: tar::Archive<R>,
    codec: TarCompress,
}

impl TarSource<Decoder<File>> {
    pub fn new(reader: File, codec: TarCompress) -> Self {
        Self {
            archive: tar::Archive::new(codec.decoder(reader)),
            codec,
        }
    }
}

impl<R: Read> TarSource<R> {
    pub fn for_each_entry(
        &mut self,
        visit: &mut dyn FnMut(Result<EntryRecord<'_>>),
    ) -> Result<()> {
        for entry in self.archive.entries()? {
            let mut entry = match entry {
                Ok(entry) => entry,
                Err(_) => {
                    visit(Err(Error::Corrupted));
                    continue;
                }
            };
            let path = match entry.path() {
                Ok(path) => path.into_owned(),
                Err(_) => {
                    visit(Err(Error::InvalidEntryName));
                    continue;
                }
            };
            let is_dir = entry.header().entry_type().is_dir();
            visit(Ok(EntryRecord {
                path,
                is_dir,
                reader: &mut entry,
            }));
        }
        Ok(())
    }
}
