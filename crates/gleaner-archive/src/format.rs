use std::io::{self, Read, Seek};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar(TarCompress),
}

/// Compression codec for tar archives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TarCompress {
    None,
    Gzip,
}

impl TarCompress {
    /// Wrap `reader` in a decoder for this codec.
    pub fn decoder<R: Read>(self, reader: R) -> Decoder<R> {
        match self {
            Self::None => Decoder::Passthrough(reader),
            Self::Gzip => Decoder::Gzip(Box::new(flate2::read::GzDecoder::new(reader))),
        }
    }
}

/// Decoder wrapper for tar decompression.
#[derive(Debug)]
pub enum Decoder<R> {
    Passthrough(R),
    Gzip(Box<flate2::read::GzDecoder<R>>),
}

impl<R: Read> Read for Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Passthrough(r) => r.read(buf),
            Self::Gzip(d) => d.read(buf),
        }
    }
}

pub fn detect_format(data: &[u8]) -> Option<ArchiveFormat> {
    match data {
        // Local-header and empty-archive signatures.
        [0x50, 0x4B, 0x03, 0x04, ..] | [0x50, 0x4B, 0x05, 0x06, ..] => Some(ArchiveFormat::Zip),
        [0x1F, 0x8B, ..] => Some(ArchiveFormat::Tar(TarCompress::Gzip)),
        _ => {
            if is_tar_header(data) {
                Some(ArchiveFormat::Tar(TarCompress::None))
            } else {
                None
            }
        }
    }
}

fn is_tar_header(data: &[u8]) -> bool {
    data.len() >= 512 && data[257..263] == *b"ustar\0"
}

/// Probe the leading bytes of `reader`, leaving it rewound to the start.
pub fn detect_from_reader<R: Read + Seek>(reader: &mut R) -> io::Result<Option<ArchiveFormat>> {
    // A full tar header block; shorter files fill as much as they can.
    let mut header = [0u8; 512];
    let mut filled = 0;
    loop {
        let n = reader.read(&mut header[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    reader.rewind()?;
    Ok(detect_format(&header[..filled]))
}
