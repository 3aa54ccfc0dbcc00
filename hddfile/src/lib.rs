//! Textual disk images for the emulator.
//!
//! A disk image is a flat sequence of 32-bit words stored as ASCII text:
//! each word is exactly eight lowercase hex digits followed by one space,
//! so the image addresses at [`WORD_FIELD_BYTES`](constant.WORD_FIELD_BYTES.html)
//! text bytes per word. The first four words are the header record, the
//! instruction records follow at word offset 4.
//!
//! The operations mirror what a disk controller would offer: zero-fill a
//! fresh image ([`format`](fn.format.html)), copy an already-encoded program
//! onto it at a word offset ([`flash`](fn.flash.html)), and scan it back
//! word by word ([`read_words`](fn.read_words.html)). There is no checksum,
//! and flashing past the formatted region is not checked.

use std::fs::{File, OpenOptions};
use std::io::prelude::*;
use std::io::{self, BufReader, BufWriter, SeekFrom};
use std::path::Path;

/// Text bytes occupied by one word: eight hex digits and a space.
pub const WORD_FIELD_BYTES: u32 = 9;

/// Encodes words into the on-disk text form.
pub fn write_words<W: Write>(writer: &mut W, words: &[u32]) -> io::Result<()> {
    for word in words {
        write!(writer, "{:08x} ", word)?;
    }
    Ok(())
}

/// Zero-fills a fresh image of `capacity` words.
pub fn format<W: Write>(writer: &mut W, capacity: u32) -> io::Result<()> {
    for _ in 0..capacity {
        writer.write_all(b"00000000 ")?;
    }
    Ok(())
}

/// Copies an encoded image onto the disk at the given word offset.
pub fn flash<S: Write + Seek>(stream: &mut S, word_offset: u32, words: &[u32]) -> io::Result<()> {
    stream.seek(SeekFrom::Start(
        u64::from(word_offset) * u64::from(WORD_FIELD_BYTES),
    ))?;
    write_words(stream, words)
}

/// Scans every word of an image.
///
/// # Errors
/// Returns `InvalidData` when a field is not valid hexadecimal.
pub fn read_words<R: Read>(reader: &mut R) -> io::Result<Vec<u32>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    text.split_whitespace()
        .map(|token| {
            u32::from_str_radix(token, 16)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
        })
        .collect()
}

pub trait ReadHddExt: Read + Sized {
    fn read_hdd(&mut self) -> io::Result<Vec<u32>> {
        read_words(self)
    }
}

impl<R: Read + Sized> ReadHddExt for R {}

pub trait WriteHddExt: Write + Sized {
    fn write_hdd(&mut self, words: &[u32]) -> io::Result<()> {
        write_words(self, words)
    }
}

impl<W: Write + Sized> WriteHddExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<u32>> {
    BufReader::new(File::open(path)?).read_hdd()
}

pub fn format_file<P: AsRef<Path>>(path: P, capacity: u32) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    format(&mut writer, capacity)
}

/// Flashes into an existing image without truncating the formatted region.
pub fn flash_file<P: AsRef<Path>>(path: P, word_offset: u32, words: &[u32]) -> io::Result<()> {
    let file = OpenOptions::new().write(true).open(path)?;
    let mut writer = BufWriter::new(file);
    flash(&mut writer, word_offset, words)
}
