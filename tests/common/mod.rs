//! Sample archive fixtures shared by the integration tests

#![allow(dead_code)]

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

pub const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.\n";

/// Entry names of the sample tree, parents first
pub const SAMPLE_ENTRIES: [&str; 3] = ["sample/", "sample/text/", "sample/text/lorem.txt"];

/// Build an uncompressed tar of the sample tree with entries in the given order
pub fn sample_tar(order: &[&str]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());

    for name in order {
        let mut header = tar::Header::new_gnu();
        if name.ends_with('/') {
            header.set_entry_type(tar::EntryType::Directory);
            header.set_size(0);
            header.set_mode(0o755);
            header.set_cksum();
            builder.append_data(&mut header, name, io::empty()).unwrap();
        } else {
            header.set_size(LOREM.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, name, LOREM.as_bytes())
                .unwrap();
        }
    }

    builder.into_inner().unwrap()
}

pub fn write_tar(dir: &Path, order: &[&str]) -> PathBuf {
    let path = dir.join("sample.tar");
    fs::write(&path, sample_tar(order)).unwrap();
    path
}

pub fn write_tar_gz(dir: &Path) -> PathBuf {
    let path = dir.join("sample.tar.gz");
    let mut encoder =
        flate2::write::GzEncoder::new(File::create(&path).unwrap(), flate2::Compression::default());
    encoder.write_all(&sample_tar(&SAMPLE_ENTRIES)).unwrap();
    encoder.finish().unwrap();
    path
}

pub fn write_tar_bz2(dir: &Path) -> PathBuf {
    let path = dir.join("sample.tar.bz2");
    let mut encoder =
        bzip2::write::BzEncoder::new(File::create(&path).unwrap(), bzip2::Compression::default());
    encoder.write_all(&sample_tar(&SAMPLE_ENTRIES)).unwrap();
    encoder.finish().unwrap();
    path
}

pub fn write_tar_xz(dir: &Path) -> PathBuf {
    let path = dir.join("sample.tar.xz");
    let mut encoder = xz2::write::XzEncoder::new(File::create(&path).unwrap(), 6);
    encoder.write_all(&sample_tar(&SAMPLE_ENTRIES)).unwrap();
    encoder.finish().unwrap();
    path
}

pub fn write_zip(dir: &Path) -> PathBuf {
    let path = dir.join("sample.zip");
    let mut writer = zip::ZipWriter::new(File::create(&path).unwrap());
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    writer.add_directory("sample/", options.clone()).unwrap();
    writer.add_directory("sample/text/", options.clone()).unwrap();
    writer.start_file("sample/text/lorem.txt", options).unwrap();
    writer.write_all(LOREM.as_bytes()).unwrap();
    writer.finish().unwrap();
    path
}

/// Deterministic, poorly compressible bytes
pub fn noise(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x1234_5678;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

/// A tar holding one large `noise.bin` entry, so that any cut in its
/// compressed form lands inside the entry's content
pub fn noise_tar() -> Vec<u8> {
    let content = noise(256 * 1024);
    let mut builder = tar::Builder::new(Vec::new());
    let mut header = tar::Header::new_gnu();
    header.set_size(content.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder
        .append_data(&mut header, "noise.bin", content.as_slice())
        .unwrap();
    builder.into_inner().unwrap()
}

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

pub fn bzip2(data: &[u8]) -> Vec<u8> {
    // smallest block size, so the first blocks decode before the cut
    let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::fast());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

pub fn xz(data: &[u8]) -> Vec<u8> {
    let mut encoder = xz2::write::XzEncoder::new(Vec::new(), 6);
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}
