//! Flat-file persistence for the vault.
//!
//! The backing file holds one credential per line as three
//! whitespace-separated fields: `site username password`. Fields are not
//! escaped, so a value containing whitespace will not survive a reload.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::credentials::Credential;
use crate::errors::{Result, VaultError};

/// Site name to its credentials, in insertion order.
pub type Sites = BTreeMap<String, Vec<Credential>>;

/// Something the vault can be loaded from and flushed to.
pub trait Store {
    fn load(&self) -> Result<Sites>;
    fn save(&self, sites: &Sites) -> Result<()>;
}

/// The on-disk backing file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Store for FileStore {
    fn load(&self) -> Result<Sites> {
        load_sites(&self.path)
    }

    fn save(&self, sites: &Sites) -> Result<()> {
        save_sites(&self.path, sites)
    }
}

/// Splits a line into `(site, username, password)`.
///
/// Returns `None` unless the line has exactly three tokens.
pub fn parse_line(line: &str) -> Option<(&str, &str, &str)> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(site), Some(user), Some(password), None) => Some((site, user, password)),
        _ => None,
    }
}

pub fn format_line(site: &str, credential: &Credential) -> String {
    format!("{} {} {}", site, credential.username, credential.password)
}

/// Lines of `reader`, split on `\n` with any trailing `\r` dropped.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the
/// read, so only real I/O errors come back as `Err`.
pub fn lossy_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|line| {
        line.map(|mut bytes| {
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            String::from_utf8_lossy(&bytes).into_owned()
        })
    })
}

/// Reads the backing file. A missing file is an empty vault.
pub fn load_sites(path: &Path) -> Result<Sites> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No vault at {}, starting empty", path.display());
            return Ok(Sites::new());
        }
        Err(e) => return Err(VaultError::io("opening file", path, e)),
    };

    let mut sites = Sites::new();
    let mut count = 0;
    for (number, line) in lossy_lines(BufReader::new(file)).enumerate() {
        let line = line.map_err(|e| VaultError::io("reading file", path, e))?;
        match parse_line(&line) {
            Some((site, user, password)) => {
                sites
                    .entry(site.to_string())
                    .or_default()
                    .push(Credential::new(user, password));
                count += 1;
            }
            None => {
                if !line.trim().is_empty() {
                    log::warn!("Skipping malformed line {} in {}", number + 1, path.display());
                }
            }
        }
    }

    log::debug!("Loaded {} credentials from {}", count, path.display());
    Ok(sites)
}

/// Truncates the backing file and writes every credential.
pub fn save_sites(path: &Path, sites: &Sites) -> Result<()> {
    let file = File::create(path).map_err(|e| VaultError::io("opening file for writing", path, e))?;
    let mut writer = BufWriter::new(file);

    for (site, credentials) in sites {
        for credential in credentials {
            writeln!(writer, "{}", format_line(site, credential))
                .map_err(|e| VaultError::io("writing to file", path, e))?;
        }
    }
    writer
        .flush()
        .map_err(|e| VaultError::io("writing to file", path, e))?;

    log::debug!("Saved vault to {}", path.display());
    Ok(())
}
