//! In-memory record store and the mutations that keep it consistent.
//!
//! Every successful mutation is flushed to the backing store before it
//! returns. Rejected mutations do no I/O and leave the vault untouched.

use crate::credentials::{self, Credential};
use crate::errors::{Result, VaultError};
use crate::storage::{Sites, Store};

pub struct Vault {
    sites: Sites,
    store: Box<dyn Store>,
}

impl Vault {
    /// Loads the vault from `store`.
    pub fn open(store: impl Store + 'static) -> Result<Self> {
        let sites = store.load()?;
        Ok(Self {
            sites,
            store: Box::new(store),
        })
    }

    pub fn lookup(&self, site: &str) -> Option<&[Credential]> {
        self.sites.get(site).map(Vec::as_slice)
    }

    /// Overwrites the credentials of `site` and persists.
    ///
    /// An empty list removes the site.
    pub fn replace(&mut self, site: &str, credentials: Vec<Credential>) -> Result<()> {
        if credentials.is_empty() {
            self.sites.remove(site);
        } else {
            self.sites.insert(site.to_string(), credentials);
        }
        self.store.save(&self.sites)
    }

    /// Drops `site` unconditionally and persists.
    pub fn delete(&mut self, site: &str) -> Result<()> {
        self.sites.remove(site);
        self.store.save(&self.sites)
    }

    pub fn add(&mut self, site: &str, username: &str, password: &str) -> Result<()> {
        let mut credentials = self.lookup(site).map(<[_]>::to_vec).unwrap_or_default();
        if credentials::find(username, &credentials).is_some() {
            return Err(VaultError::DuplicateEntry);
        }
        credentials.push(Credential::new(username, password));
        self.replace(site, credentials)
    }

    pub fn remove(&mut self, site: &str, username: &str) -> Result<()> {
        let mut credentials = self
            .lookup(site)
            .ok_or(VaultError::SiteNotFound)?
            .to_vec();
        let index = credentials::find(username, &credentials).ok_or(VaultError::UserNotFound)?;
        credentials.remove(index);
        self.replace(site, credentials)
    }

    /// Deletes a site holding at most one credential.
    pub fn remove_site(&mut self, site: &str) -> Result<()> {
        let credentials = self.lookup(site).ok_or(VaultError::SiteNotFound)?;
        if credentials.len() > 1 {
            return Err(VaultError::MultipleUsers);
        }
        self.delete(site)
    }

    /// Every `(site, credential)` pair, sites in ascending order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Credential)> {
        self.sites
            .iter()
            .flat_map(|(site, creds)| creds.iter().map(move |c| (site.as_str(), c)))
    }

    pub fn sites(&self) -> impl Iterator<Item = &str> {
        self.sites.keys().map(String::as_str)
    }

    /// Number of stored credentials across all sites.
    pub fn len(&self) -> usize {
        self.sites.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
