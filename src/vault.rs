use std::fs::File;
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;
use serde::de::DeserializeOwned;
use serde_json::Value;

/* The vault is a directory holding a config.json; every configured value
 * lives under its own top-level key in that file */

#[cfg_attr(test, automock)]
pub trait Vault {
    fn read_vault_values<T: DeserializeOwned + 'static>(&self, key: &str) -> Result<T, String>;
}

pub struct VaultImpl {
    pub path: PathBuf,
}

impl Vault for VaultImpl {
    fn read_vault_values<T: DeserializeOwned + 'static>(&self, key: &str) -> Result<T, String> {
        let path = self.path.join("config.json");
        let file = File::open(&path)
            .map_err(|error| format!("Could not open vault file {}: {}", path.display(), error))?;

        let config: Value = serde_json::from_reader(file)
            .map_err(|error| format!("Vault file is not valid JSON: {}", error))?;

        let section = config
            .get(key)
            .ok_or(format!("No '{}' section in the vault", key))?;

        return serde_json::from_value(section.clone())
            .map_err(|error| format!("Could not decode the '{}' section: {}", key, error));
    }
}

pub trait VaultReadable: DeserializeOwned + 'static {
    const KEY: &'static str;

    fn from_vault<V: Vault>(vault: &V) -> Result<Self, String> {
        return vault.read_vault_values(Self::KEY);
    }
}
