// Site configuration loaded from TOML.
//
// Every field has a default matching the live page, so an empty file (or
// no file at all) yields the stock Snacknest setup.
//
// ```toml
// restaurant = "Snacknest Kitchen"
// whatsapp_number = "+92 316 2341381"
// contact_address = "snacknestkitchen@gmail.com"
// toast_duration_ms = 3000
//
// [email]
// service_id = "YOUR_SERVICE_ID"
// template_id = "YOUR_TEMPLATE_ID"
//
// [[menu]]
// category = "Drinks"
// items = [{ name = "Coke", price = 100 }]
// ```

use std::{collections::HashSet, fs, path::Path, time::Duration};

use serde::Deserialize;
use tracing::warn;

use crate::{catalog::Catalog, error::ConfigError, model::Category, utils::digits_only};


#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct ConfigFile {
    restaurant: String,
    whatsapp_number: String,
    contact_address: String,
    toast_duration_ms: u64,
    email: EmailConfig,
    menu: Option<Vec<Category>>,
}

// Validated configuration for the whole page.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub restaurant: String,
    pub whatsapp_number: String,
    pub contact_address: String,
    pub toast_duration: Duration,
    pub email: EmailConfig,
    pub catalog: Catalog,
}


impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service_id: "YOUR_SERVICE_ID".to_string(),
            template_id: "YOUR_TEMPLATE_ID".to_string(),
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            restaurant: "Snacknest Kitchen".to_string(),
            whatsapp_number: "+92 316 2341381".to_string(),
            contact_address: "snacknestkitchen@gmail.com".to_string(),
            toast_duration_ms: 3000,
            email: EmailConfig::default(),
            menu: None,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let file = ConfigFile::default();
        Self {
            restaurant: file.restaurant,
            whatsapp_number: file.whatsapp_number,
            contact_address: file.contact_address,
            toast_duration: Duration::from_millis(file.toast_duration_ms),
            email: file.email,
            catalog: Catalog::default(),
        }
    }
}


impl SiteConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        Self::from_file(file)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        if digits_only(&file.whatsapp_number).is_empty() {
            return Err(ConfigError::Invalid(format!(
                "whatsapp_number {:?} has no digits",
                file.whatsapp_number
            )));
        }

        if file.toast_duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "toast_duration_ms must be positive".to_string(),
            ));
        }

        let catalog = match file.menu {
            Some(categories) => {
                let mut seen = HashSet::new();
                for c in &categories {
                    if !seen.insert(c.category.as_str()) {
                        return Err(ConfigError::Invalid(format!(
                            "duplicate menu category {:?}",
                            c.category
                        )));
                    }
                    if c.items.is_empty() {
                        warn!(category = %c.category, "menu category has no items");
                    }
                }
                Catalog::new(categories)
            }
            None => Catalog::default(),
        };

        Ok(Self {
            restaurant: file.restaurant,
            whatsapp_number: file.whatsapp_number,
            contact_address: file.contact_address,
            toast_duration: Duration::from_millis(file.toast_duration_ms),
            email: file.email,
            catalog,
        })
    }
}
