//! Host context accessors.
//!
//! The panel reads the current item and configuration through these two
//! traits on every render. [`StaticHost`] is the implementation the binary
//! uses: a fixed list of items with a cursor, plus a replaceable config.

use crate::config::Config;
use crate::models::ItemInfo;

/// Supplies the identity of the item currently on display.
pub trait ItemInfoProvider {
    fn item_info(&self) -> ItemInfo;
}

/// Supplies the validated configuration.
pub trait ConfigProvider {
    fn config(&self) -> Config;
}

/// Host backed by values given at startup.
#[derive(Debug, Clone)]
pub struct StaticHost {
    items: Vec<ItemInfo>,
    selected: usize,
    config: Config,
}

impl StaticHost {
    /// Create a host over `items` (first one selected).
    ///
    /// Returns `None` when `items` is empty; the host must always have an
    /// item to show.
    pub fn new(items: Vec<ItemInfo>, config: Config) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            items,
            selected: 0,
            config,
        })
    }

    pub fn items(&self) -> &[ItemInfo] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Move to the next item, wrapping around.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// Move to the previous item, wrapping around.
    pub fn select_previous(&mut self) {
        self.selected = (self.selected + self.items.len() - 1) % self.items.len();
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }
}

impl ItemInfoProvider for StaticHost {
    fn item_info(&self) -> ItemInfo {
        self.items[self.selected].clone()
    }
}

impl ConfigProvider for StaticHost {
    fn config(&self) -> Config {
        self.config.clone()
    }
}
