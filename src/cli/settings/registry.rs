//! Registry of setting handlers.

use std::collections::HashMap;

use super::handlers::{
    base_url_handler, data_dir_handler, image_model_handler, key_dir_handler,
    save_history_handler, text_model_handler, LanguageHandler, ThemeHandler,
};
use super::SettingHandler;

/// Registry of all available setting handlers.
pub struct SettingRegistry {
    handlers: HashMap<&'static str, Box<dyn SettingHandler>>,
    /// Keys in display order for `nixchat settings` output.
    display_order: Vec<&'static str>,
}

impl SettingRegistry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut registry = Self {
            handlers: HashMap::new(),
            display_order: Vec::new(),
        };

        registry.register(Box::new(ThemeHandler));
        registry.register(Box::new(LanguageHandler));
        registry.register(Box::new(save_history_handler()));
        registry.register(Box::new(text_model_handler()));
        registry.register(Box::new(image_model_handler()));
        registry.register(Box::new(base_url_handler()));
        registry.register(Box::new(key_dir_handler()));
        registry.register(Box::new(data_dir_handler()));

        registry
    }

    fn register(&mut self, handler: Box<dyn SettingHandler>) {
        let key = handler.key();
        self.display_order.push(key);
        self.handlers.insert(key, handler);
    }

    /// Get a handler by key.
    pub fn get(&self, key: &str) -> Option<&dyn SettingHandler> {
        self.handlers.get(key).map(|h| h.as_ref())
    }

    /// Get all keys in display order.
    pub fn keys_display_order(&self) -> &[&'static str] {
        &self.display_order
    }
}

impl Default for SettingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
