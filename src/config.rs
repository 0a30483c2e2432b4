//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The name the current user signs their chat messages with.
/// Feel free to override it when initing this library.
pub static CURRENT_USER_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("You".to_string())));

/// The initials displayed in the avatar of the current user.
/// Feel free to override it when initing this library.
pub static CURRENT_USER_AVATAR: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("ME".to_string())));

/// Returns the `(name, avatar)` of the current user
pub fn current_user() -> (String, String) {
    (read(&CURRENT_USER_NAME), read(&CURRENT_USER_AVATAR))
}

fn read(setting: &Mutex<String>) -> String {
    match setting.lock() {
        Ok(value) => value.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
