#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;
use travel_settlement::{
    config::ConfigManager,
    core::clock::FixedClock,
    domain::ExpenseItem,
};

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub static TODAY: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2025, 2, 1).expect("valid date"));

pub fn clock() -> FixedClock {
    FixedClock::new(*TODAY)
}

pub fn expense(id: &str, label: &str, amount: f64) -> ExpenseItem {
    let date = NaiveDate::from_ymd_opt(2025, 1, 20).expect("valid date");
    ExpenseItem::new(id, label, amount, date)
}

/// Config manager rooted in a fresh temporary directory.
pub fn setup_config() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    ConfigManager::with_base_dir(base).expect("create config manager for temp dir")
}
