// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::recompute;
use crate::models::{AppSettings, AppState, ExpenseRecord, Snapshot};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "WealthTrack", "wealthtrack"));

const ASSETS_SLOT: &str = "assets.json";
const EXPENSES_SLOT: &str = "expenses.json";
const SETTINGS_SLOT: &str = "settings.json";
const LAST_SAVED_SLOT: &str = "last_saved.json";

/// The persistence boundary: the whole state is read once at startup and
/// written after every mutation. Commands depend on this trait, never on the
/// medium, so tests can run against a temp directory.
pub trait Store {
    fn load(&self) -> Result<AppState>;
    fn save(&self, state: &AppState) -> Result<()>;
}

pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn data_dir() -> Result<PathBuf> {
        let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
            .context("Could not determine platform-specific data dir")?;
        Ok(proj.data_dir().to_path_buf())
    }

    pub fn open_default() -> Result<JsonStore> {
        Self::at(&Self::data_dir()?)
    }

    pub fn at(dir: &Path) -> Result<JsonStore> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data dir {}", dir.display()))?;
        Ok(JsonStore {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn last_saved(&self) -> Result<Option<String>> {
        let path = self.dir.join(LAST_SAVED_SLOT);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn read_slot<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(T::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Parse {}", path.display()))
    }

    // Write through a temp file then rename, so a crash mid-write never
    // leaves a torn slot behind.
    fn write_slot<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.dir.join(name);
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&tmp, json).with_context(|| format!("Write {}", tmp.display()))?;
        fs::rename(&tmp, &path).with_context(|| format!("Replace {}", path.display()))?;
        Ok(())
    }
}

impl Store for JsonStore {
    fn load(&self) -> Result<AppState> {
        let records: Vec<Snapshot> = self.read_slot(ASSETS_SLOT)?;
        let expenses: Vec<ExpenseRecord> = self.read_slot(EXPENSES_SLOT)?;
        let settings: AppSettings = self.read_slot(SETTINGS_SLOT)?;
        let mut state = AppState {
            records,
            expenses,
            settings,
        };
        // Persisted order and gains are rederived, never trusted.
        recompute(&mut state.records);
        Ok(state)
    }

    fn save(&self, state: &AppState) -> Result<()> {
        self.write_slot(ASSETS_SLOT, &state.records)?;
        self.write_slot(EXPENSES_SLOT, &state.expenses)?;
        self.write_slot(SETTINGS_SLOT, &state.settings)?;
        self.write_slot(LAST_SAVED_SLOT, &chrono::Utc::now().to_rfc3339())?;
        Ok(())
    }
}
