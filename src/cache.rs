// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! File-based cache of the most recent activity fetch

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::cache::ACTIVITIES_FILE;
use crate::models::Activity;

/// On-disk layout of `activities.json`
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheData {
    pub activities: Vec<Activity>,
    pub timestamp: DateTime<Utc>,
}

pub struct ActivityCache {
    cache_dir: PathBuf,
}

impl ActivityCache {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn activities_file(&self) -> PathBuf {
        self.cache_dir.join(ACTIVITIES_FILE)
    }

    /// Write activities with the current time as their fetch timestamp
    pub fn save_activities(&self, activities: &[Activity]) -> Result<()> {
        self.save_activities_at(activities, Utc::now())
    }

    pub fn save_activities_at(&self, activities: &[Activity], timestamp: DateTime<Utc>) -> Result<()> {
        fs::create_dir_all(&self.cache_dir).with_context(|| {
            format!("Failed to create cache directory: {}", self.cache_dir.display())
        })?;

        let data = CacheData {
            activities: activities.to_vec(),
            timestamp,
        };
        let json = serde_json::to_string_pretty(&data).context("Failed to serialize cache data")?;

        let file = self.activities_file();
        fs::write(&file, json)
            .with_context(|| format!("Failed to write cache file: {}", file.display()))?;

        debug!(count = activities.len(), path = %file.display(), "Saved activities to cache");
        Ok(())
    }

    /// Cached activities if present, readable and no older than `max_age`
    pub fn load_activities(&self, max_age: Duration) -> Option<Vec<Activity>> {
        self.load_activities_at(max_age, Utc::now())
    }

    pub fn load_activities_at(&self, max_age: Duration, now: DateTime<Utc>) -> Option<Vec<Activity>> {
        let file = self.activities_file();

        let content = match fs::read_to_string(&file) {
            Ok(content) => content,
            Err(_) => {
                debug!(path = %file.display(), "Cache miss");
                return None;
            }
        };

        let data: CacheData = match serde_json::from_str(&content) {
            Ok(data) => data,
            Err(e) => {
                debug!(error = %e, "Ignoring unreadable cache file");
                return None;
            }
        };

        let age = now - data.timestamp;
        if age > max_age {
            debug!(age_minutes = age.num_minutes(), "Cache expired");
            return None;
        }

        Some(data.activities)
    }

    /// Remove all cached data
    pub fn clear(&self) -> Result<()> {
        match fs::remove_dir_all(&self.cache_dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to remove cache directory: {}", self.cache_dir.display())
            }),
        }
    }
}
