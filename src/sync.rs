// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::Settings;
use crate::models::Transaction;
use crate::store;
use crate::utils::{http_client, today_taipei};

/// Remote failures are recoverable by design: the caller keeps working
/// on the last-known-good local snapshot and nothing is retried here.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("remote request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("remote returned a malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One mutation pushed to the sheet endpoint, fire-and-forget.
#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum SyncChange<'a> {
    Upsert { record: &'a Transaction },
    Delete { id: i64 },
}

/// Blocking client for the sheet-backed sync endpoint. GET returns the
/// full collection as a JSON array; POST accepts one change marker.
pub struct RemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: &str) -> Result<RemoteClient> {
        Ok(RemoteClient {
            base_url: base_url.to_string(),
            client: http_client()?,
        })
    }

    /// `None` when no remote endpoint is configured.
    pub fn from_settings(settings: &Settings) -> Result<Option<RemoteClient>> {
        match &settings.remote_url {
            Some(url) => Ok(Some(RemoteClient::new(url)?)),
            None => Ok(None),
        }
    }

    /// Fetch the full remote collection. Records pass through the same
    /// ingestion sanitization as the local cache.
    pub fn fetch(&self) -> Result<Vec<Transaction>, SyncError> {
        let resp = self.client.get(&self.base_url).send()?.error_for_status()?;
        let body = resp.text()?;
        let values: Vec<Value> = serde_json::from_str(&body)?;
        Ok(store::sanitize_records(values, today_taipei()))
    }

    /// Push one change. Failure never rolls back the local mutation
    /// that prompted it.
    pub fn push(&self, change: &SyncChange) -> Result<(), SyncError> {
        self.client
            .post(&self.base_url)
            .json(change)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
