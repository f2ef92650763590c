// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod models;
pub mod report;
pub mod store;
pub mod sync;
pub mod utils;
