// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The reporting/aggregation engine. Every function here is pure and
//! total over well-typed input: filtered copies in, fresh view models
//! out, nothing cached between calls.

pub mod category;
pub mod period;
pub mod stats;
pub mod trend;

pub use category::breakdown_by_category;
pub use period::{filter_by_month, filter_by_year};
pub use stats::aggregate;
pub use trend::build_trend;
