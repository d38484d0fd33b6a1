// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analytics;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod expenses;
pub mod goal;
pub mod ledger;
pub mod models;
pub mod registry;
pub mod store;
pub mod utils;
