// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod snapshots;
pub mod expenses;
pub mod reports;
pub mod goals;
pub mod importer;
pub mod exporter;
pub mod backup;
pub mod fx;
pub mod doctor;
