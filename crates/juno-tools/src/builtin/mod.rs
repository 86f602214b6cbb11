// Copyright (c) 2024-2026 Juno Contributors
//
// SPDX-License-Identifier: Apache-2.0
pub mod boundary;
pub mod coverage;
pub mod git;
pub mod maven;
pub mod suggest;
