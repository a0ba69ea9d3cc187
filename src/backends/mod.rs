// SPDX-License-Identifier: GPL-3.0-only

//! Backend abstraction for platform media capabilities

pub mod camera;
