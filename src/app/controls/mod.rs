// SPDX-License-Identifier: GPL-3.0-only

//! Shutter button and recording indicator widgets

mod capture_button;
mod recording_ui;
