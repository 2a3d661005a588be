// SPDX-License-Identifier: MPL-2.0
//! User interface layer.

pub mod banner;
pub mod design_tokens;
