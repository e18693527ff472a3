// SPDX-License-Identifier: Apache-2.0

pub(crate) mod api;
pub(crate) mod pages;
mod render;
pub(crate) mod response_contract;
