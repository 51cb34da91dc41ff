// SPDX-License-Identifier: MIT

//! Remote clients: BaaS REST/auth, AI assistant, video helpers.

pub mod assistant;
pub mod baas;
pub mod video;

pub use assistant::AssistantClient;
pub use baas::BaasClient;
