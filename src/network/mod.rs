// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Network interception
//!
//! The interceptor trait, the chain that runs interceptors in priority order,
//! and the general-purpose interceptors that ship with the crate.

mod interceptor_trait;
mod script_guard;

pub use interceptor_trait::{InterceptAction, InterceptorChain, RequestInterceptor, RequestLogger};
pub use script_guard::OptionalScriptGuard;
