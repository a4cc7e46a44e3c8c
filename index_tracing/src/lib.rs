/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Installs a global `tracing` subscriber for the numeric index crates.
//!
//! # Configuring Logging Output
//!
//! Logging output is configured by setting the `RUST_LOG` environment variable
//! to a _filter_: one or more comma-separated directives of the form
//!
//! ```text
//! target[span{field=value}]=level
//! ```
//!
//! When `RUST_LOG` is unset or unparsable, events at [`LevelFilter::INFO`] and
//! above are reported. For example `RUST_LOG=sr_tree=debug` also reports every
//! leaf split.
//!
//! For details see the [`tracing_subscriber`] documentation.
//!
//! [`tracing_subscriber`]: https://docs.rs/tracing-subscriber/0.3.20/tracing_subscriber/filter/struct.EnvFilter.html#directives

use std::error::Error;

use tracing_core::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

/// Initializes a global subscriber writing to standard error.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init() {
    try_init().expect("Unable to install global tracing subscriber")
}

/// Initializes a global subscriber writing to standard error, if one is not
/// already set.
///
/// # Errors
///
/// Returns an Error if the initialization was unsuccessful, likely because
/// a global subscriber was already installed by another call to `try_init`.
pub fn try_init() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    subscriber().with_writer(std::io::stderr).try_init()
}

/// Initializes a global subscriber whose output is captured by the test
/// harness. Calling it more than once is harmless.
pub fn init_for_tests() {
    let _ = subscriber().with_test_writer().try_init();
}

fn subscriber() -> tracing_subscriber::fmt::SubscriberBuilder<
    tracing_subscriber::fmt::format::DefaultFields,
    tracing_subscriber::fmt::format::Format,
    EnvFilter,
> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(env_filter)
}
