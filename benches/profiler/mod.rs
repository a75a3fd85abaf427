// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dossier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dossier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared criterion configuration with flamegraph profiling.
//!
//! Run with `cargo bench -- --profile-time 10` to emit flamegraphs under
//! `target/criterion/*/profile/`.

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

pub fn config() -> Criterion {
    Criterion::default()
        .sample_size(env_usize("DOSSIER_BENCH_SAMPLES", 60))
        .with_profiler(PProfProfiler::new(
            env_i32("DOSSIER_PPROF_FREQ", 500),
            Output::Flamegraph(None),
        ))
}

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name).ok().and_then(|value| value.parse().ok()).unwrap_or(default)
}

fn env_i32(name: &str, default: i32) -> i32 {
    std::env::var(name).ok().and_then(|value| value.parse().ok()).unwrap_or(default)
}
