/*! Integration tests for dotpath.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The modules follow the library surface:
 * - paths: get/set/has/delete/clear through delimited paths
 * - collection: add/push/pull and the multi-path forms
 * - merge: the merge family at the root and at a path
 * - transform: flatten and sort
 * - construction: builders, options, the parse flag, and typed access
 * - shared: trees bound to caller-held maps
 * - json: serde integration and JSON output
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotpath=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod collection;
mod construction;
mod helpers;
mod json;
mod paths;
mod transform;
