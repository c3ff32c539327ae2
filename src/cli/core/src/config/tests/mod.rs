/* src/cli/core/src/config/tests/mod.rs */

mod discovery;
mod parsing;
