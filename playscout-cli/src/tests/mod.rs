//! Shared test harness modules for the Playscout CLI.

use super::*;

mod helpers;
