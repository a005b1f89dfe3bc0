// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded refinery migrations for the match database.
//!
//! SQL files live in `migrations/` at the crate root and are compiled in.
//! Migrations run on every [`crate::database::Database::open`]; refinery
//! skips versions already recorded in `refinery_schema_history`.

refinery::embed_migrations!("migrations");

pub use self::migrations::runner;
