//! # Tally (Authentication & Scoring API)
//!
//! `tally` is a small account backend: clients register with
//! email/name/password, sign in with email/password, fetch a profile by
//! id, and bump or reset a per-user numeric score.
//!
//! ## Accounts
//!
//! Credentials live in the `login` table (one row per lowercase email,
//! Argon2id hash); profiles live in `users`. Registration writes both
//! rows inside a single transaction so a credential row never exists
//! without its profile row, or vice versa.
//!
//! ## Authentication
//!
//! Sign-in verifies the submitted password against the stored Argon2id
//! hash. Unknown emails and wrong passwords produce the same response
//! so account existence cannot be probed.
//!
//! ## Scores
//!
//! Score changes are a single atomic `UPDATE` at the database, either
//! an increment by a client-supplied amount or a reset to zero, so
//! concurrent updates against the same user never lose increments.

pub mod cli;
pub mod tally;
