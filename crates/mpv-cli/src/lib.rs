//! # mpv-cli — Metadata Package Validator CLI
//!
//! Provides the `mpv` command: load a metadata package export, run the
//! rule catalog over it, print every diagnostic, and exit non-zero when
//! the counted error total is non-zero.
//!
//! ## Responsibilities
//!
//! Everything outside the validation core lives here: argument
//! parsing, file IO, JSON parsing, tracing setup, printing, and the
//! optional log-file mirror of the diagnostic stream. The handler
//! delegates the actual validation to `mpv-rules` — no rule logic in
//! this crate.
//!
//! ```bash
//! mpv --file package.json
//! mpv -f package.json --log-file package_metadata_validator.log
//! ```

pub mod validate;
