//! Void: a single-draft scratch pad that saves every keystroke and hands the
//! finished note to Obsidian.
//!
//! The draft logic lives in [`molecules::draft::DraftManager`], which only talks
//! to the outside world through the [`atoms::storage::DraftStore`],
//! [`atoms::launcher::UriOpener`] and [`atoms::clock::Clock`] traits. The
//! terminal front end in `main.rs` wires those to real adapters.

pub mod atoms;
pub mod coordinator;
pub mod molecules;
pub mod types;
