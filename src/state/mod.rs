//! Client-side session state.
//!
//! DESIGN
//! ======
//! `storage` abstracts where the two persisted keys live (memory, a JSON
//! file, or browser `localStorage`); `session` holds the snapshot and the
//! store that keeps memory and storage in step.

pub mod session;
pub mod storage;
