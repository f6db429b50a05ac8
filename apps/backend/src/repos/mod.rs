//! Repository functions mapping storage rows to domain types.

pub mod games;
