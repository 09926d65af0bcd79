//! Share links for SplitBill
//!
//! Serializes the whole ledger into a string that fits in a URL query
//! parameter and reads it back. Reading never crashes the host: a bad link
//! yields an empty ledger and a warning.

pub mod link;
pub mod payload;

pub use link::{decode_ledger, decode_or_default, encode_ledger, share_url, DecodeOutcome};
pub use payload::{SharePayload, SharedExpense};
