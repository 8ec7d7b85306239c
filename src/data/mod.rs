//! Static data tables for spoken-math conversion.

pub mod dictionary;
