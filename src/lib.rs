// Reclaim: description similarity scoring for lost-and-found matching
//
// This is the library root. Each module corresponds to a major subsystem
// of the matching service.

pub mod config;
pub mod lexicon;
pub mod matching;
pub mod web;
