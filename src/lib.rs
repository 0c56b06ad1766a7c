// newsdiff: comparative coverage analysis for company news
//
// This is the library root. `analysis` is the comparison engine; the other
// modules feed it articles and carry its report to disk or the terminal.

pub mod analysis;
pub mod articles;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod sentiment;
pub mod topics;
