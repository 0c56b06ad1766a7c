// Article processing: the step between the news search and the comparison.
//
// Summarization and polarity scoring are external collaborators behind the
// traits in `traits`. `process` runs them per article and substitutes
// placeholder content when they fail, so the comparison engine only ever sees
// well-formed records.

pub mod process;
pub mod traits;
