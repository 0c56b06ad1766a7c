// Output: JSON report files and terminal display.

pub mod json;
pub mod terminal;
