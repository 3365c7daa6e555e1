pub mod io;
pub mod validation;

pub use io::{is_affirmative, prompt_line, prompt_line_async};
