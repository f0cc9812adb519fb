pub mod letters;

pub use letters::{normalize_word, random_filler_letter, ALPHABET};
