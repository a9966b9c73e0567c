//! Lexical features: tokenization, punctuation, stop words and granular counters.

mod granular;
mod punctuation;
mod stop_words;
mod tokenizer;

pub use granular::{
    count_alpha_numeric, count_characters, count_characters_excluding_spaces,
    count_non_alpha_numeric, count_spaces, count_whole_numbers, count_words,
};
pub use punctuation::{count_punctuations, gather_punctuations, is_punctuation};
pub use stop_words::{ENGLISH_STOP_WORDS, StopWords, count_stop_words, gather_stop_words};
pub use tokenizer::tokenize;
