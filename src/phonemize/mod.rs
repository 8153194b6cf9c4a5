pub mod english;

pub use english::EnglishRulePhonemizer;
