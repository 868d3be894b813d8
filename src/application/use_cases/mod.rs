/// Use cases module containing application business logic orchestration
mod count_words;

pub use count_words::CountWordsUseCase;
