pub mod news_repository;
