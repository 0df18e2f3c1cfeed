pub mod seed_source;
