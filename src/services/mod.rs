pub mod storage;
pub mod templates;
