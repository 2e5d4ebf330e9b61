pub mod library;
pub mod shuffle;
pub mod storage;
pub mod ui;
