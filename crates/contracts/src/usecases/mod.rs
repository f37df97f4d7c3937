pub mod common;
pub mod u101_process_documents;
pub mod u102_chat;
