//! Общие контракты между фронтендом EduGPT и бэкендом
//!
//! - `enums`: перечисления, которые ходят по проводу
//! - `usecases`: запросы и ответы сценариев (u101 загрузка документов, u102 чат)
//! - `system`: служебные эндпоинты

pub mod enums;
pub mod system;
pub mod usecases;
