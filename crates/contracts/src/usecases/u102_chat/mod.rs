pub mod request;
pub mod response;

pub use request::ChatRequest;
pub use response::{ChatResponse, SourceCitation};

use crate::usecases::common::UseCaseMetadata;

pub struct Chat;

impl UseCaseMetadata for Chat {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "chat"
    }

    fn display_name() -> &'static str {
        "Chat"
    }

    fn endpoint() -> &'static str {
        "/chat"
    }
}
