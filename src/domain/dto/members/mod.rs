pub mod member_response;

pub use member_response::MemberResponse;
