//! Members Entity Module
//!
//! 서비스 회원 엔티티를 정의합니다.
//! 회원은 Google ID 토큰 로그인 시 자동으로 가입됩니다.

pub mod member;

pub use member::Member;
