//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`display_terminal`] - 레지스트리 초기화 과정의 터미널 출력
//! - [`object_id`] - 문자열 ID를 MongoDB `ObjectId`로 변환

pub mod display_terminal;
pub mod object_id;
