//! 데이터 전송 객체 (DTO)
//!
//! 요청 DTO는 `validator`로 검증되고, 응답 DTO는 엔티티에서 `From`으로 변환됩니다.

pub mod users;
