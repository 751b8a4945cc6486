//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`request_utils`] - 요청 헤더 추출 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::request_utils::required_header;
//!
//! let requested_by = required_header(&req, "X-Requested-By")?;
//! ```

pub mod request_utils;
