//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証や存在チェックはユースケース層に委譲

pub mod course;
pub mod health;

pub use course::{CourseState, create_course, get_course, list_courses, update_course};
pub use health::health_check;
