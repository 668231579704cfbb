//! # ユースケース層
//!
//! Course Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと時計を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、検証や存在チェックはユースケースに集約

pub mod course;

pub use course::{CourseUseCaseImpl, CreateCourseInput, UpdateCourseInput};
