//! # CourseHub ドメイン層
//!
//! コースカタログのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`course::Course`]）
//! - **値オブジェクト**: 検証済みの不変オブジェクト（[`course::CourseName`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain → shared
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//! これにより、ビジネスロジックの純粋性が保たれる。
//!
//! ## 使用例
//!
//! ```rust
//! use coursehub_domain::course::CourseName;
//!
//! let name = CourseName::new("Rust 入門").unwrap();
//! assert_eq!(name.as_str(), "Rust 入門");
//!
//! // 空のコース名はバリデーションエラー
//! assert!(CourseName::new("").is_err());
//! ```

pub mod clock;
pub mod course;
pub mod error;

pub use error::DomainError;
