//! # リポジトリ
//!
//! コースの永続化を担当するリポジトリトレイトと具体実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイト経由でストアにアクセス
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でインメモリ実装に差し替え可能

pub mod course_repository;

pub use course_repository::{CourseFilter, CourseRepository, PostgresCourseRepository};
