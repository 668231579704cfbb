//! # コース
//!
//! コースカタログの中心エンティティ。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`Course`] | コース | カタログに登録された講座。一覧・取得・作成・更新の対象 |
//! | [`CourseId`] | コース ID | ストアが採番する一意の整数識別子。作成後は不変 |
//! | [`CourseName`] | コース名 | 必須項目。空文字は不可、最大 255 文字 |
//!
//! ## 設計方針
//!
//! - **ID はストア採番**: `CourseId` はリポジトリの挿入時に採番される。
//!   ドメイン層で新規 ID を生成するコンストラクタは提供しない
//! - **名前は値オブジェクト**: `CourseName::new` が検証を一元化し、
//!   検証済みでない名前がエンティティに入り込まない
//!
//! ## 使用例
//!
//! ```rust
//! use coursehub_domain::course::{Course, CourseId, CourseName};
//!
//! let now = chrono::Utc::now();
//! let course = Course::from_db(
//!    CourseId::from_i64(1),
//!    CourseName::new("Rust 入門").unwrap(),
//!    now,
//!    now,
//! );
//!
//! assert_eq!(course.id().as_i64(), 1);
//! assert_eq!(course.name().as_str(), "Rust 入門");
//! ```

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// コース名の最大文字数
pub const COURSE_NAME_MAX_CHARS: usize = 255;

/// コース ID（一意識別子）
///
/// ストア（PostgreSQL の BIGSERIAL / インメモリストアのカウンター）が
/// 挿入時に採番する。作成後は不変。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct CourseId(i64);

impl CourseId {
    /// 既存の整数からコース ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// コース名（値オブジェクト）
///
/// # バリデーション
///
/// - 空文字列ではない
/// - 最大 255 文字
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct CourseName(String);

impl CourseName {
    /// コース名を作成する
    ///
    /// 検証に失敗した場合は [`DomainError::Validation`] を返す。
    /// メッセージは対象フィールド名 `name` を含み、API 層でそのまま
    /// エラーレスポンスの detail として使用される。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation("name は必須です".to_string()));
        }

        if value.chars().count() > COURSE_NAME_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "name は {COURSE_NAME_MAX_CHARS} 文字以内で入力してください"
            )));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// コースエンティティ
///
/// # 不変条件
///
/// - `id` は全コース間で一意（ストアの採番が保証する）
/// - `name` は検証済みの [`CourseName`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id:         CourseId,
    name:       CourseName,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Course {
    /// 既存のデータからコースを復元する（ストアから取得時）
    pub fn from_db(
        id: CourseId,
        name: CourseName,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }

    // Getter メソッド

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn name(&self) -> &CourseName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // 不変更新メソッド

    /// コース名を更新する
    ///
    /// `id` と `created_at` は変更されず、`updated_at` のみ進む。
    pub fn with_name(self, name: CourseName, now: DateTime<Utc>) -> Self {
        Self {
            name,
            updated_at: now,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    // フィクスチャ

    /// テスト用の固定タイムスタンプ
    #[fixture]
    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    /// 更新日時として now() とは異なるタイムスタンプを使用する
    #[fixture]
    fn later() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_100_000, 0).unwrap()
    }

    #[fixture]
    fn course(now: DateTime<Utc>) -> Course {
        Course::from_db(
            CourseId::from_i64(1),
            CourseName::new("Rust 入門").unwrap(),
            now,
            now,
        )
    }

    // CourseName のテスト

    #[rstest]
    #[case("Rust 入門")]
    #[case("a")]
    #[case("Course 2")]
    fn test_有効なコース名は作成できる(#[case] value: &str) {
        let name = CourseName::new(value).unwrap();
        assert_eq!(name.as_str(), value);
    }

    #[rstest]
    fn test_空のコース名はバリデーションエラー() {
        let result = CourseName::new("");

        let Err(DomainError::Validation(msg)) = result else {
            panic!("expected validation error");
        };
        assert!(msg.contains("name"));
    }

    #[rstest]
    fn test_最大文字数ちょうどのコース名は作成できる() {
        let value = "あ".repeat(COURSE_NAME_MAX_CHARS);
        assert!(CourseName::new(value).is_ok());
    }

    #[rstest]
    fn test_最大文字数を超えるコース名はバリデーションエラー() {
        let value = "あ".repeat(COURSE_NAME_MAX_CHARS + 1);
        let result = CourseName::new(value);

        let Err(DomainError::Validation(msg)) = result else {
            panic!("expected validation error");
        };
        assert!(msg.contains("name"));
    }

    // Course のテスト

    #[rstest]
    fn test_コースの初期状態(now: DateTime<Utc>, course: Course) {
        assert_eq!(course.id(), CourseId::from_i64(1));
        assert_eq!(course.name().as_str(), "Rust 入門");
        assert_eq!(course.created_at(), now);
        assert_eq!(course.updated_at(), now);
    }

    #[rstest]
    fn test_with_nameで名前とupdated_atが更新される(
        course: Course,
        later: DateTime<Utc>,
    ) {
        let new_name = CourseName::new("Updated Course").unwrap();
        let updated = course.clone().with_name(new_name, later);

        assert_eq!(updated.name().as_str(), "Updated Course");
        assert_eq!(updated.updated_at(), later);
        // id と created_at は変更されない
        assert_eq!(updated.id(), course.id());
        assert_eq!(updated.created_at(), course.created_at());
    }

    #[rstest]
    fn test_course_idのdisplayは整数表現(course: Course) {
        assert_eq!(course.id().to_string(), "1");
    }
}
